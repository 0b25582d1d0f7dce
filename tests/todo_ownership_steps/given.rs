//! Given steps for todo ownership BDD scenarios.

use super::world::{TodoWorld, owner, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todo_service::todo::domain::{NewTodo, TodoPatch, TodoStatus};

#[given(r#"user "{user}" has created a todo "{title}""#)]
fn user_has_created_todo(
    world: &mut TodoWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let todo = run_async(world.access.create(Some(&caller), NewTodo::new(title.clone())))
        .wrap_err("create todo for scenario")?;
    world.todos_by_title.insert(title, todo.id());
    Ok(())
}

#[given(r#"user "{user}" has marked todo "{title}" as "{status}""#)]
fn user_has_marked_todo(
    world: &mut TodoWorld,
    user: String,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let id = world.todo_id(&title)?;
    run_async(world.access.update(
        Some(&caller),
        id,
        TodoPatch::new().with_status(TodoStatus::from(status)),
    ))
    .wrap_err("update todo status for scenario")?;
    Ok(())
}
