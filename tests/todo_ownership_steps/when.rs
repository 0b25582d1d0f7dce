//! When steps for todo ownership BDD scenarios.

use super::world::{TodoWorld, owner, run_async};
use rstest_bdd_macros::when;
use todo_service::todo::domain::{TodoFilter, TodoPatch, TodoStatus};

#[when(r#"user "{user}" requests statistics"#)]
fn user_requests_statistics(world: &mut TodoWorld, user: String) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    match run_async(world.statistics.compute(Some(&caller))) {
        Ok(stats) => world.last_stats = Some(stats),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"user "{user}" lists todos with status "{status}""#)]
fn user_lists_todos_with_status(
    world: &mut TodoWorld,
    user: String,
    status: String,
) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let filter = TodoFilter::new().with_status(TodoStatus::from(status));
    match run_async(world.access.list(Some(&caller), filter)) {
        Ok(todos) => world.last_listing = Some(todos),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"user "{user}" reads todo "{title}""#)]
fn user_reads_todo(world: &mut TodoWorld, user: String, title: String) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let id = world.todo_id(&title)?;
    if let Err(err) = run_async(world.access.get(Some(&caller), id)) {
        world.last_error = Some(err);
    }
    Ok(())
}

#[when(r#"user "{user}" deletes todo "{title}""#)]
fn user_deletes_todo(
    world: &mut TodoWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let id = world.todo_id(&title)?;
    if let Err(err) = run_async(world.access.delete(Some(&caller), id)) {
        world.last_error = Some(err);
    }
    Ok(())
}

#[when(r#"user "{user}" changes the status of todo "{title}" to "{status}""#)]
fn user_changes_status(
    world: &mut TodoWorld,
    user: String,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let caller = owner(&user)?;
    let id = world.todo_id(&title)?;
    let patch = TodoPatch::new().with_status(TodoStatus::from(status));
    if let Err(err) = run_async(world.access.update(Some(&caller), id, patch)) {
        world.last_error = Some(err);
    }
    Ok(())
}
