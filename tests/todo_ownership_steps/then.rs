//! Then steps for todo ownership BDD scenarios.

use super::world::{TodoWorld, run_async};
use rstest_bdd_macros::then;
use todo_service::todo::{domain::TodoStats, services::TodoServiceError};

#[then(
    "the statistics are total {total:u64}, pending {pending:u64}, underprocess {underprocess:u64}, completed {completed:u64}, percentage {percentage:u64}"
)]
fn statistics_are(
    world: &TodoWorld,
    total: u64,
    pending: u64,
    underprocess: u64,
    completed: u64,
    percentage: u64,
) -> Result<(), eyre::Report> {
    let expected = TodoStats {
        total,
        pending,
        underprocess,
        completed,
        percentage,
    };
    let stats = world
        .last_stats
        .ok_or_else(|| eyre::eyre!("missing statistics result"))?;
    if stats != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {stats:?}"));
    }
    Ok(())
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles_are(world: &TodoWorld, titles: String) -> Result<(), eyre::Report> {
    let listing = world
        .last_listing
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing listing result"))?;
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();
    let actual: Vec<&str> = listing.iter().map(|todo| todo.title()).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the request fails as forbidden")]
fn request_fails_as_forbidden(world: &TodoWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TodoServiceError::Forbidden(_)) => Ok(()),
        other => Err(eyre::eyre!("expected Forbidden error, got {other:?}")),
    }
}

#[then("the request fails as not found")]
fn request_fails_as_not_found(world: &TodoWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TodoServiceError::NotFound(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound error, got {other:?}")),
    }
}

#[then(r#"todo "{title}" is not completed"#)]
fn todo_is_not_completed(world: &TodoWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.todo_id(&title)?;
    let todo = run_async(world.access.get(None, id))
        .map_err(|err| eyre::eyre!("todo lookup failed: {err}"))?;
    if todo.completed() {
        return Err(eyre::eyre!("expected todo {title:?} to be incomplete"));
    }
    Ok(())
}
