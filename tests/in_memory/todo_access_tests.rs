//! Service flows over the shared in-memory store.

use super::helpers::{owner, repo, services};
use rstest::rstest;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{NewTodo, TodoFilter, TodoPatch, TodoStatus},
    services::TodoServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_see_only_their_own_todos_and_statistics(repo: InMemoryTodoRepository) {
    let (access, statistics) = services(repo);
    let alice = owner("alice");
    let bob = owner("bob");

    let shopping = access
        .create(Some(&alice), NewTodo::new("Shopping").with_priority("high"))
        .await
        .expect("create succeeds");
    access
        .create(Some(&bob), NewTodo::new("Gardening"))
        .await
        .expect("create succeeds");
    access
        .update(
            Some(&alice),
            shopping.id(),
            TodoPatch::new().with_status(TodoStatus::UnderProcess),
        )
        .await
        .expect("update succeeds");

    let listed = access
        .list(Some(&alice), TodoFilter::new())
        .await
        .expect("list succeeds");
    let stats = statistics
        .compute(Some(&alice))
        .await
        .expect("stats compute");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed.first().map(|todo| todo.title()), Some("Shopping"));
    assert_eq!((stats.total, stats.underprocess, stats.percentage), (1, 1, 0));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_update_leaves_todo_unchanged(repo: InMemoryTodoRepository) {
    let (access, _) = services(repo);
    let alice = owner("alice");
    let mallory = owner("mallory");
    let todo = access
        .create(Some(&alice), NewTodo::new("Keep me"))
        .await
        .expect("create succeeds");

    let result = access
        .update(
            Some(&mallory),
            todo.id(),
            TodoPatch::new().with_status(TodoStatus::Completed),
        )
        .await;

    assert!(matches!(result, Err(TodoServiceError::Forbidden(_))));
    let stored = access
        .get(Some(&alice), todo.id())
        .await
        .expect("owner may read");
    assert_eq!(stored, todo);
}
