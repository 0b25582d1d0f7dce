//! Storage, filtering, ordering, and counting through the repository port.

use super::helpers::{owner, repo, todo_at};
use rstest::rstest;
use todo_service::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{TodoFilter, TodoId, TodoQuery, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifiers(repo: InMemoryTodoRepository) {
    let todo = todo_at(1, "alice", "Once", TodoStatus::Pending, 0);
    repo.store(&todo).await.expect("first store succeeds");

    let result = repo.store(&todo).await;

    assert!(matches!(result, Err(TodoRepositoryError::DuplicateTodo(id)) if id == todo.id()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_report_missing_todos(repo: InMemoryTodoRepository) {
    let todo = todo_at(2, "alice", "Ghost", TodoStatus::Pending, 0);

    let updated = repo.update(&todo).await;
    let deleted = repo.delete(TodoId::new()).await;

    assert!(matches!(updated, Err(TodoRepositoryError::NotFound(_))));
    assert!(matches!(deleted, Err(TodoRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_orders_newest_first_with_identifier_tie_break(repo: InMemoryTodoRepository) {
    let oldest = todo_at(10, "alice", "Oldest", TodoStatus::Pending, 0);
    let tied_low = todo_at(11, "alice", "Tied low", TodoStatus::Pending, 5);
    let tied_high = todo_at(12, "alice", "Tied high", TodoStatus::Pending, 5);
    for todo in [&tied_low, &oldest, &tied_high] {
        repo.store(todo).await.expect("store succeeds");
    }

    let found = repo
        .find(&TodoQuery::scoped_to(None))
        .await
        .expect("find succeeds");

    let titles: Vec<&str> = found.iter().map(|todo| todo.title()).collect();
    assert_eq!(titles, vec!["Tied high", "Tied low", "Oldest"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn count_honours_owner_and_status(repo: InMemoryTodoRepository) {
    let seeded = [
        todo_at(20, "alice", "A", TodoStatus::Pending, 0),
        todo_at(21, "alice", "B", TodoStatus::Completed, 1),
        todo_at(22, "alice", "C", TodoStatus::from("blocked"), 2),
        todo_at(23, "bob", "D", TodoStatus::Completed, 3),
    ];
    for todo in &seeded {
        repo.store(todo).await.expect("store succeeds");
    }
    let alice = owner("alice");

    let total = repo
        .count(&TodoQuery::scoped_to(Some(&alice)))
        .await
        .expect("count succeeds");
    let completed = repo
        .count(&TodoQuery::scoped_to(Some(&alice)).with_status(TodoStatus::Completed))
        .await
        .expect("count succeeds");
    let everyone_completed = repo
        .count(&TodoQuery::scoped_to(None).with_status(TodoStatus::Completed))
        .await
        .expect("count succeeds");

    assert_eq!((total, completed, everyone_completed), (3, 1, 2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_titles_case_insensitively(repo: InMemoryTodoRepository) {
    repo.store(&todo_at(30, "alice", "Buy Milk", TodoStatus::Pending, 0))
        .await
        .expect("store succeeds");
    repo.store(&todo_at(31, "alice", "Walk dog", TodoStatus::Pending, 1))
        .await
        .expect("store succeeds");

    let query = TodoQuery::scoped_to(None).with_filter(TodoFilter::new().with_search("MILK"));
    let found = repo.find(&query).await.expect("find succeeds");

    assert_eq!(found.len(), 1);
    assert_eq!(found.first().map(|todo| todo.title()), Some("Buy Milk"));
}
