//! Store service tests covering the validation-and-persistence contract.

use std::sync::Arc;
use std::time::Duration;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskInput, TaskStore, TaskStoreError, UpdateTaskInput},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn store() -> TestStore {
    TaskStore::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

mockall::mock! {
    FailingRepository {}

    #[async_trait::async_trait]
    impl TaskRepository for FailingRepository {
        async fn insert(&self, draft: &NewTask) -> TaskRepositoryResult<Task>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_trims_title_and_applies_defaults(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("  Buy groceries  "))
        .await
        .expect("creation should succeed");

    assert_eq!(created.title().as_str(), "Buy groceries");
    assert_eq!(created.description(), None);
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.created_at(), created.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_is_rejected_and_nothing_persists(store: TestStore) {
    let result = store.create(CreateTaskInput::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ));
    let tasks = store.list().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_unknown_status_is_rejected(store: TestStore) {
    let result = store
        .create(CreateTaskInput::new("Buy groceries").with_status("done"))
        .await;

    let Err(TaskStoreError::Validation(err)) = result else {
        panic!("expected a validation error");
    };
    let message = err.to_string();
    for label in ["pending", "in_progress", "completed"] {
        assert!(message.contains(label), "message should mention {label}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_description_stores_null(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries").with_description("   "))
        .await
        .expect("creation should succeed");

    assert_eq!(created.description(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_round_trips(store: TestStore) {
    let created = store
        .create(
            CreateTaskInput::new("Buy groceries")
                .with_description("milk and bread")
                .with_status("in_progress"),
        )
        .await
        .expect("creation should succeed");

    let fetched = store.get(created.id()).await.expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_sequential_identifiers(store: TestStore) {
    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let created = store
            .create(CreateTaskInput::new(title))
            .await
            .expect("creation should succeed");
        ids.push(created.id().into_inner());
    }
    assert_eq!(ids, vec![1, 2, 3]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_identifiers_are_not_reused(store: TestStore) {
    store
        .create(CreateTaskInput::new("A"))
        .await
        .expect("creation should succeed");
    let second = store
        .create(CreateTaskInput::new("B"))
        .await
        .expect("creation should succeed");

    let removed = store
        .delete(second.id())
        .await
        .expect("deletion should succeed");
    assert!(removed);

    let third = store
        .create(CreateTaskInput::new("C"))
        .await
        .expect("creation should succeed");
    assert_eq!(third.id().into_inner(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_returns_none_without_side_effects(store: TestStore) {
    let outcome = store
        .update(
            TaskId::from_i64(404),
            UpdateTaskInput::new().with_title("Renamed"),
        )
        .await
        .expect("update should not error");

    assert_eq!(outcome, None);
    let tasks = store.list().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_status_only_preserves_other_fields(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries").with_description("milk and bread"))
        .await
        .expect("creation should succeed");
    tokio::time::sleep(Duration::from_millis(2)).await;

    let updated = store
        .update(created.id(), UpdateTaskInput::new().with_status("completed"))
        .await
        .expect("update should succeed")
        .expect("task should exist");

    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.title().as_str(), "Buy groceries");
    assert_eq!(updated.description(), Some("milk and bread"));
    assert_eq!(updated.created_at(), created.created_at());
    assert!(updated.updated_at() > created.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_blank_title_is_rejected_and_leaves_task_unchanged(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries"))
        .await
        .expect("creation should succeed");

    let result = store
        .update(created.id(), UpdateTaskInput::new().with_title("  "))
        .await;
    assert!(matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::EmptyTitle))
    ));

    let fetched = store.get(created.id()).await.expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_unknown_status_is_rejected(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries"))
        .await
        .expect("creation should succeed");

    let result = store
        .update(created.id(), UpdateTaskInput::new().with_status("archived"))
        .await;
    assert!(matches!(
        result,
        Err(TaskStoreError::Validation(TaskDomainError::InvalidStatus(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_distinguishes_cleared_from_omitted_description(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries").with_description("milk and bread"))
        .await
        .expect("creation should succeed");

    let kept = store
        .update(created.id(), UpdateTaskInput::new().with_status("in_progress"))
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(kept.description(), Some("milk and bread"));

    let cleared = store
        .update(created.id(), UpdateTaskInput::new().clearing_description())
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(cleared.description(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_blank_description_clears_it(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries").with_description("milk and bread"))
        .await
        .expect("creation should succeed");

    let updated = store
        .update(created.id(), UpdateTaskInput::new().with_description("  "))
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(updated.description(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_presence_exactly_once(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries"))
        .await
        .expect("creation should succeed");

    let first = store
        .delete(created.id())
        .await
        .expect("deletion should succeed");
    assert!(first);

    let second = store
        .delete(created.id())
        .await
        .expect("deletion should succeed");
    assert!(!second);

    let fetched = store.get(created.id()).await.expect("lookup should succeed");
    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_most_recently_created_first(store: TestStore) {
    for title in ["A", "B", "C"] {
        store
            .create(CreateTaskInput::new(title))
            .await
            .expect("creation should succeed");
    }

    let tasks = store.list().await.expect("listing should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["C", "B", "A"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_lifecycle(store: TestStore) {
    let created = store
        .create(CreateTaskInput::new("Buy groceries"))
        .await
        .expect("creation should succeed");
    assert_eq!(created.id().into_inner(), 1);
    assert_eq!(created.description(), None);
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.created_at(), created.updated_at());
    tokio::time::sleep(Duration::from_millis(2)).await;

    let completed = store
        .update(created.id(), UpdateTaskInput::new().with_status("completed"))
        .await
        .expect("update should succeed")
        .expect("task should exist");
    assert_eq!(completed.status(), TaskStatus::Completed);
    assert!(completed.updated_at() > created.updated_at());

    let removed = store
        .delete(created.id())
        .await
        .expect("deletion should succeed");
    assert!(removed);

    let fetched = store.get(created.id()).await.expect("lookup should succeed");
    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repository_failures_surface_as_store_errors() {
    let mut repository = MockFailingRepository::new();
    repository.expect_list_all().return_once(|| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection reset",
        )))
    });
    let failing = TaskStore::new(Arc::new(repository), Arc::new(DefaultClock));

    let result = failing.list().await;
    assert!(matches!(result, Err(TaskStoreError::Repository(_))));
}
