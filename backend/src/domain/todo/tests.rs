//! Regression coverage for the todo entity.

use chrono::Utc;
use rstest::rstest;
use uuid::Uuid;

use super::*;

fn draft() -> TodoDraft {
    TodoDraft {
        id: Uuid::new_v4(),
        title: "Water the plants".to_owned(),
        is_completed: true,
        created_at: Utc::now(),
        user_id: Some(Uuid::new_v4()),
    }
}

#[rstest]
fn create_starts_incomplete_with_fresh_identity() {
    let before = Utc::now();
    let todo = Todo::create("Buy milk", None).expect("valid title");

    assert_eq!(todo.title().as_ref(), "Buy milk");
    assert!(!todo.is_completed());
    assert!(todo.user_id().is_none());
    assert!(todo.created_at() >= before);
    assert!(todo.created_at() <= Utc::now());
}

#[rstest]
fn create_keeps_owner_identifier() {
    let owner = Uuid::new_v4();
    let todo = Todo::create("Buy milk", Some(owner)).expect("valid title");
    assert_eq!(todo.user_id(), Some(owner));
}

#[rstest]
fn created_todos_receive_distinct_identifiers() {
    let first = Todo::create("Buy milk", None).expect("valid title");
    let second = Todo::create("Buy milk", None).expect("valid title");
    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn create_rejects_blank_titles(#[case] title: &str) {
    let error = Todo::create(title, None).expect_err("blank title must fail");
    assert_eq!(error, TodoValidationError::EmptyTitle);
}

#[rstest]
#[case("")]
#[case(" \t ")]
fn title_newtype_rejects_blank_input(#[case] raw: &str) {
    let error = TodoTitle::new(raw).expect_err("blank title must fail");
    assert_eq!(error, TodoValidationError::EmptyTitle);
}

#[rstest]
fn restore_preserves_every_persisted_field() {
    let draft = draft();
    let todo = Todo::restore(draft.clone()).expect("valid draft");

    assert_eq!(todo.id(), draft.id);
    assert_eq!(todo.title().as_ref(), draft.title);
    assert_eq!(todo.is_completed(), draft.is_completed);
    assert_eq!(todo.created_at(), draft.created_at);
    assert_eq!(todo.user_id(), draft.user_id);
}

#[rstest]
fn restore_rejects_blank_stored_title() {
    let mut draft = draft();
    draft.title = "  ".to_owned();
    let error = Todo::restore(draft).expect_err("blank stored title must fail");
    assert_eq!(error, TodoValidationError::EmptyTitle);
}

#[rstest]
fn change_title_replaces_title_in_place() {
    let mut todo = Todo::create("Buy milk", None).expect("valid title");
    let id = todo.id();
    let created_at = todo.created_at();

    todo.change_title(TodoTitle::new("Buy oat milk").expect("valid title"));

    assert_eq!(todo.title().as_ref(), "Buy oat milk");
    assert_eq!(todo.id(), id);
    assert_eq!(todo.created_at(), created_at);
}

#[rstest]
fn completion_marks_are_idempotent() {
    let mut todo = Todo::create("Buy milk", None).expect("valid title");

    todo.mark_completed();
    todo.mark_completed();
    assert!(todo.is_completed());

    todo.mark_incomplete();
    todo.mark_incomplete();
    assert!(!todo.is_completed());
}

#[rstest]
#[case(false)]
#[case(true)]
fn toggling_twice_restores_original_state(#[case] start_completed: bool) {
    let mut todo = Todo::create("Buy milk", None).expect("valid title");
    if start_completed {
        todo.mark_completed();
    }

    todo.toggle_completion();
    assert_eq!(todo.is_completed(), !start_completed);

    todo.toggle_completion();
    assert_eq!(todo.is_completed(), start_completed);
}
