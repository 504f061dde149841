//! Integration tests for the get-user, list-users, and demo commands.
//!
//! Commands run against a mock `UserSource`, so no network is involved.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use userfetch::client::{UserFields, UserSource};
use userfetch::commands::{self, CommandError};

/// A source that serves canned records and records every id requested.
struct MockSource {
    records: HashMap<i64, Value>,
    requested: Mutex<Vec<i64>>,
}

impl MockSource {
    fn new(records: impl IntoIterator<Item = (i64, Value)>) -> Self {
        Self {
            records: records.into_iter().collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserSource for MockSource {
    async fn fetch_user(&self, user_id: i64) -> Option<UserFields> {
        self.requested.lock().unwrap().push(user_id);
        match self.records.get(&user_id) {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        }
    }
}

fn record(id: i64, name: &str, email: &str) -> (i64, Value) {
    (id, json!({ "id": id, "name": name, "email": email }))
}

fn utf8(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// get-user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_user_prints_four_lines() {
    let source = MockSource::new([record(1, "Leanne Graham", "Sincere@april.biz")]);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    commands::get_user(&source, 1, &mut out, &mut err).await.unwrap();

    assert_eq!(
        utf8(out),
        "User ID: 1\nName: Leanne Graham\nEmail: Sincere@april.biz\nActive: true\n"
    );
    assert!(err.is_empty());
}

#[tokio::test]
async fn get_user_reports_missing_user_on_stderr() {
    let source = MockSource::new([]);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    commands::get_user(&source, 999, &mut out, &mut err).await.unwrap();

    assert!(out.is_empty());
    assert!(utf8(err).contains("User 999 not found"));
}

#[tokio::test]
async fn get_user_treats_empty_record_as_missing() {
    let source = MockSource::new([(1, json!({}))]);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    commands::get_user(&source, 1, &mut out, &mut err).await.unwrap();

    assert!(out.is_empty());
    assert_eq!(utf8(err), "User 1 not found\n");
}

#[tokio::test]
async fn get_user_propagates_invalid_record() {
    let source = MockSource::new([(4, json!({ "id": 4, "name": "No Email" }))]);
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let result = commands::get_user(&source, 4, &mut out, &mut err).await;

    assert!(matches!(result, Err(CommandError::Validation(_))));
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// list-users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_users_skips_failed_ids_and_keeps_order() {
    let source = MockSource::new([
        record(1, "Leanne Graham", "Sincere@april.biz"),
        record(3, "Clementine Bauch", "Nathan@yesenia.net"),
    ]);
    let mut out = Vec::new();

    commands::list_users(&source, 3, &mut out).await.unwrap();

    assert_eq!(
        utf8(out),
        "Fetching 3 users...\n\
         1: Leanne Graham (Sincere@april.biz)\n\
         3: Clementine Bauch (Nathan@yesenia.net)\n"
    );
    assert_eq!(source.requested(), vec![1, 2, 3]);
}

#[tokio::test]
async fn list_users_skips_empty_records() {
    let source = MockSource::new([
        (1, json!({})),
        record(2, "Ervin Howell", "Shanna@melissa.tv"),
    ]);
    let mut out = Vec::new();

    commands::list_users(&source, 2, &mut out).await.unwrap();

    assert_eq!(
        utf8(out),
        "Fetching 2 users...\n2: Ervin Howell (Shanna@melissa.tv)\n"
    );
}

#[tokio::test]
async fn list_users_with_zero_count_fetches_nothing() {
    let source = MockSource::new([record(1, "A", "a@x.io")]);
    let mut out = Vec::new();

    commands::list_users(&source, 0, &mut out).await.unwrap();

    assert_eq!(utf8(out), "Fetching 0 users...\n");
    assert!(source.requested().is_empty());
}

#[tokio::test]
async fn list_users_all_failing_still_succeeds() {
    let source = MockSource::new([]);
    let mut out = Vec::new();

    commands::list_users(&source, 2, &mut out).await.unwrap();

    assert_eq!(utf8(out), "Fetching 2 users...\n");
    assert_eq!(source.requested(), vec![1, 2]);
}

#[tokio::test]
async fn list_users_stops_on_invalid_record() {
    let source = MockSource::new([
        record(1, "A", "a@x.io"),
        (2, json!({ "id": "two", "name": "B", "email": "b@x.io" })),
        record(3, "C", "c@x.io"),
    ]);
    let mut out = Vec::new();

    let result = commands::list_users(&source, 3, &mut out).await;

    assert!(result.is_err());
    assert_eq!(source.requested(), vec![1, 2]);
    assert!(utf8(out).contains("1: A (a@x.io)"));
}

// ---------------------------------------------------------------------------
// demo
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_uses_each_source_once() {
    let blocking = MockSource::new([record(1, "Leanne Graham", "Sincere@april.biz")]);
    let suspending = MockSource::new([record(2, "Ervin Howell", "Shanna@melissa.tv")]);
    let mut out = Vec::new();

    commands::demo(&blocking, &suspending, &mut out).await.unwrap();

    assert_eq!(
        utf8(out),
        "User: Leanne Graham (Sincere@april.biz)\n\
         Async User: Ervin Howell (Shanna@melissa.tv)\n"
    );
    assert_eq!(blocking.requested(), vec![1]);
    assert_eq!(suspending.requested(), vec![2]);
}

#[tokio::test]
async fn demo_skips_missing_users() {
    let blocking = MockSource::new([]);
    let suspending = MockSource::new([record(2, "Ervin Howell", "Shanna@melissa.tv")]);
    let mut out = Vec::new();

    commands::demo(&blocking, &suspending, &mut out).await.unwrap();

    assert_eq!(utf8(out), "Async User: Ervin Howell (Shanna@melissa.tv)\n");
}
