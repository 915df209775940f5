//! Desk actions against the in-memory store.

use chrono::Utc;
use complaintdesk_engine::ValidationError;
use complaintdesk_runtime::{Desk, Error, NoticeLevel};
use complaintdesk_testing::fixtures::{self, complaint};
use complaintdesk_testing::{FakeStoreServer, InMemoryStore};
use complaintdesk_types::{ComplaintId, ComplaintKind, ComplaintStatus};

async fn desk_with(store: &InMemoryStore) -> Desk<InMemoryStore> {
    Desk::open(store.clone()).await.unwrap()
}

#[tokio::test]
async fn test_submit_creates_pending_complaint_dated_today() {
    // Given: an empty store
    let store = InMemoryStore::new();
    let mut desk = desk_with(&store).await;

    // When: a valid draft is submitted
    *desk.draft_mut() = desk
        .draft()
        .clone()
        .title("A")
        .description("B")
        .kind(ComplaintKind::AgainstGuard);
    let notice = desk.submit().await.unwrap();

    // Then: the store holds one pending complaint without a response
    let complaints = desk.complaints();
    assert_eq!(complaints.len(), 1);
    assert_eq!(complaints[0].title, "A");
    assert_eq!(complaints[0].description, "B");
    assert_eq!(complaints[0].kind, ComplaintKind::AgainstGuard);
    assert_eq!(complaints[0].status, ComplaintStatus::Pending);
    assert_eq!(complaints[0].response, None);
    assert_eq!(complaints[0].date, Utc::now().date_naive());

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, "Complaint submitted");
    assert_eq!(notice.subject, Some(complaints[0].id.clone()));

    // And: the draft is back to defaults
    assert_eq!(desk.draft().title, "");
    assert_eq!(desk.draft().kind, ComplaintKind::AgainstGuard);
}

#[tokio::test]
async fn test_submit_with_blank_fields_sends_nothing() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;

    *desk.draft_mut() = desk.draft().clone().title("   ").description("B");
    let err = desk.submit().await.unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::EmptyTitle)));

    *desk.draft_mut() = desk.draft().clone().title("A").description("");
    let err = desk.submit().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::EmptyDescription)
    ));

    assert_eq!(store.request_count("POST"), 0);
    assert_eq!(desk.complaints().len(), 2);
    assert_eq!(desk.draft().title, "A");
}

#[tokio::test]
async fn test_oversized_photo_leaves_draft_photo_empty() {
    let store = InMemoryStore::new();
    let mut desk = desk_with(&store).await;

    desk.draft_mut().attach_photo(b"small", "image/png").unwrap();
    let big = vec![0u8; 5 * 1024 * 1024 + 1];
    let err = desk.draft_mut().attach_photo(&big, "image/png").unwrap_err();

    assert!(matches!(err, ValidationError::PhotoTooLarge { .. }));
    assert!(desk.draft().photo().is_none());
}

#[tokio::test]
async fn test_failed_create_keeps_collection_and_draft() {
    // Given: a store that fails the next request
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    store.fail_next(1);

    // When: submitting
    *desk.draft_mut() = desk.draft().clone().title("A").description("B");
    let err = desk.submit().await.unwrap_err();

    // Then: a network error, nothing changed locally
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(desk.complaints().len(), 2);
    assert_eq!(desk.draft().title, "A");
    assert_eq!(desk.draft().description, "B");
}

#[tokio::test]
async fn test_change_status_only_changes_status() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    let before = desk.find("2").unwrap().clone();
    assert_eq!(before.status, ComplaintStatus::Pending);

    let notice = desk
        .change_status("2", ComplaintStatus::Review)
        .await
        .unwrap();

    let after = desk.find("2").unwrap();
    assert_eq!(after.status, ComplaintStatus::Review);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.date, before.date);
    assert_eq!(after.response, before.response);
    assert_eq!(notice.description, "Complaint 2 is now Needs review");
}

#[tokio::test]
async fn test_failed_status_change_keeps_previous_snapshot() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    store.fail_next(1);

    let err = desk
        .change_status("1", ComplaintStatus::Resolved)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(desk.find("1").unwrap().status, ComplaintStatus::Review);
}

#[tokio::test]
async fn test_respond_resolves_pending_complaint() {
    // Given: a pending complaint open in the detail view
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    desk.select("2").unwrap();

    // When: the administrator responds
    desk.set_response_text("Resolved, no further action");
    let notice = desk.submit_response("2").await.unwrap();

    // Then: the complaint is resolved with the response attached
    let complaint = desk.find("2").unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Resolved);
    assert_eq!(
        complaint.response.as_deref(),
        Some("Resolved, no further action")
    );
    assert_eq!(notice.title, "Response sent");

    // And: the response draft and selection are cleared
    assert_eq!(desk.response_text(), "");
    assert!(desk.selected().is_none());
}

#[tokio::test]
async fn test_whitespace_response_changes_nothing() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    desk.select("2").unwrap();

    desk.set_response_text("   \n");
    let err = desk.submit_response("2").await.unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationError::EmptyResponse)));
    let complaint = desk.selected().unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert_eq!(complaint.response, None);
    assert_eq!(store.request_count("PUT"), 0);
}

#[tokio::test]
async fn test_second_response_is_rejected_locally() {
    let store = InMemoryStore::with_complaints(vec![
        complaint(5).response("Already handled").build(),
    ]);
    let mut desk = desk_with(&store).await;

    desk.set_response_text("Another answer");
    let err = desk.submit_response("5").await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::AlreadyResponded)
    ));
    assert_eq!(store.request_count("PUT"), 0);
}

#[tokio::test]
async fn test_failed_response_keeps_draft_and_selection() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    desk.select("2").unwrap();
    desk.set_response_text("Resolved");
    store.fail_next(1);

    let err = desk.submit_response("2").await.unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(desk.response_text(), "Resolved");
    assert_eq!(desk.selected().unwrap().id, ComplaintId::Number(2));
}

#[tokio::test]
async fn test_status_change_after_response_is_allowed() {
    let store = InMemoryStore::with_complaints(vec![complaint(7).response("Done").build()]);
    let mut desk = desk_with(&store).await;

    desk.change_status("7", ComplaintStatus::Review)
        .await
        .unwrap();

    let complaint = desk.find("7").unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Review);
    assert_eq!(complaint.response.as_deref(), Some("Done"));
}

#[tokio::test]
async fn test_connect_over_http() {
    // Given: the store served over HTTP
    let server = FakeStoreServer::start_with(fixtures::sample_complaints()).await;

    // When: a desk connects and responds to a complaint
    let mut desk = Desk::connect(&server.endpoint()).await.unwrap();
    desk.set_response_text("Resolved, no further action");
    desk.submit_response("2").await.unwrap();

    // Then: the server-side record is resolved
    let stored = server.complaints();
    let complaint = stored.iter().find(|c| c.id.matches("2")).unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Resolved);
    assert_eq!(server.request_count("GET"), 2);
}

#[tokio::test]
async fn test_connect_rejects_bad_endpoint() {
    let err = match Desk::connect("not a url").await {
        Ok(_) => panic!("expected an error"),
        Err(err) => err,
    };

    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test]
async fn test_create_stored_but_refresh_failed_resets_draft() {
    // Given: a store that accepts writes but fails the next listing
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    store.fail_next_lists(1);

    // When: submitting
    *desk.draft_mut() = desk.draft().clone().title("A").description("B");
    let err = desk.submit().await.unwrap_err();

    // Then: the record exists, the draft is reset, the old snapshot stays
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(store.snapshot().len(), 3);
    assert_eq!(desk.draft().title, "");
    assert_eq!(desk.complaints().len(), 2);

    // And: the next refresh picks the record up
    desk.refresh().await.unwrap();
    assert_eq!(desk.complaints().len(), 3);
}

#[tokio::test]
async fn test_status_stored_but_refresh_failed_keeps_old_snapshot() {
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    store.fail_next_lists(1);

    let err = desk
        .change_status("2", ComplaintStatus::Review)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(_)));
    assert_eq!(store.snapshot()[1].status, ComplaintStatus::Review);
    assert_eq!(desk.find("2").unwrap().status, ComplaintStatus::Pending);

    desk.refresh().await.unwrap();
    assert_eq!(desk.find("2").unwrap().status, ComplaintStatus::Review);
}

#[tokio::test]
async fn test_response_stored_but_refresh_failed_is_not_sent_twice() {
    // Given: complaint 2 open with a response typed, and listings failing
    let store = InMemoryStore::with_complaints(fixtures::sample_complaints());
    let mut desk = desk_with(&store).await;
    desk.select("2").unwrap();
    desk.set_response_text("First answer");
    store.fail_next_lists(2);

    // When: the response is accepted but the refresh fails
    let err = desk.submit_response("2").await.unwrap_err();

    // Then: the draft and selection are cleared as after a success
    assert!(matches!(err, Error::Network(_)));
    assert_eq!(desk.response_text(), "");
    assert!(desk.selected().is_none());

    // And: a retry on the stale snapshot is rejected without a request
    desk.set_response_text("Second answer");
    let err = desk.submit_response("2").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::AlreadyResponded)
    ));
    assert_eq!(store.request_count("PUT"), 1);
    assert_eq!(store.snapshot()[1].response.as_deref(), Some("First answer"));

    // And: once a refresh succeeds the stored response is visible
    store.fail_next_lists(0);
    desk.refresh().await.unwrap();
    let complaint = desk.find("2").unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Resolved);
    assert_eq!(complaint.response.as_deref(), Some("First answer"));
}
