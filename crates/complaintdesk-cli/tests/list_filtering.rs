//! List & Filtering Tests
//!
//! Verifies that `complaintdesk list` narrows the collection with
//! --status, --type and --search, and that filters combine.

use anyhow::Result;
use complaintdesk_testing::fixtures::complaint;
use complaintdesk_testing::{TestWorld, assertions};
use complaintdesk_types::{ComplaintKind, ComplaintStatus};

#[test]
fn test_list_shows_whole_collection_in_store_order() -> Result<()> {
    // Given: the two demo complaints
    let world = TestWorld::new().with_sample_complaints();

    // When: listing without filters
    let result = world.run_json(&["list"])?;

    // Then: both complaints are shown as the store returned them
    assert!(result.success(), "Command should succeed: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_complaint_count(&json, 2)?;
    assertions::assert_titles(
        &json,
        &[
            "Грубое обращение с посетителями",
            "Нарушение пропускного режима",
        ],
    )?;
    assert_eq!(json["content"]["total"], 2);
    assert_eq!(json["content"]["filter"]["status"], "all");

    Ok(())
}

#[test]
fn test_list_filter_by_status() -> Result<()> {
    let world = TestWorld::new().with_sample_complaints();

    let result = world.run_json(&["list", "--status", "pending"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_complaint_count(&json, 1)?;
    assertions::assert_all_status(&json, "pending")?;
    assert_eq!(json["badge"]["label"], "1 of 2 complaints");

    Ok(())
}

#[test]
fn test_search_is_case_insensitive() -> Result<()> {
    let world = TestWorld::new().with_sample_complaints();

    // Lower-case query matches the capitalised title
    let result = world.run_json(&["list", "--search", "груб"])?;
    let json = result.json()?;
    assertions::assert_titles(&json, &["Грубое обращение с посетителями"])?;

    // Upper-case query matches the description
    let result = world.run_json(&["list", "--search", "ПЕТРОВ"])?;
    let json = result.json()?;
    assertions::assert_titles(&json, &["Нарушение пропускного режима"])?;

    Ok(())
}

#[test]
fn test_filters_combine() -> Result<()> {
    // Given: pending and resolved complaints of both types
    let world = TestWorld::new().with_store(vec![
        complaint(1)
            .title("Broken turnstile")
            .kind(ComplaintKind::FromGuard)
            .build(),
        complaint(2)
            .title("Rude at the turnstile")
            .kind(ComplaintKind::AgainstGuard)
            .build(),
        complaint(3)
            .title("Turnstile fixed")
            .kind(ComplaintKind::FromGuard)
            .status(ComplaintStatus::Resolved)
            .build(),
    ]);

    // When: every filter is set
    let result = world.run_json(&[
        "list",
        "--status",
        "pending",
        "--type",
        "from_guard",
        "--search",
        "turnstile",
    ])?;

    // Then: only the record passing all three is shown
    let json = result.json()?;
    assertions::assert_titles(&json, &["Broken turnstile"])?;

    Ok(())
}

#[test]
fn test_no_matches_is_a_warning_not_an_error() -> Result<()> {
    let world = TestWorld::new().with_sample_complaints();

    let result = world.run_json(&["list", "--search", "nothing like this"])?;

    assert!(result.success());
    let json = result.json()?;
    assertions::assert_complaint_count(&json, 0)?;
    assertions::assert_badge_level(&json, "warning")?;

    Ok(())
}

#[test]
fn test_empty_store_suggests_first_submit() -> Result<()> {
    let world = TestWorld::new().with_store(Vec::new());

    let result = world.run(&["list"])?;

    assert!(result.success());
    assert!(result.stdout().contains("No complaints yet"));
    assert!(result.stdout().contains("complaintdesk submit"));

    Ok(())
}

#[test]
fn test_quiet_prints_ids_only() -> Result<()> {
    let world = TestWorld::new().with_sample_complaints();

    let result = world.run(&["list", "--quiet"])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "1\n2\n");

    Ok(())
}

#[test]
fn test_invalid_status_filter_is_rejected() -> Result<()> {
    let world = TestWorld::new().with_sample_complaints();

    let result = world.run(&["list", "--status", "closed"])?;

    assert!(!result.success());
    assert_eq!(world.store().request_count("GET"), 0);

    Ok(())
}
