use complaintdesk_types::*;

// Shape of a `GET` response as produced by the store: newest first,
// numeric ids, empty-string photo for complaints without one.
const LIST_BODY: &str = r#"[
  {"id": 2, "title": "Нарушение пропускного режима",
   "description": "Сотрудник Петров пытался провести постороннее лицо без оформления пропуска.",
   "type": "from_guard", "status": "pending", "photo": "", "response": null,
   "date": "2025-10-09"},
  {"id": 1, "title": "Грубое обращение с посетителями",
   "description": "Дежурный Иванов И.И. нагрубил посетителю в фойе здания без видимой причины.",
   "type": "against_guard", "status": "resolved",
   "photo": "data:image/png;base64,iVBORw0KGgo=", "response": "Проведена беседа",
   "date": "2025-10-08"}
]"#;

#[test]
fn test_decode_list_body_preserves_order() {
    let complaints: Vec<Complaint> = serde_json::from_str(LIST_BODY).unwrap();

    let ids: Vec<String> = complaints.iter().map(|c| c.id.to_string()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[test]
fn test_decode_list_body_optional_fields() {
    let complaints: Vec<Complaint> = serde_json::from_str(LIST_BODY).unwrap();

    assert!(complaints[0].photo.is_none());
    assert!(complaints[0].response.is_none());

    let answered = &complaints[1];
    assert_eq!(answered.status, ComplaintStatus::Resolved);
    assert_eq!(answered.response.as_deref(), Some("Проведена беседа"));
    assert_eq!(
        answered.photo.as_ref().and_then(|p| p.mime_type()),
        Some("image/png")
    );
}

#[test]
fn test_unknown_status_is_a_decode_error() {
    let body = r#"[{"id": 1, "title": "t", "description": "d", "type": "from_guard",
                    "status": "archived", "date": "2025-10-08"}]"#;
    assert!(serde_json::from_str::<Vec<Complaint>>(body).is_err());
}

#[test]
fn test_truncate_chars_respects_utf8() {
    assert_eq!(truncate_chars("Грубое обращение", 9), "Грубое...");
    assert_eq!(truncate_chars("short", 10), "short");
    assert!(is_blank("  \n\t"));
    assert!(!is_blank(" x "));
}
