//! Edge case tests for detection and both extractors.

use chatroster::RosterError;
use chatroster::core::ingest_batch;
use chatroster::parser::{ExportFormat, create_extractor, detect_format};
use chatroster::session::{PendingFile, PendingQueue};

fn names(bytes: &[u8]) -> Vec<String> {
    let mut roster = ingest_batch(&[("input", bytes)]).unwrap();
    roster.sort_by(|a, b| a.identity_key().cmp(b.identity_key()));
    roster.iter().map(chatroster::Participant::full_name).collect()
}

// ============================================================================
// Detection
// ============================================================================

#[test]
fn test_bom_prefixed_json_is_treated_as_html() {
    let bytes = b"\xef\xbb\xbf{\"messages\": []}";
    assert_eq!(detect_format(bytes), ExportFormat::Html);
    // the markup parser sees no message blocks
    assert!(names(bytes).is_empty());
}

#[test]
fn test_plain_text_is_empty_html() {
    assert!(names(b"This is not an export").is_empty());
}

#[test]
fn test_json_array_top_level_fails() {
    let err = ingest_batch(&[("result.json", br#"[{"from": "A", "from_id": "1"}]"#.as_slice())])
        .unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_invalid_utf8_markup_fails() {
    let err = ingest_batch(&[("messages.html", b"<div>\xff\xfe</div>".as_slice())]).unwrap_err();
    match err {
        RosterError::Decode { format, label, .. } => {
            assert_eq!(format, "Telegram HTML");
            assert_eq!(label.as_deref(), Some("messages.html"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

// ============================================================================
// JSON quirks
// ============================================================================

#[test]
fn test_json_wrong_field_type_fails() {
    let json = br#"{"messages": [{"from": "A", "from_id": 42}]}"#;
    assert!(ingest_batch(&[("result.json", json.as_slice())]).is_err());
}

#[test]
fn test_json_messages_null_is_empty() {
    assert!(names(br#"{"messages": null}"#).is_empty());
}

#[test]
fn test_json_null_records_are_skipped() {
    let json = br#"{"messages": [null, {"from": "John Doe", "from_id": "user1"}]}"#;
    assert_eq!(names(json), vec!["John Doe"]);
}

#[test]
fn test_json_channel_author_is_admitted() {
    let json = br#"{"messages": [{"type": "message", "from": "News Channel", "from_id": "channel1"}]}"#;
    assert_eq!(names(json), vec!["News Channel"]);
}

#[test]
fn test_json_service_records_with_author_count() {
    let json = br#"{"messages": [
        {"type": "service", "actor": "Bob", "from": "Bob Builder", "from_id": "user2", "action": "invite_members"}
    ]}"#;
    assert_eq!(names(json), vec!["Bob Builder"]);
}

#[test]
fn test_json_names_without_first_name_are_rejected() {
    let json = br#"{"messages": [
        {"from": " ", "from_id": "user1"},
        {"from": " Padded", "from_id": "user2"},
        {"from": "Kept Name", "from_id": "user3"}
    ]}"#;
    let roster = ingest_batch(&[("result.json", json.as_slice())]).unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].identity_key(), "user3");
    assert!(roster.iter().all(|p| !p.first_name().is_empty()));
}

#[test]
fn test_html_whitespace_author_is_rejected() {
    let html = br#"<div class="message"><div class="from_name">   </div></div>"#;
    assert!(names(html).is_empty());
}

// ============================================================================
// HTML quirks
// ============================================================================

#[test]
fn test_html_class_substring_match() {
    let html = br#"
        <div class="messages_list"><div class="from_name_extra">Sub String</div></div>"#;
    assert_eq!(names(html), vec!["Sub String"]);
}

#[test]
fn test_html_non_div_elements_ignored() {
    let html = br#"
        <span class="message"><div class="from_name">In Span</div></span>
        <div class="message"><span class="from_name">Span Author</span></div>"#;
    assert!(names(html).is_empty());
}

#[test]
fn test_html_author_with_link_uses_direct_text() {
    let html = br##"
        <div class="message">
          <div class="from_name">Carol <a href="#">via @bot</a></div>
        </div>"##;
    assert_eq!(names(html), vec!["Carol"]);
}

#[test]
fn test_html_entities_decoded() {
    let html = br#"<div class="message"><div class="from_name">Tom &amp; Jerry</div></div>"#;
    assert_eq!(names(html), vec!["Tom & Jerry"]);
}

#[test]
fn test_html_unclosed_tags_are_tolerated() {
    let html = br#"<div class="message"><div class="from_name">Dana Scully"#;
    assert_eq!(names(html), vec!["Dana Scully"]);
}

#[test]
fn test_extractors_agree_on_sentinel() {
    let json = br#"{"messages": [{"from": "Deleted Account", "from_id": "user9"}]}"#;
    let html = br#"<div class="message"><div class="from_name">Deleted Account</div></div>"#;
    assert!(create_extractor(ExportFormat::Json).extract(json).unwrap().is_empty());
    assert!(create_extractor(ExportFormat::Html).extract(html).unwrap().is_empty());
}

// ============================================================================
// Queues
// ============================================================================

#[test]
fn test_queue_drain_then_ingest() {
    let queue = PendingQueue::new();
    queue.add(1, PendingFile::new("result.json", "0")).unwrap();
    queue.add(1, PendingFile::new("messages.html", "1")).unwrap();

    let buffers: [&[u8]; 2] = [
        br#"{"messages": [{"from": "John Doe", "from_id": "user1"}]}"#,
        br#"<div class="message"><div class="from_name">Jane Roe</div></div>"#,
    ];
    let batch: Vec<(String, &[u8])> = queue
        .drain(1)
        .unwrap()
        .into_iter()
        .map(|f| {
            let index: usize = f.handle.parse().unwrap();
            (f.name, buffers[index])
        })
        .collect();

    assert_eq!(ingest_batch(&batch).unwrap().len(), 2);
    assert!(queue.is_empty(1));
}

#[test]
fn test_queue_rejects_before_ingestion() {
    let queue = PendingQueue::new();
    let err = queue.add(1, PendingFile::new("chat.zip", "x")).unwrap_err();
    assert!(err.is_admission());
    assert!(!err.aborts_batch());
}
