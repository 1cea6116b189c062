use super::*;
use serde_json::json;

#[test]
fn test_event_serializes_type_and_data_only() {
    let event = Event::new("message", json!({"text": "Hello from Python!"}));

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({"type": "message", "data": {"text": "Hello from Python!"}})
    );
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_event_data_is_not_validated() {
    // Arrays, strings and null all pass through untouched
    for data in [json!([1, 2, 3]), json!("plain"), Value::Null] {
        let event = Event::new("raw", data.clone());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["data"], data);
    }
}

#[test]
fn test_publish_result_ignores_extra_fields() {
    let result: PublishResult = serde_json::from_value(json!({
        "id": "evt_1",
        "channel": "room:general",
        "timestamp": 1707668400000i64
    }))
    .unwrap();

    assert_eq!(result.id, "evt_1");
}

#[test]
fn test_publish_result_requires_id() {
    let result = serde_json::from_value::<PublishResult>(json!({"status": "ok"}));
    assert!(result.is_err());
}

#[test]
fn test_history_entry_minimal() {
    let entry: HistoryEntry =
        serde_json::from_value(json!({"type": "message", "data": {"text": "hi"}})).unwrap();

    assert_eq!(entry.event_type(), Some("message"));
    assert_eq!(entry.data(), Some(&json!({"text": "hi"})));
    assert_eq!(entry.get("id"), None);
}

#[test]
fn test_history_entry_keeps_engine_fields() {
    let raw = json!({
        "id": "evt_7",
        "app_id": "demo-app",
        "channel": "room:general",
        "type": "message",
        "data": {"text": "hi"},
        "meta": {"source": "python"}
    });

    let entry: HistoryEntry = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(entry.get("id"), Some(&json!("evt_7")));
    assert_eq!(entry.get("meta"), Some(&json!({"source": "python"})));

    // Re-serializing gives back the same object
    assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
}

#[test]
fn test_history_entry_missing_data_is_not_invented() {
    let raw = json!({"type": "presence"});
    let entry: HistoryEntry = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(entry.data(), None);
    assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
}

#[test]
fn test_history_entry_odd_type_is_kept() {
    let raw = json!({"type": null, "data": {"n": 1}});
    let entry: HistoryEntry = serde_json::from_value(raw.clone()).unwrap();

    assert_eq!(entry.event_type(), None);
    assert_eq!(entry.into_value(), raw);
}

#[test]
fn test_history_response_preserves_order() {
    let response: HistoryResponse = serde_json::from_value(json!({
        "events": [
            {"type": "message", "data": {"n": 1}},
            {"type": "typing", "data": {"n": 2}},
            {"type": "message", "data": {"n": 3}}
        ]
    }))
    .unwrap();

    let order: Vec<_> = response
        .events
        .iter()
        .map(|e| e.data().unwrap()["n"].clone())
        .collect();
    assert_eq!(order, vec![json!(1), json!(2), json!(3)]);
    assert_eq!(response.events[1].event_type(), Some("typing"));
}

#[test]
fn test_history_response_roundtrips_mixed_entries() {
    let events = json!([
        {"type": "presence"},
        {"type": null},
        {"id": "evt_2", "type": "message", "data": {"text": "hi"}, "meta": {}}
    ]);
    let response: HistoryResponse =
        serde_json::from_value(json!({"events": events.clone()})).unwrap();

    assert_eq!(serde_json::to_value(&response.events).unwrap(), events);
}

#[test]
fn test_history_response_without_events_fails() {
    let result = serde_json::from_value::<HistoryResponse>(json!({"items": []}));
    assert!(result.is_err());
}
