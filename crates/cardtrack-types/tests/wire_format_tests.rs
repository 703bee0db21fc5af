use cardtrack_types::*;

#[test]
fn test_history_sequence_keeps_backend_order() {
    let json = r#"[
        {"date": "2024-03-02T10:00:00Z", "type": "updateCard", "data": {"listName": "Done"}},
        {"date": "2024-03-01T10:00:00Z", "type": "createCard", "data": {"listName": "To Do"}}
    ]"#;
    let entries: Vec<HistoryEntry> = serde_json::from_str(json).unwrap();

    let kinds: Vec<&str> = entries.iter().map(|e| e.action_type.as_str()).collect();
    assert_eq!(kinds, vec!["updateCard", "createCard"]);
}

#[test]
fn test_board_lists_lookup() {
    let json = r#"[{"id": "l1", "name": "To Do"}, {"id": "l2", "name": "Doing"}]"#;
    let lists: Vec<BoardList> = serde_json::from_str(json).unwrap();

    assert_eq!(list_name(&lists, &ListId::new("l2")), Some("Doing"));
    assert_eq!(list_name(&lists, &ListId::new("l9")), None);
}

#[test]
fn test_fallback_badge_wire_shape() {
    insta::assert_json_snapshot!(Badge::fallback(), @r#"
    {
      "text": "Tracker",
      "color": "blue"
    }
    "#);
}

#[test]
fn test_unknown_metric_fields_are_ignored() {
    let json = r#"{"total_time": 60, "avg_cycle_time": 12, "time_per_list": {}}"#;
    let metrics: Metrics = serde_json::from_str(json).unwrap();
    assert_eq!(metrics.total_time, Some(60.0));
    assert_eq!(metrics.time_per_list.map(|m| m.len()), Some(0));
}
