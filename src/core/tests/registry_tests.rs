use std::collections::HashSet;

use crate::core::registry::{find, tools};
use crate::core::types::{Icon, ToolId};

#[test]
fn test_registry_order_is_stable() {
    let ids: Vec<&str> = tools().iter().map(|tool| tool.id.as_str()).collect();

    assert_eq!(ids, vec!["google-sheets", "viewer", "shuffle", "manual", "merge"]);
}

#[test]
fn test_registry_ids_are_unique() {
    let unique: HashSet<ToolId> = tools().iter().map(|tool| tool.id).collect();

    assert_eq!(unique.len(), tools().len());
    assert_eq!(unique.len(), 5);
}

#[test]
fn test_registry_covers_every_tool_id() {
    for id in ToolId::ALL {
        let tool = find(id);
        assert!(tool.is_some(), "No registry entry for {}", id);
        assert_eq!(tool.unwrap().id, id);
    }
}

#[test]
fn test_activation_delays_step_by_100ms() {
    let delays: Vec<u32> = tools().iter().map(|tool| tool.activation_delay_ms).collect();

    assert_eq!(delays, vec![0, 100, 200, 300, 400]);
}

#[test]
fn test_registry_entries() {
    let sheets = find(ToolId::GoogleSheets).unwrap();
    assert_eq!(sheets.name, "Google Sheets");
    assert_eq!(sheets.icon, Icon::ExternalLink);
    assert_eq!(sheets.style_hint.from, "purple");
    assert_eq!(sheets.style_hint.to, "pink");

    let merge = find(ToolId::Merge).unwrap();
    assert_eq!(merge.name, "Merge Files");
    assert_eq!(merge.icon, Icon::Layers);
    assert!(merge.description.contains("remove duplicates"));

    // The two shuffle tools have deliberately crossed names
    assert_eq!(find(ToolId::Shuffle).unwrap().name, "Manual Shuffle");
    assert_eq!(find(ToolId::Manual).unwrap().name, "Number Shuffler");
}

#[test]
fn test_registry_serialises_wire_identifiers() {
    let json = serde_json::to_value(tools()).unwrap();

    assert_eq!(json[0]["id"], "google-sheets");
    assert_eq!(json[0]["icon"], "external-link");
    assert_eq!(json[3]["id"], "manual");
    assert_eq!(json[4]["activation_delay_ms"], 400);
    assert_eq!(json[1]["style_hint"]["to"], "cyan");
}
