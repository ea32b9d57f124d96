use std::sync::Arc;

use gapminder_dash::api::{Dashboard, SlotId, SlotStatus, UPDATE_JSON_SCHEMA_V1, UpdateContractV1};
use gapminder_dash::core::Dataset;
use gapminder_dash::interaction::ControlChange;

fn dashboard() -> Dashboard {
    Dashboard::new(Arc::new(Dataset::load().expect("bundled dataset")))
}

#[test]
fn figures_contract_lists_every_slot() {
    let contract = dashboard().figures_json_contract_v1();

    assert_eq!(contract.schema_version, UPDATE_JSON_SCHEMA_V1);
    assert_eq!(contract.revision, 1);
    let slots: Vec<SlotId> = contract.slots.iter().map(|payload| payload.slot).collect();
    assert_eq!(slots, SlotId::ALL.to_vec());
    assert!(contract.slots.iter().all(|payload| payload.status == SlotStatus::Chart));
}

#[test]
fn empty_slot_serializes_as_empty_figure() {
    let mut dashboard = dashboard();
    let batch = dashboard
        .apply(&ControlChange::countries(Vec::<String>::new()))
        .expect("apply");
    let json = batch.to_json_contract_v1().to_json_string().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["slots"][0]["slot"], "line-chart");
    assert_eq!(value["slots"][0]["status"], "empty");
    assert_eq!(value["slots"][0]["figure"], serde_json::json!({}));
    assert!(value["slots"][0].get("error").is_none());
}

#[test]
fn contract_round_trips_and_checks_version() {
    let contract = dashboard().figures_json_contract_v1();
    let json = contract.to_json_string().expect("json");
    let parsed = UpdateContractV1::from_json_str(&json).expect("parse");
    assert_eq!(parsed.revision, contract.revision);
    for (parsed_slot, slot) in parsed.slots.iter().zip(&contract.slots) {
        assert_eq!(parsed_slot.slot, slot.slot);
        assert_eq!(parsed_slot.status, slot.status);
        assert_eq!(
            parsed_slot.figure["layout"]["title"],
            slot.figure["layout"]["title"]
        );
    }

    let future = json.replacen("\"schema_version\":1", "\"schema_version\":2", 1);
    assert!(UpdateContractV1::from_json_str(&future).is_err());
}
