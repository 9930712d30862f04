//! Wire-format tests: the JSON shape consumed by the game client.

use encounter_forge::core::forge::{EventForge, GenerationPlan};
use encounter_forge::profiles;
use encounter_forge::schema::event::{read_table, write_table};

const EFFECT_TYPES: [&str; 9] = [
    "nothing",
    "gain_qi",
    "lose_qi",
    "gamble",
    "grant_item",
    "gain_auto_temp",
    "gain_tap_ratio_temp",
    "gamble_auto",
    "gamble_tap",
];

#[test]
fn serialized_records_match_the_client_contract() {
    let mut forge = EventForge::builder()
        .profile(&profiles::classic())
        .plan(GenerationPlan::Spread { total: 200 })
        .seed(21)
        .build()
        .unwrap();
    let records = forge.generate().unwrap();
    let value = serde_json::to_value(&records).unwrap();

    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 200);

    for record in array {
        let obj = record.as_object().unwrap();
        for key in ["id", "title", "desc", "rarity", "minStage", "maxStage", "choices"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert!(matches!(
            record["rarity"].as_str().unwrap(),
            "common" | "rare" | "epic"
        ));

        let choices = record["choices"].as_array().unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0]["id"], "a");
        assert_eq!(choices[1]["id"], "b");
        for choice in choices {
            let effect_type = choice["effect"]["type"].as_str().unwrap();
            assert!(
                EFFECT_TYPES.contains(&effect_type),
                "unknown effect type: {}",
                effect_type
            );
        }
    }
}

#[test]
fn table_round_trips_through_disk() {
    let mut forge = EventForge::builder()
        .plan(GenerationPlan::Spread { total: 25 })
        .seed(22)
        .build()
        .unwrap();
    let records = forge.generate().unwrap();

    let path = std::env::temp_dir().join(format!("forge_round_trip_{}.json", std::process::id()));
    write_table(&path, &records).unwrap();

    let loaded = read_table(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn written_table_is_pretty_printed_utf8() {
    let mut forge = EventForge::builder()
        .plan(GenerationPlan::Spread { total: 3 })
        .seed(23)
        .build()
        .unwrap();
    let records = forge.generate().unwrap();

    let path = std::env::temp_dir().join(format!("forge_pretty_{}.json", std::process::id()));
    write_table(&path, &records).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains('\n'), "expected indented output");
    assert!(text.contains("  \"id\"") || text.contains("\"id\""));
}

#[test]
fn read_table_fails_on_missing_file() {
    let path = std::env::temp_dir().join("forge_does_not_exist.json");
    assert!(read_table(&path).is_err());
}
