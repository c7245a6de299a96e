#[allow(dead_code)]
mod common;

use serde_json::json;

use lightbox_core::config::IndexConfig;
use lightbox_core::error::LightboxError;
use lightbox_core::index::category::{derive_category, folder_category, prefix_category};
use lightbox_core::index::{filter_records, normalize, normalize_with, parse_index, ImageRecord};

fn markers() -> Vec<String> {
    IndexConfig::default().markers
}

fn labels(records: &[ImageRecord]) -> Vec<&str> {
    records.iter().map(|r| r.label.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Natural ordering
// ---------------------------------------------------------------------------

#[test]
fn test_buckets_sorted_naturally_by_label() {
    let raw = json!([
        { "label": "D-2", "path": "D-2.png" },
        { "label": "D-10", "path": "D-10.png" },
        { "label": "D-1", "path": "D-1.png" },
    ]);
    let index = normalize(&raw).unwrap();

    assert_eq!(labels(index.get("D").unwrap()), vec!["D-1", "D-2", "D-10"]);
    assert_eq!(labels(index.all()), vec!["D-1", "D-2", "D-10"]);
}

#[test]
fn test_sort_ignores_case() {
    let raw = json!([
        { "label": "b-1", "path": "x/b-1.png" },
        { "label": "A-1", "path": "x/A-1.png" },
        { "label": "a-2", "path": "x/a-2.png" },
        { "label": "B-2", "path": "x/B-2.png" },
    ]);
    let index = normalize(&raw).unwrap();
    assert_eq!(labels(index.all()), vec!["A-1", "a-2", "b-1", "B-2"]);
}

// ---------------------------------------------------------------------------
// Collapse rule
// ---------------------------------------------------------------------------

#[test]
fn test_all_singletons_collapse_to_all() {
    let cats = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let index = normalize(&common::foldered_index(&cats, 1)).unwrap();

    assert!(index.is_collapsed());
    assert_eq!(index.category_names(), vec!["All"]);
    assert_eq!(index.all().len(), 10);
}

#[test]
fn test_two_full_categories_survive() {
    let index = normalize(&common::foldered_index(&["Cats", "Dogs"], 5)).unwrap();

    assert_eq!(index.category_names(), vec!["Cats", "Dogs", "All"]);
    assert_eq!(index.get("Cats").unwrap().len(), 5);
    assert_eq!(index.get("Dogs").unwrap().len(), 5);
    assert_eq!(index.get("All").unwrap().len(), 10);
}

#[test]
fn test_collapse_at_exact_ratio() {
    // 18 singletons + one pair = 20 records, ratio 0.9.
    let mut items: Vec<_> = (0..18)
        .map(|i| common::path_item(&format!("images/cat{i}/x.png")))
        .collect();
    items.push(common::path_item("images/pair/1.png"));
    items.push(common::path_item("images/pair/2.png"));

    let index = normalize(&serde_json::Value::Array(items)).unwrap();
    assert!(index.is_collapsed());
    assert_eq!(index.len(), 20);
}

#[test]
fn test_no_collapse_below_ratio() {
    // 17 singletons + one triple = 20 records, ratio 0.85.
    let mut items: Vec<_> = (0..17)
        .map(|i| common::path_item(&format!("images/cat{i}/x.png")))
        .collect();
    for i in 0..3 {
        items.push(common::path_item(&format!("images/triple/{i}.png")));
    }

    let index = normalize(&serde_json::Value::Array(items)).unwrap();
    assert!(!index.is_collapsed());
    assert_eq!(index.category_names().len(), 19);
    assert_eq!(index.get("triple").unwrap().len(), 3);
}

#[test]
fn test_collapse_ratio_is_configurable() {
    let config = IndexConfig {
        collapse_ratio: 1.1,
        ..IndexConfig::default()
    };
    let cats = ["a", "b", "c"];
    let index = normalize_with(&common::foldered_index(&cats, 1), &config).unwrap();
    assert_eq!(index.category_names(), vec!["a", "b", "c", "All"]);
}

// ---------------------------------------------------------------------------
// Category derivation
// ---------------------------------------------------------------------------

#[test]
fn test_folder_after_marker_is_category() {
    assert_eq!(
        folder_category("assets/images/Foo/bar.png", &markers()),
        Some("Foo".to_string())
    );
    assert_eq!(
        folder_category("./images/Foo/bar.png", &markers()),
        Some("Foo".to_string())
    );
    assert_eq!(
        folder_category("site/IMAGES/Foo/bar.png", &markers()),
        Some("Foo".to_string())
    );
}

#[test]
fn test_marker_followed_by_file_falls_through() {
    assert_eq!(folder_category("images/bar.png", &markers()), None);
    assert_eq!(folder_category("assets/images/bar.png", &markers()), None);
    assert_eq!(
        derive_category(Some("images/D-3.png"), "D-3.png", &markers()),
        "D"
    );
    assert_eq!(
        derive_category(Some("images/bar.png"), "bar.png", &markers()),
        "Misc"
    );
}

#[test]
fn test_empty_segment_after_marker_is_ignored() {
    assert_eq!(folder_category("images//Foo/bar.png", &markers()), None);
}

#[test]
fn test_earlier_marker_used_when_last_has_no_folder() {
    assert_eq!(
        folder_category("images/Foo/images/bar.png", &markers()),
        Some("Foo".to_string())
    );
}

#[test]
fn test_prefix_fallback() {
    assert_eq!(derive_category(None, "D-12.png", &markers()), "D");
    assert_eq!(derive_category(Some("D-12.png"), "D-12.png", &markers()), "D");
    assert_eq!(prefix_category("Sheet_4"), Some("Sheet".to_string()));
    assert_eq!(prefix_category("12-D.png"), None);
    assert_eq!(prefix_category("plain.png"), None);
    assert_eq!(derive_category(None, "plain.png", &markers()), "Misc");
}

#[test]
fn test_path_category_through_normalize() {
    let raw = json!([
        "assets/images/Foo/bar.png",
        "assets/images/Foo/baz.png",
        { "name": "D-12.png", "path": "D-12.png" },
        { "name": "D-13.png", "path": "D-13.png" },
    ]);
    let index = normalize(&raw).unwrap();
    assert_eq!(index.category_names(), vec!["D", "Foo", "All"]);
    assert_eq!(index.get("Foo").unwrap().len(), 2);
    assert_eq!(index.get("D").unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Record fields
// ---------------------------------------------------------------------------

#[test]
fn test_record_field_priorities() {
    let raw = json!([
        {
            "name": "Front",
            "label": "Front elevation",
            "path": "images/Plans/front.png",
            "image": "hires/front.png",
            "thumbnail": "thumbs/front.png"
        },
        { "label": "Back", "file": "images/Plans/back.png" },
    ]);
    let index = normalize(&raw).unwrap();
    let plans = index.get("Plans").unwrap();

    let back = &plans[0];
    assert_eq!(back.name, "Back");
    assert_eq!(back.label, "Back");
    assert_eq!(back.path, "images/Plans/back.png");
    assert_eq!(back.thumb, None);

    let front = &plans[1];
    assert_eq!(front.name, "Front");
    assert_eq!(front.label, "Front elevation");
    assert_eq!(front.path, "hires/front.png");
    assert_eq!(front.thumb.as_deref(), Some("thumbs/front.png"));
}

#[test]
fn test_string_entry_uses_path_for_every_field() {
    let index = normalize(&json!(["images/Foo/a.png", "images/Foo/b.png"])).unwrap();
    let first = &index.get("Foo").unwrap()[0];
    assert_eq!(first.name, "a.png");
    assert_eq!(first.label, "images/Foo/a.png");
    assert_eq!(first.path, "images/Foo/a.png");
}

#[test]
fn test_malformed_entries_get_placeholder() {
    let index = normalize(&json!([{}, 42, true])).unwrap();
    assert_eq!(index.len(), 3);
    for record in index.all() {
        assert_eq!(record.name, "item");
        assert_eq!(record.label, "item");
        assert_eq!(record.path, "item");
        assert!(!record.path.is_empty());
    }
}

#[test]
fn test_numeric_fields_are_coerced() {
    let index = normalize(&json!([{ "name": 7, "path": "x/7.png" }])).unwrap();
    assert_eq!(index.all()[0].name, "7");
}

// ---------------------------------------------------------------------------
// Document shapes
// ---------------------------------------------------------------------------

#[test]
fn test_mapping_is_flattened_and_regrouped() {
    let raw = json!({
        "whatever": [
            common::path_item("images/Cats/1.png"),
            common::path_item("images/Cats/2.png"),
        ],
        "nested": {
            "deeper": [common::path_item("images/Dogs/1.png")],
            "single": common::named_item("dog", "images/Dogs/2.png"),
        },
        "empty": null,
    });
    let index = normalize(&raw).unwrap();
    assert_eq!(index.category_names(), vec!["Cats", "Dogs", "All"]);
    assert_eq!(index.len(), 4);
}

#[test]
fn test_scalar_document_is_malformed() {
    let err = normalize(&json!(42)).unwrap_err();
    assert!(matches!(err, LightboxError::MalformedIndex(_)), "got: {err}");

    let err = normalize(&json!("images/a.png")).unwrap_err();
    assert!(matches!(err, LightboxError::MalformedIndex(_)), "got: {err}");
}

#[test]
fn test_unparsable_text_is_malformed() {
    let err = parse_index("{ not json", &IndexConfig::default()).unwrap_err();
    assert!(matches!(err, LightboxError::MalformedIndex(_)), "got: {err}");
}

#[test]
fn test_empty_document_has_empty_all() {
    let index = normalize(&json!([])).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.category_names(), vec!["All"]);
    assert_eq!(index.get("All").unwrap().len(), 0);
}

#[test]
fn test_normalizing_normalized_output_is_idempotent() {
    let first = normalize(&common::foldered_index(&["Cats", "Dogs"], 3)).unwrap();
    let written = serde_json::to_value(&first).unwrap();
    let second = normalize(&written).unwrap();
    assert_eq!(first, second);

    let cats = ["a", "b", "c", "d"];
    let collapsed = normalize(&common::foldered_index(&cats, 1)).unwrap();
    let written = serde_json::to_value(&collapsed).unwrap();
    assert_eq!(written.as_object().unwrap().len(), 1);
    assert_eq!(normalize(&written).unwrap(), collapsed);
}

#[test]
fn test_partial_all_key_keeps_sibling_categories() {
    let raw = json!({
        "All": [common::path_item("images/Cats/1.png")],
        "Dogs": [
            common::path_item("images/Dogs/1.png"),
            common::path_item("images/Dogs/2.png"),
        ],
    });
    let index = normalize(&raw).unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(index.category_names(), vec!["Cats", "Dogs", "All"]);
    assert_eq!(index.get("Dogs").unwrap().len(), 2);
}

#[test]
fn test_identical_records_are_kept_once() {
    let raw = json!({
        "Dogs": [common::named_item("Rex", "images/Dogs/1.png")],
        "All": [
            common::named_item("Rex", "images/Dogs/1.png"),
            common::named_item("Fido", "images/Dogs/1.png"),
        ],
    });
    let index = normalize(&raw).unwrap();
    let names: Vec<_> = index.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Fido", "Rex"]);
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn test_filter_matches_name_or_path_ignoring_case() {
    let index = normalize(&json!([
        common::named_item("Kitchen", "images/Rooms/k1.png"),
        common::named_item("Bath", "images/Rooms/b1.png"),
        common::named_item("Garage", "images/Outside/g1.png"),
        common::named_item("Garden", "images/Outside/KITCHEN-garden.png"),
    ]))
    .unwrap();

    let hits = filter_records(index.all(), "  kitchen ");
    let names: Vec<_> = hits.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Garden", "Kitchen"]);

    assert_eq!(filter_records(index.all(), "").len(), 4);
    assert!(filter_records(index.all(), "attic").is_empty());
}
