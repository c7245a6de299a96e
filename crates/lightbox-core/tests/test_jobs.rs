use lightbox_core::error::LightboxError;
use lightbox_core::jobs::{JobLocation, JobRegistry};

fn registry() -> JobRegistry {
    JobRegistry::from_json(
        r#"{
            "jobs": [
                {
                    "id": "Harbor-12",
                    "label": "Harbor renovation",
                    "index": "jobs/harbor/index.json",
                    "imagesDir": "media/harbor"
                },
                { "id": "mill" }
            ]
        }"#,
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Convention
// ---------------------------------------------------------------------------

#[test]
fn test_unregistered_code_uses_convention() {
    let job = JobRegistry::default().resolve("ABC123").unwrap();
    assert_eq!(job, JobLocation::by_convention("ABC123"));
    assert_eq!(job.index, "jobs/ABC123/index/assets-index.json");
    assert_eq!(job.images_dir, "jobs/ABC123/images");
    assert_eq!(job.thumbs_dir, "jobs/ABC123/thumbs");
    assert_eq!(job.label, "ABC123");
    assert!(!job.registered);
}

#[test]
fn test_code_is_trimmed() {
    let job = JobRegistry::default().resolve("  lot_7 ").unwrap();
    assert_eq!(job.code, "lot_7");
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_registered_fields_override_convention() {
    let job = registry().resolve("Harbor-12").unwrap();
    assert!(job.registered);
    assert_eq!(job.label, "Harbor renovation");
    assert_eq!(job.index, "jobs/harbor/index.json");
    assert_eq!(job.images_dir, "media/harbor");
    assert_eq!(job.thumbs_dir, "jobs/Harbor-12/thumbs");
}

#[test]
fn test_registry_lookup_ignores_case() {
    let registry = registry();
    assert!(registry.find("harbor-12").is_some());
    assert!(registry.find("MILL").is_some());
    assert!(registry.find("quarry").is_none());

    let job = registry.resolve("MILL").unwrap();
    assert!(job.registered);
    assert_eq!(job.index, "jobs/MILL/index/assets-index.json");
}

#[test]
fn test_registry_without_jobs_key_is_empty() {
    let registry = JobRegistry::from_json("{}").unwrap();
    assert!(registry.jobs.is_empty());
}

// ---------------------------------------------------------------------------
// Invalid codes
// ---------------------------------------------------------------------------

#[test]
fn test_empty_code_rejected() {
    let err = registry().resolve("   ").unwrap_err();
    assert!(matches!(err, LightboxError::UnknownJob(_)), "got: {err}");
}

#[test]
fn test_path_characters_rejected() {
    for code in ["../etc", "a/b", "a b", "ñ"] {
        let err = JobRegistry::default().resolve(code).unwrap_err();
        assert!(matches!(err, LightboxError::UnknownJob(_)), "{code}: {err}");
    }
}
