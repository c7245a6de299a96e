pub mod documents;
pub mod probe;

pub use documents::{load_index, load_json, load_registry};
pub use probe::{image_size, probe_record, probe_records, resolve_asset_path, ProbeResult, ProbeStatus};
