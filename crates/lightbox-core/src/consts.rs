/// Name of the reserved bucket that holds every record.
pub const ALL_CATEGORY: &str = "All";

/// Category assigned when neither the folder nor the name prefix yields one.
pub const MISC_CATEGORY: &str = "Misc";

/// Placeholder used when a raw entry carries no name or path at all.
pub const PLACEHOLDER_NAME: &str = "item";

/// Folder names after which the next directory is taken as the category.
pub const DEFAULT_PATH_MARKERS: [&str; 2] = ["images", "assets"];

/// Fraction of singleton categories (relative to the record count) at or
/// above which the grouping collapses into the `All` bucket.
pub const DEFAULT_COLLAPSE_RATIO: f64 = 0.9;

/// Lower zoom bound.
pub const DEFAULT_MIN_SCALE: f64 = 1.0;

/// Upper zoom bound.
pub const DEFAULT_MAX_SCALE: f64 = 6.0;

/// Extra pixels the image may be panned past the viewport edge.
pub const DEFAULT_PAN_SLACK: f64 = 40.0;

/// Above this scale a single pointer pans instead of swiping.
pub const DEFAULT_PAN_SCALE_THRESHOLD: f64 = 1.01;

/// At or below this scale a single-pointer release may count as a swipe.
pub const DEFAULT_SWIPE_SCALE_TOLERANCE: f64 = 1.02;

/// A swipe must complete in strictly less than this many milliseconds.
pub const DEFAULT_SWIPE_MAX_DURATION_MS: u64 = 500;

/// Minimum horizontal travel (exclusive) for a swipe, in pixels.
pub const DEFAULT_SWIPE_MIN_DX: f64 = 60.0;

/// Maximum vertical drift (exclusive) for a swipe, in pixels.
pub const DEFAULT_SWIPE_MAX_DY: f64 = 80.0;

/// Two pointer-downs closer than this many milliseconds reset the view.
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 300;

/// Reference distances below this are treated as zero when pinching.
pub const PINCH_EPSILON: f64 = 1e-9;

/// Index document read from the site root when none is given.
pub const DEFAULT_INDEX_FILE: &str = "sections-index.json";

/// Job registry read from the site root when none is given.
pub const DEFAULT_REGISTRY_FILE: &str = "jobs/jobs.json";
