pub mod category;
pub mod filter;
pub mod natural;
pub mod normalize;
pub mod record;

pub use filter::filter_records;
pub use natural::natural_cmp;
pub use normalize::{normalize, normalize_with, parse_index, CategoryIndex};
pub use record::{ImageRecord, RawEntry};
