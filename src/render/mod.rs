//! Presentation of the bucket summaries. Size units, json views and text output.

mod text;
mod unit;
mod view;

pub use self::text::write_text;
pub use self::unit::SizeUnit;
pub use self::view::{to_json, BucketView};
