//! Bucket statistics. Object paging, filtering and per storage tier aggregation.

// region:    --- Modules

mod aggregate;
mod filter;
mod pager;
mod run;
mod summary;

pub use self::aggregate::AggregateOptions;
pub use self::filter::BucketFilter;
pub use self::run::{summarize_buckets, RunOptions, RunReport};
pub use self::summary::{BucketSummary, TierSummary};

// endregion: --- Modules
