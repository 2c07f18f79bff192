use super::sobject::to_utc;
use crate::consts::{DEFAULT_REGION, LEGACY_EU_LOCATION, LEGACY_EU_REGION};
use aws_sdk_s3::types::Bucket;
use chrono::{DateTime, Utc};
use std::fmt;

/// A bucket as returned by the bucket listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SBucket {
	pub name: String,
	pub creation_date: Option<DateTime<Utc>>,
}

impl SBucket {
	pub fn new(name: impl Into<String>, creation_date: Option<DateTime<Utc>>) -> SBucket {
		SBucket {
			name: name.into(),
			creation_date,
		}
	}

	/// Returns None for a nameless bucket entry (should not happen with S3).
	pub fn from_bucket(bucket: &Bucket) -> Option<SBucket> {
		let name = bucket.name()?;
		Some(SBucket::new(name, bucket.creation_date().and_then(to_utc)))
	}
}

// region:    --- BucketRegion

/// Region of a bucket, as reported by its location constraint.
///
/// S3 reports buckets of `us-east-1` with no location constraint. Some endpoints send
/// null, others an empty string, both are `Unset`. No other normalization is done,
/// so `Unset` is never equal to `Named("us-east-1")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum BucketRegion {
	#[default]
	Unset,
	Named(String),
}

impl BucketRegion {
	pub fn from_constraint(constraint: Option<&str>) -> BucketRegion {
		match constraint {
			None | Some("") => BucketRegion::Unset,
			Some(name) => BucketRegion::Named(name.to_string()),
		}
	}

	pub fn as_option(&self) -> Option<&str> {
		match self {
			BucketRegion::Unset => None,
			BucketRegion::Named(name) => Some(name),
		}
	}

	/// The region to send requests to for this bucket.
	pub fn routing_region(&self) -> &str {
		match self {
			BucketRegion::Unset => DEFAULT_REGION,
			BucketRegion::Named(name) if name == LEGACY_EU_LOCATION => LEGACY_EU_REGION,
			BucketRegion::Named(name) => name,
		}
	}
}

impl fmt::Display for BucketRegion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BucketRegion::Unset => f.write_str("(unset)"),
			BucketRegion::Named(name) => f.write_str(name),
		}
	}
}

// endregion: --- BucketRegion
