use aws_sdk_s3::primitives::DateTime as AwsDateTime;
use aws_sdk_s3::types::Object;
use chrono::{DateTime, Utc};
use std::fmt;

// region:    --- StorageTier

/// Storage class of an object, used as the grouping key of the tier breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageTier {
	#[default]
	Standard,
	StandardIa,
	OnezoneIa,
	IntelligentTiering,
	Glacier,
	GlacierIr,
	DeepArchive,
	ReducedRedundancy,
	Outposts,
	Snow,
	ExpressOnezone,
	/// Any class name the provider reports that we do not know about.
	Other(String),
}

impl StorageTier {
	pub fn as_str(&self) -> &str {
		match self {
			StorageTier::Standard => "STANDARD",
			StorageTier::StandardIa => "STANDARD_IA",
			StorageTier::OnezoneIa => "ONEZONE_IA",
			StorageTier::IntelligentTiering => "INTELLIGENT_TIERING",
			StorageTier::Glacier => "GLACIER",
			StorageTier::GlacierIr => "GLACIER_IR",
			StorageTier::DeepArchive => "DEEP_ARCHIVE",
			StorageTier::ReducedRedundancy => "REDUCED_REDUNDANCY",
			StorageTier::Outposts => "OUTPOSTS",
			StorageTier::Snow => "SNOW",
			StorageTier::ExpressOnezone => "EXPRESS_ONEZONE",
			StorageTier::Other(name) => name,
		}
	}
}

impl From<&str> for StorageTier {
	fn from(val: &str) -> Self {
		match val {
			"STANDARD" => StorageTier::Standard,
			"STANDARD_IA" => StorageTier::StandardIa,
			"ONEZONE_IA" => StorageTier::OnezoneIa,
			"INTELLIGENT_TIERING" => StorageTier::IntelligentTiering,
			"GLACIER" => StorageTier::Glacier,
			"GLACIER_IR" => StorageTier::GlacierIr,
			"DEEP_ARCHIVE" => StorageTier::DeepArchive,
			"REDUCED_REDUNDANCY" => StorageTier::ReducedRedundancy,
			"OUTPOSTS" => StorageTier::Outposts,
			"SNOW" => StorageTier::Snow,
			"EXPRESS_ONEZONE" => StorageTier::ExpressOnezone,
			// Some S3 compatible endpoints send an empty class for standard objects.
			"" => StorageTier::Standard,
			other => StorageTier::Other(other.to_string()),
		}
	}
}

impl fmt::Display for StorageTier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

// endregion: --- StorageTier

// region:    --- SObject

/// One object of a listing page. Read only, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SObject {
	pub key: String,
	pub size: u64,
	pub storage_tier: StorageTier,
	pub last_modified: Option<DateTime<Utc>>,
}

// builders
impl SObject {
	pub fn from_object(obj: &Object) -> SObject {
		let key = obj.key().unwrap_or_default().to_string();
		// S3 never reports negative sizes, clamp anyway so the cast is sound.
		let size = obj.size().unwrap_or_default().max(0) as u64;
		let storage_tier = obj
			.storage_class()
			.map(|class| StorageTier::from(class.as_str()))
			.unwrap_or_default();
		let last_modified = obj.last_modified().and_then(to_utc);

		SObject {
			key,
			size,
			storage_tier,
			last_modified,
		}
	}
}

// endregion: --- SObject

pub(crate) fn to_utc(dt: &AwsDateTime) -> Option<DateTime<Utc>> {
	DateTime::<Utc>::from_timestamp(dt.secs(), dt.subsec_nanos())
}
