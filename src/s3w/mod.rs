//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules
mod list;
mod s3_provider;
mod sbucket;
mod sobject;

pub mod bucket_ops;
pub mod cred;

// -- Re-exports
pub use self::cred::{new_s3_config, ClientOptions};
pub use self::list::ObjectPage;
pub use self::s3_provider::S3Provider;
pub use self::sbucket::{BucketRegion, SBucket};
pub use self::sobject::{SObject, StorageTier};

// -- Imports
use crate::Result;
use async_trait::async_trait;

// endregion: --- Modules

// region:    --- StorageProvider

/// Parameters of one object listing page request.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
	pub bucket: &'a str,
	/// Region of the bucket, used by providers that route per region.
	pub region: &'a BucketRegion,
	/// Server side key prefix filter, passed verbatim.
	pub prefix: Option<&'a str>,
	/// None for the first page.
	pub continuation_token: Option<&'a str>,
}

/// The read only calls made to the storage provider.
///
/// Implementations do not retry, retries are the transport concern.
#[async_trait]
pub trait StorageProvider: Send + Sync {
	async fn list_buckets(&self) -> Result<Vec<SBucket>>;

	async fn bucket_region(&self, bucket: &str) -> Result<BucketRegion>;

	async fn list_objects_page(&self, req: &PageRequest<'_>) -> Result<ObjectPage>;
}

// endregion: --- StorageProvider
