//! In memory StorageProvider for the unit tests.

use crate::s3w::{BucketRegion, ObjectPage, PageRequest, SBucket, SObject, StorageProvider, StorageTier};
use crate::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Buckets with pre-paged listings. The continuation token is the next page index.
#[derive(Default)]
pub struct MemProvider {
	buckets: Vec<SBucket>,
	regions: HashMap<String, BucketRegion>,
	pages: HashMap<String, Vec<Vec<SObject>>>,
	failing: HashSet<String>,
	repeat_token: HashSet<String>,
	loop_back: HashMap<String, usize>,
	calls: Mutex<Vec<String>>,
}

impl MemProvider {
	pub fn new() -> MemProvider {
		MemProvider::default()
	}

	pub fn with_bucket(mut self, name: &str, region: BucketRegion, pages: Vec<Vec<SObject>>) -> MemProvider {
		self.buckets.push(SBucket::new(name, Some(ts(1_600_000_000))));
		self.regions.insert(name.to_string(), region);
		self.pages.insert(name.to_string(), pages);
		self
	}

	/// Listing of this bucket fails with an AccessDenied.
	pub fn with_failing_listing(mut self, name: &str) -> MemProvider {
		self.failing.insert(name.to_string());
		self
	}

	/// Listing of this bucket always answers the token it was given (a misbehaving endpoint).
	pub fn with_repeating_token(mut self, name: &str) -> MemProvider {
		self.repeat_token.insert(name.to_string());
		self
	}

	/// After its last page, the listing of this bucket answers the token of page `idx` again.
	pub fn with_token_loop_back(mut self, name: &str, idx: usize) -> MemProvider {
		self.loop_back.insert(name.to_string(), idx);
		self
	}

	/// The fixture bucket, without recording a call.
	pub fn sbucket(&self, name: &str) -> Option<SBucket> {
		self.buckets.iter().find(|b| b.name == name).cloned()
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, call: String) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl StorageProvider for MemProvider {
	async fn list_buckets(&self) -> Result<Vec<SBucket>> {
		self.record("ListBuckets".to_string());
		Ok(self.buckets.clone())
	}

	async fn bucket_region(&self, bucket: &str) -> Result<BucketRegion> {
		self.record(format!("GetBucketLocation:{bucket}"));
		self.regions.get(bucket).cloned().ok_or_else(|| no_such_bucket("GetBucketLocation", bucket))
	}

	async fn list_objects_page(&self, req: &PageRequest<'_>) -> Result<ObjectPage> {
		let token = req.continuation_token.unwrap_or("0");
		self.record(format!("ListObjectsV2:{}:{}", req.bucket, token));

		if self.failing.contains(req.bucket) {
			return Err(Error::StorageAccess {
				operation: "ListObjectsV2",
				bucket: Some(req.bucket.to_string()),
				code: "AccessDenied".to_string(),
				message: "Access Denied".to_string(),
			});
		}

		let pages = self.pages.get(req.bucket).ok_or_else(|| no_such_bucket("ListObjectsV2", req.bucket))?;
		let idx: usize = token.parse().expect("mem provider token should be a page index");

		let objects = pages
			.get(idx)
			.map(|page| {
				page.iter()
					.filter(|o| req.prefix.map(|p| o.key.starts_with(p)).unwrap_or(true))
					.cloned()
					.collect()
			})
			.unwrap_or_default();

		let next_continuation_token = if self.repeat_token.contains(req.bucket) {
			Some(token.to_string())
		} else if idx + 1 < pages.len() {
			Some((idx + 1).to_string())
		} else {
			self.loop_back.get(req.bucket).map(|idx| idx.to_string())
		};

		Ok(ObjectPage {
			objects,
			next_continuation_token,
		})
	}
}

fn no_such_bucket(operation: &'static str, bucket: &str) -> Error {
	Error::StorageAccess {
		operation,
		bucket: Some(bucket.to_string()),
		code: "NoSuchBucket".to_string(),
		message: "The specified bucket does not exist".to_string(),
	}
}

// region:    --- Fixture Utils

pub fn ts(secs: i64) -> DateTime<Utc> {
	DateTime::<Utc>::from_timestamp(secs, 0).expect("valid timestamp")
}

pub fn sobject(key: &str, size: u64, tier: StorageTier, modified_secs: i64) -> SObject {
	SObject {
		key: key.to_string(),
		size,
		storage_tier: tier,
		last_modified: Some(ts(modified_secs)),
	}
}

pub fn named(region: &str) -> BucketRegion {
	BucketRegion::Named(region.to_string())
}

// endregion: --- Fixture Utils
