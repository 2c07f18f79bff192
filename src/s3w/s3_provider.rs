use super::bucket_ops::{get_bucket_region, list_buckets};
use super::cred::S3Config;
use super::list::{list_objects_page, ObjectPage};
use super::{BucketRegion, PageRequest, SBucket, StorageProvider};
use crate::Result;
use async_trait::async_trait;
use aws_sdk_s3::config::{Config, Region};
use aws_sdk_s3::Client;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// StorageProvider backed by the aws sdk.
///
/// S3 answers a listing sent to the wrong region with a redirect, so object listings go
/// through a client of the bucket region. Those clients are created on first use.
/// With a custom endpoint (e.g., minio) everything goes through the base client.
pub struct S3Provider {
	config: Config,
	client: Client,
	route_by_region: bool,
	region_clients: Mutex<HashMap<String, Client>>,
}

impl S3Provider {
	/// Constructor
	pub fn from_s3_config(s3_config: S3Config) -> S3Provider {
		let S3Config { config, custom_endpoint } = s3_config;
		let client = Client::from_conf(config.clone());
		S3Provider {
			config,
			client,
			route_by_region: !custom_endpoint,
			region_clients: Mutex::new(HashMap::new()),
		}
	}

	fn client_for(&self, region: &BucketRegion) -> Client {
		if !self.route_by_region {
			return self.client.clone();
		}

		let region = region.routing_region();
		if self.config.region().map(|r| r.as_ref()) == Some(region) {
			return self.client.clone();
		}

		// A poisoned lock only means another caller panicked while inserting, the map is still usable.
		let mut clients = self.region_clients.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		clients
			.entry(region.to_string())
			.or_insert_with(|| {
				debug!(region, "new region client");
				let config = self.config.to_builder().region(Region::new(region.to_string())).build();
				Client::from_conf(config)
			})
			.clone()
	}
}

#[async_trait]
impl StorageProvider for S3Provider {
	async fn list_buckets(&self) -> Result<Vec<SBucket>> {
		list_buckets(&self.client).await
	}

	async fn bucket_region(&self, bucket: &str) -> Result<BucketRegion> {
		get_bucket_region(&self.client, bucket).await
	}

	async fn list_objects_page(&self, req: &PageRequest<'_>) -> Result<ObjectPage> {
		let client = self.client_for(req.region);
		list_objects_page(&client, req.bucket, req.prefix, req.continuation_token).await
	}
}
