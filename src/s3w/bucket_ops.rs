use super::sbucket::{BucketRegion, SBucket};
use crate::prelude::*;
use aws_sdk_s3::Client;

pub async fn list_buckets(client: &Client) -> Result<Vec<SBucket>> {
	let buckets_output = client
		.list_buckets()
		.send()
		.await
		.map_err(|err| Error::storage("ListBuckets", None, err))?;
	Ok(buckets_output.buckets().iter().filter_map(SBucket::from_bucket).collect())
}

pub async fn get_bucket_region(client: &Client, bucket_name: &str) -> Result<BucketRegion> {
	let location_output = client
		.get_bucket_location()
		.bucket(bucket_name)
		.send()
		.await
		.map_err(|err| Error::storage("GetBucketLocation", Some(bucket_name), err))?;
	let constraint = location_output.location_constraint().map(|c| c.as_str());
	Ok(BucketRegion::from_constraint(constraint))
}
