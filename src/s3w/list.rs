use super::sobject::SObject;
use crate::{Error, Result};
use aws_sdk_s3::Client;

/// One page of an object listing.
#[derive(Debug, Default)]
pub struct ObjectPage {
	pub objects: Vec<SObject>,
	/// None when this is the last page.
	pub next_continuation_token: Option<String>,
}

pub async fn list_objects_page(
	client: &Client,
	bucket: &str,
	prefix: Option<&str>,
	continuation_token: Option<&str>,
) -> Result<ObjectPage> {
	// BUILD - the aws S3 list request
	let builder = client
		.list_objects_v2()
		.bucket(bucket)
		.set_prefix(prefix.map(String::from))
		.set_continuation_token(continuation_token.map(String::from));

	// EXECUTE - the AWS S3 request
	let resp = builder
		.send()
		.await
		.map_err(|err| Error::storage("ListObjectsV2", Some(bucket), err))?;

	// get the objects
	let objects: Vec<SObject> = resp.contents().iter().map(SObject::from_object).collect();

	// Note: some S3 compatible endpoints send a token on the last page, trust is_truncated when present.
	let next_continuation_token = match resp.is_truncated() {
		Some(false) => None,
		_ => resp.next_continuation_token().map(|t| t.to_string()),
	};

	Ok(ObjectPage {
		objects,
		next_continuation_token,
	})
}
