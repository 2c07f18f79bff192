#![allow(unused)]

// --- Re-exports
pub use exec::{exec_s3info, ExecOutput, MINIO_CREDS, MINIO_ENDPOINT};

// --- Imports
use anyhow::Result;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

// --- Sub-Modules
mod exec;

// region:    --- Minio Fixture

pub fn minio_client() -> Client {
	let cred = Credentials::new(MINIO_CREDS[0].1, MINIO_CREDS[1].1, None, None, "test");
	let config = Builder::new()
		.behavior_version(BehaviorVersion::latest())
		.credentials_provider(cred)
		.region(Region::new("us-east-1"))
		.endpoint_url(MINIO_ENDPOINT)
		.force_path_style(true)
		.build();
	Client::from_conf(config)
}

/// Create (or empty) the bucket, then put one object per size. Returns the total size.
pub async fn reset_bucket_with_objects(client: &Client, bucket: &str, sizes: &[usize]) -> Result<u64> {
	if let Err(err) = client.create_bucket().bucket(bucket).send().await {
		let code = err.as_service_error().and_then(|se| se.code()).map(String::from);
		match code.as_deref() {
			Some("BucketAlreadyOwnedByYou") => empty_bucket(client, bucket).await?,
			_ => return Err(err.into()),
		}
	}

	for (i, size) in sizes.iter().enumerate() {
		client
			.put_object()
			.bucket(bucket)
			.key(format!("fixtures/{i}"))
			.body(ByteStream::from(vec![b'x'; *size]))
			.send()
			.await?;
	}

	Ok(sizes.iter().map(|s| *s as u64).sum())
}

async fn empty_bucket(client: &Client, bucket: &str) -> Result<()> {
	let mut continuation_token: Option<String> = None;
	loop {
		let listed = client
			.list_objects_v2()
			.bucket(bucket)
			.set_continuation_token(continuation_token.take())
			.send()
			.await?;
		for obj in listed.contents() {
			if let Some(key) = obj.key() {
				client.delete_object().bucket(bucket).key(key).send().await?;
			}
		}
		match listed.next_continuation_token() {
			Some(token) if listed.is_truncated() == Some(true) => continuation_token = Some(token.to_string()),
			_ => break,
		}
	}
	Ok(())
}

// endregion: --- Minio Fixture
