use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Invalid bucket name filter '{pattern}'. Cause: {cause}")]
	InvalidFilter { pattern: String, cause: String },

	#[error("AWS access error on {operation}{}. Code: {code}, Message: {message}", bucket_ctx(.bucket))]
	StorageAccess {
		operation: &'static str,
		bucket: Option<String>,
		code: String,
		message: String,
	},

	#[error("Bucket name cannot be empty")]
	EmptyBucketName,

	#[error("Invalid size unit '{0}'. Should be one of b, k, m, g, t")]
	InvalidSizeUnit(String),

	#[error("Both --access-key and --secret-key must be given (or AWS_ACCESS_KEY and AWS_SECRET_KEY), only one found.")]
	PartialCredentials,

	#[error("Credential environment variable {0} not found")]
	NoCredentialEnv(String),

	#[error("Some buckets could not be summarized: {}", .0.join(", "))]
	BucketsFailed(Vec<String>),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl Error {
	/// Build a StorageAccess error from any aws sdk error, keeping the operation and bucket context.
	pub fn storage<E, R>(operation: &'static str, bucket: Option<&str>, err: SdkError<E, R>) -> Error
	where
		E: ProvideErrorMetadata + std::error::Error + 'static,
		R: std::fmt::Debug,
	{
		let (code, message) = match err.as_service_error() {
			Some(se) => (se.code().map(String::from), se.message().map(String::from)),
			None => (None, None),
		};

		Error::StorageAccess {
			operation,
			bucket: bucket.map(String::from),
			code: code.unwrap_or_else(|| "Unknown".to_string()),
			message: message.unwrap_or_else(|| DisplayErrorContext(&err).to_string()),
		}
	}
}

fn bucket_ctx(bucket: &Option<String>) -> String {
	match bucket {
		Some(bucket) => format!(" (bucket '{bucket}')"),
		None => String::new(),
	}
}
