use super::aggregate::{aggregate, AggregateOptions};
use super::filter::BucketFilter;
use super::summary::BucketSummary;
use crate::s3w::StorageProvider;
use crate::Result;
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
	pub aggregate: AggregateOptions,
	/// Log a provider error of a bucket and go on with the next one, rather than abort the run.
	pub keep_going: bool,
}

#[derive(Debug, Default)]
pub struct RunReport {
	/// Buckets returned by the bucket listing.
	pub listed: usize,
	pub summarized: usize,
	/// Names of the buckets skipped on error (keep_going only).
	pub failed: Vec<String>,
}

/// List the buckets and summarize them one after the other, in listing order.
///
/// Each summary is given to `on_summary` as soon as it is built. The filter must be
/// built (compiled) by the caller, before this call.
pub async fn summarize_buckets<P, F>(
	provider: &P,
	filter: &BucketFilter,
	opts: &RunOptions,
	mut on_summary: F,
) -> Result<RunReport>
where
	P: StorageProvider + ?Sized,
	F: FnMut(BucketSummary) -> Result<()>,
{
	let buckets = provider.list_buckets().await?;
	let mut report = RunReport {
		listed: buckets.len(),
		..Default::default()
	};

	for bucket in buckets.iter() {
		match aggregate(provider, bucket, filter, &opts.aggregate).await {
			Ok(Some(summary)) => {
				report.summarized += 1;
				on_summary(summary)?;
			}
			Ok(None) => (),
			Err(err) if opts.keep_going => {
				warn!(bucket = %bucket.name, "bucket skipped. Cause: {err}");
				report.failed.push(bucket.name.clone());
			}
			Err(err) => return Err(err),
		}
	}

	Ok(report)
}
