use super::filter::BucketFilter;
use super::pager::ObjectPager;
use super::summary::{BucketSummary, TierAccumulator};
use crate::s3w::{SBucket, StorageProvider};
use crate::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct AggregateOptions {
	/// Keep the per storage tier summaries in the result.
	pub tier_breakdown: bool,
	/// Key prefix, passed to the listing as is.
	pub prefix: Option<String>,
}

/// Summarize one bucket, or None when the bucket does not pass the filter.
///
/// The name filter is checked first (no provider call), then the region is resolved
/// (one call), then all the objects are listed and folded per storage tier.
pub async fn aggregate<P: StorageProvider + ?Sized>(
	provider: &P,
	bucket: &SBucket,
	filter: &BucketFilter,
	opts: &AggregateOptions,
) -> Result<Option<BucketSummary>> {
	if !filter.accepts_name(&bucket.name) {
		debug!(bucket = %bucket.name, "skipped by name filter");
		return Ok(None);
	}

	let region = provider.bucket_region(&bucket.name).await?;
	if !filter.accepts_region(&region) {
		debug!(bucket = %bucket.name, %region, "skipped by region filter");
		return Ok(None);
	}

	let mut acc = TierAccumulator::default();
	let mut pager = ObjectPager::new(provider, &bucket.name, region.clone(), opts.prefix.as_deref())?;
	while let Some(obj) = pager.next_object().await? {
		acc.add_object(&obj);
	}

	let totals = acc.totals();
	info!(
		bucket = %bucket.name,
		%region,
		count = totals.count,
		size = totals.size,
		pages = pager.pages_fetched(),
		"bucket summarized"
	);

	let tiers = opts.tier_breakdown.then(|| acc.into_tiers());

	Ok(Some(BucketSummary {
		name: bucket.name.clone(),
		creation_date: bucket.creation_date,
		region,
		totals,
		tiers,
	}))
}
