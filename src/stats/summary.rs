use crate::s3w::{BucketRegion, SObject, StorageTier};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub type TierMap = BTreeMap<StorageTier, TierSummary>;

// region:    --- TierSummary

/// Running count, byte size and latest modification of a set of objects.
///
/// `add_object` and `merge` are commutative and associative, so the arrival order of
/// the objects does not change the result. Counters saturate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSummary {
	pub count: u64,
	pub size: u64,
	pub last_modified: Option<DateTime<Utc>>,
}

impl TierSummary {
	pub fn add_object(&mut self, obj: &SObject) {
		self.count = self.count.saturating_add(1);
		self.size = self.size.saturating_add(obj.size);
		self.last_modified = latest(self.last_modified, obj.last_modified);
	}

	pub fn merge(&mut self, other: &TierSummary) {
		self.count = self.count.saturating_add(other.count);
		self.size = self.size.saturating_add(other.size);
		self.last_modified = latest(self.last_modified, other.last_modified);
	}
}

fn latest(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
	match (a, b) {
		(Some(a), Some(b)) => Some(a.max(b)),
		(a, b) => a.or(b),
	}
}

// endregion: --- TierSummary

// region:    --- TierAccumulator

/// Per storage tier summaries of one bucket. A tier entry exists only once an object of that tier was added.
#[derive(Debug, Default)]
pub struct TierAccumulator {
	tiers: TierMap,
}

impl TierAccumulator {
	pub fn add_object(&mut self, obj: &SObject) {
		match self.tiers.get_mut(&obj.storage_tier) {
			Some(tier) => tier.add_object(obj),
			None => {
				let mut tier = TierSummary::default();
				tier.add_object(obj);
				self.tiers.insert(obj.storage_tier.clone(), tier);
			}
		}
	}

	pub fn totals(&self) -> TierSummary {
		self.tiers.values().fold(TierSummary::default(), |mut acc, tier| {
			acc.merge(tier);
			acc
		})
	}

	pub fn into_tiers(self) -> TierMap {
		self.tiers
	}
}

// endregion: --- TierAccumulator

/// Final, read only, result of the aggregation of one bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
	pub name: String,
	pub creation_date: Option<DateTime<Utc>>,
	pub region: BucketRegion,
	pub totals: TierSummary,
	/// Only when the tier breakdown was requested.
	pub tiers: Option<TierMap>,
}
