use super::unit::SizeUnit;
use crate::stats::{BucketSummary, TierSummary};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// region:    --- Views

/// Output shape of a TierSummary, sizes in the display unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierView {
	pub count: u64,
	pub size: f64,
	pub units: String,
	pub last_modified: Option<String>,
}

/// Output shape of a BucketSummary. Dates are ISO-8601, null when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketView {
	pub name: String,
	pub creation_date: Option<String>,
	pub region: Option<String>,
	pub totals: TierView,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tiers: Option<BTreeMap<String, TierView>>,
}

// endregion: --- Views

// region:    --- Froms

impl TierView {
	pub fn from_summary(tier: &TierSummary, unit: SizeUnit) -> TierView {
		TierView {
			count: tier.count,
			size: unit.convert(tier.size),
			units: unit.label().to_string(),
			last_modified: tier.last_modified.as_ref().map(iso_8601),
		}
	}
}

impl BucketView {
	pub fn from_summary(summary: &BucketSummary, unit: SizeUnit) -> BucketView {
		let tiers = summary.tiers.as_ref().map(|tiers| {
			tiers
				.iter()
				.map(|(tier, t)| (tier.to_string(), TierView::from_summary(t, unit)))
				.collect()
		});

		BucketView {
			name: summary.name.clone(),
			creation_date: summary.creation_date.as_ref().map(iso_8601),
			region: summary.region.as_option().map(String::from),
			totals: TierView::from_summary(&summary.totals, unit),
			tiers,
		}
	}
}

// endregion: --- Froms

/// The json array of the views.
pub fn to_json(views: &[BucketView]) -> Result<String> {
	Ok(serde_json::to_string(views)?)
}

fn iso_8601(dt: &DateTime<Utc>) -> String {
	dt.to_rfc3339()
}
