use super::unit::SizeUnit;
use crate::stats::{BucketSummary, TierSummary};
use crate::Result;
use chrono::{DateTime, Utc};
use std::io::Write;

pub fn write_text(w: &mut impl Write, summary: &BucketSummary, unit: SizeUnit) -> Result<()> {
	writeln!(w, "{}", summary.name)?;
	match &summary.creation_date {
		Some(created) => writeln!(w, "Created {}", fmt_date(created))?,
		None => writeln!(w, "Created (unknown)")?,
	}
	writeln!(w, "Region {}", summary.region)?;

	write_tier(w, "Total", &summary.totals, unit)?;

	if let Some(tiers) = &summary.tiers {
		for (tier, t) in tiers.iter() {
			write_tier(w, tier.as_str(), t, unit)?;
		}
	}

	Ok(())
}

fn write_tier(w: &mut impl Write, label: &str, tier: &TierSummary, unit: SizeUnit) -> Result<()> {
	writeln!(w, "{label}: {} objects", tier.count)?;
	writeln!(w, "{label}: {:.2} {} total size", unit.convert(tier.size), unit.label())?;
	if let Some(last_modified) = &tier.last_modified {
		writeln!(w, "{label}: Last modified {}", fmt_date(last_modified))?;
	}
	Ok(())
}

fn fmt_date(dt: &DateTime<Utc>) -> String {
	dt.format("%c").to_string()
}
