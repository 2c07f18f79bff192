use crate::s3w::BucketRegion;
use crate::{Error, Result};
use regex::Regex;

/// Bucket name regex. Unanchored, a bucket passes when any part of its name matches.
#[derive(Debug, Clone)]
pub struct NameFilter(Regex);

impl NameFilter {
	pub fn new(pattern: &str) -> Result<NameFilter> {
		if pattern.is_empty() {
			return Err(Error::InvalidFilter {
				pattern: pattern.to_string(),
				cause: "empty pattern".to_string(),
			});
		}
		let rx = Regex::new(pattern).map_err(|err| Error::InvalidFilter {
			pattern: pattern.to_string(),
			cause: err.to_string(),
		})?;
		Ok(NameFilter(rx))
	}

	pub fn is_match(&self, name: &str) -> bool {
		self.0.is_match(name)
	}
}

/// Exact, case sensitive, bucket region filter.
///
/// `Unset` selects the buckets without location constraint (given as an empty string
/// on the command line). A `Named` filter never matches an unset region, even `us-east-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionFilter {
	Unset,
	Named(String),
}

impl RegionFilter {
	pub fn from_arg(val: &str) -> RegionFilter {
		if val.is_empty() {
			RegionFilter::Unset
		} else {
			RegionFilter::Named(val.to_string())
		}
	}

	pub fn matches(&self, region: &BucketRegion) -> bool {
		match (self, region) {
			(RegionFilter::Unset, BucketRegion::Unset) => true,
			(RegionFilter::Named(want), BucketRegion::Named(got)) => want == got,
			_ => false,
		}
	}
}

/// The bucket level filters, built once before visiting the buckets.
#[derive(Debug, Clone, Default)]
pub struct BucketFilter {
	name: Option<NameFilter>,
	region: Option<RegionFilter>,
}

impl BucketFilter {
	/// Fails with `Error::InvalidFilter` if the name pattern does not compile.
	pub fn new(name_pattern: Option<&str>, region: Option<&str>) -> Result<BucketFilter> {
		let name = name_pattern.map(NameFilter::new).transpose()?;
		let region = region.map(RegionFilter::from_arg);
		Ok(BucketFilter { name, region })
	}

	pub fn accepts_name(&self, name: &str) -> bool {
		self.name.as_ref().map(|f| f.is_match(name)).unwrap_or(true)
	}

	pub fn accepts_region(&self, region: &BucketRegion) -> bool {
		self.region.as_ref().map(|f| f.matches(region)).unwrap_or(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::_test_support::named;

	#[test]
	fn test_name_filter_is_substring_match() -> Result<()> {
		let filter = NameFilter::new("test")?;
		assert!(filter.is_match("cs3c_test_bucket"));
		assert!(!filter.is_match("prod-assets"));
		Ok(())
	}

	#[test]
	fn test_name_filter_anchors_when_asked() -> Result<()> {
		let filter = NameFilter::new("^logs-")?;
		assert!(filter.is_match("logs-2024"));
		assert!(!filter.is_match("app-logs-2024"));
		Ok(())
	}

	#[test]
	fn test_name_filter_invalid() {
		assert!(matches!(NameFilter::new("("), Err(Error::InvalidFilter { .. })));
		assert!(matches!(NameFilter::new(""), Err(Error::InvalidFilter { .. })));
	}

	#[test]
	fn test_region_filter_exact() {
		let filter = RegionFilter::from_arg("us-west-2");
		assert!(filter.matches(&named("us-west-2")));
		assert!(!filter.matches(&named("US-WEST-2")));
		assert!(!filter.matches(&named("us-west-2 ")));
	}

	#[test]
	fn test_region_filter_unset_vs_default_region() {
		let unset = RegionFilter::from_arg("");
		let us_east_1 = RegionFilter::from_arg("us-east-1");

		assert_eq!(unset, RegionFilter::Unset);
		assert!(unset.matches(&BucketRegion::Unset));
		assert!(!unset.matches(&named("us-east-1")));
		assert!(!us_east_1.matches(&BucketRegion::Unset));
		assert!(us_east_1.matches(&named("us-east-1")));
	}

	#[test]
	fn test_bucket_filter_defaults_accept_all() -> Result<()> {
		let filter = BucketFilter::new(None, None)?;
		assert!(filter.accepts_name("anything"));
		assert!(filter.accepts_region(&BucketRegion::Unset));
		Ok(())
	}

	#[test]
	fn test_bucket_filter_invalid_pattern() {
		let res = BucketFilter::new(Some("a(b"), Some("us-west-2"));
		assert!(matches!(res, Err(Error::InvalidFilter { pattern, .. }) if pattern == "a(b"));
	}
}
