//! Global constants

/// Region used when none is configured, and for buckets reporting no location constraint.
pub const DEFAULT_REGION: &str = "us-east-1";
/// Legacy location constraint reported by S3 for old eu-west-1 buckets.
pub const LEGACY_EU_LOCATION: &str = "EU";
pub const LEGACY_EU_REGION: &str = "eu-west-1";

// Static credential environment names (same as the --access-key / --secret-key args)
pub const ENV_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "AWS_SECRET_KEY";

pub const ENV_PROFILE_PREFIX: &str = "S3INFO_PROFILE";

pub const DEFAULT_LOG_FILTER: &str = "warn";
