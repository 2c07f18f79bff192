use crate::consts::{ENV_ACCESS_KEY, ENV_SECRET_KEY};
use clap::builder::PossibleValuesParser;
use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_SIZE: (&str, char) = ("size", 's');
pub const ARG_JSON: (&str, char) = ("json", 'j');
pub const ARG_TYPE: (&str, char) = ("type", 't');
pub const ARG_PREFIX: (&str, char) = ("prefix", 'p');
pub const ARG_FILTER: (&str, char) = ("filter", 'f');
pub const ARG_LOCATION: (&str, char) = ("location", 'l');
pub const ARG_KEEP_GOING: &str = "keep-going";
pub const ARG_ACCESS_KEY: &str = "access-key";
pub const ARG_SECRET_KEY: &str = "secret-key";
pub const ARG_PROFILE: &str = "profile";
pub const ARG_REGION: &str = "region";
pub const ARG_ENDPOINT: &str = "endpoint";

pub fn cmd_app() -> Command {
	Command::new("s3info")
		.version(crate_version!())
		.about("S3 bucket information. Object counts, sizes and last modified, per bucket and storage class.")
		.subcommand(sub_list())
}

// region:    --- Sub Commands
fn sub_list() -> Command {
	Command::new("list")
		.about("List the buckets with their object count, total size and last modified")
		.args(args_list())
		.args(args_client())
}
// endregion: --- Sub Commands

// region:    --- list Args
fn args_list() -> [Arg; 7] {
	[
		Arg::new(ARG_SIZE.0)
			.num_args(1)
			.short(ARG_SIZE.1)
			.long(ARG_SIZE.0)
			.default_value("b")
			.ignore_case(true)
			.value_parser(PossibleValuesParser::new([
				"b", "k", "m", "g", "t", "kb", "mb", "gb", "tb",
			]))
			.help("Display sizes in [b]ytes, [k]b, [m]b, [g]b or [t]b (1024 multiples)"),
		Arg::new(ARG_JSON.0)
			.action(ArgAction::SetTrue)
			.short(ARG_JSON.1)
			.long(ARG_JSON.0)
			.help("Output as JSON"),
		Arg::new(ARG_TYPE.0)
			.action(ArgAction::SetTrue)
			.short(ARG_TYPE.1)
			.long(ARG_TYPE.0)
			.help("Group by storage type (standard, infrequent access, glacier, ...)"),
		Arg::new(ARG_PREFIX.0)
			.num_args(1)
			.short(ARG_PREFIX.1)
			.long(ARG_PREFIX.0)
			.help("Only count the objects which key starts with this prefix"),
		Arg::new(ARG_FILTER.0)
			.num_args(1)
			.short(ARG_FILTER.1)
			.long(ARG_FILTER.0)
			.help("Filter bucket names (regex, matched anywhere in the name)"),
		Arg::new(ARG_LOCATION.0)
			.num_args(1)
			.short(ARG_LOCATION.1)
			.long(ARG_LOCATION.0)
			.help("Filter buckets by region, exact match (e.g. \"us-west-2\"). Empty string for buckets without location constraint"),
		Arg::new(ARG_KEEP_GOING)
			.action(ArgAction::SetTrue)
			.long(ARG_KEEP_GOING)
			.help("On a bucket access error, log it and continue with the next bucket (default abort)"),
	]
}
// endregion: --- list Args

// region:    --- Client Args
fn args_client() -> [Arg; 5] {
	[
		Arg::new(ARG_ACCESS_KEY)
			.num_args(1)
			.long(ARG_ACCESS_KEY)
			.env(ENV_ACCESS_KEY)
			.hide_env_values(true)
			.help("AWS access key id"),
		Arg::new(ARG_SECRET_KEY)
			.num_args(1)
			.long(ARG_SECRET_KEY)
			.env(ENV_SECRET_KEY)
			.hide_env_values(true)
			.help("AWS secret access key"),
		Arg::new(ARG_PROFILE)
			.num_args(1)
			.long(ARG_PROFILE)
			.help("The profile to use if no access/secret key given."),
		Arg::new(ARG_REGION)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region of the client (override profile/env region). Not a bucket filter, see --location."),
		Arg::new(ARG_ENDPOINT)
			.num_args(1)
			.long(ARG_ENDPOINT)
			.help("Custom S3 compatible endpoint, e.g., http://127.0.0.1:9000"),
	]
}
// endregion: --- Client Args
