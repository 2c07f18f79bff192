use crate::cmd::app::*;
use crate::render::{to_json, write_text, BucketView, SizeUnit};
use crate::s3w::{new_s3_config, ClientOptions, S3Provider, StorageProvider};
use crate::stats::{summarize_buckets, AggregateOptions, BucketFilter, RunOptions, RunReport};
use crate::{Error, Result};
use clap::ArgMatches;
use std::io::{self, Write};
use tracing::info;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = cmd_app().get_matches();

	match argm.subcommand() {
		Some(("list", sub_cmd)) => exec_list(sub_cmd).await?,
		_ => {
			cmd_app().print_long_help()?;
			println!("\n");
		}
	}

	Ok(())
}

pub async fn exec_list(argm: &ArgMatches) -> Result<()> {
	let unit: SizeUnit = get_str(argm, ARG_SIZE.0).unwrap_or("b").parse()?;
	let json = argm.get_flag(ARG_JSON.0);

	// Compiled once, and before any aws call.
	let filter = BucketFilter::new(get_str(argm, ARG_FILTER.0), get_str(argm, ARG_LOCATION.0))?;

	let opts = RunOptions {
		aggregate: AggregateOptions {
			tier_breakdown: argm.get_flag(ARG_TYPE.0),
			prefix: get_string(argm, ARG_PREFIX.0),
		},
		keep_going: argm.get_flag(ARG_KEEP_GOING),
	};

	let s3_config = new_s3_config(client_options(argm)).await?;
	let provider = S3Provider::from_s3_config(s3_config);

	let output = ListOutput { json, unit };
	let report = run_list(&provider, &filter, &opts, output, &mut io::stdout().lock()).await?;

	info!(listed = report.listed, summarized = report.summarized, "list done");

	Ok(())
}

#[derive(Debug, Clone, Copy)]
struct ListOutput {
	json: bool,
	unit: SizeUnit,
}

/// Summarize the buckets and write them to `out`.
///
/// Text is written and flushed bucket by bucket. Json is buffered and written as one
/// array at the end, so nothing is written when the run aborts. When buckets were
/// skipped (keep going), the output of the others is written first, then
/// `Error::BucketsFailed` is returned.
async fn run_list<P: StorageProvider + ?Sized>(
	provider: &P,
	filter: &BucketFilter,
	opts: &RunOptions,
	output: ListOutput,
	out: &mut impl Write,
) -> Result<RunReport> {
	let ListOutput { json, unit } = output;
	let mut views: Vec<BucketView> = Vec::new();

	let report = summarize_buckets(provider, filter, opts, |summary| {
		if json {
			views.push(BucketView::from_summary(&summary, unit));
		} else {
			write_text(&mut *out, &summary, unit)?;
			out.flush()?;
		}
		Ok(())
	})
	.await?;

	if json {
		writeln!(out, "{}", to_json(&views)?)?;
		out.flush()?;
	}

	if !report.failed.is_empty() {
		return Err(Error::BucketsFailed(report.failed));
	}

	Ok(report)
}

// region:    Args Utils
fn client_options(argm: &ArgMatches) -> ClientOptions {
	ClientOptions {
		access_key: get_string(argm, ARG_ACCESS_KEY),
		secret_key: get_string(argm, ARG_SECRET_KEY),
		profile: get_string(argm, ARG_PROFILE),
		region: get_string(argm, ARG_REGION),
		endpoint: get_string(argm, ARG_ENDPOINT),
	}
}

fn get_str<'a>(argm: &'a ArgMatches, name: &str) -> Option<&'a str> {
	argm.get_one::<String>(name).map(|s| s.as_str())
}

fn get_string(argm: &ArgMatches, name: &str) -> Option<String> {
	get_str(argm, name).map(String::from)
}
// endregion: Args Utils
