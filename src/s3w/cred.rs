use crate::consts::{DEFAULT_REGION, ENV_PROFILE_PREFIX};
use crate::{Error, Result};
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Builder, Config, Credentials, Region};
use aws_types::SdkConfig;
use std::env;
use tracing::debug;

/// What the command line gives us to build the client.
/// Key id and secret are opaque, they are passed to the sdk as is.
#[derive(Debug, Default, Clone)]
pub struct ClientOptions {
	pub access_key: Option<String>,
	pub secret_key: Option<String>,
	pub profile: Option<String>,
	pub region: Option<String>,
	pub endpoint: Option<String>,
}

/// The resolved s3 config, and whether it targets a custom (non AWS) endpoint.
pub struct S3Config {
	pub config: Config,
	pub custom_endpoint: bool,
}

#[derive(Clone)]
struct AwsCred {
	key_id: String,
	key_secret: String,
	region: Option<String>,
	endpoint: Option<String>,
}

enum CredKey {
	Id,
	Secret,
	Region,
	Endpoint,
}

impl CredKey {
	fn env_part(&self) -> &'static str {
		match self {
			CredKey::Id => "KEY_ID",
			CredKey::Secret => "KEY_SECRET",
			CredKey::Region => "REGION",
			CredKey::Endpoint => "ENDPOINT",
		}
	}
}

/// Build the s3 config from
/// - First the `--access-key` / `--secret-key` (or their environment variables)
/// - If a profile is given,
///    - first try the S3INFO_PROFILE_... envs,
///    - then the standard aws config files for this profile
/// - Otherwise the default aws-config chain (AWS_... envs, config files, instance metadata)
///
/// In all cases `--region` and `--endpoint` take precedence.
pub async fn new_s3_config(opts: ClientOptions) -> Result<S3Config> {
	// -- Static keys
	let static_cred = match (&opts.access_key, &opts.secret_key) {
		(Some(key_id), Some(key_secret)) => Some(AwsCred {
			key_id: key_id.clone(),
			key_secret: key_secret.clone(),
			region: None,
			endpoint: None,
		}),
		(None, None) => None,
		_ => return Err(Error::PartialCredentials),
	};

	// -- Profile env
	let cred = match (static_cred, &opts.profile) {
		(Some(cred), _) => Some(cred),
		(None, Some(profile)) => load_aws_cred_from_profile_env(profile).ok(),
		(None, None) => None,
	};

	if let Some(mut cred) = cred {
		// args take precedence
		if opts.region.is_some() {
			cred.region = opts.region;
		}
		if opts.endpoint.is_some() {
			cred.endpoint = opts.endpoint;
		}
		debug!(endpoint = ?cred.endpoint, region = ?cred.region, "s3 config from static credentials");
		return Ok(config_from_cred(cred));
	}

	// -- aws-config chain
	let sdk_config = load_sdk_config(&opts).await;
	let endpoint = opts.endpoint.or_else(|| sdk_config.endpoint_url().map(String::from));
	debug!(profile = ?opts.profile, endpoint = ?endpoint, "s3 config from aws-config chain");

	let mut builder = Builder::from(&sdk_config);
	if let Some(endpoint) = &endpoint {
		builder = builder.endpoint_url(endpoint).force_path_style(true);
	}

	Ok(S3Config {
		config: builder.build(),
		custom_endpoint: endpoint.is_some(),
	})
}

fn config_from_cred(aws_cred: AwsCred) -> S3Config {
	let AwsCred {
		key_id,
		key_secret,
		region,
		endpoint,
	} = aws_cred;

	let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-args-or-env");
	let region = region.unwrap_or_else(|| DEFAULT_REGION.to_string());

	let mut builder = Builder::new()
		.behavior_version(BehaviorVersion::latest())
		.credentials_provider(cred)
		.region(Region::new(region));

	if let Some(endpoint) = &endpoint {
		builder = builder.endpoint_url(endpoint).force_path_style(true);
	}

	S3Config {
		config: builder.build(),
		custom_endpoint: endpoint.is_some(),
	}
}

async fn load_sdk_config(opts: &ClientOptions) -> SdkConfig {
	let region_provider = RegionProviderChain::first_try(opts.region.clone().map(Region::new))
		.or_default_provider()
		.or_else(DEFAULT_REGION);

	let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
	if let Some(profile) = &opts.profile {
		loader = loader.profile_name(profile);
	}

	loader.load().await
}

/// Attempt to create AwsCred from profile environment variables
/// - `S3INFO_PROFILE_profile_name_KEY_ID`
/// - `S3INFO_PROFILE_profile_name_KEY_SECRET`
/// - `S3INFO_PROFILE_profile_name_REGION`
/// - `S3INFO_PROFILE_profile_name_ENDPOINT`
fn load_aws_cred_from_profile_env(profile: &str) -> Result<AwsCred> {
	let key_id = get_env(&get_env_name(CredKey::Id, profile))?;
	let key_secret = get_env(&get_env_name(CredKey::Secret, profile))?;
	let region = get_env(&get_env_name(CredKey::Region, profile)).ok();
	let endpoint = get_env(&get_env_name(CredKey::Endpoint, profile)).ok();

	Ok(AwsCred {
		key_id,
		key_secret,
		region,
		endpoint,
	})
}

// region:    Utils
fn get_env_name(key: CredKey, name: &str) -> String {
	let name = name.replace('-', "_");
	format!("{}_{}_{}", ENV_PROFILE_PREFIX, name, key.env_part())
}

fn get_env(name: &str) -> Result<String> {
	match env::var(name) {
		Ok(v) => Ok(v),
		Err(_) => Err(Error::NoCredentialEnv(name.to_string())),
	}
}
// endregion: Utils
