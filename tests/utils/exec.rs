use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

// Local minio, see MINIO_ENDPOINT
pub const MINIO_CREDS: [(&str, &str); 2] = [("AWS_ACCESS_KEY", "minio"), ("AWS_SECRET_KEY", "miniominio")];
pub const MINIO_ENDPOINT: &str = "http://127.0.0.1:9000";

// Environments that could make a test reach a real aws account.
const ENV_REMOVED: [&str; 6] = [
	"AWS_ACCESS_KEY",
	"AWS_SECRET_KEY",
	"AWS_ACCESS_KEY_ID",
	"AWS_SECRET_ACCESS_KEY",
	"AWS_PROFILE",
	"AWS_ENDPOINT_URL",
];

pub struct ExecOutput {
	pub success: bool,
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

/// Execute the built s3info binary with the sub command and args.
pub fn exec_s3info(sub_cmd: &str, args: &[&str], envs: &[(&str, &str)], print_exec: bool) -> Result<ExecOutput> {
	let cmd_args: Vec<&str> = std::iter::once(sub_cmd).chain(args.iter().copied()).collect();

	exec_output(
		env!("CARGO_BIN_EXE_s3info"),
		&cmd_args,
		&ExecConfig {
			print_exec,
			envs: envs.iter().copied().collect(),
			..ExecConfig::default()
		},
	)
}

#[derive(Default)]
struct ExecConfig<'a> {
	print_exec: bool,
	cwd: Option<PathBuf>,
	envs: HashMap<&'a str, &'a str>,
}

fn exec_output(cmd: &str, args: &[&str], config: &ExecConfig) -> Result<ExecOutput> {
	let ExecConfig { print_exec, cwd, envs } = config;

	if *print_exec {
		println!("> executing: {} {}", cmd, args.join(" "));
	}

	let mut proc = Command::new(cmd);

	if let Some(cwd) = cwd {
		proc.current_dir(cwd);
	}
	proc.args(args);

	for name in ENV_REMOVED {
		proc.env_remove(name);
	}
	for (name, val) in envs.iter() {
		proc.env(name, val);
	}

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	Ok(ExecOutput {
		success: output.status.success(),
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	})
}
