use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

const USAGE: &str = "usage: unlocker [--config <path>] [--plan-only]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: PathBuf,
    /// Print the plan and skip the unlock pass.
    pub plan_only: bool,
}

pub fn options_from_args() -> Result<CliOptions> {
    parse_options(env::args().skip(1))
}

pub fn parse_options(args: impl IntoIterator<Item = String>) -> Result<CliOptions> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut plan_only = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--plan-only" => plan_only = true,
            other => return Err(anyhow!("unknown argument: {other}. {USAGE}")),
        }
    }

    Ok(CliOptions {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./unlocker.jsonc")),
        plan_only,
    })
}
