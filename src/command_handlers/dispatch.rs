use crate::cli::{Cli, Commands};
use crate::command_handlers::{install, plan, tag, vendor};
use crate::config;
use anyhow::Result;

pub fn dispatch(cli: Cli) -> Result<()> {
    let manifest_path = cli
        .manifest
        .clone()
        .unwrap_or_else(|| config::DEFAULT_MANIFEST.to_string());
    match cli.command {
        Commands::Install { dest, version } => {
            install::run_install(&manifest_path, dest.as_deref(), version.as_deref())
        }
        Commands::Plan => plan::run_plan(&manifest_path),
        Commands::Vendor { platform, dir } => {
            vendor::run_vendor(&manifest_path, platform, dir.as_deref())
        }
        Commands::Tag { platform } => tag::run_tag(platform),
    }
}
