use crate::config::{self, Manifest};
use crate::pipeline::{self, InstallContext};
use crate::version::VersionSpec;
use crate::{fetch, platform};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn run_install(
    manifest_path: &str,
    dest: Option<&str>,
    version_override: Option<&str>,
) -> Result<()> {
    let spec = match version_override {
        Some(v) => VersionSpec::parse(v),
        None => Manifest::load(Path::new(manifest_path))?.version_spec(),
    };
    let platform = platform::detect()?;
    let dest_dir = dest
        .map(PathBuf::from)
        .unwrap_or_else(|| config::manifest_sibling(manifest_path, "bin"));
    let client = fetch::http_client().context("building HTTP client")?;
    let ctx = InstallContext::new(client, spec, platform, dest_dir);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Installing protoc ({platform})"));
    match pipeline::run(&ctx, Some(&pb)) {
        Ok(installed) => {
            pb.finish_with_message(format!(
                "protoc {} -> {}",
                installed.version,
                installed.path.display()
            ));
            Ok(())
        }
        Err(e) => {
            pb.finish_with_message(format!("protoc FAILED: {e}"));
            Err(e.into())
        }
    }
}
