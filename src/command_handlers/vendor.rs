use crate::config::{self, Manifest};
use crate::pipeline::{self, InstallContext};
use crate::platform::PlatformKey;
use crate::{dist, fetch, platform};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build-time flow: place the (possibly cross-platform) binary under
/// resources/ so packaging tooling can bundle it into a distributable.
pub fn run_vendor(
    manifest_path: &str,
    platform_override: Option<PlatformKey>,
    dir: Option<&str>,
) -> Result<()> {
    let spec = Manifest::load(Path::new(manifest_path))?.version_spec();
    let platform = match platform_override {
        Some(key) => key,
        None => platform::detect()?,
    };
    let dest_dir = dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config::manifest_sibling(manifest_path, "resources"));
    let client = fetch::http_client().context("building HTTP client")?;
    let ctx = InstallContext::new(client, spec, platform, dest_dir);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Vendoring protoc ({platform})"));
    match pipeline::run(&ctx, Some(&pb)) {
        Ok(vendored) => {
            pb.finish_with_message(format!(
                "protoc {} -> {}",
                vendored.version,
                vendored.path.display()
            ));
            println!("tag {}", dist::compatibility_tag(platform)?);
            Ok(())
        }
        Err(e) => {
            pb.finish_with_message(format!("protoc FAILED: {e}"));
            Err(e.into())
        }
    }
}
