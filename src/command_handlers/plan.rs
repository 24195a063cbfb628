use crate::config::{self, Manifest};
use crate::{fetch, locator, platform, version};
use anyhow::{Context, Result};
use std::path::Path;

pub fn run_plan(manifest_path: &str) -> Result<()> {
    let manifest = Manifest::load(Path::new(manifest_path))?;
    let platform = platform::detect()?;
    let client = fetch::http_client().context("building HTTP client")?;
    let version = version::resolve(&client, &manifest.version_spec())?;
    let spec = locator::locate(&version, platform);
    let dest = config::manifest_sibling(manifest_path, "bin").join(platform.binary_filename());

    println!("protoc {version} ({platform}) -> {}", spec.url);
    println!("member {}", spec.archive_member);
    println!("dest   {}", dest.display());
    Ok(())
}
