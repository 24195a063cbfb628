use crate::error::Result;
use crate::install::InstallTarget;
use crate::platform::PlatformKey;
use crate::version::{self, VersionSpec};
use crate::{extract, fetch, install, locator};
use indicatif::ProgressBar;
use reqwest::blocking::Client;
use std::path::PathBuf;

/// Release endpoints, overridable so tests can point at a stub server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub download_base: String,
    pub latest_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            download_base: locator::DOWNLOAD_BASE.to_string(),
            latest_url: version::LATEST_RELEASE_URL.to_string(),
        }
    }
}

/// Immutable inputs for one install run. Platform and version spec are
/// decided up front and never re-derived mid-pipeline.
pub struct InstallContext {
    pub client: Client,
    pub spec: VersionSpec,
    pub platform: PlatformKey,
    pub dest_dir: PathBuf,
    pub endpoints: Endpoints,
}

impl InstallContext {
    pub fn new(client: Client, spec: VersionSpec, platform: PlatformKey, dest_dir: PathBuf) -> Self {
        Self {
            client,
            spec,
            platform,
            dest_dir,
            endpoints: Endpoints::default(),
        }
    }
}

#[derive(Debug)]
pub struct Installed {
    pub version: String,
    pub path: PathBuf,
}

/// Run resolve -> locate -> download -> extract -> install. Any stage failure
/// aborts the rest of the run; temporaries are released on every exit path.
pub fn run(ctx: &InstallContext, pb: Option<&ProgressBar>) -> Result<Installed> {
    let version = version::resolve_from(&ctx.client, &ctx.endpoints.latest_url, &ctx.spec)?;
    let spec = locator::locate_in(&ctx.endpoints.download_base, &version, ctx.platform);

    let archive = fetch::download(&ctx.client, &spec, &version, ctx.platform, pb)?;

    if let Some(p) = pb {
        p.set_message(format!("Extract {}", spec.archive_member));
    }
    let binary = extract::extract_binary(archive.path(), &spec.archive_member)?;

    let target = InstallTarget {
        dir: ctx.dest_dir.clone(),
        filename: ctx.platform.binary_filename().to_string(),
    };
    let path = install::install(binary.path(), &target)?;
    Ok(Installed { version, path })
}
