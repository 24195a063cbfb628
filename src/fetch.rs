use crate::error::{Error, Result};
use crate::locator::DownloadSpec;
use crate::platform::PlatformKey;
use crate::retry::{self, RetryPolicy};
use indicatif::ProgressBar;
use reqwest::blocking::Client;
use std::time::Duration;
use tempfile::NamedTempFile;

pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!("protoc-fetch/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(120))
        .build()
}

/// Download the release archive into a scoped temporary file. The file is
/// removed on drop, so no exit path leaks it.
pub fn download(
    client: &Client,
    spec: &DownloadSpec,
    version: &str,
    platform: PlatformKey,
    pb: Option<&ProgressBar>,
) -> Result<NamedTempFile> {
    let fail = |reason: String| Error::Download {
        url: spec.url.clone(),
        version: version.to_string(),
        platform,
        reason,
    };

    if let Some(p) = pb {
        p.set_message(format!("GET {}", spec.url));
    }
    let mut resp = retry::with_backoff(&RetryPolicy::default(), retry::transient_http, || {
        client.get(&spec.url).send()
    })
    .map_err(|e| fail(e.to_string()))?;
    // A bad status (404 for an unreleased version/platform) is terminal.
    if !resp.status().is_success() {
        return Err(fail(format!("HTTP {}", resp.status())));
    }

    let mut archive = NamedTempFile::new().map_err(|e| fail(format!("creating temp file: {e}")))?;
    resp.copy_to(&mut archive)
        .map_err(|e| fail(format!("reading body: {e}")))?;
    Ok(archive)
}
