use crate::error::{Error, Result};
use crate::retry::{self, RetryPolicy};
use reqwest::blocking::Client;

/// Placeholder version used before a release is tagged (e.g. CI builds).
pub const LATEST_SENTINEL: &str = "0.0";

pub const LATEST_RELEASE_URL: &str =
    "https://github.com/protocolbuffers/protobuf/releases/latest";

/// Declared tool version: either an exact pin or "resolve the newest release".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    Exact(String),
    Latest,
}

impl VersionSpec {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == LATEST_SENTINEL || raw.eq_ignore_ascii_case("latest") {
            VersionSpec::Latest
        } else {
            VersionSpec::Exact(raw.to_string())
        }
    }
}

/// Produce a concrete version. Exact pins never touch the network.
pub fn resolve(client: &Client, spec: &VersionSpec) -> Result<String> {
    resolve_from(client, LATEST_RELEASE_URL, spec)
}

pub fn resolve_from(client: &Client, latest_url: &str, spec: &VersionSpec) -> Result<String> {
    match spec {
        VersionSpec::Exact(version) => Ok(version.clone()),
        VersionSpec::Latest => fetch_latest(client, latest_url),
    }
}

// The latest-release endpoint redirects to .../releases/tag/v{version}; the
// version is the final path segment with its leading 'v' stripped.
fn fetch_latest(client: &Client, latest_url: &str) -> Result<String> {
    let fail = |reason: String| Error::LatestLookup {
        url: latest_url.to_string(),
        reason,
    };

    let resp = retry::with_backoff(&RetryPolicy::default(), retry::transient_http, || {
        client.get(latest_url).send()
    })
    .map_err(|e| fail(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(fail(format!("HTTP {}", resp.status())));
    }

    let tag = resp
        .url()
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or_default();
    let version = tag.trim_start_matches('v');
    if !is_version_token(version) {
        return Err(fail(format!(
            "final URL {} does not name a release tag",
            resp.url()
        )));
    }
    Ok(version.to_string())
}

// Upstream tags (3.21.4, 21.1, 21.0-rc1) are not semver, so validation stays
// at the token level: leading digit, at least one dot, no odd characters.
pub(crate) fn is_version_token(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
        && s.contains('.')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}
