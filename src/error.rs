use crate::platform::PlatformKey;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of the install pipeline. Every stage fails fast and
/// carries enough context (version, platform, URL, path) to diagnose without
/// re-running.
#[derive(Debug, Error)]
pub enum Error {
    /// Version metadata unreadable or the `version` key missing.
    #[error("failed to read tool version from {}: {reason}", path.display())]
    VersionParse { path: PathBuf, reason: String },

    /// Host OS / word-size combination outside the closed mapping.
    #[error("no protoc build available for host `{os}` ({bits}-bit)")]
    PlatformDetection { os: String, bits: u32 },

    /// Latest-release redirect lookup failed or returned an unparseable tag.
    #[error("latest release lookup via {url} failed: {reason}")]
    LatestLookup { url: String, reason: String },

    /// HTTP failure fetching the release archive.
    #[error("downloading protoc {version} for {platform} from {url} failed: {reason}")]
    Download {
        url: String,
        version: String,
        platform: PlatformKey,
        reason: String,
    },

    /// Archive unreadable or the expected binary member missing.
    #[error("extracting `{member}` from the release archive failed: {reason}")]
    Extraction { member: String, reason: String },

    /// Destination directory creation, copy, permissions, or rename failed.
    #[error("installing protoc to {}: {source}", dest.display())]
    Install {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Platform key with no distributable compatibility tag.
    #[error("no distributable tag for platform `{0}`")]
    UnmappedPlatform(PlatformKey),
}
