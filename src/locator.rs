use crate::platform::PlatformKey;

pub const DOWNLOAD_BASE: &str =
    "https://github.com/protocolbuffers/protobuf/releases/download";

/// Concrete download artifact for one (version, platform) pair. Only built
/// here; the same inputs always produce the same spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSpec {
    pub url: String,
    /// Path of the binary inside the archive.
    pub archive_member: String,
}

pub fn locate(version: &str, platform: PlatformKey) -> DownloadSpec {
    locate_in(DOWNLOAD_BASE, version, platform)
}

pub fn locate_in(base: &str, version: &str, platform: PlatformKey) -> DownloadSpec {
    let suffix = platform.release_suffix();
    DownloadSpec {
        url: format!("{base}/v{version}/protoc-{version}-{suffix}.zip"),
        archive_member: format!("bin/{}", platform.binary_filename()),
    }
}
