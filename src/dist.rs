use crate::error::{Error, Result};
use crate::platform::PlatformKey;

/// Wheel-style compatibility tags for distributables that bundle a protoc
/// build. Consumed by packaging tooling, not by the install flow.
const TAGS: &[(PlatformKey, &str)] = &[
    (PlatformKey::OsxUniversal, "macosx_10_11_universal2"),
    (PlatformKey::OsxX86_64, "macosx_10_11_x86_64"),
    (PlatformKey::Win64, "win_amd64"),
    (PlatformKey::Win32, "win32"),
    (PlatformKey::LinuxX86_64, "linux_x86_64"),
    (PlatformKey::LinuxX86_32, "linux_i686"),
];

pub fn compatibility_tag(platform: PlatformKey) -> Result<&'static str> {
    TAGS.iter()
        .find(|(key, _)| *key == platform)
        .map(|(_, tag)| *tag)
        .ok_or(Error::UnmappedPlatform(platform))
}
