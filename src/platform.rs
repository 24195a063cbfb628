use crate::error::{Error, Result};
use std::fmt;

/// Canonical identifier for an (OS, word size) combination with an official
/// protoc build. Closed set; anything else is an error, never a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PlatformKey {
    #[value(name = "win32")]
    Win32,
    #[value(name = "win64")]
    Win64,
    #[value(name = "linux-x86_32")]
    LinuxX86_32,
    #[value(name = "linux-x86_64")]
    LinuxX86_64,
    #[value(name = "osx-x86_64")]
    OsxX86_64,
    #[value(name = "osx-universal")]
    OsxUniversal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSize {
    Bits32,
    Bits64,
}

impl WordSize {
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            WordSize::Bits64
        } else {
            WordSize::Bits32
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            WordSize::Bits32 => 32,
            WordSize::Bits64 => 64,
        }
    }
}

/// Map a host OS name and word size onto a download platform.
pub fn resolve(os: &str, word_size: WordSize) -> Result<PlatformKey> {
    use PlatformKey::*;
    match (os, word_size) {
        ("windows", WordSize::Bits64) => Ok(Win64),
        ("windows", WordSize::Bits32) => Ok(Win32),
        ("linux", WordSize::Bits64) => Ok(LinuxX86_64),
        ("linux", WordSize::Bits32) => Ok(LinuxX86_32),
        ("macos" | "darwin", WordSize::Bits64) => Ok(OsxX86_64),
        ("macos" | "darwin", WordSize::Bits32) => Ok(OsxUniversal),
        (other, ws) => Err(Error::PlatformDetection {
            os: other.to_string(),
            bits: ws.bits(),
        }),
    }
}

/// Resolve the running host. Called once per invocation; the result is
/// carried through the pipeline, never re-derived.
pub fn detect() -> Result<PlatformKey> {
    resolve(std::env::consts::OS, WordSize::host())
}

impl PlatformKey {
    /// Asset-name segment, e.g. `protoc-3.21.4-{suffix}.zip`.
    pub fn release_suffix(self) -> &'static str {
        use PlatformKey::*;
        match self {
            Win32 => "win32",
            Win64 => "win64",
            LinuxX86_32 => "linux-x86_32",
            LinuxX86_64 => "linux-x86_64",
            OsxX86_64 => "osx-x86_64",
            // Upstream names the universal macOS asset differently from its key.
            OsxUniversal => "osx-universal_binary",
        }
    }

    pub fn is_windows(self) -> bool {
        matches!(self, PlatformKey::Win32 | PlatformKey::Win64)
    }

    /// Installed executable name; only Windows carries an extension.
    pub fn binary_filename(self) -> &'static str {
        if self.is_windows() {
            "protoc.exe"
        } else {
            "protoc"
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlatformKey::*;
        let name = match self {
            Win32 => "win32",
            Win64 => "win64",
            LinuxX86_32 => "linux-x86_32",
            LinuxX86_64 => "linux-x86_64",
            OsxX86_64 => "osx-x86_64",
            OsxUniversal => "osx-universal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_hosts_resolve() {
        let table = [
            ("windows", WordSize::Bits64, PlatformKey::Win64),
            ("windows", WordSize::Bits32, PlatformKey::Win32),
            ("linux", WordSize::Bits64, PlatformKey::LinuxX86_64),
            ("linux", WordSize::Bits32, PlatformKey::LinuxX86_32),
            ("macos", WordSize::Bits64, PlatformKey::OsxX86_64),
            ("darwin", WordSize::Bits64, PlatformKey::OsxX86_64),
            ("macos", WordSize::Bits32, PlatformKey::OsxUniversal),
            ("darwin", WordSize::Bits32, PlatformKey::OsxUniversal),
        ];
        for (os, word_size, expected) in table {
            assert_eq!(resolve(os, word_size).unwrap(), expected, "{os} {word_size:?}");
        }
    }

    #[test]
    fn unknown_host_is_an_error() {
        let err = resolve("freebsd", WordSize::Bits64).unwrap_err();
        match err {
            Error::PlatformDetection { os, bits } => {
                assert_eq!(os, "freebsd");
                assert_eq!(bits, 64);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn host_platform_is_supported() {
        detect().unwrap();
    }

    #[test]
    fn only_windows_keys_carry_exe_suffix() {
        assert_eq!(PlatformKey::Win64.binary_filename(), "protoc.exe");
        assert_eq!(PlatformKey::Win32.binary_filename(), "protoc.exe");
        assert_eq!(PlatformKey::LinuxX86_64.binary_filename(), "protoc");
        assert_eq!(PlatformKey::OsxUniversal.binary_filename(), "protoc");
    }

    #[test]
    fn universal_macos_asset_uses_upstream_naming() {
        assert_eq!(
            PlatformKey::OsxUniversal.release_suffix(),
            "osx-universal_binary"
        );
        assert_eq!(PlatformKey::OsxUniversal.to_string(), "osx-universal");
    }
}
