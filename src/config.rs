use crate::error::{Error, Result};
use crate::version::VersionSpec;
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "protoc.toml";

/// Package manifest. The pipeline consumes a single key, `version`; other
/// package metadata in the file is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct Manifest {
    pub version: String,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let fail = |reason: String| Error::VersionParse {
            path: path.to_path_buf(),
            reason,
        };
        let data = fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        let manifest: Manifest = toml::from_str(&data).map_err(|e| fail(e.to_string()))?;
        if manifest.version.trim().is_empty() {
            return Err(fail("`version` is empty".to_string()));
        }
        Ok(manifest)
    }

    pub fn version_spec(&self) -> VersionSpec {
        VersionSpec::parse(&self.version)
    }
}

/// Default output directory for a command: `dir` beside the manifest.
pub fn manifest_sibling(manifest_path: &str, dir: &str) -> PathBuf {
    Path::new(manifest_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_version_pin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("protoc.toml");
        fs::write(&path, "version = \"3.21.4\"\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.version, "3.21.4");
        assert_eq!(
            manifest.version_spec(),
            VersionSpec::Exact("3.21.4".to_string())
        );
    }

    #[test]
    fn sentinel_version_resolves_later() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("protoc.toml");
        fs::write(&path, "version = \"0.0\"\n").unwrap();

        assert_eq!(Manifest::load(&path).unwrap().version_spec(), VersionSpec::Latest);
    }

    #[test]
    fn extra_manifest_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("protoc.toml");
        fs::write(&path, "name = \"my-package\"\nversion = \"21.1\"\n").unwrap();

        assert_eq!(Manifest::load(&path).unwrap().version, "21.1");
    }

    #[test]
    fn missing_or_malformed_manifest_is_a_version_parse_error() {
        let dir = tempfile::tempdir().unwrap();

        let missing = Manifest::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(missing, Error::VersionParse { .. }));

        let path = dir.path().join("protoc.toml");
        fs::write(&path, "name = \"my-package\"\n").unwrap();
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::VersionParse { .. }
        ));

        fs::write(&path, "version = \"\"\n").unwrap();
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            Error::VersionParse { .. }
        ));
    }

    #[test]
    fn sibling_paths_stay_beside_the_manifest() {
        assert_eq!(
            manifest_sibling("pkg/protoc.toml", "bin"),
            PathBuf::from("pkg/bin")
        );
        assert_eq!(manifest_sibling("protoc.toml", "bin"), PathBuf::from("./bin"));
    }
}
