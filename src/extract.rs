use crate::error::{Error, Result};
use fs_err as fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// Binary unpacked from a release archive. The backing temporary directory
/// lives exactly as long as this handle.
#[derive(Debug)]
pub struct ExtractedBinary {
    _dir: TempDir,
    path: PathBuf,
}

impl ExtractedBinary {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Unpack `archive` into a scoped temporary directory and locate `member`.
pub fn extract_binary(archive: &Path, member: &str) -> Result<ExtractedBinary> {
    let fail = |reason: String| Error::Extraction {
        member: member.to_string(),
        reason,
    };

    let file = fs::File::open(archive).map_err(|e| fail(e.to_string()))?;
    let mut zip = ZipArchive::new(file).map_err(|e| fail(format!("unreadable zip archive: {e}")))?;
    let dir = TempDir::new().map_err(|e| fail(e.to_string()))?;
    zip.extract(dir.path())
        .map_err(|e| fail(format!("unpacking archive: {e}")))?;

    let path = dir.path().join(member);
    if !path.is_file() {
        return Err(fail("expected member not present in archive".to_string()));
    }
    Ok(ExtractedBinary { _dir: dir, path })
}
