use crate::error::{Error, Result};
use fs_err as fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct InstallTarget {
    pub dir: PathBuf,
    pub filename: String,
}

impl InstallTarget {
    pub fn dest(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }
}

/// Copy `binary` into the target, finishing with an atomic rename so the
/// destination is never observable half-written.
pub fn install(binary: &Path, target: &InstallTarget) -> Result<PathBuf> {
    let dest = target.dest();
    let fail = |source: io::Error| Error::Install {
        dest: dest.clone(),
        source,
    };

    fs::create_dir_all(&target.dir).map_err(fail)?;

    // Stage in the destination directory so the rename cannot cross filesystems.
    let mut staged = NamedTempFile::new_in(&target.dir).map_err(fail)?;
    let mut src = fs::File::open(binary).map_err(fail)?;
    io::copy(&mut src, &mut staged).map_err(fail)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = staged.as_file().metadata().map_err(fail)?.permissions();
        perms.set_mode(0o755);
        staged.as_file().set_permissions(perms).map_err(fail)?;
    }
    // Non-POSIX targets skip the mode change; .exe is executable by extension.

    staged.persist(&dest).map_err(|e| fail(e.error))?;
    Ok(dest)
}
