pub mod generate;
pub mod scaffold;

pub use generate::GenerateCommand;
pub use scaffold::ScaffoldCommand;

use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute
pub(crate) fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Working directory option, defaulting to the process's current directory
pub(crate) fn working_dir(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}
