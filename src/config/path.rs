use crate::error::StoreError;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/dbsrc/config.yml";

/// Replace a leading `~` component with the current user's home directory.
/// Paths without the marker are returned as-is.
pub fn expand_home(path: &Path) -> Result<PathBuf, StoreError> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or(StoreError::PathResolution)?;
    Ok(join_home(&home, rest))
}

fn join_home(home: &Path, rest: &Path) -> PathBuf {
    if rest.as_os_str().is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}
