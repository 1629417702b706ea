use crate::error::{LendscoreError, Result};
use crate::types::config::CliConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "lendscore.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/lendscore/config.toml";

/// Load output preferences: `lendscore.toml` in the working directory layered
/// over the per-user config. Returns `None` when neither file exists.
pub fn load_config() -> Result<Option<CliConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(Path::new("."), global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CliConfig>> {
    let global = read_if_exists(global_path)?;
    let local = read_if_exists(Some(&cwd.join(DEFAULT_CONFIG_FILE)))?;

    match (global, local) {
        (None, None) => Ok(None),
        (global, local) => {
            debug!("loaded output preferences");
            Ok(Some(CliConfig::overlay(
                global.unwrap_or_default(),
                local.unwrap_or_default(),
            )))
        }
    }
}

fn read_if_exists(path: Option<&Path>) -> Result<Option<CliConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| LendscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}
