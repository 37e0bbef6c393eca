use crate::api::StockApi;
use crate::config::StockConfig;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the config directory.
pub const HOME_ENV: &str = "STOCKPAD_HOME";
/// Overrides the data file (below `--file`, above the config file).
pub const FILE_ENV: &str = "STOCKPAD_FILE";

pub struct StockContext {
    pub api: StockApi<FileStore>,
    pub config: StockConfig,
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

pub fn config_dir(cwd: &Path) -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "stockpad", "stockpad")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(".stockpad"))
}

/// Picks the data file: explicit flag, then environment, then config.
/// Relative paths are taken relative to `cwd`.
pub fn resolve_data_file(
    cwd: &Path,
    cli_file: Option<&Path>,
    env_file: Option<&Path>,
    config: &StockConfig,
) -> PathBuf {
    let chosen = cli_file
        .or(env_file)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.data_file));

    if chosen.is_absolute() {
        chosen
    } else {
        cwd.join(chosen)
    }
}

pub fn initialize(cwd: &Path, cli_file: Option<&Path>) -> StockContext {
    let config_dir = config_dir(cwd);
    let config = StockConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        StockConfig::default()
    });

    let env_file = std::env::var_os(FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let data_file = resolve_data_file(cwd, cli_file, env_file.as_deref(), &config);
    tracing::debug!(
        data_file = %data_file.display(),
        config_dir = %config_dir.display(),
        "initialized"
    );

    let api = StockApi::open(FileStore::new(&data_file));

    StockContext {
        api,
        config,
        config_dir,
        data_file,
    }
}
