use directories_next::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "cineSeat", "cineSeat")
}

/// Platform config directory, e.g. `~/.config/cineSeat` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Default location of the settings file.
pub fn default_settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("config.toml"))
}

/// Directory the log file is written to when `--log-dir` is not given.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.data_local_dir().join("logs"))
}
