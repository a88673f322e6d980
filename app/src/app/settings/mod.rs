pub mod config;
pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod runtime_keybinds;

// Re-export commonly used types/functions for convenience
pub use config::{BookingSettings, Settings};
pub use config_dirs::{default_log_dir, default_settings_path, project_config_dir};
pub use read_settings::{load_settings, load_settings_from};
pub use runtime_keybinds::Keybinds;
