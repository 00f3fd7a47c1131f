//! Page configuration loaded from `config.toml`
//!
//! Supports:
//! - an explicit path passed on the command line
//! - `<config dir>/about-pages/config.toml` as the default location

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_config};
pub use types::*;
