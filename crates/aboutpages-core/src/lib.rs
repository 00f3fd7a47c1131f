//! # aboutpages-core - Core Domain Types
//!
//! Foundation crate for the about pages. Provides the closed enumerations and
//! state slices shared with the browser process, the push/command wire types,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Settings (`settings`)
//! - [`SettingKey`] - The closed preference-key namespace, with documented defaults
//! - [`SettingValue`] - Boolean, integer, float or string value
//! - [`SettingsSnapshot`] - Full key → value snapshot
//!
//! ### Enumerations (`types`)
//! - [`PreferenceTab`] - Preferences page sections
//! - [`PermissionName`] - Site permissions with allow/deny decisions
//! - [`ResourceName`] - Globally toggled resources
//! - [`AdControl`], [`CookieControl`] - Shields select modes
//!
//! ### State slices
//! - [`SiteSettings`], [`SiteSettingEntry`] - Per-host decisions
//! - [`BraveryDefaults`] - Shields feature defaults
//! - [`LedgerEntry`] - Payments ledger rows
//!
//! ### Wire types
//! - [`RawPushEvent`], [`PushEvent`] - Inbound slice replacements
//! - [`UpstreamCommand`] - Outbound fire-and-forget commands
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use aboutpages_core::prelude::*;
//! ```

pub mod bravery;
pub mod commands;
pub mod error;
pub mod events;
pub mod ledger;
pub mod logging;
pub mod prelude;
pub mod settings;
pub mod site_settings;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use bravery::BraveryDefaults;
pub use commands::{FrameProps, UpstreamCommand};
pub use error::{Error, Result, ResultExt};
pub use events::{PushEvent, RawPushEvent};
pub use ledger::{LedgerEntry, LedgerSynopsis};
pub use settings::{SettingKey, SettingValue, SettingsSnapshot};
pub use site_settings::{SiteSettingEntry, SiteSettings};
pub use types::{AdControl, CookieControl, PermissionName, PreferenceTab, ResourceName};
