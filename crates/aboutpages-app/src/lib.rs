//! aboutpages-app - Page state and orchestration for the about pages
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! preferences and certificate-error pages: the state model, the update
//! handlers, the outbound command channel, the Engine that ties them
//! together, configuration loading, and the view builders that turn state
//! into a declarative page description.

pub mod bootstrap;
pub mod cert_error;
pub mod channel;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod hints;
pub mod ledger;
pub mod message;
pub mod navigation;
pub mod permissions;
pub mod process;
pub mod settings_model;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use bootstrap::{Bootstrap, CertErrorInfo};
pub use channel::CommandSender;
pub use config::PageConfig;
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use message::Message;
pub use settings_model::InputEvent;
pub use state::{AppState, Page, StartupOptions};
pub use view::PageView;
