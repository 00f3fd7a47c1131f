//! Events emitted by the Engine for attached front ends

use crate::view::PageView;

/// Broadcast after each message processing cycle
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// State changed; `view` is the fresh render at `revision`
    Rendered { revision: u64, view: Box<PageView> },

    /// The engine is shutting down
    Shutdown,
}
