//! about-pages Library
//!
//! Internal browser pages (preferences and certificate error) driven by
//! state pushes from the browser process. The binary runs them headless,
//! speaking NDJSON on stdin/stdout.

pub mod headless;

// Re-export main entry points
pub use headless::runner::{run_headless, HeadlessOptions};
