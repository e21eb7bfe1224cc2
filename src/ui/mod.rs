//! Terminal output: design tokens, capability detection, NDJSON events

pub mod context;
pub mod json;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use theme::Icon;
