//! maskedit - fixed-template input masks for single-line text fields
//!
//! The [`mask`] module holds the engine; [`config`], [`cli`] and [`script`]
//! support the `maskedit` replay binary.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod mask;
pub mod script;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use mask::{MaskController, MaskError, MaskedField, Template};
