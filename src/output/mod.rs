//! Tree formatting and display
//!
//! - `style` - Connector and indent glyph sets
//! - `config` - Output configuration types
//! - `streaming` - Streaming formatter for console output
//! - `tree` - Buffered formatter for complete `TreeNode` structures

mod config;
mod streaming;
mod style;
mod tree;

// Re-export public types
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use style::TreeStyle;
pub use tree::TreeFormatter;
