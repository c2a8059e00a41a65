//! # Linemean
//!
//! Computes the average line length of a block of text.
//!
//! ## Usage
//!
//! ```
//! assert_eq!(linemean::average_line_length("ab\ncde"), 2.5);
//! ```
//!
//! ## Modules
//!
//! - `average` - Line splitting and the average computation
//! - `config` - Environment-driven runtime configuration
//! - `error` - Error type for configuration and rendering
//! - `lyrics` - The built-in block of text the binary reports on
//! - `report` - Text and JSON rendering of line statistics
pub mod average;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod report;

pub use average::{average_line_length, lines, LineStats};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
