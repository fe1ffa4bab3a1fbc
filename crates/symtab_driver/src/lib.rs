//! symtab_driver: The collaborator that drives the symbol table core.
//!
//! Implements the line-oriented command protocol, composite type-descriptor
//! formatting, synthetic script generation, and the hash-strategy comparison
//! report. Everything here talks to the core through its four logical
//! operations and passes already-formatted strings; bucket internals are
//! never touched.

pub mod command;
pub mod error;
pub mod format;
pub mod generate;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use error::DriverError;
pub use format::format_type;
pub use generate::{generate_script, GenerateConfig};
pub use report::{run_comparison, write_json, write_report, StrategyReport};
pub use session::{run_script, SessionReport};
