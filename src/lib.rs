//! blockfall (workspace facade crate).
//!
//! Exposes `blockfall::{core, input, term, types}` while the implementation
//! lives in dedicated crates under `crates/`, plus the run configuration used
//! by the terminal binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::{parse_args, RunConfig};
