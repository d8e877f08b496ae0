//! Core grid spec processing
//!
//! The data model, the permissive definition parser and the pieces built on
//! top of it: diagnostics, text output and applying results to a grid.

mod error;
mod grid;
pub mod logging;
mod parser;
mod syntax;
mod text;
mod types;

pub use error::*;
pub use grid::*;
pub use logging::*;
pub use parser::*;
pub use syntax::*;
pub use text::*;
pub use types::*;
