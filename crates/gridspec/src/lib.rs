//! Gridspec - Compact row and column definitions for grid layouts
//!
//! A library for parsing strings like `"Auto,*(min=100),2*,200"` into a list
//! of sizing definitions, instead of spelling out every row and column of a
//! grid by hand.
//!
//! # Quick Start
//!
//! ```rust
//! use gridspec::{parse, SizeKind};
//!
//! let defs = parse("Auto,*,200");
//! assert_eq!(defs.len(), 3);
//! assert_eq!(defs[0].kind, SizeKind::Auto);
//! assert_eq!(defs[2].value, 200.0);
//! ```
//!
//! # Syntax
//!
//! - Comma separated entries: `Auto,*,200`
//! - Each entry is `*`, a weighted star `2*`, `Auto` (any case) or a size `200`
//! - Options in parentheses: `*(min=100,max=200)`, `Auto(SharedSizeGroup=abc)`
//!
//! Entries and options that cannot be understood are skipped. Use
//! [`parse_with_diagnostics`] to see what was skipped, or [`parse_strict`] to
//! reject such input.
//!
//! # Applying to a Grid
//!
//! ```rust
//! use gridspec::prelude::*;
//!
//! let mut grid = Grid::new();
//! assert!(grid.set_columns("Auto(max=500),*(min=300),100"));
//! assert_eq!(grid.columns().len(), 3);
//!
//! // Nothing valid in the spec: existing columns are kept
//! assert!(!grid.set_columns("oops"));
//! assert_eq!(grid.columns().len(), 3);
//! ```

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        apply_definitions, DefinitionParser, Diagnostic, Grid, GridAxis, GridHost, GridLength,
        GridSpecError, GridUnit, ParseReport, SizeKind, SizingDefinition, TrackDefinition,
    };
}

/// Parse a grid spec, skipping anything malformed
///
/// An empty result means there was nothing to apply, whether the input was
/// empty or every entry was invalid.
///
/// # Example
/// ```rust
/// use gridspec::{parse, SizingDefinition};
///
/// let defs = parse("foo,100,bar");
/// assert_eq!(defs, vec![SizingDefinition::pixel(100.0)]);
/// ```
pub fn parse(input: &str) -> Vec<SizingDefinition> {
    DefinitionParser::new().parse(input)
}

/// Parse a grid spec that may be absent
pub fn parse_optional(input: Option<&str>) -> Vec<SizingDefinition> {
    DefinitionParser::new().parse_optional(input)
}

/// Parse a grid spec and report everything that was skipped
///
/// # Example
/// ```rust
/// use gridspec::parse_with_diagnostics;
///
/// let report = parse_with_diagnostics("100(min=abc)");
/// assert_eq!(report.definitions.len(), 1);
/// assert_eq!(report.diagnostics.len(), 1);
/// ```
pub fn parse_with_diagnostics(input: &str) -> ParseReport {
    DefinitionParser::new().parse_with_diagnostics(input)
}

/// Parse a grid spec, failing if any entry or option had to be skipped
///
/// # Errors
///
/// Returns [`GridSpecError::Rejected`] carrying every diagnostic.
pub fn parse_strict(input: &str) -> Result<Vec<SizingDefinition>, GridSpecError> {
    DefinitionParser::new().parse_strict(input)
}

/// Normalize a grid spec: drop invalid parts and write the rest canonically
///
/// # Example
/// ```rust
/// use gridspec::format_spec;
///
/// assert_eq!(format_spec("auto, *,1*(MAX=20,foo=1)"), "Auto,*(max=20)");
/// ```
pub fn format_spec(input: &str) -> String {
    format_definitions(&parse(input))
}
