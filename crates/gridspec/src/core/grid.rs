//! Applying parsed definitions to a grid
//!
//! A framework-neutral version of the glue a GUI toolkit needs: map each
//! [`SizingDefinition`] to a track definition and replace a grid's rows or
//! columns with them. An empty parse result never touches the grid.

use super::error::GridSpecError;
use super::parser::DefinitionParser;
use super::types::{SizeKind, SizingDefinition};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, span, Level};

/// Which track collection of a grid a specification targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    Rows,
    Columns,
}

impl FromStr for GridAxis {
    type Err = GridSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rows" | "row" => Ok(GridAxis::Rows),
            "columns" | "column" | "cols" => Ok(GridAxis::Columns),
            _ => Err(GridSpecError::unknown_axis(s)),
        }
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::Rows => write!(f, "rows"),
            GridAxis::Columns => write!(f, "columns"),
        }
    }
}

/// Unit of a [`GridLength`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridUnit {
    Auto,
    Pixel,
    Star,
}

/// Size of a single track as a layout engine sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLength {
    pub value: f64,
    pub unit: GridUnit,
}

impl GridLength {
    pub fn auto() -> Self {
        Self {
            value: 1.0,
            unit: GridUnit::Auto,
        }
    }

    pub fn pixel(size: f64) -> Self {
        Self {
            value: size,
            unit: GridUnit::Pixel,
        }
    }

    pub fn star(weight: f64) -> Self {
        Self {
            value: weight,
            unit: GridUnit::Star,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.unit == GridUnit::Auto
    }
}

/// A new track is a single star, the same as an unsized grid row
impl Default for GridLength {
    fn default() -> Self {
        Self::star(1.0)
    }
}

impl fmt::Display for GridLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            GridUnit::Auto => write!(f, "Auto"),
            GridUnit::Star if self.value == 1.0 => write!(f, "*"),
            GridUnit::Star => write!(f, "{}*", self.value),
            GridUnit::Pixel => write!(f, "{}px", self.value),
        }
    }
}

impl From<&SizingDefinition> for GridLength {
    fn from(definition: &SizingDefinition) -> Self {
        match definition.kind {
            SizeKind::Star => GridLength::star(definition.value),
            SizeKind::Auto => GridLength::auto(),
            SizeKind::Pixel => GridLength::pixel(definition.value),
        }
    }
}

/// A row or column definition owned by a grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackDefinition {
    pub size: GridLength,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub shared_size_group: Option<String>,
}

impl From<&SizingDefinition> for TrackDefinition {
    fn from(definition: &SizingDefinition) -> Self {
        Self {
            size: GridLength::from(definition),
            min: definition.min_value,
            max: definition.max_value,
            shared_size_group: definition
                .shared_size_group
                .clone()
                .filter(|group| !group.is_empty()),
        }
    }
}

/// Anything that owns row and column track collections
pub trait GridHost {
    /// Current tracks along an axis
    fn tracks(&self, axis: GridAxis) -> &[TrackDefinition];

    /// Replace every track along an axis
    fn replace_tracks(&mut self, axis: GridAxis, tracks: Vec<TrackDefinition>);
}

/// Parse `spec` and replace the host's tracks along `axis`.
///
/// Returns `true` if the tracks were replaced. An absent spec, or one that
/// yields no definitions, leaves the host untouched and returns `false`.
pub fn apply_definitions<H: GridHost + ?Sized>(
    host: &mut H,
    axis: GridAxis,
    spec: Option<&str>,
) -> bool {
    let apply_span = span!(Level::DEBUG, "apply_definitions", axis = %axis);
    let _enter = apply_span.enter();

    let definitions = DefinitionParser::new().parse_optional(spec);
    if definitions.is_empty() {
        debug!("No definitions, keeping existing tracks");
        return false;
    }

    let tracks: Vec<TrackDefinition> = definitions.iter().map(TrackDefinition::from).collect();
    debug!(track_count = tracks.len(), "Replacing tracks");
    host.replace_tracks(axis, tracks);
    true
}

/// In-memory grid with `rows` and `columns` spec properties
///
/// Setting a property to a new string applies it; setting the same string
/// again does nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<TrackDefinition>,
    columns: Vec<TrackDefinition>,
    rows_spec: Option<String>,
    columns_spec: Option<String>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from row and column specs
    pub fn with_specs(rows: &str, columns: &str) -> Self {
        let mut grid = Self::new();
        grid.set_rows(rows);
        grid.set_columns(columns);
        grid
    }

    pub fn rows(&self) -> &[TrackDefinition] {
        &self.rows
    }

    pub fn columns(&self) -> &[TrackDefinition] {
        &self.columns
    }

    /// Last string assigned to the rows property
    pub fn rows_spec(&self) -> Option<&str> {
        self.rows_spec.as_deref()
    }

    /// Last string assigned to the columns property
    pub fn columns_spec(&self) -> Option<&str> {
        self.columns_spec.as_deref()
    }

    /// Assign the rows property. Returns `true` if the rows were replaced.
    pub fn set_rows(&mut self, spec: impl Into<String>) -> bool {
        self.set_spec(GridAxis::Rows, spec.into())
    }

    /// Assign the columns property. Returns `true` if the columns were replaced.
    pub fn set_columns(&mut self, spec: impl Into<String>) -> bool {
        self.set_spec(GridAxis::Columns, spec.into())
    }

    fn set_spec(&mut self, axis: GridAxis, spec: String) -> bool {
        let current = match axis {
            GridAxis::Rows => &self.rows_spec,
            GridAxis::Columns => &self.columns_spec,
        };
        if current.as_deref() == Some(spec.as_str()) {
            return false;
        }

        let applied = apply_definitions(self, axis, Some(spec.as_str()));
        match axis {
            GridAxis::Rows => self.rows_spec = Some(spec),
            GridAxis::Columns => self.columns_spec = Some(spec),
        }
        applied
    }
}

impl GridHost for Grid {
    fn tracks(&self, axis: GridAxis) -> &[TrackDefinition] {
        match axis {
            GridAxis::Rows => &self.rows,
            GridAxis::Columns => &self.columns,
        }
    }

    fn replace_tracks(&mut self, axis: GridAxis, tracks: Vec<TrackDefinition>) {
        match axis {
            GridAxis::Rows => self.rows = tracks,
            GridAxis::Columns => self.columns = tracks,
        }
    }
}
