//! Core type definitions for grid sizing
//!
//! This module contains the result entity produced by the definition parser:
//! the size kind of a row/column and the optional bounds attached to it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a row or column claims its space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKind {
    /// Proportional share of the remaining space: `*` or `2*`
    Star,
    /// Sized to its content: `Auto`
    Auto,
    /// Fixed size in layout units: `200`
    Pixel,
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeKind::Star => write!(f, "star"),
            SizeKind::Auto => write!(f, "auto"),
            SizeKind::Pixel => write!(f, "pixel"),
        }
    }
}

/// One parsed entry of a grid sizing specification
///
/// `value` is the star weight for [`SizeKind::Star`] and the absolute size
/// for [`SizeKind::Pixel`]. Auto entries carry a unit value that layout
/// hosts ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingDefinition {
    pub kind: SizeKind,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_size_group: Option<String>,
}

impl SizingDefinition {
    fn new(kind: SizeKind, value: f64) -> Self {
        Self {
            kind,
            value,
            min_value: None,
            max_value: None,
            shared_size_group: None,
        }
    }

    /// Proportional entry with the given weight
    pub fn star(weight: f64) -> Self {
        Self::new(SizeKind::Star, weight)
    }

    /// Content-sized entry
    pub fn auto() -> Self {
        Self::new(SizeKind::Auto, 1.0)
    }

    /// Fixed-size entry
    pub fn pixel(size: f64) -> Self {
        Self::new(SizeKind::Pixel, size)
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn with_shared_size_group(mut self, group: impl Into<String>) -> Self {
        self.shared_size_group = Some(group.into());
        self
    }

    pub fn is_star(&self) -> bool {
        self.kind == SizeKind::Star
    }

    pub fn is_auto(&self) -> bool {
        self.kind == SizeKind::Auto
    }

    pub fn is_pixel(&self) -> bool {
        self.kind == SizeKind::Pixel
    }

    /// Returns true if any of min, max or shared size group is set
    pub fn has_options(&self) -> bool {
        self.min_value.is_some() || self.max_value.is_some() || self.shared_size_group.is_some()
    }
}

/// Writes the canonical mini-language form, e.g. `2*(min=100,SharedSizeGroup=a)`
impl fmt::Display for SizingDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SizeKind::Star if self.value == 1.0 => write!(f, "*")?,
            SizeKind::Star => write!(f, "{}*", self.value)?,
            SizeKind::Auto => write!(f, "Auto")?,
            SizeKind::Pixel => write!(f, "{}", self.value)?,
        }

        if !self.has_options() {
            return Ok(());
        }

        let mut options = Vec::with_capacity(3);
        if let Some(min) = self.min_value {
            options.push(format!("min={}", min));
        }
        if let Some(max) = self.max_value {
            options.push(format!("max={}", max));
        }
        if let Some(group) = &self.shared_size_group {
            options.push(format!("SharedSizeGroup={}", group));
        }
        write!(f, "({})", options.join(","))
    }
}
