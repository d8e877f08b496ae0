//! Definition parser for grid sizing specifications
//!
//! Turns `"Auto,*(min=100),2*,200(SharedSizeGroup=a)"` into an ordered list of
//! [`SizingDefinition`]s. Parsing is permissive: entries and options that
//! cannot be understood are skipped, never reported as errors. The skipped
//! parts are available as [`Diagnostic`]s for callers that want them.

use super::error::{Diagnostic, GridSpecError};
use super::syntax::{parse_number, split_entries, split_options};
use super::types::SizingDefinition;
use tracing::{debug, span, trace, Level};

/// Result of a parse that also records what was skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub definitions: Vec<SizingDefinition>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    /// Returns true if nothing in the input was skipped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Convert into the strict result: definitions only if nothing was skipped
    pub fn into_result(self) -> Result<Vec<SizingDefinition>, GridSpecError> {
        if self.diagnostics.is_empty() {
            Ok(self.definitions)
        } else {
            Err(GridSpecError::rejected(self.diagnostics))
        }
    }
}

/// Why a size expression did not produce a definition
enum SizeRejection {
    Negative,
    Unrecognized,
}

/// Stateless parser for the grid sizing mini-language
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionParser;

impl DefinitionParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a specification, dropping anything malformed.
    ///
    /// An empty result means "no definitions": the caller should leave any
    /// existing layout alone.
    pub fn parse(&self, input: &str) -> Vec<SizingDefinition> {
        self.parse_with_diagnostics(input).definitions
    }

    /// Parse a specification that may be absent
    pub fn parse_optional(&self, input: Option<&str>) -> Vec<SizingDefinition> {
        input.map(|s| self.parse(s)).unwrap_or_default()
    }

    /// Parse a specification, rejecting it if anything had to be skipped
    pub fn parse_strict(&self, input: &str) -> Result<Vec<SizingDefinition>, GridSpecError> {
        self.parse_with_diagnostics(input).into_result()
    }

    /// Parse a specification and record every skipped entry and option
    pub fn parse_with_diagnostics(&self, input: &str) -> ParseReport {
        let parse_span = span!(Level::DEBUG, "parse_grid_spec", input_len = input.len());
        let _enter = parse_span.enter();

        let mut report = ParseReport::default();
        if input.is_empty() {
            trace!("Empty grid spec");
            return report;
        }

        for (index, entry) in split_entries(input).into_iter().enumerate() {
            trace!(index, entry, "Parsing entry");
            if let Some(definition) = self.parse_entry(index, entry, &mut report.diagnostics) {
                report.definitions.push(definition);
            }
        }

        debug!(
            definition_count = report.definitions.len(),
            skipped = report.diagnostics.len(),
            "Grid spec parsing completed"
        );
        report
    }

    fn parse_entry(
        &self,
        index: usize,
        entry: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<SizingDefinition> {
        if entry.is_empty() {
            debug!(index, "Skipping empty entry");
            diagnostics.push(Diagnostic::EmptyEntry { index });
            return None;
        }

        let parts = split_options(entry);

        let mut definition = match classify_size(parts.size) {
            Ok(definition) => definition,
            Err(rejection) => {
                debug!(index, entry, "Skipping entry with invalid size");
                let text = parts.size.to_string();
                diagnostics.push(if parts.options.is_none() && entry.contains(['(', ')']) {
                    Diagnostic::UnmatchedParenthesis { index, text }
                } else {
                    match rejection {
                        SizeRejection::Negative => Diagnostic::NegativeSize { index, text },
                        SizeRejection::Unrecognized => Diagnostic::UnrecognizedSize { index, text },
                    }
                });
                return None;
            }
        };

        if let Some(options) = parts.options {
            apply_options(index, options, &mut definition, diagnostics);
        }

        if !parts.trailing.is_empty() {
            diagnostics.push(Diagnostic::TrailingText {
                index,
                text: parts.trailing.to_string(),
            });
        }

        Some(definition)
    }
}

/// Classify a size expression, in priority order: `*`, `N*`, `auto`, `N`.
fn classify_size(text: &str) -> Result<SizingDefinition, SizeRejection> {
    if text == "*" {
        return Ok(SizingDefinition::star(1.0));
    }

    if let Some(weight) = text.strip_suffix('*').and_then(parse_number) {
        return if weight < 0.0 {
            Err(SizeRejection::Negative)
        } else {
            Ok(SizingDefinition::star(weight))
        };
    }

    if text.eq_ignore_ascii_case("auto") {
        return Ok(SizingDefinition::auto());
    }

    match parse_number(text) {
        Some(size) if size < 0.0 => Err(SizeRejection::Negative),
        Some(size) => Ok(SizingDefinition::pixel(size)),
        None => Err(SizeRejection::Unrecognized),
    }
}

/// Apply `key=value` options to a definition. Later keys overwrite earlier ones.
fn apply_options(
    index: usize,
    options: &str,
    definition: &mut SizingDefinition,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for option in options.split(',') {
        if option.is_empty() {
            continue;
        }

        let mut pair = option.split('=');
        let (Some(key), Some(value), None) = (pair.next(), pair.next(), pair.next()) else {
            debug!(index, option, "Skipping malformed option");
            diagnostics.push(Diagnostic::MalformedOption {
                index,
                option: option.to_string(),
            });
            continue;
        };

        let accepted = if key.eq_ignore_ascii_case("min") {
            parse_number(value).map(|min| definition.min_value = Some(min))
        } else if key.eq_ignore_ascii_case("max") {
            parse_number(value).map(|max| definition.max_value = Some(max))
        } else if key.eq_ignore_ascii_case("SharedSizeGroup") {
            (!value.is_empty()).then(|| definition.shared_size_group = Some(value.to_string()))
        } else {
            debug!(index, key, "Skipping unknown option");
            diagnostics.push(Diagnostic::UnknownOption {
                index,
                key: key.to_string(),
            });
            continue;
        };

        if accepted.is_none() {
            debug!(index, key, value, "Skipping option with invalid value");
            diagnostics.push(Diagnostic::InvalidOptionValue {
                index,
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
}
