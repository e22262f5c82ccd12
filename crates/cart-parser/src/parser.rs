//! # Cart Parser
//!
//! Sequences the pure pieces of cart-core into one fail-fast call.
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      CartParser::parse(path)                            │
//! │                                                                         │
//! │  TextSource::size_hint ──► size > max_bytes ──► InputTooLarge          │
//! │       │                    (checked before anything is read)           │
//! │       ▼                                                                 │
//! │  TextSource::read_text ──► Err ──► ParserError::Io                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  size > max_bytes? ──────► ParserError::InputTooLarge                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Validator::validate ────► non-empty ──► ParserError::ValidationFailed │
//! │       │                                   (no rows parsed)             │
//! │       ▼                                                                 │
//! │  parse_line for every data row (header skipped)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartResult::from_items ──► calc_total ──► { items, total }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A parser holds no per-call state; `parse` may be called any number of
//! times, including from several threads.

use std::path::Path;

use tracing::{debug, info, warn};

use cart_core::aggregate::calc_total;
use cart_core::row::parse_line;
use cart_core::text::split_lines;
use cart_core::{CartItem, CartResult, IdGenerator, Schema, ValidationError, Validator};

use crate::config::ParserConfig;
use crate::error::{ParserError, ParserResult};
use crate::source::{FsSource, TextSource};

/// Validates and parses cart files.
pub struct CartParser {
    schema: Schema,
    source: Box<dyn TextSource>,
    ids: Box<dyn IdGenerator>,
    config: ParserConfig,
}

impl CartParser {
    /// Creates a parser with the cart schema, filesystem reads, and defaults.
    pub fn new() -> Self {
        Self::from_config(ParserConfig::default())
    }

    /// Creates a parser from a loaded config.
    pub fn from_config(config: ParserConfig) -> Self {
        CartParser {
            schema: Schema::cart(),
            source: Box::new(FsSource),
            ids: config.id_generator(),
            config,
        }
    }

    /// Replaces the schema used for validation.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Replaces the read collaborator.
    pub fn with_source(mut self, source: impl TextSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Replaces the id collaborator.
    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// The schema used for validation.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The config this parser was built from.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns every validation error in `text`. Never fails.
    pub fn validate(&self, text: &str) -> Vec<ValidationError> {
        Validator::new(&self.schema).validate(text)
    }

    /// Parses one validated data line, assigning it a fresh id.
    pub fn parse_line(&self, line: &str) -> ParserResult<CartItem> {
        Ok(parse_line(line, &*self.ids)?)
    }

    /// Sums item subtotals.
    pub fn calc_total(&self, items: &[CartItem]) -> f64 {
        calc_total(items)
    }

    /// Reads, validates and parses the cart at `path`.
    ///
    /// ## Example
    /// ```rust,no_run
    /// use cart_parser::CartParser;
    ///
    /// let result = CartParser::new().parse("samples/cart.csv")?;
    /// println!("{}", result.to_json_pretty().unwrap());
    /// # Ok::<(), cart_parser::ParserError>(())
    /// ```
    pub fn parse(&self, path: impl AsRef<Path>) -> ParserResult<CartResult> {
        let path = path.as_ref();

        let io_error = |source: std::io::Error| ParserError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Sources that know their size are rejected before the text is read.
        if let Some(size) = self.source.size_hint(path).map_err(io_error)? {
            self.check_size(path, usize::try_from(size).unwrap_or(usize::MAX))?;
        }

        let text = self.source.read_text(path).map_err(io_error)?;
        info!(path = %path.display(), bytes = text.len(), "Parsing cart");
        self.check_size(path, text.len())?;

        self.parse_str(&text)
    }

    fn check_size(&self, path: &Path, size: usize) -> ParserResult<()> {
        match self.config.max_input_bytes() {
            Some(max) if size > max => Err(ParserError::InputTooLarge {
                path: path.to_path_buf(),
                size,
                max,
            }),
            _ => Ok(()),
        }
    }

    /// Validates and parses text already in memory.
    pub fn parse_str(&self, text: &str) -> ParserResult<CartResult> {
        let errors = self.validate(text);
        if !errors.is_empty() {
            if self.config.logging.log_validation_errors {
                for err in &errors {
                    warn!(
                        kind = %err.kind,
                        row = err.row,
                        column = err.column_index(),
                        "{}",
                        err.message
                    );
                }
            }
            return Err(ParserError::ValidationFailed { errors });
        }

        let items = split_lines(text)
            .skip(1)
            .map(|line| {
                debug!(line, "Parsing row");
                self.parse_line(line)
            })
            .collect::<ParserResult<Vec<_>>>()?;

        let result = CartResult::from_items(items);
        info!(items = result.items().len(), total = result.total(), "Cart parsed");

        Ok(result)
    }
}

impl Default for CartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartParser")
            .field("schema", &self.schema)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
