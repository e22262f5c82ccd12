//! # cart-parser: Cart File Orchestrator
//!
//! Reads a cart file, validates it against the cart schema, and either fails
//! with every validation error or returns the parsed items and their total.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Data Flow                            │
//! │                                                                         │
//! │  Host application (CLI, service, test)                                 │
//! │       │  parse(path)                                                    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  cart-parser (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  TextSource   │    │  CartParser   │    │ ParserConfig │  │   │
//! │  │   │  (source.rs)  │───►│  (parser.rs)  │◄───│ (config.rs)  │  │   │
//! │  │   │  FsSource     │    │  fail-fast    │    │ TOML + env   │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                    cart-core (schema, rules, validator, row, total)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`parser`] - The orchestrator
//! - [`source`] - Read-file collaborator
//! - [`config`] - Config loading (file, env, defaults)
//! - [`error`] - Orchestrator error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cart_parser::{CartParser, ParserConfig, ParserError};
//!
//! let parser = CartParser::from_config(ParserConfig::load_or_default(None));
//!
//! match parser.parse("samples/cart.csv") {
//!     Ok(cart) => println!("total = {:.2}", cart.total()),
//!     Err(ParserError::ValidationFailed { errors }) => {
//!         for e in errors {
//!             eprintln!("{} row {} col {}: {}", e.kind, e.row, e.column_index(), e.message);
//!         }
//!     }
//!     Err(other) => eprintln!("{}", other),
//! }
//! ```
//!
//! Logging goes through `tracing`; install a subscriber in the host to see it.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod parser;
pub mod source;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{IdStrategy, ParserConfig};
pub use error::{ParserError, ParserResult};
pub use parser::CartParser;
pub use source::{FsSource, StaticSource, TextSource};

pub use cart_core::{CartItem, CartResult, ErrorKind, Schema, ValidationError};
