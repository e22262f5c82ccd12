//! # cart-core: Pure Validation & Parsing for Cart Files
//!
//! This crate turns comma-separated cart text into a list of validation
//! errors or a parsed [`CartResult`]. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            cart-parser (Orchestrator, file I/O, config)         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw text                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌───────────┐  ┌─────────────┐   │   │
//! │  │   │  schema  │─►│  rules   │─►│ validator │  │ row         │   │   │
//! │  │   │ Column   │  │ CellRule │  │ Validator │  │ parse_line  │   │   │
//! │  │   └──────────┘  └──────────┘  └───────────┘  └──────┬──────┘   │   │
//! │  │                                                     ▼          │   │
//! │  │                                              ┌─────────────┐   │   │
//! │  │                                              │ aggregate   │   │   │
//! │  │                                              │ calc_total  │   │   │
//! │  │                                              └─────────────┘   │   │
//! │  │   NO I/O • NO LOGGING SUBSCRIBERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Column definitions and the cart schema
//! - [`rules`] - Cell rules and header/row/cell checks
//! - [`validator`] - Whole-input validation
//! - [`row`] - One data line → [`CartItem`]
//! - [`aggregate`] - Total calculation
//! - [`ids`] - Id generators for parsed items
//! - [`types`] - Output records
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Schema, Validator};
//!
//! let schema = Schema::cart();
//! let text = "Product name,Price,Quantity\nMollis consequat,9.00,2\n";
//!
//! assert!(Validator::new(&schema).validate(text).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod ids;
pub mod row;
pub mod rules;
pub mod schema;
pub mod text;
pub mod types;
pub mod validator;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, SchemaError};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use rules::CellRule;
pub use schema::{Column, ColumnType, Schema};
pub use types::*;
pub use validator::Validator;
