//! SQL templatization core for SQF.
//!
//! Architecture role:
//! - data model for extraction outputs (values, table refs, op kinds)
//! - the emitter: explicit-dispatch AST traversal producing templates
//! - pooled per-statement visitor state
//! - the driver tying parse, emission, and multi-statement glue together
//!
//! Key modules:
//! - [`model`]
//! - [`emitter`]
//! - [`state`]
//! - [`pool`]
//! - [`driver`]

pub mod driver;
pub mod emitter;
pub mod model;
pub mod pool;
pub mod state;

pub use driver::{joined_template, StatementTemplate, Templatizer};
pub use model::{OpKind, TableRef, Value};
pub use pool::StatePool;
pub use state::TemplateState;
