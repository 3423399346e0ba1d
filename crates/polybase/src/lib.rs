//! # polybase
//!
//! A working set of single-variable integer polynomials.
//!
//! Polynomials are entered as text, kept in an ordered collection and
//! addressed by position. Sums, products and derivatives of stored
//! polynomials come back as new values the caller may store in turn.
//!
//! ## Quick Start
//!
//! ```rust
//! use polybase::prelude::*;
//!
//! let mut base = Collection::new();
//! base.parse_and_push("x - 1").unwrap();
//! base.parse_and_push("x + 2").unwrap();
//!
//! let product = base.multiply(0, 1).unwrap();
//! assert_eq!(product.export(), "x^2 + x - 2");
//! assert_eq!(product.integer_roots(), vec![-2, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod store;

#[cfg(test)]
mod proptests;

pub use polybase_poly as poly;

pub use collection::{Collection, CollectionError};
pub use store::{LineError, LoadReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::collection::{Collection, CollectionError};
    pub use crate::store::LoadReport;
    pub use polybase_poly::{parse, AlgebraError, ParseError, ParseErrorKind, Polynomial, Term};
}
