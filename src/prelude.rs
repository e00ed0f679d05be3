//! A set of exports which can be helpful to use.
//!
//! Note that the `RillError` re-export is equivalent to [`rill::Error`],
//! although re-exported as a separate name to remove likely ambiguity with
//! other crates' error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use rill::prelude::*;
//! ```
//!
//! [`rill::Error`]: crate::Error

pub use crate::error::Error as RillError;
pub use crate::model::prelude::*;
