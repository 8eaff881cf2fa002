//! tl-core: shared foundation for the transformer loss analyzer.
//!
//! Contains:
//! - units (uom SI types + nameplate constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{TlError, TlResult};
pub use numeric::*;
pub use units::*;
