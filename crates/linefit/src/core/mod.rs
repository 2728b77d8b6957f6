//! Core building blocks for text layout
//!
//! Token types, segmentation, fit predicates and configuration shared by the
//! packing algorithms in [`crate::text`].

mod config;
mod error;
mod fit;
pub mod logging;
mod segment;
mod types;

pub use config::*;
pub use error::*;
pub use fit::*;
pub use logging::*;
pub use segment::*;
pub use types::*;
