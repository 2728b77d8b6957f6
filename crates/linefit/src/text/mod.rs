//! Line packing algorithms
//!
//! The splitter breaks single words, the packer fills lines greedily, the
//! markup reader turns styled labels into tokens, and the wrapper ties them
//! together for whole labels.

pub mod markup;
pub mod packer;
pub mod splitter;
pub mod wrapper;

pub use markup::*;
pub use packer::*;
pub use splitter::*;
pub use wrapper::*;
