//! Emitters for the three tag families.
//!
//! Each emitter appends to a shared buffer and never fails: missing values
//! only drop the affected tags (or the whole block, where a block needs a
//! complete set of fields). Values are written into attributes verbatim.

pub mod general;
pub mod opengraph;
pub mod twitter;
