//! Font discovery and glyph rasterization.
//!
//! The registry is filled once (directory scan or explicit registration) and
//! then only read, so any number of generation calls can share it.

mod registry;
mod typeface;

pub use registry::FontRegistry;
pub use typeface::{FontSource, Typeface};

#[cfg(test)]
pub(crate) mod testing;
