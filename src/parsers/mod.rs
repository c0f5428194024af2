//! Parsing functionality for JS/TS sources
//!
//! Import statements are recognised lexically; no syntax tree is built.

pub mod imports;

pub use imports::{extract_imports, ImportKind, ImportStatement};
