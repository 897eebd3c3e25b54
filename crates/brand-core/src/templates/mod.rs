//! Source generation and rewriting for component files
//!
//! This module provides:
//! - The brand wrapper template written next to every base component
//! - The utils import rewrite applied to generated base components

pub mod imports;
pub mod wrapper;

pub use imports::rewrite_utils_import;
pub use wrapper::{capitalize, render_brand_component};
