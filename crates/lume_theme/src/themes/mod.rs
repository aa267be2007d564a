//! Built-in themes

pub mod lume;

pub use lume::build_sheet;
