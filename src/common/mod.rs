//! Shared helpers used across the crate.

pub mod xml;

pub use xml::{escape_xml, unescape_xml};
