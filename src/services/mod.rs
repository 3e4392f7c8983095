//! Service layer module root.
//! Sequences file input, certificate parsing and output rendering.

pub mod extractor;

pub use extractor::IdentityExtractor;
