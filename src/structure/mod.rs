//! Boundary discovery: enclosing brackets, expressions, and words.
//!
//! Everything here is a read-only search over a [`crate::model::document::Document`].
//! "Not found" is a normal `None` result, never an error; callers branch on
//! it explicitly.

pub mod brackets;
pub mod expressions;
pub mod words;
