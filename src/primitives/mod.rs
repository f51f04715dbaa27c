//! Character-level building blocks: classification and buffer walkers.

pub mod chars;
pub mod walk;
