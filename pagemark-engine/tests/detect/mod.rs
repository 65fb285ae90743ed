//! Classifier tests
//!
//! The judgement calls: what counts as Markdown in disguise and what is
//! left alone.

mod shape;
mod signals;
