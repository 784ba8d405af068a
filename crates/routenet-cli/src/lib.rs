//! Route network CLI library.
//!
//! This crate holds the output views and renderers used by the `routenet`
//! binary so they can be unit tested without spawning the process.

pub mod output;
