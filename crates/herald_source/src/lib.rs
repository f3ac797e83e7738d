//! Source locations attached to diagnostic events.
//!
//! A [`SourceLocation`] names a file and, optionally, a line within it. Several
//! locations can describe one event, e.g. an error traced through a chain of
//! included files.

#![warn(missing_docs)]

pub mod location;

pub use location::SourceLocation;
