//! RevelaCode Scripture — verse resolution and whole-text lookup.
//!
//! Verses are resolved from the local store first. Verses configured with
//! a remote source are fetched through a [`VerseSource`] and the fetched
//! text is written back so later lookups stay local.

pub mod extract;
pub mod resolver;
pub mod source;
pub mod texts;

pub use resolver::VerseResolver;
pub use source::{HttpVerseSource, VerseSource};
pub use texts::TextLibrary;
