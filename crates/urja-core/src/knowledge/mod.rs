//! Static knowledge document: FAQ context plus curated energy tips.
//!
//! Read once at process start and never mutated afterwards. A missing or
//! corrupt document is recovered locally with a built-in default; no caller
//! ever sees a load error.

mod store;

pub use store::{KnowledgeBase, DEFAULT_FAQS_CONTEXT};
