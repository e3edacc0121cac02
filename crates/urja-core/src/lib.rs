//! urja-core: assistant core library (shared types, knowledge base, fixed
//! reference tables, keyword router, inference capability traits).
//!
//! The gateway and the model adapters both depend on this crate so every
//! component sees one consistent public API.

mod inference;
mod knowledge;
mod quiz;
mod router;
mod schemes;
mod shared;

// Shared
pub use shared::{CoreConfig, RequestContext};

// Knowledge document (loaded once at startup)
pub use knowledge::{KnowledgeBase, DEFAULT_FAQS_CONTEXT};

// Fixed reference tables
pub use quiz::{QuizBank, QuizQuestion};
pub use schemes::{SchemeTable, SCHEME_FALLBACK};

// Inference capability seams
pub use inference::{Answerer, GenerateOptions, Generator, QaAnswer};

// Router
pub use router::{ChatReply, ChatRouter, Intent, TIP_PROMPT};
