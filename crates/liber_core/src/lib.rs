//! Liber core - domain-gated responder for library service-desk queries.
//!
//! Pipeline: relevance classification (router) -> optional external
//! generation -> deterministic answer synthesis (answers). The service desk
//! ties the stages together and is the only entry point callers need.

pub mod answers;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod identity;
pub mod prompts;
pub mod router;
pub mod service_desk;

pub use catalog::{BookRecord, Catalog, OPENING_HOURS};
pub use config::{Config, LlmConfig};
pub use generator::{GenerateError, OllamaGenerator, TextGenerator};
pub use identity::MemberContext;
pub use router::{classify, ScopeVerdict};
pub use service_desk::ServiceDesk;
