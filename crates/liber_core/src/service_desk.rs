//! Service desk - sequences the response pipeline.
//!
//! classify -> refuse, or one external generation attempt -> deterministic
//! composer. `respond` always returns a string; generator trouble is
//! recovered here and never reaches the caller.

use crate::answers;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::generator::{OllamaGenerator, TextGenerator};
use crate::identity::MemberContext;
use crate::prompts;
use crate::router;
use tracing::{info, warn};

pub struct ServiceDesk {
    catalog: Catalog,
    generator: Option<Box<dyn TextGenerator>>,
}

impl ServiceDesk {
    /// Desk with no external generator: deterministic answers only.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            generator: None,
        }
    }

    /// Desk with an injected generator.
    pub fn with_generator(catalog: Catalog, generator: Box<dyn TextGenerator>) -> Self {
        Self {
            catalog,
            generator: Some(generator),
        }
    }

    /// Wire the desk from configuration. The generator is attached only
    /// when enabled; a bad endpoint config degrades to the deterministic
    /// desk rather than failing construction.
    pub fn from_config(config: &Config) -> Self {
        let catalog = Catalog::builtin();

        if !config.llm.enabled {
            return Self::new(catalog);
        }

        match OllamaGenerator::new(&config.llm) {
            Ok(generator) => Self::with_generator(catalog, Box::new(generator)),
            Err(e) => {
                warn!("LLM configured but unusable, running deterministic: {}", e);
                Self::new(catalog)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Answer one query. Total: never panics, never returns an error.
    pub async fn respond(&self, query: &str, member: &MemberContext) -> String {
        let verdict = router::classify(query, &self.catalog);

        if !verdict.in_scope {
            info!("rejected query: {}", verdict.reason);
            return format!(
                "I can only help with library-related queries.\n\
                 Reason: {}\n\n\
                 Please ask about books, membership, hours, or borrowing policies.",
                verdict.reason
            );
        }

        // One attempt, no retries. Any failure falls through to the composer.
        if let Some(generator) = &self.generator {
            let prompt = prompts::desk_prompt(query, member, &self.catalog);
            match generator.generate(&prompt).await {
                Ok(text) => return text,
                Err(e) => {
                    warn!("generator failed, falling back to composer: {}", e);
                }
            }
        }

        answers::compose_answer(query, member, &self.catalog)
    }
}
