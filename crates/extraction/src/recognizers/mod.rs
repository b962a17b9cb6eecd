//! Model backends for the recognizers and the QA model

mod http;
mod noop;

pub use http::HttpModelClient;
pub use noop::{NoopQuestionAnswerer, NoopRecognizer};

use std::sync::Arc;

use movie_ner_config::{ModelConfig, ModelProvider};
use movie_ner_core::{DomainTagger, GeneralRecognizer, QuestionAnswerer, Result};

/// Model handles shared by every extraction call
#[derive(Clone)]
pub struct Models {
    pub general: Arc<dyn GeneralRecognizer>,
    pub domain: Arc<dyn DomainTagger>,
    pub qa: Arc<dyn QuestionAnswerer>,
}

impl Models {
    /// No-op models: only the lexicon matchers contribute
    pub fn disabled() -> Self {
        Self {
            general: Arc::new(NoopRecognizer),
            domain: Arc::new(NoopRecognizer),
            qa: Arc::new(NoopQuestionAnswerer),
        }
    }
}

impl std::fmt::Debug for Models {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Models")
            .field("general", &self.general.name())
            .field("domain", &self.domain.name())
            .field("qa", &self.qa.name())
            .finish()
    }
}

/// Create model backends based on config
pub fn create_models(config: &ModelConfig) -> Result<Models> {
    match config.provider {
        ModelProvider::Http => {
            let client = Arc::new(HttpModelClient::new(config)?);
            tracing::info!(endpoint = client.endpoint(), "Using model sidecar");
            Ok(Models {
                general: client.clone(),
                domain: client.clone(),
                qa: client,
            })
        }
        ModelProvider::Disabled => {
            tracing::warn!("Models disabled, extraction uses lexicons only");
            Ok(Models::disabled())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_models() {
        let config = ModelConfig {
            provider: ModelProvider::Disabled,
            ..Default::default()
        };
        let models = create_models(&config).unwrap();

        assert_eq!(models.general.name(), "noop");
        assert!(models.general.recognize("Tom Hanks").unwrap().is_empty());
        assert!(models.qa.answer("Is he an actor?", "").unwrap().is_none());

        let tags = models.domain.tag("Jaws  1975").unwrap();
        assert_eq!(tags.len(), 2);
        assert!(tags.iter().all(|t| t.label.is_outside()));
    }

    #[test]
    fn test_http_models() {
        let models = create_models(&ModelConfig::default()).unwrap();
        assert_eq!(models.qa.name(), "http");
    }
}
