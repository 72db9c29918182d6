//! Command implementations.

pub mod compare;
pub mod extract;
pub mod score;

use bidsheet::{AnthropicExtractor, ExtractorConfig, ItemExtractor, MockExtractor, OpenAiExtractor};

use crate::cli::ProviderChoice;

/// Build the selected extraction provider.
pub fn build_extractor(
    provider: ProviderChoice,
    model: Option<String>,
) -> Result<Box<dyn ItemExtractor>, Box<dyn std::error::Error>> {
    let extractor: Box<dyn ItemExtractor> = match provider {
        ProviderChoice::Openai => {
            let key = std::env::var("OPENAI_API_KEY")
                .map_err(|_| "OPENAI_API_KEY environment variable not set")?;
            match model {
                Some(model) => Box::new(OpenAiExtractor::with_model(key, model)?),
                None => Box::new(OpenAiExtractor::new(key)?),
            }
        }
        ProviderChoice::Anthropic => {
            let key = std::env::var("ANTHROPIC_API_KEY")
                .map_err(|_| "ANTHROPIC_API_KEY environment variable not set")?;
            match model {
                Some(model) => {
                    let config = ExtractorConfig {
                        model,
                        ..ExtractorConfig::default()
                    };
                    Box::new(AnthropicExtractor::with_config(key, config)?)
                }
                None => Box::new(AnthropicExtractor::new(key)?),
            }
        }
        ProviderChoice::Mock => Box::new(MockExtractor::new()),
    };
    Ok(extractor)
}
