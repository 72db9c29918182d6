//! Item extraction boundary.
//!
//! Turning document text into structured line items is delegated to an
//! external text-understanding service. This module owns that boundary:
//! the [`ItemExtractor`] trait, the tolerant wire shape ([`RawItem`])
//! that service output is coerced into, and the HTTP-backed providers.
//!
//! The service may fail, return malformed output, or hallucinate; the
//! rest of the crate only ever sees the contract enforced here. A
//! response that is not a JSON array of objects rejects the whole
//! document; an individual record without a usable description is
//! dropped. Numeric fields coerce leniently (numeric-looking strings
//! become numbers, anything else becomes absent) and never error.
//!
//! # Supported Providers
//!
//! - **OpenAI-compatible** - any chat-completions endpoint, including
//!   Groq (set `OPENAI_BASE_URL`)
//! - **Anthropic** - Claude models via API (requires `ANTHROPIC_API_KEY`)
//! - **Mock** - deterministic line-format extractor for tests and dry
//!   runs, no network

mod anthropic;
mod mock;
mod openai;
mod prompts;
mod provider;

pub use anthropic::AnthropicExtractor;
pub use mock::MockExtractor;
pub use openai::OpenAiExtractor;
pub use provider::{ExtractorConfig, ItemExtractor, RawItem, parse_items_response};
