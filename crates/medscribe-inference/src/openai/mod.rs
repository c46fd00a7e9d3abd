//! OpenAI-compatible vision backend.
//!
//! Works with any endpoint that accepts image parts in chat completions,
//! including:
//!
//! - OpenRouter (default)
//! - OpenAI cloud API
//! - Ollama (in OpenAI compatibility mode)
//! - vLLM
//!
//! # Example
//!
//! ```rust,no_run
//! use medscribe_inference::openai::{OpenAIVisionBackend, VisionConfig};
//! use medscribe_inference::VisionBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = VisionConfig {
//!         api_key: Some("sk-or-...".to_string()),
//!         ..Default::default()
//!     };
//!     let backend = OpenAIVisionBackend::new(config).unwrap();
//!
//!     let png = std::fs::read("box.png").unwrap();
//!     let text = backend
//!         .describe_image(&png, "image/png", "What is in this picture?")
//!         .await
//!         .unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{OpenAIVisionBackend, VisionConfig};
pub use error::{to_medscribe_error, OpenAIErrorCode};
pub use types::*;
