//! # medscribe-inference
//!
//! Multimodal inference for medscribe.
//!
//! This crate provides:
//! - The [`VisionBackend`] trait
//! - An OpenAI-compatible implementation targeting OpenRouter by default
//! - The fixed medicine-description prompt
//! - [`MedicineDescriber`], which turns an upload into model text

pub mod describer;
pub mod openai;
pub mod prompts;
pub mod vision;

pub use describer::MedicineDescriber;
pub use openai::{OpenAIVisionBackend, VisionConfig};
pub use prompts::MEDICINE_DESCRIPTION_PROMPT;
pub use vision::VisionBackend;
