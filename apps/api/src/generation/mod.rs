// Idea-driven generation: prompt templates, the gateway service, and its HTTP handlers.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
