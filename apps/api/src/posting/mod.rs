// Job posting flow: form model, prompt construction, and the two-screen
// state machine handlers. All LLM calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompt_builder;
pub mod prompts;
