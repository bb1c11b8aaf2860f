// Resume analysis: prompt building, the completion call, and normalization of
// whatever JSON the model sends back. All LLM calls go through llm_client.

pub mod analyzer;
pub mod duration;
pub mod experience;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
