// Portfolio pipeline: normalize AI-structured resume data into a canonical
// context, then render it against a named template.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod handlers;
pub mod normalize;
pub mod render;
