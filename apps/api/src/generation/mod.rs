// Prompt generation for the three categories: character (static lists),
// technical and design (generative-text backed).
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod character;
pub mod design;
pub mod handlers;
pub mod input;
pub mod json_extract;
pub mod prompts;
pub mod technical;
