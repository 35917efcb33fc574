//! Answer generation: prompt assembly and the Gemini client

mod gemini;
mod prompt;

pub use gemini::GeminiClient;
pub use prompt::PromptBuilder;
