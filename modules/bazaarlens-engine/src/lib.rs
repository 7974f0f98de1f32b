pub mod generator;
pub mod prompts;
pub mod session;

pub use generator::{AnalysisGenerator, GeminiGenerator, ANALYSIS_FALLBACK};
pub use session::{run_generation, Session};
