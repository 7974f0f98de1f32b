pub mod client;
pub mod error;
pub(crate) mod types;

pub use client::{Gemini, ImageParams, InlineImage};
pub use error::AiError;
