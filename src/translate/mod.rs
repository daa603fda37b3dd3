pub mod handler;
pub mod interface;
pub mod prompt;

pub use handler::TranslationHandler;
pub use interface::{TargetLanguage, TranslateRequest, TranslateResponse};
