pub mod classifier;
pub mod config;
pub mod error;
pub mod field;
pub mod filter;

pub use classifier::{classify_tokens, ClassificationResult, Classifier};
pub use config::{Config, Identity, UiConfig};
pub use error::TallyError;
pub use field::Field;
pub use filter::{filter_response, PartialResult};
