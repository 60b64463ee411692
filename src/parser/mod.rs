//! Parser module - classification of PlantUML state-diagram lines and name tokens

pub mod line;
pub mod token;

// Re-export key types
pub use line::{Line, classify};
pub use token::{INITIAL_TOKEN, NameToken};
