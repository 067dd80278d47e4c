pub mod analyzer;
pub mod classifier;
pub mod enhance;
pub mod fallback;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod recommender;
pub mod scorer;
