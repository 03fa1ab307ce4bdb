pub mod client;
pub mod dictionary;
pub mod loader;
pub mod markup;
pub mod parser;
pub mod processor;
pub mod render;
pub mod ruby;

pub use client::IchiMoeClient;
pub use dictionary::FuriganaIndex;
pub use loader::FuriganaLoader;
pub use parser::parse;
pub use processor::{AnalyzedSentence, JapaneseProcessor};
pub use render::render;
pub use ruby::{Annotations, Piece, annotate, annotate_analysis};
