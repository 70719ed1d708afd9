pub mod vocabulary;

pub use vocabulary::LabelVocabulary;
