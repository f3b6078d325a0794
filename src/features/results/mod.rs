pub mod dto;
pub mod generator;

pub use dto::{CongressFile, PresidentFile, SummaryFile};
pub use generator::{JsonGenerator, ResultsSource};
