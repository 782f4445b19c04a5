pub mod app;
pub mod data;
pub mod model;
pub mod random;
pub mod view_models;

pub use app::{GuessError, QuizEngine};
