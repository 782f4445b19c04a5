use crate::data::read_catalog_embedded;
use crate::model::{
    CHOICES_PER_ROUND, Catalog, Country, Guess, GuessOutcome, Phase, ROUNDS_PER_SESSION, Verdict,
};
use crate::random::{RandomSource, RngSource};
use log::{debug, info, warn};
use rand::rngs::SmallRng;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{Feedback, GameSnapshot};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("índice de bandera {index} fuera de rango (solo hay {choices})")]
    OutOfRange { index: usize, choices: usize },
    #[error("no se acepta una respuesta en el estado {0:?}")]
    NotAwaitingGuess(Phase),
}

/// Motor de la partida: dueño de todo el estado, nunca dibuja nada.
#[derive(Debug)]
pub struct QuizEngine<R = RngSource<SmallRng>> {
    pool: Vec<Country>,
    answer_index: usize,
    correct_count: u32,
    wrong_count: u32,
    last_guess: Option<Guess>,
    phase: Phase,
    source: R,
}

impl QuizEngine {
    /// Catálogo embebido y azar del sistema.
    pub fn new() -> Self {
        Self::with_source(read_catalog_embedded(), RngSource::from_entropy())
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> QuizEngine<R> {
    pub fn with_source(catalog: Catalog, source: R) -> Self {
        let mut engine = Self {
            pool: catalog.into_countries(),
            answer_index: 0,
            correct_count: 0,
            wrong_count: 0,
            last_guess: None,
            phase: Phase::AwaitingGuess,
            source,
        };
        engine.new_round();
        engine
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::random::FixedSource;

    pub fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Catálogo mínimo [A, B, C] con la respuesta del guion.
    pub fn abc_engine(answers: Vec<usize>) -> QuizEngine<FixedSource> {
        init_logs();
        let catalog = Catalog::from_names(["A", "B", "C"]).unwrap();
        QuizEngine::with_source(catalog, FixedSource::new(answers))
    }

    /// Primer índice que no es la respuesta de la ronda actual.
    pub fn wrong_index<R: RandomSource>(engine: &QuizEngine<R>) -> usize {
        (engine.answer_index() + 1) % CHOICES_PER_ROUND
    }
}
