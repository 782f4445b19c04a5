use super::*;

impl<R: RandomSource> QuizEngine<R> {
    /// Baraja el pool y sortea cuál de las tres primeras banderas es la buena.
    /// No toca marcadores ni estado.
    pub fn new_round(&mut self) {
        self.source.shuffle(&mut self.pool);
        self.answer_index = self.source.random_index(CHOICES_PER_ROUND);
        debug!(
            "nueva ronda: {:?}, objetivo {}",
            self.choices().iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            self.pool[self.answer_index]
        );
    }

    /// Botón del modal abierto, sea cual sea.
    pub fn acknowledge(&mut self) {
        match self.phase {
            Phase::ShowingRoundFeedback => self.acknowledge_round_feedback(),
            Phase::ShowingSessionComplete => self.reset_session(),
            Phase::AwaitingGuess => warn!("acknowledge sin modal abierto, se ignora"),
        }
    }

    /// "Continue": prepara la siguiente ronda.
    pub fn acknowledge_round_feedback(&mut self) {
        // Con la partida cerrada solo cabe reiniciar
        if self.phase == Phase::ShowingSessionComplete {
            warn!("acknowledge_round_feedback con la partida terminada, se reinicia");
            self.reset_session();
            return;
        }
        self.phase = Phase::AwaitingGuess;
        self.new_round();
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{abc_engine, init_logs};
    use super::*;
    use crate::random::FixedSource;

    fn sorted_names(pool: &[Country]) -> Vec<String> {
        let mut names: Vec<_> = pool.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn new_round_preserves_catalog_membership() {
        init_logs();
        let catalog = crate::data::read_catalog_embedded();
        let expected = sorted_names(catalog.countries());
        let mut engine = QuizEngine::with_source(catalog, RngSource::seeded(3));

        for _ in 0..50 {
            engine.new_round();
            assert_eq!(engine.pool().len(), 10);
            assert_eq!(sorted_names(engine.pool()), expected);
            assert!(engine.answer_index() < CHOICES_PER_ROUND);
        }
    }

    #[test]
    fn new_round_draws_from_the_source() {
        let mut engine = abc_engine(vec![2, 0]);
        assert_eq!(engine.answer_index(), 2);
        engine.new_round();
        assert_eq!(engine.answer_index(), 0);
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
    }

    #[test]
    fn acknowledge_after_round_feedback_starts_next_round() {
        let mut engine = abc_engine(vec![0, 1]);
        engine.submit_guess(0);
        engine.acknowledge();

        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.answer_index(), 1);
        assert_eq!(engine.correct_count(), 1);
    }

    #[test]
    fn acknowledge_without_modal_is_noop() {
        let mut engine = abc_engine(vec![1, 2]);
        engine.acknowledge();
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.answer_index(), 1);
    }

    #[test]
    fn acknowledge_round_feedback_on_finished_session_resets() {
        init_logs();
        let catalog = Catalog::from_names(["A", "B", "C"]).unwrap();
        let mut engine = QuizEngine::with_source(catalog, FixedSource::always(0));
        for _ in 0..ROUNDS_PER_SESSION {
            engine.submit_guess(0);
            if !engine.is_session_over() {
                engine.acknowledge_round_feedback();
            }
        }
        assert_eq!(engine.phase(), Phase::ShowingSessionComplete);

        engine.acknowledge_round_feedback();
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.rounds_played(), 0);
    }
}
