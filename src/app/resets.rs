use super::*;

impl<R: RandomSource> QuizEngine<R> {
    /// "Ok" en el modal de fin: marcadores a cero y partida nueva.
    pub fn reset_session(&mut self) {
        info!(
            "reinicio de partida (antes: {} aciertos, {} fallos)",
            self.correct_count, self.wrong_count
        );
        self.correct_count = 0;
        self.wrong_count = 0;
        self.last_guess = None;
        self.phase = Phase::AwaitingGuess;
        self.new_round();
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::abc_engine;
    use super::*;

    #[test]
    fn reset_zeroes_tallies_and_draws_new_answer() {
        let mut engine = abc_engine(vec![0, 2]);
        engine.submit_guess(1);
        engine.reset_session();

        assert_eq!(engine.correct_count(), 0);
        assert_eq!(engine.wrong_count(), 0);
        assert_eq!(engine.rounds_played(), 0);
        assert!(engine.last_guess().is_none());
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.answer_index(), 2);
    }

    #[test]
    fn acknowledge_on_session_complete_resets() {
        let mut engine = abc_engine(vec![1]);
        for _ in 0..ROUNDS_PER_SESSION {
            engine.submit_guess(1);
            engine.acknowledge();
        }
        // el tercer acknowledge cerró el modal de fin
        assert_eq!(engine.phase(), Phase::AwaitingGuess);
        assert_eq!(engine.rounds_played(), 0);
    }
}
