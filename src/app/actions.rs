use super::*;

impl<R: RandomSource> QuizEngine<R> {
    /// El jugador toca la bandera `index`. Incumplir el contrato (índice fuera
    /// de rango o un modal todavía abierto) es un bug del llamador y aborta.
    pub fn submit_guess(&mut self, index: usize) -> GuessOutcome {
        self.try_submit_guess(index)
            .unwrap_or_else(|err| panic!("submit_guess: {err}"))
    }

    pub fn try_submit_guess(&mut self, index: usize) -> Result<GuessOutcome, GuessError> {
        if index >= CHOICES_PER_ROUND {
            return Err(GuessError::OutOfRange {
                index,
                choices: CHOICES_PER_ROUND,
            });
        }
        if self.phase != Phase::AwaitingGuess {
            return Err(GuessError::NotAwaitingGuess(self.phase));
        }

        let verdict = if index == self.answer_index {
            self.correct_count += 1;
            Verdict::Correct
        } else {
            self.wrong_count += 1;
            Verdict::Wrong
        };

        let guessed = self.pool[index].clone();
        debug!(
            "respuesta {index} ({guessed}) -> {verdict:?}, objetivo {}",
            self.pool[self.answer_index]
        );
        self.last_guess = Some(Guess {
            index,
            country: guessed.clone(),
            verdict,
        });

        // Fin de partida tiene prioridad sobre el aviso de ronda
        if self.rounds_played() >= ROUNDS_PER_SESSION {
            self.phase = Phase::ShowingSessionComplete;
            info!(
                "partida terminada: {} aciertos, {} fallos",
                self.correct_count, self.wrong_count
            );
            Ok(GuessOutcome::SessionComplete {
                verdict,
                correct: self.correct_count,
                wrong: self.wrong_count,
            })
        } else {
            self.phase = Phase::ShowingRoundFeedback;
            Ok(GuessOutcome::RoundFeedback {
                verdict,
                guessed,
                correct: self.correct_count,
                wrong: self.wrong_count,
            })
        }
    }
}
