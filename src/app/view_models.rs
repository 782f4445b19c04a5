use super::*;
use crate::view_models::ChoiceView;

impl<R> QuizEngine<R> {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            choices: self
                .choices()
                .iter()
                .enumerate()
                .map(|(index, c)| ChoiceView {
                    index,
                    name: c.name.clone(),
                    asset: c.asset().to_string(),
                })
                .collect(),
            target: self.target().name.clone(),
            correct: self.correct_count,
            wrong: self.wrong_count,
            rounds_played: self.rounds_played(),
            phase: self.phase,
            last_guessed: self.last_guess.as_ref().map(|g| g.country.name.clone()),
        }
    }

    /// Modal a mostrar, o `None` mientras se espera respuesta.
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            Phase::AwaitingGuess => None,
            Phase::ShowingRoundFeedback => {
                let guess = self.last_guess.as_ref()?;
                Some(Feedback::round(
                    guess.verdict,
                    &guess.country.name,
                    self.correct_count,
                    self.wrong_count,
                ))
            }
            Phase::ShowingSessionComplete => {
                Some(Feedback::game_over(self.correct_count, self.wrong_count))
            }
        }
    }
}
