use super::*;

impl<R> QuizEngine<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn rounds_played(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    pub fn is_session_over(&self) -> bool {
        self.phase == Phase::ShowingSessionComplete
    }

    pub fn answer_index(&self) -> usize {
        self.answer_index
    }

    /// País que hay que encontrar en esta ronda
    pub fn target(&self) -> &Country {
        &self.pool[self.answer_index]
    }

    /// Las tres banderas visibles
    pub fn choices(&self) -> &[Country] {
        &self.pool[..CHOICES_PER_ROUND]
    }

    pub fn pool(&self) -> &[Country] {
        &self.pool
    }

    pub fn last_guess(&self) -> Option<&Guess> {
        self.last_guess.as_ref()
    }
}
