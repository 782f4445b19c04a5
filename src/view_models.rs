// src/view_models.rs

use crate::model::{Phase, Verdict};
use serde::Serialize;

/// Copia de solo lectura de lo que pinta la capa de presentación.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub choices: Vec<ChoiceView>,
    pub target: String,
    pub correct: u32,
    pub wrong: u32,
    pub rounds_played: u32,
    pub phase: Phase,
    pub last_guessed: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ChoiceView {
    pub index: usize,
    pub name: String,
    pub asset: String,
}

/// Texto del modal que corresponde al estado actual.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub title: String,
    pub message: String,
    pub button: String,
}

impl GameSnapshot {
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.correct)
    }

    pub fn prompt_label(&self) -> &'static str {
        "Tap the flag of: "
    }
}

impl Feedback {
    pub fn round(verdict: Verdict, guessed: &str, correct: u32, wrong: u32) -> Self {
        let title = match verdict {
            Verdict::Correct => "Correct!",
            Verdict::Wrong => "Wrong!",
        };
        Self {
            title: title.into(),
            message: format!(
                "That was {guessed}!\n\nNumber Correct: {correct}\nNumber Wrong: {wrong}"
            ),
            button: "Continue".into(),
        }
    }

    pub fn game_over(correct: u32, wrong: u32) -> Self {
        Self {
            title: "Game Over!".into(),
            message: format!(
                "Your final score is\n{correct} Correct\n{wrong} Wrong\n\nWant to play again?"
            ),
            button: "Ok".into(),
        }
    }
}
