// src/view_models.rs

use crate::model::Status;
use crate::quiz::QuizState;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressInfo {
    pub question_number: usize, // 1-based para mostrar
    pub num_questions: usize,
    pub points: u32,
    pub max_possible_points: u32,
    pub answered: bool,
}

impl ProgressInfo {
    pub fn from_state(state: &QuizState) -> Self {
        Self {
            question_number: state.index + 1,
            num_questions: state.num_questions(),
            points: state.points,
            max_possible_points: state.max_possible_points(),
            answered: state.answer.is_some(),
        }
    }

    /// Fracción para la barra de progreso; cuenta la pregunta actual si ya está respondida.
    pub fn fraction(&self) -> f32 {
        if self.num_questions == 0 {
            return 0.0;
        }
        let done = self.question_number - 1 + usize::from(self.answered);
        done as f32 / self.num_questions as f32
    }

    pub fn question_label(&self) -> String {
        format!("Pregunta {} / {}", self.question_number, self.num_questions)
    }

    pub fn points_label(&self) -> String {
        format!("{} / {} puntos", self.points, self.max_possible_points)
    }
}

/// `mm:ss` para el contador.
pub fn timer_label(seconds_remaining: Option<u32>) -> String {
    let secs = seconds_remaining.unwrap_or(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Qué hace el botón principal del pie según estado y respuesta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextAction {
    Hidden,
    Next,
    Finish,
}

impl NextAction {
    pub fn for_state(state: &QuizState) -> Self {
        match state.status {
            Status::Active if state.answer.is_none() => NextAction::Hidden,
            Status::Active | Status::Verify => {
                if state.is_last_question() {
                    NextAction::Finish
                } else {
                    NextAction::Next
                }
            }
            _ => NextAction::Hidden,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NextAction::Hidden => "",
            NextAction::Next => "Siguiente ➡",
            NextAction::Finish => "Terminar 🏁",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinishInfo {
    pub points: u32,
    pub max_possible_points: u32,
    pub percentage: f32,
    pub highscore: u32,
}

impl FinishInfo {
    pub fn from_state(state: &QuizState) -> Self {
        Self {
            points: state.points,
            max_possible_points: state.max_possible_points(),
            percentage: state.percentage(),
            highscore: state.highscore,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self.percentage {
            p if p >= 100.0 => "🥇",
            p if p >= 80.0 => "🎉",
            p if p >= 50.0 => "🙃",
            p if p > 0.0 => "🤨",
            _ => "🤦",
        }
    }

    pub fn score_label(&self) -> String {
        format!(
            "{} Has conseguido {} de {} puntos ({}%)",
            self.emoji(),
            self.points,
            self.max_possible_points,
            self.percentage.ceil() as u32
        )
    }

    pub fn highscore_label(&self) -> String {
        format!("(Récord: {} puntos)", self.highscore)
    }
}
