use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Filtro de dificultad activo. `All` deja pasar todas las preguntas.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyFilter {
    #[default]
    All,
    Easy,
    Medium,
    Hard,
}

impl DifficultyFilter {
    pub const OPTIONS: [DifficultyFilter; 4] = [
        DifficultyFilter::All,
        DifficultyFilter::Easy,
        DifficultyFilter::Medium,
        DifficultyFilter::Hard,
    ];

    pub fn matches(self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Easy => difficulty == Difficulty::Easy,
            DifficultyFilter::Medium => difficulty == Difficulty::Medium,
            DifficultyFilter::Hard => difficulty == Difficulty::Hard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "Todas",
            DifficultyFilter::Easy => "Fácil",
            DifficultyFilter::Medium => "Media",
            DifficultyFilter::Hard => "Difícil",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,       // Enunciado
    pub options: Vec<String>,   // Opciones en orden
    pub correct_option: usize,  // Índice dentro de `options`
    pub points: u32,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_option
    }
}

/// Fase del ciclo de vida del quiz.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Loading,
    Error,
    Ready,
    Active,
    Verify,
    Finished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_accepts_every_level() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(DifficultyFilter::All.matches(d));
        }
    }

    #[test]
    fn level_filter_only_accepts_its_level() {
        assert!(DifficultyFilter::Medium.matches(Difficulty::Medium));
        assert!(!DifficultyFilter::Medium.matches(Difficulty::Easy));
        assert!(!DifficultyFilter::Hard.matches(Difficulty::Medium));
    }
}
