use super::*;

impl QuizState {
    pub fn num_questions(&self) -> usize {
        self.filter_questions.len()
    }

    pub fn max_possible_points(&self) -> u32 {
        self.filter_questions
            .iter()
            .fold(0u32, |acc, q| acc.saturating_add(q.points))
    }

    /// Pregunta bajo el índice actual, si existe (tras un cambio de dificultad
    /// a mitad de intento el índice puede quedar fuera de rango).
    pub fn current_question(&self) -> Option<&Question> {
        self.filter_questions.get(self.index)
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.num_questions()
    }

    pub fn percentage(&self) -> f32 {
        match self.max_possible_points() {
            0 => 0.0,
            max => self.points as f32 / max as f32 * 100.0,
        }
    }
}
