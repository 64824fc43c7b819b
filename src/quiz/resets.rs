use super::*;

impl QuizState {
    /// Reinicia navegación y puntuación. Conserva el banco, el filtro y el récord.
    pub(super) fn reset(&mut self) {
        *self = QuizState {
            questions: std::mem::take(&mut self.questions),
            filter_questions: std::mem::take(&mut self.filter_questions),
            highscore: self.highscore,
            difficulty: self.difficulty,
            status: Status::Ready,
            ..QuizState::new(self.seconds_per_question)
        };
    }

    /// Cambia el filtro de dificultad.
    ///
    /// No toca `index`, `answers`, `points` ni `status`: si se cambia a mitad
    /// de intento la navegación sigue apuntando a posiciones del filtro anterior.
    pub(super) fn set_difficulty(&mut self, level: DifficultyFilter) {
        self.difficulty = level;
        self.filter_questions = self
            .questions
            .iter()
            .filter(|q| level.matches(q.difficulty))
            .cloned()
            .collect();
    }
}
