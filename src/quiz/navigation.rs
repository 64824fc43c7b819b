use super::*;

impl QuizState {
    /// Avanza una posición; en la última pregunta se queda donde está.
    pub(super) fn next_question(&mut self) {
        let last = self.filter_questions.len().saturating_sub(1);
        self.index = (self.index + 1).min(last);
        self.answer = self.recorded_answer(self.index);
    }

    /// Retrocede una posición; en la primera se queda donde está.
    pub(super) fn prev_question(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.answer = self.recorded_answer(self.index);
    }

    pub(super) fn see_answers(&mut self) {
        self.answer = self.recorded_answer(self.index);
        self.status = Status::Verify;
    }

    fn recorded_answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }
}
