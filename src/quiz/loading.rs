use super::*;

impl QuizState {
    pub(super) fn questions_loaded(&mut self, payload: Vec<Question>) {
        if self.status != Status::Loading {
            log::debug!("preguntas recibidas fuera de Loading ({:?}), se ignoran", self.status);
            return;
        }
        log::info!("{} preguntas cargadas", payload.len());
        self.filter_questions = payload.clone();
        self.questions = payload;
        self.status = Status::Ready;
    }

    pub(super) fn questions_failed(&mut self) {
        if self.status != Status::Loading {
            log::debug!("fallo de carga fuera de Loading ({:?}), se ignora", self.status);
            return;
        }
        self.status = Status::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mixed_bank;
    use super::*;

    #[test]
    fn loaded_payload_fills_both_lists() {
        let state = QuizState::default().reduce(Event::QuestionsLoaded(mixed_bank()));
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.questions, mixed_bank());
        assert_eq!(state.filter_questions, mixed_bank());
    }

    #[test]
    fn failure_from_loading_is_error() {
        let state = QuizState::default().reduce(Event::QuestionsFailed);
        assert_eq!(state.status, Status::Error);
    }

    #[test]
    fn error_is_terminal_for_later_loads() {
        let state = QuizState::default()
            .reduce(Event::QuestionsFailed)
            .reduce(Event::QuestionsLoaded(mixed_bank()))
            .reduce(Event::Start)
            .reduce(Event::Tick);
        assert_eq!(state.status, Status::Error);
        assert!(state.questions.is_empty());
    }

    #[test]
    fn second_payload_does_not_replace_bank() {
        let state = QuizState::default()
            .reduce(Event::QuestionsLoaded(mixed_bank()))
            .reduce(Event::QuestionsLoaded(Vec::new()));
        assert_eq!(state.questions.len(), 4);
    }
}
