use crate::config::SECS_PER_QUESTION;
use crate::model::{DifficultyFilter, Question, Status};

// Submódulos: cada uno implementa un grupo de transiciones sobre `QuizState`
mod actions;
mod loading;
mod navigation;
mod queries;
mod resets;

/// Eventos que alimentan al reductor. Los efectos externos (fetch, timer)
/// se traducen siempre a uno de estos.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    QuestionsLoaded(Vec<Question>),
    QuestionsFailed,
    Start,
    AnswerSubmitted(usize),
    NextQuestion,
    PrevQuestion,
    Finish,
    Reset,
    Tick,
    SeeAnswers,
    SetDifficulty(DifficultyFilter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    pub questions: Vec<Question>,        // Banco completo, fijado una sola vez
    pub filter_questions: Vec<Question>, // Subconjunto en juego según `difficulty`
    pub status: Status,
    pub index: usize,
    pub answer: Option<usize>,
    pub answers: Vec<Option<usize>>,
    pub points: u32,
    pub highscore: u32,
    pub seconds_remaining: Option<u32>,
    pub difficulty: DifficultyFilter,
    pub seconds_per_question: u32,
}

impl Default for QuizState {
    fn default() -> Self {
        Self::new(SECS_PER_QUESTION)
    }
}

impl QuizState {
    pub fn new(seconds_per_question: u32) -> Self {
        Self {
            questions: Vec::new(),
            filter_questions: Vec::new(),
            status: Status::Loading,
            index: 0,
            answer: None,
            answers: Vec::new(),
            points: 0,
            highscore: 0,
            seconds_remaining: None,
            difficulty: DifficultyFilter::All,
            seconds_per_question,
        }
    }

    /// Versión por valor del reductor: `(estado, evento) -> estado`.
    pub fn reduce(mut self, event: Event) -> Self {
        self.dispatch(event);
        self
    }

    /// Único punto de mutación del estado del quiz.
    pub fn dispatch(&mut self, event: Event) {
        let before = self.status;
        match event {
            Event::QuestionsLoaded(payload) => self.questions_loaded(payload),
            Event::QuestionsFailed => self.questions_failed(),
            Event::Start => self.start(),
            Event::AnswerSubmitted(choice) => self.submit_answer(choice),
            Event::NextQuestion => self.next_question(),
            Event::PrevQuestion => self.prev_question(),
            Event::Finish => self.finish(),
            Event::Reset => self.reset(),
            Event::Tick => self.tick(),
            Event::SeeAnswers => self.see_answers(),
            Event::SetDifficulty(level) => self.set_difficulty(level),
        }
        if before != self.status {
            log::info!("estado del quiz: {before:?} -> {:?}", self.status);
        }
    }
}

/// Reductor puro sobre un `QuizState` tomado por valor.
pub fn reduce(state: QuizState, event: Event) -> QuizState {
    state.reduce(event)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{Difficulty, Question};

    pub fn question(points: u32, correct_option: usize, difficulty: Difficulty) -> Question {
        Question {
            question: format!("Pregunta de {points} puntos"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option,
            points,
            difficulty,
        }
    }

    pub fn mixed_bank() -> Vec<Question> {
        vec![
            question(10, 0, Difficulty::Easy),
            question(20, 1, Difficulty::Medium),
            question(30, 2, Difficulty::Hard),
            question(10, 3, Difficulty::Easy),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::mixed_bank;
    use super::*;

    #[test]
    fn starts_loading_with_empty_bank() {
        let state = QuizState::default();
        assert_eq!(state.status, Status::Loading);
        assert!(state.questions.is_empty());
        assert_eq!(state.seconds_remaining, None);
        assert_eq!(state.difficulty, DifficultyFilter::All);
    }

    #[test]
    fn reduce_free_function_matches_dispatch() {
        let by_value = reduce(QuizState::default(), Event::QuestionsLoaded(mixed_bank()));
        let mut by_ref = QuizState::default();
        by_ref.dispatch(Event::QuestionsLoaded(mixed_bank()));
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn full_attempt_walkthrough() {
        let state = QuizState::default()
            .reduce(Event::QuestionsLoaded(mixed_bank()))
            .reduce(Event::Start)
            .reduce(Event::AnswerSubmitted(0))
            .reduce(Event::NextQuestion)
            .reduce(Event::AnswerSubmitted(0))
            .reduce(Event::NextQuestion)
            .reduce(Event::AnswerSubmitted(2))
            .reduce(Event::Finish);

        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.points, 40);
        assert_eq!(state.highscore, 40);
        assert_eq!(state.answers, vec![Some(0), Some(0), Some(2)]);
    }
}
