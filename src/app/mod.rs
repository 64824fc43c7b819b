use crate::config::QuizConfig;
use crate::data::spawn_question_fetch;
use crate::quiz::{Event, QuizState};
use crate::ticker::Ticker;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod updates;

/// Estado de la aplicación: el quiz más los colaboradores externos que lo alimentan
/// (descarga inicial y temporizador).
pub struct QuizApp {
    pub quiz: QuizState,
    pub config: QuizConfig,
    pub ticker: Ticker,
    // Canal de la descarga inicial; `None` una vez resuelta
    pub questions_rx: Option<Receiver<Event>>,
}

impl QuizApp {
    /// Crea la app y lanza la descarga de preguntas en segundo plano.
    pub fn new(config: QuizConfig) -> Self {
        let rx = spawn_question_fetch(config.endpoint.clone());
        Self::with_source(config, rx)
    }

    /// Igual que `new` pero con la fuente de preguntas ya lanzada.
    pub fn with_source(config: QuizConfig, questions_rx: Receiver<Event>) -> Self {
        Self {
            quiz: QuizState::new(config.seconds_per_question),
            config,
            ticker: Ticker::default(),
            questions_rx: Some(questions_rx),
        }
    }

    /// Aplica un evento y ajusta el temporizador al nuevo estado.
    pub fn dispatch(&mut self, event: Event, now: f64) {
        self.quiz.dispatch(event);
        self.ticker.sync(self.quiz.status, now);
    }
}
