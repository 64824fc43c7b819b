use super::*;
use crate::model::Status;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Recoge el resultado de la descarga si ya llegó.
    pub fn poll_questions(&mut self, now: f64) {
        let Some(rx) = self.questions_rx.as_ref() else {
            return;
        };
        let event = match rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                // El hilo terminó sin enviar nada
                log::error!("la descarga de preguntas terminó sin resultado");
                Event::QuestionsFailed
            }
        };
        self.questions_rx = None;
        self.dispatch(event, now);
    }

    /// Convierte los segundos transcurridos en eventos `Tick`.
    pub fn poll_ticker(&mut self, now: f64) {
        self.ticker.sync(self.quiz.status, now);
        for _ in 0..self.ticker.poll(now) {
            self.dispatch(Event::Tick, now);
            if self.quiz.status != Status::Active {
                break;
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.questions_rx.is_some()
    }
}
