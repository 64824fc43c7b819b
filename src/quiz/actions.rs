use super::*;

impl QuizState {
    pub(super) fn start(&mut self) {
        if self.status != Status::Ready {
            log::debug!("Start ignorado en estado {:?}", self.status);
            return;
        }
        // Sin preguntas no hay nada que mostrar
        if self.filter_questions.is_empty() {
            log::warn!("Start ignorado: no hay preguntas para la dificultad {:?}", self.difficulty);
            return;
        }
        // Bancos enormes saturan en lugar de desbordar
        let total = u32::try_from(self.filter_questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(self.seconds_per_question);
        self.status = Status::Active;
        self.seconds_remaining = Some(total);
    }

    pub(super) fn submit_answer(&mut self, choice: usize) {
        if self.status != Status::Active {
            log::debug!("respuesta ignorada en estado {:?}", self.status);
            return;
        }
        let Some(question) = self.filter_questions.get(self.index) else {
            log::warn!("respuesta ignorada: no hay pregunta en el índice {}", self.index);
            return;
        };

        if question.is_correct(choice) {
            self.points = self.points.saturating_add(question.points);
        }
        self.answer = Some(choice);
        self.answers.push(Some(choice));
    }

    /// Descuenta un segundo. El tick que deja el contador en 0 termina el intento;
    /// el récord solo se actualiza con `Finish`.
    pub(super) fn tick(&mut self) {
        if self.status != Status::Active {
            return;
        }
        let remaining = self.seconds_remaining.unwrap_or(0).saturating_sub(1);
        self.seconds_remaining = Some(remaining);
        if remaining == 0 {
            log::info!("tiempo agotado");
            self.status = Status::Finished;
        }
    }

    pub(super) fn finish(&mut self) {
        self.status = Status::Finished;
        self.highscore = self.highscore.max(self.points);
    }
}
