mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Status;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

// Mientras la descarga está en curso comprobamos el canal con esta cadencia
const LOADING_POLL: Duration = Duration::from_millis(100);

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);

        // Efectos externos -> eventos
        self.poll_questions(now);
        self.poll_ticker(now);

        // CABECERA Y PANEL INFERIOR (tema)
        top_panel(ctx);
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.quiz.status {
            Status::Loading => views::loader::ui_loader(ctx),
            Status::Error => views::error::ui_error(ctx),
            Status::Ready => views::start::ui_start(self, ctx),
            Status::Active | Status::Verify => views::question::ui_question(self, ctx),
            Status::Finished => views::finish::ui_finish(self, ctx),
        }

        if self.is_loading() {
            ctx.request_repaint_after(LOADING_POLL);
        }
        if let Some(wait) = self.ticker.until_next_tick(now) {
            ctx.request_repaint_after(Duration::from_secs_f64(wait));
        }
    }
}
