use crate::QuizApp;
use crate::quiz::Event;
use crate::ui::layout::{centered_panel, two_button_row};
use crate::view_models::FinishInfo;
use egui::{Context, RichText};

pub fn ui_finish(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let info = FinishInfo::from_state(&app.quiz);
    let mut event = None;

    centered_panel(ctx, 240.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("¡Fin del quiz!");
            ui.add_space(14.0);
            ui.label(RichText::new(info.score_label()).size(20.0).strong());
            ui.add_space(6.0);
            ui.label(info.highscore_label());
            ui.add_space(20.0);

            let width = ui.available_width().min(420.0);
            let (restart, review) =
                two_button_row(ui, width, Some("🔄 Reiniciar quiz"), Some("🔍 Ver respuestas"));
            if restart {
                event = Some(Event::Reset);
            }
            if review {
                event = Some(Event::SeeAnswers);
            }
        });
    });

    if let Some(event) = event {
        app.dispatch(event, now);
    }
}
