use crate::QuizApp;
use crate::model::DifficultyFilter;
use crate::quiz::Event;
use crate::ui::layout::centered_panel;
use egui::{Button, ComboBox, Context, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let num_questions = app.quiz.num_questions();
    let mut selected = app.quiz.difficulty;

    centered_panel(ctx, 260.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("👋 ¡Bienvenido a Timed Quiz!");
            ui.add_space(10.0);
            ui.label(
                RichText::new(format!("{num_questions} preguntas para poner a prueba tus conocimientos"))
                    .strong(),
            );
            ui.add_space(18.0);

            ui.horizontal(|ui| {
                ui.label("Elige la dificultad de las preguntas:");
                ComboBox::from_id_salt("difficulty")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for level in DifficultyFilter::OPTIONS {
                            ui.selectable_value(&mut selected, level, level.label());
                        }
                    });
            });
            ui.add_space(18.0);

            let start = ui.add_enabled(
                num_questions > 0,
                Button::new("¡Empezamos!").min_size(egui::vec2(200.0, 40.0)),
            );
            if start.clicked() {
                app.dispatch(Event::Start, now);
            }
        });
    });

    if selected != app.quiz.difficulty {
        log::debug!("dificultad seleccionada: {selected:?}");
        app.dispatch(Event::SetDifficulty(selected), now);
    }
}
