use crate::QuizApp;
use crate::model::Status;
use crate::quiz::Event;
use crate::ui::helpers::{OptionMark, option_button};
use crate::ui::layout::two_button_row;
use crate::view_models::{NextAction, ProgressInfo, timer_label};
use egui::{CentralPanel, Context, ProgressBar, RichText};

pub fn ui_question(app: &mut QuizApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let progress = ProgressInfo::from_state(&app.quiz);
    let verifying = app.quiz.status == Status::Verify;
    let next = NextAction::for_state(&app.quiz);
    let mut events = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_max_width(panel_width);

            // ----------- PROGRESO -----------
            ui.add(ProgressBar::new(progress.fraction()).desired_width(panel_width));
            ui.horizontal(|ui| {
                ui.label(progress.question_label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(progress.points_label());
                });
            });
            ui.add_space(16.0);

            // ----------- PREGUNTA -----------
            let Some(question) = app.quiz.current_question() else {
                // Índice fuera del filtro actual (cambio de dificultad a mitad de intento)
                ui.label("No hay pregunta en esta posición.");
                return;
            };
            ui.label(RichText::new(&question.question).heading());
            ui.add_space(12.0);

            let answer = app.quiz.answer;
            for (i, option) in question.options.iter().enumerate() {
                let mark = if verifying {
                    // En revisión se muestra siempre la correcta, respondida o no
                    OptionMark::revealed(i, question.correct_option)
                } else {
                    OptionMark::for_option(i, question.correct_option, answer)
                };
                if option_button(ui, option, panel_width, mark, answer == Some(i)) {
                    events.push(Event::AnswerSubmitted(i));
                }
                ui.add_space(4.0);
            }
            ui.add_space(16.0);

            // ----------- PIE: temporizador / anterior + siguiente -----------
            if !verifying {
                ui.label(
                    RichText::new(format!("⏱ {}", timer_label(app.quiz.seconds_remaining)))
                        .monospace()
                        .strong(),
                );
                ui.add_space(8.0);
            }

            let prev_label = (verifying && app.quiz.index > 0).then_some("⬅ Anterior");
            let next_label = (next != NextAction::Hidden).then_some(next.label());
            let (prev, advance) = two_button_row(ui, panel_width, prev_label, next_label);
            if prev {
                events.push(Event::PrevQuestion);
            }
            if advance {
                events.push(match next {
                    NextAction::Finish => Event::Finish,
                    _ => Event::NextQuestion,
                });
            }
        });
    });

    for event in events {
        app.dispatch(event, now);
    }
}
