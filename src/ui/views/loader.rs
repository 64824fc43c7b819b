use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loader(ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(Spinner::new().size(32.0));
            ui.add_space(16.0);
            ui.label(RichText::new("Cargando preguntas…").heading());
        });
    });
}
