use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

// Sin reintento: el error es terminal para esta sesión
pub fn ui_error(ctx: &Context) {
    centered_panel(ctx, 150.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(
                RichText::new("💥 Hubo un error al cargar las preguntas.")
                    .heading()
                    .color(egui::Color32::LIGHT_RED),
            );
        });
    });
}
