// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};

/// Cómo se pinta una opción una vez respondida la pregunta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Pending,
    Correct,
    Wrong,
}

impl OptionMark {
    pub fn for_option(option: usize, correct: usize, answer: Option<usize>) -> Self {
        match answer {
            None => OptionMark::Pending,
            Some(_) => Self::revealed(option, correct),
        }
    }

    pub fn revealed(option: usize, correct: usize) -> Self {
        if option == correct {
            OptionMark::Correct
        } else {
            OptionMark::Wrong
        }
    }
}

/// Botón de opción a ancho completo. Devuelve `true` si se pulsó.
pub fn option_button(ui: &mut Ui, label: &str, width: f32, mark: OptionMark, chosen: bool) -> bool {
    let text = if chosen { format!("👉 {label}") } else { label.to_owned() };
    let mut button = Button::new(text).min_size(Vec2::new(width, 40.0));
    button = match mark {
        OptionMark::Pending => button,
        OptionMark::Correct => button.fill(Color32::DARK_GREEN),
        OptionMark::Wrong => button.fill(Color32::from_rgb(120, 40, 40)),
    };
    ui.add_enabled(mark == OptionMark::Pending, button).clicked()
}
