#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use timed_quiz::QuizApp;
    use timed_quiz::config::QuizConfig;

    // RUST_LOG=timed_quiz=debug para ver las transiciones
    pretty_env_logger::init();

    let config = QuizConfig::load();
    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new(config)))),
    )
}

// En WASM el arranque lo hace `web::start` desde JS
#[cfg(target_arch = "wasm32")]
fn main() {}
