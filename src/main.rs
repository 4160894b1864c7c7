//! Gomoku GUI
//!
//! Play freestyle Gomoku against the computer on a 15x15 board.
//! Set `RUST_LOG=debug` to see each AI decision.

use gomoku::ui::{GameConfig, GomokuApp};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, GameConfig::default())))),
    )
}
