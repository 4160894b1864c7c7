//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{FirstMover, GameConfig, GameState};
use super::theme::*;
use crate::{Side, TerminalResult, BOARD_SIZE};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_stats: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_stats: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (random first)").clicked() {
                        self.state.restart_with(FirstMover::Random);
                        ui.close_menu();
                    }
                    if ui.button("New Game (you first)").clicked() {
                        self.state.restart_with(FirstMover::Human);
                        ui.close_menu();
                    }
                    if ui.button("New Game (computer first)").clicked() {
                        self.state.restart_with(FirstMover::Computer);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "AI Stats (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.state.move_count));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(outcome) = self.state.outcome {
                    ui.add_space(10.0);
                    if Self::render_game_over_card(ui, outcome) {
                        self.state.reset();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{}x{} · five in a row", BOARD_SIZE, BOARD_SIZE))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Whose turn it is, with a stone swatch
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (name, fill) = match self.state.current_turn {
                Side::Human => ("YOU", HUMAN_STONE),
                Side::Computer => ("COMPUTER", COMPUTER_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, fill);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.is_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("Thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_THINKING)
                    } else {
                        ("Your turn".to_string(), STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Statistics from the computer's last search
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI STATS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("Score: {:.1}", result.score))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("{}ms", result.time_ms))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.label(
                            RichText::new(format!("{} nodes", result.nodes))
                                .size(10.0)
                                .color(TEXT_MUTED),
                        );
                    });
                });
            });

            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.col) as char;
                let row = BOARD_SIZE - pos.row as usize;
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("→ {}{}", col, row))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    /// Returns true when "Play again" was clicked
    fn render_game_over_card(ui: &mut egui::Ui, outcome: TerminalResult) -> bool {
        let headline = match outcome {
            TerminalResult::Win { side: Side::Human, .. } => "YOU WIN!",
            TerminalResult::Win { side: Side::Computer, .. } => "COMPUTER WINS",
            _ => "DRAW",
        };

        let mut play_again = false;

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui
                        .button(RichText::new("Play again").size(14.0).strong())
                        .clicked()
                    {
                        play_again = true;
                    }
                });
            });

        play_again
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                self.state.board(),
                self.state.last_move(),
                self.state.winning_line(),
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // S - Toggle AI stats
            if i.key_pressed(egui::Key::S) {
                self.show_stats = !self.show_stats;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
