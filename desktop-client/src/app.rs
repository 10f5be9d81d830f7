use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;

use common::config::{Preferences, PreferencesStore};
use common::game::{GameMode, GameSession, GameStatus, Mark, SessionRng, SessionSettings};
use common::log;
use common::score::ScoreStore;
use common::translations::{Language, translate};

use crate::setup::{SetupDialog, SetupOutcome};

/// Presentation delay before the computer's reply is applied.
const BOT_REPLY_DELAY: Duration = Duration::from_millis(350);

pub struct TicTacToeApp {
    session: GameSession,
    preferences: Preferences,
    preferences_store: PreferencesStore,
    setup: Option<SetupDialog>,
    bot_reply_due: Option<Instant>,
    show_game_over: bool,
}

impl TicTacToeApp {
    pub fn new(config_dir: &Path) -> Self {
        let preferences_store = PreferencesStore::in_dir(config_dir);
        let preferences = preferences_store.load();
        let session = GameSession::new(
            session_settings(&preferences),
            ScoreStore::in_dir(config_dir),
            SessionRng::from_random(),
        );
        let setup = Some(SetupDialog::from_preferences(&preferences));
        Self {
            session,
            preferences,
            preferences_store,
            setup,
            bot_reply_due: None,
            show_game_over: false,
        }
    }

    fn language(&self) -> Language {
        self.preferences.language
    }

    fn apply_setup(&mut self, preferences: Preferences) {
        self.preferences_store.save(&preferences);
        self.preferences = preferences;
        self.session.start_round(session_settings(&self.preferences));
        self.bot_reply_due = None;
        self.show_game_over = false;
    }

    fn start_new_round(&mut self) {
        self.session.new_round();
        self.bot_reply_due = None;
        self.show_game_over = false;
    }

    fn on_cell_click(&mut self, row: usize, col: usize) {
        match self.session.submit_move(row, col) {
            Ok(true) => {
                if self.session.state().is_over() {
                    self.show_game_over = true;
                }
            }
            Ok(false) => {}
            Err(e) => log!("Rejected board input: {}", e),
        }
    }

    /// Schedules the computer's reply when its turn comes up and applies it
    /// once the presentation delay has elapsed. The board is left untouched
    /// during the wait.
    fn drive_computer_turn(&mut self, ctx: &egui::Context) {
        let Some(due) = self.bot_reply_due else {
            if self.setup.is_none() && self.session.computer_turn_pending() {
                self.bot_reply_due = Some(Instant::now() + BOT_REPLY_DELAY);
                ctx.request_repaint_after(BOT_REPLY_DELAY);
            }
            return;
        };
        let now = Instant::now();
        if now < due {
            ctx.request_repaint_after(due - now);
            return;
        }
        self.bot_reply_due = None;
        match self.session.play_computer_turn() {
            Ok(_) => {
                if self.session.state().is_over() {
                    self.show_game_over = true;
                }
            }
            Err(e) => log!("Computer move failed: {}", e),
        }
    }

    fn status_line(&self) -> String {
        let lang = self.language();
        let state = self.session.state();
        match state.status() {
            GameStatus::InProgress => {
                let current = state.current_player();
                format!(
                    "{}{} ({})",
                    translate(lang, "Current Player: "),
                    current.name,
                    current.symbol()
                )
            }
            GameStatus::Draw => translate(lang, "It's a draw!").to_string(),
            _ => match state.winner() {
                Some(winner) => format!(
                    "{} ({}) {}",
                    winner.name,
                    winner.symbol(),
                    translate(lang, "wins!")
                ),
                None => String::new(),
            },
        }
    }

    fn score_line(&self) -> String {
        let lang = self.language();
        let scores = self.session.scores();
        let state = self.session.state();
        match self.session.mode() {
            GameMode::PlayerVsComputer => format!(
                "[PvC] {} = {}  |  {} = {}  |  {}: {}",
                state.player1.name,
                scores.pvc_player_wins,
                translate(lang, "Computer"),
                scores.pvc_computer_wins,
                translate(lang, "Draws"),
                scores.pvc_draws,
            ),
            GameMode::PlayerVsPlayer => format!(
                "[PvP] {} = {}  |  {} = {}  |  {}: {}",
                state.player1.name,
                scores.pvp_p1_wins,
                state.player2.name,
                scores.pvp_p2_wins,
                translate(lang, "Draws"),
                scores.pvp_draws,
            ),
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let interactive = !self.session.state().is_over()
            && self.bot_reply_due.is_none()
            && self.setup.is_none()
            && !self.session.computer_turn_pending();

        let mut clicked = None;
        let rows = *self.session.state().board.rows();

        egui::Grid::new("board_grid")
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (row, row_marks) in rows.iter().enumerate() {
                    for (col, &mark) in row_marks.iter().enumerate() {
                        let label = egui::RichText::new(mark.symbol().to_string())
                            .size(36.0)
                            .monospace();
                        let button = egui::Button::new(label).min_size(egui::vec2(110.0, 110.0));
                        let enabled = interactive && mark == Mark::Empty;
                        if ui.add_enabled(enabled, button).clicked() {
                            clicked = Some((row, col));
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some((row, col)) = clicked {
            self.on_cell_click(row, col);
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let lang = self.language();
        ui.horizontal(|ui| {
            if ui.button(translate(lang, "New Round")).clicked() {
                self.start_new_round();
            }
            if ui.button(translate(lang, "Reset Scores")).clicked() {
                self.session.reset_scores();
            }
            if ui.button(translate(lang, "Setup")).clicked() && self.setup.is_none() {
                self.setup = Some(SetupDialog::from_preferences(&self.preferences));
            }
        });
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let lang = self.language();
        let message = self.status_line();
        let mut new_round = false;
        let mut exit = false;

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).size(18.0));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(translate(lang, "New Round")).clicked() {
                        new_round = true;
                    }
                    if ui.button("Exit").clicked() {
                        exit = true;
                    }
                });
            });

        if new_round {
            self.start_new_round();
        }
        if exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(dialog) = &mut self.setup {
            match dialog.show(ctx) {
                SetupOutcome::Open => {}
                SetupOutcome::Confirmed => {
                    let preferences = dialog.to_preferences();
                    self.setup = None;
                    self.apply_setup(preferences);
                }
                SetupOutcome::Cancelled => self.setup = None,
            }
        }

        self.drive_computer_turn(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(self.status_line()).size(16.0));
                ui.add_space(8.0);
                self.render_board(ui);
                ui.add_space(8.0);
                ui.separator();
                ui.label(self.score_line());
                ui.add_space(4.0);
                self.render_controls(ui);
            });
        });

        if self.show_game_over {
            self.render_game_over_dialog(ctx);
        }
    }
}

fn session_settings(preferences: &Preferences) -> SessionSettings {
    let player2_name = match preferences.mode {
        GameMode::PlayerVsComputer => {
            translate(preferences.language, "Computer").to_string()
        }
        GameMode::PlayerVsPlayer => preferences.player2_name.clone(),
    };
    SessionSettings {
        player1_name: preferences.player1_name.clone(),
        player2_name,
        mode: preferences.mode,
        difficulty: preferences.difficulty(),
    }
}
