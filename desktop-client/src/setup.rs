use eframe::egui;

use common::config::Preferences;
use common::translations::{Language, translate};

pub enum SetupOutcome {
    Open,
    Confirmed,
    Cancelled,
}

/// The setup dialog: language, mode, player names, difficulty. Mirrors the
/// preferences file; confirming hands back a sanitized `Preferences`.
pub struct SetupDialog {
    language: Language,
    vs_computer: bool,
    player1_name: String,
    player2_name: String,
    difficulty_level: u8,
}

impl SetupDialog {
    pub fn from_preferences(preferences: &Preferences) -> Self {
        Self {
            language: preferences.language,
            vs_computer: preferences.mode == common::game::GameMode::PlayerVsComputer,
            player1_name: preferences.player1_name.clone(),
            player2_name: preferences.player2_name.clone(),
            difficulty_level: preferences.difficulty_level,
        }
    }

    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            language: self.language,
            mode: if self.vs_computer {
                common::game::GameMode::PlayerVsComputer
            } else {
                common::game::GameMode::PlayerVsPlayer
            },
            player1_name: self.player1_name.clone(),
            player2_name: self.player2_name.clone(),
            difficulty_level: self.difficulty_level,
        }
        .sanitized()
    }

    pub fn show(&mut self, ctx: &egui::Context) -> SetupOutcome {
        let lang = self.language;
        let mut outcome = SetupOutcome::Open;

        egui::Window::new(translate(lang, "Setup"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.heading(translate(lang, "Game Preferences"));
                ui.separator();

                ui.label(egui::RichText::new(translate(lang, "Language")).strong());
                egui::ComboBox::from_id_salt("setup_language")
                    .selected_text(self.language.code())
                    .show_ui(ui, |ui| {
                        for language in Language::ALL {
                            ui.selectable_value(&mut self.language, language, language.code());
                        }
                    });
                ui.add_space(8.0);

                ui.label(egui::RichText::new(translate(lang, "Mode")).strong());
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.vs_computer,
                        true,
                        translate(lang, "Player vs Computer"),
                    );
                    ui.selectable_value(
                        &mut self.vs_computer,
                        false,
                        translate(lang, "Player vs Player"),
                    );
                });
                ui.add_space(8.0);

                ui.label(egui::RichText::new(translate(lang, "Players")).strong());
                ui.horizontal(|ui| {
                    ui.label(translate(lang, "Player 1 (X)"));
                    ui.text_edit_singleline(&mut self.player1_name);
                });
                ui.horizontal(|ui| {
                    ui.label(translate(lang, "Player 2 (O)"));
                    ui.add_enabled(
                        !self.vs_computer,
                        egui::TextEdit::singleline(&mut self.player2_name),
                    );
                });
                ui.add_space(8.0);

                ui.label(egui::RichText::new(translate(lang, "Difficulty")).strong());
                ui.add_enabled_ui(self.vs_computer, |ui| {
                    egui::ComboBox::from_id_salt("setup_difficulty")
                        .selected_text(Self::difficulty_label(lang, self.difficulty_level))
                        .show_ui(ui, |ui| {
                            for level in 1..=3 {
                                ui.selectable_value(
                                    &mut self.difficulty_level,
                                    level,
                                    Self::difficulty_label(lang, level),
                                );
                            }
                        });
                });
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    let can_confirm = !self.player1_name.trim().is_empty();
                    if ui.add_enabled(can_confirm, egui::Button::new("OK")).clicked() {
                        outcome = SetupOutcome::Confirmed;
                    }
                    if ui.button(translate(lang, "Cancel")).clicked() {
                        outcome = SetupOutcome::Cancelled;
                    }
                });
            });

        outcome
    }

    fn difficulty_label(lang: Language, level: u8) -> &'static str {
        match level {
            2 => translate(lang, "Medium"),
            3 => translate(lang, "Hard"),
            _ => translate(lang, "Easy"),
        }
    }
}
