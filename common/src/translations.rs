use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Pl];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pl => "PL",
        }
    }

    pub fn from_code(code: &str) -> Language {
        match code.to_ascii_uppercase().as_str() {
            "PL" => Language::Pl,
            _ => Language::En,
        }
    }
}

/// Looks up the localized form of an English UI message. Unknown messages
/// pass through unchanged, so the English text doubles as the key.
pub fn translate(language: Language, message: &str) -> &str {
    match language {
        Language::En => message,
        Language::Pl => match message {
            "Current Player: " => "Aktualny gracz: ",
            "wins!" => "wygrywa!",
            "It's a draw!" => "Remis!",
            "Player vs Computer" => "Gracz vs Komputer",
            "Player vs Player" => "Gracz vs Gracz",
            "Language" => "Język",
            "Choose language:" => "Wybierz język:",
            "Mode" => "Tryb",
            "Players" => "Gracze",
            "Player 1 (X)" => "Gracz 1 (X)",
            "Player 2 (O)" => "Gracz 2 (O)",
            "Difficulty" => "Poziom trudności",
            "Level" => "Poziom",
            "Easy" => "Łatwy",
            "Medium" => "Średni",
            "Hard" => "Trudny",
            "Computer" => "Komputer",
            "New Round" => "Nowa runda",
            "Reset Scores" => "Wyzeruj wyniki",
            "Setup" => "Ustawienia",
            "Score" => "Wynik",
            "Draws" => "Remisy",
            "Game Preferences" => "Preferencje gry",
            "Cancel" => "Anuluj",
            _ => message,
        },
    }
}
