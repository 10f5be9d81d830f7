mod app;
mod setup;

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use app::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Desktop tic-tac-toe")]
struct Args {
    /// Directory for the preferences and score files. Defaults to the
    /// executable's directory.
    #[arg(long)]
    config_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    common::logger::init_logger(None);

    let config_dir = args
        .config_dir
        .unwrap_or_else(common::config::default_config_dir);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 520.0])
            .with_resizable(false)
            .with_title("TicTacToe"),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(&config_dir)))),
    )?;

    Ok(())
}
