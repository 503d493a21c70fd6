mod app;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use app::HealthViewerApp;
use clap::Parser;
use eframe::egui;
use health_data::config::SURVEY_INPUT;
use health_data::data::loader::load_survey;
use health_data::report::SurveyReport;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "health-data-viewer")]
#[command(about = "Oral-health survey charts by state, sex and race", long_about = None)]
struct Cli {
    /// Survey table (CSV with LocationDesc, Topic, Question, Response, Stratification1, DataValue)
    #[arg(default_value = SURVEY_INPUT)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let path = Cli::parse().input;

    let table = load_survey(&path)
        .with_context(|| format!("loading survey table {}", path.display()))?;
    let report = SurveyReport::build(&table);
    report.print_console();

    let state = AppState::with_report(report, path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Health Data Viewer – Oral Health Survey",
        options,
        Box::new(move |_cc| Ok(Box::new(HealthViewerApp::new(state)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
