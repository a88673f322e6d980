use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cineSeat::app::settings::{self, runtime_keybinds, Keybinds, Settings};
use cineSeat::app::{App, AvailabilitySource, FixedAvailability, RandomAvailability, SeatId};
use cineSeat::logging::init_logging;
use cineSeat::runner::run_app;
use cineSeat::ui::colors;

/// Pick a date, a showtime and seats for a screening in the terminal.
#[derive(Parser, Debug)]
#[command(name = "cineSeat", version, about)]
struct Cli {
    /// Settings file (TOML). Defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible random seat layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Seats that start booked, e.g. `--booked A2 C5`. Replaces the random
    /// layout entirely.
    #[arg(long, num_args = 1.., value_parser = parse_seat)]
    booked: Vec<SeatId>,

    /// Directory for the log file.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the default settings as TOML and exit.
    #[arg(long)]
    print_default_config: bool,
}

fn parse_seat(s: &str) -> Result<SeatId, String> {
    SeatId::parse(s).ok_or_else(|| format!("`{}` is not a seat like A1", s))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", Settings::default().to_toml_string()?);
        return Ok(());
    }

    let log_dir = cli
        .log_dir
        .clone()
        .or_else(settings::default_log_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let _guard = init_logging(&log_dir)?;

    let settings = settings::load_settings(cli.config.as_deref()).context("loading settings")?;
    runtime_keybinds::install(Keybinds::with_overrides(&settings.keybinds)?);
    colors::set_theme(&settings.theme);

    for seat in &cli.booked {
        settings
            .booking
            .check_seat(seat)
            .with_context(|| format!("--booked {} is not a seat of the configured layout", seat))?;
    }

    let probability = settings.booking.booked_probability;
    let fixed = FixedAvailability::new(cli.booked.iter().cloned());
    let mut source: Box<dyn AvailabilitySource> = if !fixed.is_empty() {
        info!(booked = fixed.len(), "using fixed seat layout");
        Box::new(fixed)
    } else if let Some(seed) = cli.seed {
        Box::new(RandomAvailability::seeded(probability, seed))
    } else {
        Box::new(RandomAvailability::new(probability))
    };
    let mut app = App::new(&settings, source.as_mut())?;
    info!(
        dates = app.booking.dates().len(),
        showtimes = app.booking.showtimes().len(),
        "screen initialised"
    );

    run_app(&mut app)
}
