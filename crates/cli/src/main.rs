#![deny(unsafe_code)]
//! CLI binary for deskkit.
//!
//! Subcommands:
//! - `categories` / `units <category>`: inspect the conversion tables
//! - `convert <value> <from> <to> --category <name>`: one conversion
//! - `color`: edit a color from flags and print hex and rgb
//! - `bmi`: body-mass index report
//! - `shell`: interactive session with history and palette

mod error;
mod shell;

use clap::{Parser, Subcommand};
use deskkit_core::{list_categories, units_for, Channel, Session, Settings};
use error::CliError;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "deskkit", about = "Unit converter, RGB color toolkit and BMI calculator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON settings file (precision, bmi_precision, initial_color, gauge_max_bmi).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List conversion categories.
    Categories,
    /// List the units of a category.
    Units {
        /// Category name (Length, Weight, Temperature, Time).
        category: String,
    },
    /// Convert a value between two units of one category.
    Convert {
        /// Value to convert.
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Source unit (e.g. "Meter").
        from: String,

        /// Target unit (e.g. "Kilometer").
        to: String,

        /// Category the units belong to.
        #[arg(short, long, default_value = "Length")]
        category: String,
    },
    /// Build a color from flags and print its hex and rgb forms.
    ///
    /// Flags apply in order: --hex, then channel flags, then --random.
    Color {
        /// Starting color as #rrggbb. Malformed values are ignored.
        #[arg(long)]
        hex: Option<String>,

        /// Red channel, 0-255.
        #[arg(short, long, allow_negative_numbers = true)]
        red: Option<i64>,

        /// Green channel, 0-255.
        #[arg(short, long, allow_negative_numbers = true)]
        green: Option<i64>,

        /// Blue channel, 0-255.
        #[arg(short, long, allow_negative_numbers = true)]
        blue: Option<i64>,

        /// Replace the color with a random one.
        #[arg(long)]
        random: bool,
    },
    /// Compute body-mass index.
    Bmi {
        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Weight in kilograms.
        #[arg(long)]
        weight: String,

        /// Height in meters.
        #[arg(long)]
        height: String,
    },
    /// Interactive session reading commands from stdin.
    Shell,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, CliError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    let settings = Settings::from_json_str(&text)?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.config.as_ref())?;
    let mut session = Session::new(settings);

    match cli.command {
        Command::Categories => {
            let categories = list_categories();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(categories)?);
            } else {
                for name in categories {
                    println!("{name}");
                }
            }
        }
        Command::Units { category } => {
            let units = units_for(&category)?;
            if cli.json {
                let info = serde_json::json!({ "category": category, "units": units });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", units.join(", "));
            }
        }
        Command::Convert {
            value,
            from,
            to,
            category,
        } => {
            let record = session.convert(&value, &from, &to, &category)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", session.describe(&record));
            }
        }
        Command::Color {
            hex,
            red,
            green,
            blue,
            random,
        } => {
            let hex_applied = hex.as_deref().map(|h| session.color_mut().set_from_hex(h));
            for (channel, value) in Channel::ALL.into_iter().zip([red, green, blue]) {
                if let Some(value) = value {
                    session.color_mut().set_channel(channel, value)?;
                }
            }
            if random {
                session.randomize_color();
            }
            let color = session.color();
            if cli.json {
                let info = serde_json::json!({
                    "hex": color.to_hex(),
                    "rgb": color.to_rgb_string(),
                    "hex_applied": hex_applied,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                if hex_applied == Some(false) {
                    eprintln!("note: ignored malformed hex {:?}", hex.unwrap_or_default());
                }
                println!("{}", color.to_hex());
                println!("{}", color.to_rgb_string());
            }
        }
        Command::Bmi {
            age,
            weight,
            height,
        } => {
            let weight = deskkit_core::parse_value(&weight)?;
            let height = deskkit_core::parse_value(&height)?;
            let (report, degrees) = session.bmi(age, weight, height)?;
            if cli.json {
                let info = serde_json::json!({
                    "report": report,
                    "category_label": report.category.label(),
                    "advisory_message": report.advisory.map(|a| a.message()),
                    "gauge_degrees": degrees,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", report.describe(session.settings().bmi_precision));
            }
        }
        Command::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            shell::run(&mut session, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
