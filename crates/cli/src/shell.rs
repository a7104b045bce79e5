//! Line-oriented interactive session.
//!
//! Reads one command per line and keeps a single [`Session`] alive, so
//! history and palette accumulate until `quit` or end of input. A failing
//! command prints an error and the loop continues.

use crate::error::CliError;
use deskkit_core::{list_categories, units_for, Channel, Session};
use std::io::{BufRead, Write};

const HELP: &str = "\
commands:
  categories                          list conversion categories
  units <category>                    list units of a category
  convert <value> <from> <to> <cat>   convert and add to history
  history                             show conversions, newest first
  show                                current color as hex and rgb
  set <red|green|blue> <0-255>        set one channel
  hex <#rrggbb>                       set all channels (malformed input is ignored)
  random                              pick a random color
  save                                save current color to the palette
  palette                             list saved colors
  load <#rrggbb|index>                restore a saved color
  bmi <age> <weight-kg> <height-m>    body-mass index
  help                                this text
  quit                                leave the shell";

enum Outcome {
    Continue,
    Quit,
}

/// Runs the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        match execute(session, &line, out) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => {}
            Err(CliError::Io(msg)) => return Err(CliError::Io(msg)),
            Err(e) => {
                tracing::debug!(line = %line, error = %e, "shell command failed");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn execute<W: Write>(session: &mut Session, line: &str, out: &mut W) -> Result<Outcome, CliError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
        return Ok(Outcome::Continue);
    };

    match (command, args) {
        ("quit" | "exit", _) => return Ok(Outcome::Quit),
        ("help", _) => writeln!(out, "{HELP}")?,
        ("categories", []) => {
            for name in list_categories() {
                writeln!(out, "{name}")?;
            }
        }
        ("units", [category]) => writeln!(out, "{}", units_for(category)?.join(", "))?,
        ("convert", [value, from, to, category]) => {
            let record = session.convert(value, from, to, category)?;
            writeln!(out, "{}", session.describe(&record))?;
        }
        ("history", []) => {
            let history = session.converter().history();
            if history.is_empty() {
                writeln!(out, "(no conversions yet)")?;
            }
            for record in history.iter() {
                writeln!(out, "{}", session.describe(record))?;
            }
        }
        ("show", []) => show_color(session, out)?,
        ("set", [channel, value]) => {
            let channel = Channel::from_name(channel)
                .ok_or_else(|| CliError::Input(format!("unknown channel: {channel}")))?;
            let value: i64 = value.parse().map_err(|_| {
                CliError::Input(format!("channel value must be an integer: {value}"))
            })?;
            session.color_mut().set_channel(channel, value)?;
            show_color(session, out)?;
        }
        ("hex", [hex]) => {
            session.color_mut().set_from_hex(hex);
            show_color(session, out)?;
        }
        ("random", []) => {
            session.randomize_color();
            show_color(session, out)?;
        }
        ("save", []) => {
            let hex = session.color_mut().save_to_palette();
            writeln!(out, "saved {hex}")?;
        }
        ("palette", []) => {
            let palette = session.color().palette();
            if palette.is_empty() {
                writeln!(out, "(palette is empty)")?;
            }
            for (i, hex) in palette.iter().enumerate() {
                writeln!(out, "{i}: {hex}")?;
            }
        }
        ("load", [target]) => {
            let hex = match target.parse::<usize>() {
                Ok(index) => session
                    .color()
                    .palette()
                    .get(index)
                    .map(str::to_owned)
                    .ok_or_else(|| CliError::Input(format!("no palette entry {index}")))?,
                Err(_) => (*target).to_string(),
            };
            session.color_mut().load_from_palette(&hex);
            show_color(session, out)?;
        }
        ("bmi", [age, weight, height]) => {
            let age: u32 = age
                .parse()
                .map_err(|_| CliError::Input(format!("age must be a whole number: {age}")))?;
            let weight = deskkit_core::parse_value(weight)?;
            let height = deskkit_core::parse_value(height)?;
            let (report, degrees) = session.bmi(age, weight, height)?;
            writeln!(out, "{}", report.describe(session.settings().bmi_precision))?;
            writeln!(out, "gauge: {degrees:.0} deg")?;
        }
        _ => {
            return Err(CliError::Input(format!(
                "unrecognized command: {line} (try 'help')"
            )))
        }
    }
    Ok(Outcome::Continue)
}

fn show_color<W: Write>(session: &Session, out: &mut W) -> Result<(), CliError> {
    let color = session.color();
    writeln!(out, "{}  {}", color.to_hex(), color.to_rgb_string())?;
    Ok(())
}
