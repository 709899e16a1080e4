use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

/// Directory holding the puzzle inputs, relative to the working directory.
pub const INPUT_DIR: &str = "inputs";

pub fn input_path(day: u32) -> PathBuf {
    Path::new(INPUT_DIR).join(format!("day{day:02}.txt"))
}

pub fn read_input_file(day: u32) -> Result<String> {
    let path = input_path(day);
    let input = fs::read_to_string(&path)
        .with_context(|| format!("unable to read input file {}", path.display()))?;

    log::info!("read {} bytes from {}", input.len(), path.display());

    Ok(input)
}

/// Renders a diagnostic the way miette draws it on a terminal, minus the colours,
/// so the report survives being carried around as a plain `anyhow` message.
pub fn report(err: &dyn Diagnostic) -> anyhow::Error {
    let mut s = String::new();
    match GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .render_report(&mut s, err)
    {
        Ok(()) => anyhow!(s),
        Err(_) => anyhow!(err.to_string()),
    }
}

/// Runs `solve` on an embedded example and prints the answer. A mismatch with
/// `expected` is only logged; the caller still goes on to the real input.
pub fn check_example<T, E, F>(part: u32, example: &str, expected: T, solve: F) -> Result<T>
where
    T: Display + PartialEq,
    E: Diagnostic,
    F: Fn(&str) -> Result<T, E>,
{
    let res = solve(example).map_err(|e| report(&e))?;

    println!("{res}");

    if res != expected {
        log::warn!("part {part} example gave {res}, expected {expected}");
    }

    Ok(res)
}

pub fn solve_input<T, E, F>(day: u32, solve: F) -> Result<T>
where
    T: Display,
    E: Diagnostic,
    F: Fn(&str) -> Result<T, E>,
{
    let input = read_input_file(day)?;
    let res = solve(input.as_str()).map_err(|e| report(&e))?;

    println!("{res}");

    Ok(res)
}
