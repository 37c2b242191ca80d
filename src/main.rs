// Copyright 2026 the Knotwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes the knot as an SVG document to stdout.

use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use knotwork::{DebugOverlay, Knot, KnotParams, RenderConfig, Renderer, StrandMode};

const USAGE: &str = "\
Usage: knotwork [--debug] [--ribbon]

Writes a seven-fold Celtic knot as SVG to stdout.

Options:
  --debug    draw construction lines, crossovers, grid and rose curve
  --ribbon   draw each strand as a ribbon instead of a single line
  --help     print this message

Set RUST_LOG=debug to trace the construction on stderr.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Options {
    debug: bool,
    ribbon: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Options),
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "--debug" => options.debug = true,
            "--ribbon" => options.ribbon = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("unrecognized argument `{other}`")),
        }
    }
    Ok(Command::Run(options))
}

fn run(options: Options, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let knot = Knot::new(&KnotParams::default())?;
    let config = RenderConfig {
        strands: if options.ribbon {
            StrandMode::RIBBON
        } else {
            StrandMode::Line
        },
        ..Default::default()
    };
    let mut renderer = Renderer::new(&config);
    if options.debug {
        renderer = renderer.with_overlay(DebugOverlay::ALL);
    }
    let mut svg = String::new();
    renderer.render(&knot, &mut svg)?;
    log::info!("rendered {} bytes of SVG", svg.len());

    out.write_all(svg.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Write a diagnostic line to `err`, falling back to the log.
fn report(err: &mut impl Write, message: &str) {
    if writeln!(err, "knotwork: {message}").is_err() {
        log::error!("{message}");
    }
}

/// Run the command line and return the process exit status.
///
/// The status is 0 on success, 1 if rendering or writing fails and 2 for
/// unrecognized arguments.
fn run_cli(
    args: impl IntoIterator<Item = String>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    let result = match parse_args(args) {
        Ok(Command::Run(options)) => {
            log::debug!("{options:?}");
            run(options, out)
        }
        Ok(Command::Help) => writeln!(out, "{USAGE}").map_err(Into::into),
        Err(message) => {
            report(err, &format!("{message}\n\n{USAGE}"));
            return 2;
        }
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            report(err, &e.to_string());
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let status = run_cli(
        std::env::args().skip(1),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    ExitCode::from(status)
}
