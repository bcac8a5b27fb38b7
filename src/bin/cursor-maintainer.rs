//! cursor-maintainer -- keystroke session or approach comparison.
//!
//! Usage:
//!   cursor-maintainer --format <name> [--approach <name> | --config <file>]
//!                     [--testers a,b] [--prefer-right] [--cost <name>]
//!   cursor-maintainer --compare [--ignore-cursor]

use anyhow::Context;
use cursor_maintainer::config::CliOptions;
use cursor_maintainer::harness;

fn main() -> anyhow::Result<()> {
    // Log to stderr so stdout carries only JSON replies.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = CliOptions::parse(std::env::args().skip(1)).context("invalid arguments")?;

    if options.compare {
        let formats: Vec<&str> = match options.format.as_deref() {
            Some(format) => vec![format],
            None => vec!["commatize", "trimify"],
        };
        let outcomes = harness::compare(&harness::default_approaches(), &formats, options.ignore_cursor)?;
        print!("{}", harness::render(&outcomes));
        if !outcomes.iter().all(harness::Outcome::is_passing) {
            std::process::exit(1);
        }
        return Ok(());
    }

    let format = options
        .format
        .context("--format is required (e.g. --format commatize)")?;
    let formatter = options
        .approach
        .build(&format)
        .with_context(|| format!("cannot build {format} formatter"))?;

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = std::io::stdout().lock();
    cursor_maintainer::run_session(formatter.as_ref(), &mut reader, &mut stdout)?;
    Ok(())
}
