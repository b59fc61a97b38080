//! String evolution CLI: evolves random strings toward a target and prints
//! the elite of every generation.
//!
//! Usage:
//!   u-strevo [TARGET] [--population N] [--seed S] [--max-generations G]
//!   RUST_LOG=debug u-strevo "Hello, World!"

use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use u_strevo::evo::{EvoConfig, EvoResult, EvoRunner, Target};

const DEFAULT_TARGET: &str = "Hello, World!";

#[derive(Parser)]
#[command(name = "u-strevo")]
#[command(about = "Evolve random printable strings toward a target string")]
struct Args {
    /// String to evolve toward
    #[arg(default_value = DEFAULT_TARGET)]
    target: String,

    /// Number of individuals in the population
    #[arg(long, default_value_t = EvoConfig::default().population_size)]
    population: usize,

    /// Random seed (defaults to system entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many generations (defaults to running until matched)
    #[arg(long)]
    max_generations: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let target = Target::new(args.target);

    let mut config = EvoConfig::default().with_population_size(args.population);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(cap) = args.max_generations {
        config = config.with_max_generations(cap);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = report_run(&target, &config, &mut out)?;

    if !result.converged {
        bail!(
            "no exact match after {} generations (best error {}: {:?})",
            result.generations,
            result.best_error,
            result.best
        );
    }

    writeln!(out, "{}", result.best).context("failed to write result")?;
    Ok(())
}

/// Runs and writes one line per generation to `out`.
///
/// A failed write cancels the run at the next generation and is returned.
fn report_run<W: Write>(
    target: &Target,
    config: &EvoConfig,
    out: &mut W,
) -> anyhow::Result<EvoResult> {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    let mut write_result = Ok(());

    let result = EvoRunner::run_with_cancel(target, config, Some(cancel), |report| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{}", report);
            if write_result.is_err() {
                flag.store(true, Ordering::Relaxed);
            }
        }
    })?;
    write_result.context("failed to write generation report")?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `lines` newline-terminated lines, then fails every write.
    struct ClosingPipe {
        lines: usize,
        written: Vec<u8>,
    }

    impl Write for ClosingPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.lines == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.lines -= buf.iter().filter(|&&b| b == b'\n').count().min(self.lines);
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_run_writes_every_generation() {
        let config = EvoConfig::default()
            .with_population_size(20)
            .with_max_generations(3)
            .with_seed(1);
        let mut out = Vec::new();

        let result = report_run(&Target::from("a\tb"), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(result.generations, 3);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Gen:   1 | Error: "));
        assert!(lines[2].starts_with("Gen:   3 | Error: "));
    }

    #[test]
    fn test_write_failure_stops_unbounded_run() {
        // Unreachable target and no cap: only the failed write can end it.
        let config = EvoConfig::default().with_population_size(20).with_seed(2);
        let mut out = ClosingPipe {
            lines: 2,
            written: Vec::new(),
        };

        let err = report_run(&Target::from("a\tb"), &config, &mut out).unwrap_err();

        assert!(err.to_string().contains("failed to write generation report"));
        assert_eq!(String::from_utf8_lossy(&out.written).lines().count(), 2);
    }

    #[test]
    fn test_population_default_follows_config() {
        let args = Args::parse_from(["u-strevo"]);
        assert_eq!(args.population, EvoConfig::default().population_size);
        assert_eq!(args.target, DEFAULT_TARGET);
    }
}
