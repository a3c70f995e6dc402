//! REBA Replay
//!
//! Scores a recorded landmark stream, one JSON frame per line:
//!
//! ```text
//! {"timestamp_ms": 0, "landmarks": [{"x": 0.5, "y": 0.1, "visibility": 0.98}, ...]}
//! ```
//!
//! Reads stdin when no file is given. Prints the final session snapshot as
//! JSON on stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;

use reba_core::{LandmarkFrame, RebaError, RebaResult};
use reba_runtime::{init_tracing, RebaSession, SessionConfig, TelemetryConfig};

/// Score a recorded landmark stream and print the final snapshot
#[derive(Parser, Debug)]
#[command(name = "reba-replay")]
#[command(version)]
#[command(about = "Replay JSON-lines landmark frames through a REBA session", long_about = None)]
struct Args {
    /// JSON-lines frame file, stdin when omitted
    input: Option<PathBuf>,

    /// JSON session configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raise the visibility threshold for noisy detectors
    #[arg(long)]
    strict: bool,

    /// Force/load base score (0-2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=2))]
    force_load: Option<u8>,

    /// Print one score line per frame
    #[arg(long)]
    per_frame: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn session_config(args: &Args) -> RebaResult<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)?,
        None if args.strict => SessionConfig::strict(),
        None => SessionConfig::default(),
    };
    if args.strict {
        config.pose.visibility_threshold = SessionConfig::strict().pose.visibility_threshold;
    }
    if let Some(base) = args.force_load {
        config.force_load_base = base;
    }
    Ok(config)
}

fn parse_frame(line: &str, number: usize) -> RebaResult<LandmarkFrame> {
    serde_json::from_str(line).map_err(|e| RebaError::InvalidFrame {
        line: number,
        reason: e.to_string(),
    })
}

fn replay(args: &Args, session: &mut RebaSession) -> RebaResult<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let frame = parse_frame(&line, idx + 1)?;
        let breakdown = session.process_frame(&frame);

        if args.per_frame {
            let row = serde_json::json!({
                "timestamp_ms": frame.timestamp.as_millis(),
                "score_a": breakdown.posture_score_a,
                "score_b": breakdown.posture_score_b,
                "score_c": breakdown.table_c_score,
                "reba": breakdown.reba_score_final,
                "risk": breakdown.risk.label(),
            });
            writeln!(out, "{row}")?;
        }
    }

    Ok(())
}

fn run() -> RebaResult<()> {
    let args = Args::parse();

    let telemetry = if args.json_logs {
        TelemetryConfig::json()
    } else {
        TelemetryConfig::default()
    };
    init_tracing(&telemetry)?;

    let config = session_config(&args)?;
    let mut session = RebaSession::with_config(config)?;
    let input = match &args.input {
        Some(path) => path.display().to_string(),
        None => "<stdin>".to_string(),
    };
    tracing::info!(
        input = %input,
        force_load = session.force_load_base(),
        "replay started"
    );

    replay(&args, &mut session)?;

    let snapshot = session.snapshot();
    tracing::info!(
        frames = snapshot.stats.frames,
        seconds = snapshot.elapsed_secs,
        reba = snapshot.scores.reba_score_final,
        risk = snapshot.risk_label,
        "replay finished"
    );
    println!("{}", snapshot.to_json());

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("reba-replay: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["reba-replay"]).unwrap();
        assert!(args.input.is_none());
        assert!(!args.strict);

        let config = session_config(&args).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "reba-replay",
            "frames.jsonl",
            "--strict",
            "--force-load",
            "2",
            "--per-frame",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("frames.jsonl")));
        assert!(args.per_frame);

        let config = session_config(&args).unwrap();
        assert_eq!(config.force_load_base, 2);
        assert_eq!(config.pose.visibility_threshold, 0.5);
    }

    #[test]
    fn test_force_load_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["reba-replay", "--force-load", "3"]).is_err());
        assert!(Args::try_parse_from(["reba-replay", "--bogus"]).is_err());
    }

    #[test]
    fn test_bad_frame_reports_line() {
        assert!(matches!(
            parse_frame("{not json", 7),
            Err(RebaError::InvalidFrame { line: 7, .. })
        ));
    }
}
