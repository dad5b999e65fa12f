//! Command-line configuration for the terminal runner.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::FRAME_MS;

pub const USAGE: &str = "\
usage: blockfall [--seed <u32>] [--frame-ms <ms>] [--dump-snapshot]

  --seed <u32>      piece sequence seed (default: from the clock)
  --frame-ms <ms>   frame interval in milliseconds (default: 16)
  --dump-snapshot   print the final game snapshot as JSON on exit

keys: arrows/wasd/hjkl move, up rotates, p pauses, r restarts, q quits";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub frame_ms: u64,
    pub dump_snapshot: bool,
}

impl RunConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            frame_ms: FRAME_MS,
            dump_snapshot: false,
        }
    }
}

/// Seed derived from the wall clock, for runs without `--seed`.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Parse arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String], default_seed: u32) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::with_seed(default_seed);
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("config: missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("config: invalid --seed value: {}", v))?;
            }
            "--frame-ms" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("config: missing value for --frame-ms"))?;
                config.frame_ms = match v.parse::<u64>() {
                    Ok(ms) if ms > 0 => ms,
                    _ => return Err(anyhow!("config: invalid --frame-ms value: {}", v)),
                };
            }
            "--dump-snapshot" => config.dump_snapshot = true,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("config: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(Some(config))
}
