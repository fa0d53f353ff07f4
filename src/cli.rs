//! Command line: `tektris [--seed N]`.

use anyhow::{anyhow, Result};

/// Environment variable consulted when `--seed` is not given
pub const SEED_ENV: &str = "TEKTRIS_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostConfig {
    pub seed: Option<u32>,
    pub help: bool,
}

pub const USAGE: &str = "usage: tektris [--seed N]\n\n\
  arrows / wasd / hjkl  move, rotate, fall\n\
  space / enter         drop\n\
  r                     restart after game over\n\
  q / esc               quit";

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<HostConfig> {
    let mut config = HostConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = Some(parse_seed(v)?);
            }
            "-h" | "--help" => {
                config.help = true;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Seed from the command line, else from `env_value`, else `fallback`.
pub fn resolve_seed(config: &HostConfig, env_value: Option<&str>, fallback: u32) -> Result<u32> {
    if let Some(seed) = config.seed {
        return Ok(seed);
    }
    match env_value {
        Some(v) if !v.trim().is_empty() => parse_seed(v.trim())
            .map_err(|e| anyhow!("{}: {}", SEED_ENV, e)),
        _ => Ok(fallback),
    }
}

/// Message printed for a rejected command line: the error, then the usage text.
pub fn usage_error(err: &anyhow::Error) -> String {
    format!("[Tektris] {}\n{}", err, USAGE)
}

fn parse_seed(v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", v))
}
