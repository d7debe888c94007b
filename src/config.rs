use color_eyre::eyre::{Result, WrapErr, eyre};
use std::env;

/// How the runner paces simulated frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Simulate as fast as possible
    Fast,
    /// One frame every 1/60 s of wall time
    Realtime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub mode: RunMode,
    pub matches: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            mode: RunMode::Fast,
            matches: 1,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self> {
        Self::parse(env::var("MODE").ok().as_deref(), env::var("MATCHES").ok().as_deref())
    }

    fn parse(mode: Option<&str>, matches: Option<&str>) -> Result<Self> {
        let mode = match mode.map(str::trim) {
            None | Some("") | Some("FAST") => RunMode::Fast,
            Some("REALTIME") => RunMode::Realtime,
            Some(other) => return Err(eyre!("unknown MODE '{}', expected FAST or REALTIME", other)),
        };

        let matches = match matches.map(str::trim) {
            None | Some("") => 1,
            Some(value) => value
                .parse::<usize>()
                .wrap_err_with(|| format!("MATCHES must be a positive number, got '{}'", value))?,
        };

        if matches == 0 {
            return Err(eyre!("MATCHES must be at least 1"));
        }

        Ok(RunnerConfig { mode, matches })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_variables() {
        let config = RunnerConfig::parse(None, None).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_realtime_with_several_matches() {
        let config = RunnerConfig::parse(Some("REALTIME"), Some("4")).unwrap();

        assert_eq!(config.mode, RunMode::Realtime);
        assert_eq!(config.matches, 4);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(RunnerConfig::parse(Some("ONESHOT"), None).is_err());
        assert!(RunnerConfig::parse(None, Some("many")).is_err());
        assert!(RunnerConfig::parse(None, Some("0")).is_err());
    }
}
