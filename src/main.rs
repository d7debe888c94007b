mod config;

use crate::config::{RunMode, RunnerConfig};
use color_eyre::eyre::{Result, WrapErr};
use env_logger::Env;
use kickabout_core::{Match, MatchResult, MatchState, PlayerInput};
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

const FRAME_DELTA: f32 = 1.0 / 60.0;

#[derive(Serialize)]
struct MatchReport {
    index: usize,
    #[serde(flatten)]
    result: MatchResult,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = RunnerConfig::from_env()?;

    info!("playing {} match(es), mode {:?}", config.matches, config.mode);

    let started = Instant::now();

    let reports = match config.mode {
        RunMode::Fast => {
            let count = config.matches;
            tokio::task::spawn_blocking(move || play_fast(count))
                .await
                .wrap_err("match worker panicked")?
        }
        RunMode::Realtime => play_realtime(config.matches).await?,
    };

    info!("finished in {} ms", started.elapsed().as_millis());

    let json = serde_json::to_string_pretty(&reports).wrap_err("failed to serialize results")?;
    println!("{}", json);

    Ok(())
}

fn play_fast(count: usize) -> Vec<MatchReport> {
    (0..count)
        .into_par_iter()
        .map(|index| {
            let mut game = Match::new();
            game.start_new_match();

            while game.state() != MatchState::FullTime {
                game.update(FRAME_DELTA, &PlayerInput::idle());
            }

            report(index, &game)
        })
        .collect()
}

async fn play_realtime(count: usize) -> Result<Vec<MatchReport>> {
    let tasks: Vec<_> = (0..count)
        .map(|index| {
            tokio::spawn(async move {
                let mut game = Match::new();
                game.start_new_match();

                let mut interval = tokio::time::interval(Duration::from_secs_f32(FRAME_DELTA));

                while game.state() != MatchState::FullTime {
                    interval.tick().await;
                    game.update(FRAME_DELTA, &PlayerInput::idle());
                }

                report(index, &game)
            })
        })
        .collect();

    let mut reports = Vec::with_capacity(count);
    for task in tasks {
        reports.push(task.await.wrap_err("match task panicked")?);
    }

    Ok(reports)
}

fn report(index: usize, game: &Match) -> MatchReport {
    let result = game.result();

    info!(
        "match {} finished {}:{} ({:?})",
        index, result.home_goals, result.away_goals, result.outcome
    );

    MatchReport { index, result }
}
