//! Benchmark command
//!
//! Plays the automated player against many targets and aggregates the results.

use crate::solver::{GuessStrategy, PlayResult, Player};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_score: f64,
    pub average_guesses: f64,
    /// Games per whole-number score bucket (0 = loss, 10 = perfect)
    pub score_distribution: BTreeMap<u32, usize>,
    /// Games per number of attempts left at the end
    pub attempts_left: BTreeMap<u32, usize>,
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run benchmark on a set of target names
///
/// Games are played in parallel. Targets that are not playable words are
/// skipped.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark<S: GuessStrategy + Sync>(
    player: &Player<S>,
    targets: &[&str],
    attempts: u32,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let results: Vec<PlayResult> = targets
        .par_iter()
        .filter_map(|target| {
            let result = player.play(target, attempts).ok();
            pb.inc(1);
            result
        })
        .collect();
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    summarize(&results, duration)
}

fn summarize(results: &[PlayResult], duration: Duration) -> BenchmarkResult {
    let total_games = results.len();
    let wins = results.iter().filter(|r| r.won).count();
    let total_score: f64 = results.iter().filter_map(|r| r.score).sum();
    let total_guesses: usize = results.iter().map(|r| r.steps.len()).sum();

    let mut score_distribution = BTreeMap::new();
    let mut attempts_left = BTreeMap::new();
    for result in results {
        let bucket = result.score.unwrap_or(0.0).floor() as u32;
        *score_distribution.entry(bucket).or_insert(0) += 1;
        *attempts_left.entry(result.attempts_remaining).or_insert(0) += 1;
    }

    let mut hardest: Vec<(String, usize)> = results
        .iter()
        .map(|r| (r.target.clone(), r.steps.len()))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(10);

    let per_game = |total: f64| {
        if total_games == 0 {
            0.0
        } else {
            total / total_games as f64
        }
    };

    debug!("benchmark: {wins}/{total_games} won in {duration:?}");

    BenchmarkResult {
        total_games,
        wins,
        losses: total_games - wins,
        win_rate: per_game(wins as f64),
        average_score: per_game(total_score),
        average_guesses: per_game(total_guesses as f64),
        score_distribution,
        attempts_left,
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
