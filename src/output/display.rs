//! Display functions for command results

use super::formatters::{attempts_bar, format_score, gallows, gallows_stage, spaced_pattern};
use crate::commands::BenchmarkResult;
use crate::core::GameState;
use crate::league::{GameView, HistoryEntry, League};
use crate::solver::PlayResult;
use colored::Colorize;

/// Print a game as returned by a league operation
pub fn print_game_view(view: &GameView, state: &GameState) {
    println!();
    for line in gallows(gallows_stage(state.misses(), state.attempts_budget())) {
        println!("    {}", line.bright_black());
    }

    println!(
        "\n  {}   {}",
        spaced_pattern(&view.word_so_far).bright_yellow().bold(),
        format!("[{}]", view.key).bright_black()
    );
    println!(
        "  Attempts: {} {}",
        attempts_bar(view.attempts_remaining, state.attempts_budget()).green(),
        view.attempts_remaining
    );
    if state.penalty() > 0.0 {
        println!("  Penalty:  {}", format_score(state.penalty()).red());
    }
    if !state.guessed_tokens().is_empty() {
        println!("  Guessed:  {}", state.guessed_tokens().join(", "));
    }

    let message = if view.game_over && state.won() {
        view.message.green().bold()
    } else if view.game_over {
        view.message.red().bold()
    } else {
        view.message.normal()
    };
    println!("\n  {message}\n");

    if view.game_over && !state.won() {
        println!("  The Pokémon was {}\n", state.target().bright_cyan().bold());
    }
}

/// Print the moves of a game
pub fn print_history(entries: &[HistoryEntry]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "Move History".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    if entries.is_empty() {
        println!("  No moves yet.");
    }
    for entry in entries {
        println!(
            "  {}. {:<12} {}",
            entry.order.to_string().bright_black(),
            entry.guess.bright_white().bold(),
            entry.message
        );
    }
    println!();
}

/// Print high scores, user rankings and the open-game average
pub fn print_leaderboard(league: &League) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🏆 {}", "High scores:".bright_cyan().bold());
    let high_scores = league.high_scores(None);
    if high_scores.is_empty() {
        println!("   No finished games yet.");
    }
    for (i, entry) in high_scores.iter().enumerate() {
        let result = if entry.won { "won".green() } else { "lost".red() };
        println!(
            "   {}. {:<12} {:>5}  {} {}",
            i + 1,
            entry.user,
            format_score(entry.score).bright_yellow(),
            result,
            entry.date.to_string().bright_black()
        );
    }

    println!("\n📊 {}", "Rankings:".bright_cyan().bold());
    for (i, ranking) in league.user_rankings().iter().enumerate() {
        println!(
            "   {}. {:<12} {}",
            i + 1,
            ranking.user_name,
            format_score(ranking.total_score).bright_yellow()
        );
    }

    let average = league.average_attempts_message();
    if !average.is_empty() {
        println!("\n   {average}");
    }
    println!();
}

/// Print the result of solving a name
pub fn print_solve_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {:<12} {}",
            i + 1,
            step.guess.text(),
            spaced_pattern(&step.revealed)
        );

        if verbose {
            println!("  {}", step.message);
            println!("  Attempts left: {}", step.attempts_remaining);
        }
    }

    println!();
    match (result.won, result.score) {
        (true, Some(score)) => println!(
            "{}",
            format!(
                "✅ Solved in {} guesses! Score {}",
                result.steps.len(),
                format_score(score)
            )
            .green()
            .bold()
        ),
        (true, None) => println!("{}", "✅ Already solved".green().bold()),
        (false, _) if result.finished => println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        ),
        (false, _) => println!("{}", "⚠️  Ran out of guesses to try".yellow().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Score distribution:".bright_cyan().bold());
    print_distribution(&result.score_distribution, result.total_games);

    println!("\n🪢 {}", "Attempts left:".bright_cyan().bold());
    print_distribution(&result.attempts_left, result.total_games);

    if !result.hardest.is_empty() {
        println!("\n🔍 {}", "Longest games:".bright_cyan().bold());
        for (name, guesses) in &result.hardest {
            println!("   {name:<12} {guesses} guesses");
        }
    }
}

fn print_distribution(distribution: &std::collections::BTreeMap<u32, usize>, total: usize) {
    for (&bucket, &count) in distribution {
        let pct = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {bucket:>2}: {bar} {count:4} ({pct:5.1}%)");
    }
}
