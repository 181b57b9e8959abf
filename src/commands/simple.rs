//! Simple interactive CLI mode
//!
//! Text-based hangman game without TUI

use super::GameConfig;
use crate::core::Guess;
use crate::league::{GameId, League};
use crate::output::display::{print_game_view, print_history, print_leaderboard};
use crate::wordlists::Pokedex;
use std::io::{self, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(Guess),
    History,
    Scores,
    Cancel,
    New,
    Quit,
}

/// Interpret one line of input
///
/// `!word` guesses a whole word; anything else that is not a command is a
/// letter guess (the engine rejects anything longer than one character).
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "new" => Command::New,
        "cancel" => Command::Cancel,
        "history" => Command::History,
        "scores" => Command::Scores,
        _ => trimmed.strip_prefix('!').map_or_else(
            || Command::Guess(Guess::Letter(trimmed.to_string())),
            |word| Command::Guess(Guess::Word(word.trim().to_string())),
        ),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a game
/// cannot be created.
pub fn run_simple(config: &GameConfig, pokedex: &Pokedex) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Pokemon Hangman - Text Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the Pokémon one letter at a time, or the whole name at once.");
    println!("  - Type a single letter to guess it");
    println!("  - Type !name to guess the whole name (wrong names add a penalty)\n");
    println!("Commands: 'history', 'scores', 'cancel', 'new', 'quit'\n");

    let mut league = League::new(config.attempts);
    league
        .create_user(&config.user, config.email.as_deref())
        .map_err(|e| e.to_string())?;

    let mut rng = rand::rng();
    let mut game = start_game(&mut league, &config.user, pokedex, &mut rng)?;

    loop {
        let input = get_user_input("Guess")?;

        match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                if let Ok(view) = league.cancel_game(game)
                    && !view.game_over
                {
                    println!("{}", view.message);
                }
                game = start_game(&mut league, &config.user, pokedex, &mut rng)?;
            }
            Command::Cancel => {
                let view = league.cancel_game(game).map_err(|e| e.to_string())?;
                println!("{}\n", view.message);
                if !view.game_over {
                    game = start_game(&mut league, &config.user, pokedex, &mut rng)?;
                }
            }
            Command::History => {
                let entries = league.game_history(game).map_err(|e| e.to_string())?;
                print_history(entries);
            }
            Command::Scores => print_leaderboard(&league),
            Command::Guess(guess) => {
                let view = league.guess(game, &guess).map_err(|e| e.to_string())?;
                let state = league.game_state(game).map_err(|e| e.to_string())?;
                print_game_view(&view, state);

                if view.game_over {
                    print_leaderboard(&league);
                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            game = start_game(&mut league, &config.user, pokedex, &mut rng)?;
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn start_game<R: rand::Rng + ?Sized>(
    league: &mut League,
    user: &str,
    pokedex: &Pokedex,
    rng: &mut R,
) -> Result<GameId, String> {
    let view = league
        .new_random_game(user, pokedex, rng)
        .map_err(|e| e.to_string())?;
    let state = league.game_state(view.key).map_err(|e| e.to_string())?;
    print_game_view(&view, state);
    Ok(view.key)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_letter() {
        assert_eq!(
            parse_command("p"),
            Command::Guess(Guess::Letter("p".to_string()))
        );
    }

    #[test]
    fn parse_word_guess() {
        assert_eq!(
            parse_command("!Pikachu"),
            Command::Guess(Guess::Word("Pikachu".to_string()))
        );
        assert_eq!(
            parse_command("! raichu "),
            Command::Guess(Guess::Word("raichu".to_string()))
        );
    }

    #[test]
    fn parse_commands_ignore_case() {
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command("History"), Command::History);
        assert_eq!(parse_command("scores"), Command::Scores);
        assert_eq!(parse_command("cancel"), Command::Cancel);
    }

    #[test]
    fn multi_letter_input_is_a_letter_guess() {
        // Rejected later by the engine with "You can only guess a single letter."
        assert_eq!(
            parse_command("ab"),
            Command::Guess(Guess::Letter("ab".to_string()))
        );
    }
}
