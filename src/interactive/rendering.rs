//! TUI rendering with ratatui
//!
//! Gallows, revealed name and leaderboard panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{format_score, gallows, gallows_stage, spaced_pattern};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Game panel
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚡ POKEMON HANGMAN ⚡")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(11),   // Gallows and word
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(7), // History
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_attempts(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.state() else {
        let paragraph = Paragraph::new("No game in progress").block(
            Block::default()
                .title(" Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
        return;
    };

    let stage = gallows_stage(state.misses(), state.attempts_budget());
    let mut content: Vec<Line> = gallows(stage)
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(Color::DarkGray)))
        .collect();

    let word_style = match (state.is_over(), state.won()) {
        (true, true) => Style::default().fg(Color::Green),
        (true, false) => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    };
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        spaced_pattern(&state.revealed()),
        word_style.add_modifier(Modifier::BOLD),
    )));

    let guessed = state.guessed_tokens().join(" ");
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Guessed: "),
        Span::styled(guessed, Style::default().fg(Color::Cyan)),
    ]));
    if state.penalty() > 0.0 {
        content.push(Line::from(vec![
            Span::raw("Penalty: "),
            Span::styled(format_score(state.penalty()), Style::default().fg(Color::Red)),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let (remaining, budget) = app
        .state()
        .map_or((0, 0), |s| (s.attempts_remaining(), s.attempts_budget()));
    let percent = if budget == 0 {
        0
    } else {
        (u64::from(remaining) * 100 / u64::from(budget)) as u16
    };

    let color = if percent > 50 {
        Color::Green
    } else if percent > 20 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{budget} attempts remaining"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(5)
        .map(|entry| ListItem::new(format!("{}: {} → {}", entry.order, entry.guess, entry.message)))
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Leaderboard
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_leaderboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let high_scores = app.league.high_scores(None);

    let mut lines: Vec<Line> = if high_scores.is_empty() {
        vec![Line::from("No finished games yet")]
    } else {
        high_scores
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let (mark, color) = if entry.won {
                    ("🏆", Color::Green)
                } else {
                    ("💀", Color::Red)
                };
                Line::from(vec![
                    Span::raw(format!("{}. {mark} ", i + 1)),
                    Span::styled(format!("{:<10}", entry.user), Style::default().fg(color)),
                    Span::styled(
                        format!(" {:>5}", format_score(entry.score)),
                        Style::default().fg(Color::Yellow),
                    ),
                ])
            })
            .collect()
    };

    let average = app.league.average_attempts_message();
    if !average.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(average, Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" High Scores ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Letter => (
            " Press a letter to guess it | TAB to guess the whole name ",
            "",
            Color::Yellow,
        ),
        InputMode::Word => (
            " Type the whole name | Enter to submit, ESC to cancel ",
            app.word_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.user)).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let score_text = format!("Total score: {}", format_score(app.stats.total_score));
    let score = Paragraph::new(score_text).alignment(Alignment::Center);
    f.render_widget(score, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        _ => "Esc: Quit | Ctrl-N: New Game | TAB: Word",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
