//! Formatting utilities for terminal output

/// Stages of the gallows, one more body part per stage
const GALLOWS_STAGES: usize = 6;

/// Spread a revealed pattern out for readability: `P______` -> `P _ _ _ _ _ _`
#[must_use]
pub fn spaced_pattern(revealed: &str) -> String {
    let chars: Vec<String> = revealed.chars().map(String::from).collect();
    chars.join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing attempts left out of the game's budget
#[must_use]
pub fn attempts_bar(remaining: u32, budget: u32) -> String {
    create_progress_bar(f64::from(remaining), f64::from(budget), budget as usize)
}

/// Gallows stage for a number of misses, scaled to the attempt budget
#[must_use]
pub fn gallows_stage(misses: u32, budget: u32) -> usize {
    if budget == 0 {
        return GALLOWS_STAGES;
    }
    let stage = (misses as usize * GALLOWS_STAGES).div_ceil(budget as usize);
    stage.min(GALLOWS_STAGES)
}

/// ASCII gallows drawn up to `stage` (0 = empty, 6 = complete)
#[must_use]
pub fn gallows(stage: usize) -> Vec<String> {
    let part = |n: usize, c: char| if stage >= n { c } else { ' ' };
    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Score with one decimal, the way outcome messages print it
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_inserts_spaces() {
        assert_eq!(spaced_pattern("P______"), "P _ _ _ _ _ _");
        assert_eq!(spaced_pattern(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn attempts_bar_one_cell_per_attempt() {
        assert_eq!(attempts_bar(4, 6), "████░░");
        assert_eq!(attempts_bar(0, 6), "░░░░░░");
    }

    #[test]
    fn gallows_stage_scales_with_budget() {
        assert_eq!(gallows_stage(0, 6), 0);
        assert_eq!(gallows_stage(3, 6), 3);
        assert_eq!(gallows_stage(6, 6), 6);
        assert_eq!(gallows_stage(1, 3), 2);
        assert_eq!(gallows_stage(1, 12), 1);
        assert_eq!(gallows_stage(0, 0), 6);
    }

    #[test]
    fn gallows_empty_and_complete() {
        let empty = gallows(0);
        assert_eq!(empty[2], "      |");
        assert_eq!(empty[3], "      |");

        let full = gallows(6);
        assert_eq!(full[2], "  O   |");
        assert_eq!(full[3], " /|\\  |");
        assert_eq!(full[4], " / \\  |");
        assert!(full.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn format_score_one_decimal() {
        assert_eq!(format_score(5.7), "5.7");
        assert_eq!(format_score(10.0), "10.0");
    }
}
