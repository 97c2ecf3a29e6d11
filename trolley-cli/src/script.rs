//! Fixed narrative copy shown around the scenarios.

pub const SPEED_MENU_HEADER: &str = "\nChoose how quickly the text should appear:";
pub const SPEED_PROMPT: &str = "Enter 1, 2, or 3: ";
pub const SPEED_RETRY: &str = "Please enter 1, 2, or 3.";

pub const INTRO: &[&str] = &[
    "\nWELCOME TO THE TROLLEY PROBLEM MORAL SIMULATOR\n",
    "I used to think trolley problems were simple:",
    "   'save the most lives = right answer.'",
    "But in class, I learned that morality",
    "is NOT just about numbers. Intention, agency, and rights matter.",
    "This program will show why.\n",
];

pub const DECISION_MENU: &[&str] = &[
    "\nWhat do you choose?",
    "1. Intervene (pull lever / push / swerve)",
    "2. Do nothing (let events occur)",
];
pub const DECISION_PROMPT: &str = "Enter 1 or 2: ";
pub const DECISION_RETRY: &str = "Please enter 1 or 2.";

pub const EVALUATION_OPEN: &str = "\n=== Philosophical Evaluation ===\n";
pub const EVALUATION_CLOSE: &str = "\n================================\n";

pub const RATING_PROMPT: &str = "On a scale of 1–5, how uncomfortable did that feel? ";
pub const RATING_RETRY: &str = "Please enter a number 1–5 (or press ENTER to skip).";

pub const CONTINUE_PROMPT: &str = "Press ENTER to continue...\n";

pub const SUMMARY_HEADER: &str = "\nSESSION SUMMARY:";
pub const NO_RATINGS: &str = "No discomfort ratings provided.";

pub const FINAL_LESSON: &[&str] = &[
    "\nFINAL LESSON:",
    "Even when two scenarios have identical numbers,",
    "we judge them differently because morality is more than totals.",
    "This is the core insight of trolley philosophy—and why I originally misunderstood it.",
    "\nThank you for exploring moral reasoning!\n",
];

pub const FAREWELL: &str = "\n\nSession ended. Thanks for exploring moral reasoning!\n";

#[must_use]
pub fn scenario_heading(name: &str) -> String {
    format!("\n--- Scenario: {name} ---\n")
}

#[must_use]
pub fn speed_option(key: &str, label: &str) -> String {
    let mut chars = label.chars();
    let title = chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect::<String>())
        .unwrap_or_default();
    format!("{key}. {title} pacing")
}

#[must_use]
pub fn speed_confirmation(label: &str) -> String {
    format!("\nText speed set to {label} mode.\n")
}

#[must_use]
pub fn decision_confirmation(intervened: bool, saved: u32, killed: u32) -> String {
    if intervened {
        format!("\nYou chose to intervene. Saved {saved}, killed {killed}.")
    } else {
        format!("\nYou chose not to intervene. Saved {saved}, killed {killed}.")
    }
}

#[must_use]
pub fn totals_line(saved: u32, killed: u32) -> String {
    format!("Total saved: {saved} | Total killed: {killed}")
}

#[must_use]
pub fn worst_line(name: &str, rating: u8, max: u8) -> String {
    format!("Most uncomfortable scenario (you rated {rating}/{max}): {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_option_title_cases_label() {
        assert_eq!(speed_option("1", "cinematic"), "1. Cinematic pacing");
    }

    #[test]
    fn confirmation_wording_follows_decision() {
        assert!(decision_confirmation(true, 5, 1).contains("You chose to intervene. Saved 5, killed 1."));
        assert!(decision_confirmation(false, 0, 5).contains("not to intervene"));
    }
}
