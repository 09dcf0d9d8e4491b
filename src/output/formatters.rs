//! Formatting utilities for terminal output

use crate::core::{CodeWord, Feedback};
use colored::{Color, Colorize};

/// Board colours, indexed by colour id - 1
const PALETTE: [(&str, Color); 6] = [
    ("red", Color::Red),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    (
        "orange",
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
    ),
    ("purple", Color::Magenta),
];

/// Name of a board colour, if it has one
#[must_use]
pub fn colour_name(colour: u8) -> Option<&'static str> {
    PALETTE
        .get(usize::from(colour).checked_sub(1)?)
        .map(|(name, _)| *name)
}

/// Render a code as coloured pegs followed by its digits
///
/// Colours beyond the board palette are shown as plain digits.
#[must_use]
pub fn code_swatch(code: &CodeWord) -> String {
    let pegs: String = code
        .pegs()
        .iter()
        .map(|&colour| {
            match usize::from(colour)
                .checked_sub(1)
                .and_then(|i| PALETTE.get(i))
            {
                Some((_, c)) => "●".color(*c).to_string(),
                None => colour.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{pegs}  {}", code.to_string().bright_white().bold())
}

/// Format feedback as key pegs: `●` exact, `○` colour only, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: u8) -> String {
    let exact = usize::from(feedback.exact());
    let colour = usize::from(feedback.colour_only());
    let empty = usize::from(length).saturating_sub(exact + colour);

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(colour),
        "·".repeat(empty)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
