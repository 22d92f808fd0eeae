use std::time::Duration;

use crossterm::style::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Slow,
    Medium,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Slow, Difficulty::Medium, Difficulty::Insane];

    /// Time between two snake moves.
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Slow => Duration::from_millis(400),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Insane => Duration::from_millis(75),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Slow => "Slow",
            Difficulty::Medium => "Medium",
            Difficulty::Insane => "Insane",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SnakeColor {
    Green,
    Blue,
    Red,
    Yellow,
    Magenta,
    Cyan,
    White,
}

impl SnakeColor {
    pub const ALL: [SnakeColor; 7] = [
        SnakeColor::Green,
        SnakeColor::Blue,
        SnakeColor::Red,
        SnakeColor::Yellow,
        SnakeColor::Magenta,
        SnakeColor::Cyan,
        SnakeColor::White,
    ];

    pub fn color(self) -> Color {
        match self {
            SnakeColor::Green => Color::Green,
            SnakeColor::Blue => Color::Blue,
            SnakeColor::Red => Color::Red,
            SnakeColor::Yellow => Color::Yellow,
            SnakeColor::Magenta => Color::Magenta,
            SnakeColor::Cyan => Color::Cyan,
            SnakeColor::White => Color::White,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnakeColor::Green => "Green",
            SnakeColor::Blue => "Blue",
            SnakeColor::Red => "Red",
            SnakeColor::Yellow => "Yellow",
            SnakeColor::Magenta => "Magenta",
            SnakeColor::Cyan => "Cyan",
            SnakeColor::White => "White",
        }
    }
}

/// Player choices made in the settings screen, kept for the lifetime of
/// the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub color: SnakeColor,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { difficulty: Difficulty::Medium, color: SnakeColor::Green }
    }
}
