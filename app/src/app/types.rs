use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single seat in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatStatus::Available => write!(f, "Available"),
            SeatStatus::Booked => write!(f, "Booked"),
            SeatStatus::Selected => write!(f, "Selected"),
        }
    }
}

/// Display/selection key for a seat: row label plus 1-based seat number.
///
/// Seat ids are derived from a grid address and never stored on the grid
/// itself. `SeatId::new("A", 0)` displays as `A1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    row: String,
    number: usize,
}

impl SeatId {
    /// Build an id from a row label and a 0-based position within the row.
    pub fn new(row: impl Into<String>, position: usize) -> Self {
        SeatId {
            row: row.into(),
            number: position + 1,
        }
    }

    /// Parse the textual form (`A1`, `AA12`). The row is the leading
    /// non-digit prefix and the number must be at least 1.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let split = s.find(|c: char| c.is_ascii_digit())?;
        let (row, digits) = s.split_at(split);
        if row.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let number: usize = digits.parse().ok()?;
        if number == 0 {
            return None;
        }
        Some(SeatId {
            row: row.to_string(),
            number,
        })
    }

    pub fn row(&self) -> &str {
        &self.row
    }

    /// 1-based seat number as shown to the user.
    pub fn number(&self) -> usize {
        self.number
    }

    /// 0-based position within the row.
    pub fn position(&self) -> usize {
        self.number - 1
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

/// One candidate screening date as shown on the date strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDate {
    /// Short weekday label, e.g. `MON`.
    pub day: String,
    /// Day of month, e.g. `12`.
    pub date: String,
}

impl ShowDate {
    pub fn new(day: impl Into<String>, date: impl Into<String>) -> Self {
        ShowDate {
            day: day.into(),
            date: date.into(),
        }
    }
}

impl fmt::Display for ShowDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.date)
    }
}

/// Static movie details shown in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInfo {
    pub title: String,
    pub rating: String,
    pub duration: String,
    pub genre: String,
}

impl Default for MovieInfo {
    fn default() -> Self {
        MovieInfo {
            title: "Dune: Part Two".to_string(),
            rating: "8.9".to_string(),
            duration: "2h 46m".to_string(),
            genre: "Sci-Fi, Adventure".to_string(),
        }
    }
}

/// Section of the screen currently driven by the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Date,
    Time,
    Seats,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Date => Focus::Time,
            Focus::Time => Focus::Seats,
            Focus::Seats => Focus::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Date => Focus::Seats,
            Focus::Time => Focus::Date,
            Focus::Seats => Focus::Time,
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Focus::Date => write!(f, "Date"),
            Focus::Time => write!(f, "Time"),
            Focus::Seats => write!(f, "Seats"),
        }
    }
}

/// Highlighted seat in the seat map: row index into the grid plus
/// 0-based position within that row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeatCursor {
    pub row: usize,
    pub position: usize,
}

/// Top-level interaction mode of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Message { title: String, content: String },
}
