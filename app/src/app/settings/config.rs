use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::app::core::seat_grid::check_layout;
use crate::app::settings::runtime_keybinds::parse_key;
use crate::app::settings::runtime_keybinds::ACTIONS;
use crate::app::types::{MovieInfo, SeatId, ShowDate};
use crate::errors::{BookingError, SettingsError};

/// Everything needed to build one booking screen: candidate dates and
/// showtimes, the seat layout and the per-seat price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingSettings {
    pub price_per_seat: u32,
    pub rows: Vec<String>,
    pub seats_per_row: usize,
    /// Probability that a seat starts booked when the layout is random.
    pub booked_probability: f64,
    pub showtimes: Vec<String>,
    pub default_date: usize,
    pub default_time: usize,
    pub dates: Vec<ShowDate>,
}

impl Default for BookingSettings {
    fn default() -> Self {
        BookingSettings {
            price_per_seat: 250,
            rows: ["A", "B", "C", "D", "E", "F", "G", "H"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seats_per_row: 8,
            booked_probability: 0.3,
            showtimes: ["10:30 AM", "1:45 PM", "4:30 PM", "7:15 PM", "10:00 PM"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_date: 1,
            default_time: 2,
            dates: vec![
                ShowDate::new("MON", "12"),
                ShowDate::new("TUE", "13"),
                ShowDate::new("WED", "14"),
                ShowDate::new("THU", "15"),
                ShowDate::new("FRI", "16"),
            ],
        }
    }
}

impl BookingSettings {
    /// Check that `seat` addresses a seat of the configured layout.
    pub fn check_seat(&self, seat: &SeatId) -> Result<(), BookingError> {
        let known_row = self.rows.iter().any(|r| r == seat.row());
        if !known_row || seat.position() >= self.seats_per_row {
            return Err(BookingError::InvalidSeatReference {
                row: seat.row().to_string(),
                position: seat.position(),
            });
        }
        Ok(())
    }
}

/// Top-level application settings, persisted as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `dark` or `light`.
    pub theme: String,
    pub currency: String,
    pub movie: MovieInfo,
    pub booking: BookingSettings,
    /// Per-action key overrides, e.g. `book = ["b", "enter"]`.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            currency: "₹".to_string(),
            movie: MovieInfo::default(),
            booking: BookingSettings::default(),
            keybinds: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the invariants the booking core relies on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let b = &self.booking;
        check_layout(&b.rows, b.seats_per_row).map_err(|e| SettingsError::Invalid(e.to_string()))?;
        if b.dates.is_empty() {
            return Err("at least one date is required".to_string().into());
        }
        if b.showtimes.is_empty() {
            return Err("at least one showtime is required".to_string().into());
        }
        if b.default_date >= b.dates.len() {
            return Err(format!(
                "default_date {} is out of range (have {} dates)",
                b.default_date,
                b.dates.len()
            )
            .into());
        }
        if b.default_time >= b.showtimes.len() {
            return Err(format!(
                "default_time {} is out of range (have {} showtimes)",
                b.default_time,
                b.showtimes.len()
            )
            .into());
        }
        if !(0.0..=1.0).contains(&b.booked_probability) {
            return Err(format!(
                "booked_probability {} must be within [0, 1]",
                b.booked_probability
            )
            .into());
        }
        match self.theme.as_str() {
            "dark" | "light" => {}
            other => return Err(format!("unknown theme `{}`", other).into()),
        }
        for (action, keys) in &self.keybinds {
            if !ACTIONS.contains(&action.as_str()) {
                return Err(format!("unknown keybind action `{}`", action).into());
            }
            for k in keys {
                parse_key(k)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_sample_screen() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.booking.price_per_seat, 250);
        assert_eq!(s.booking.rows.len(), 8);
        assert_eq!(s.booking.seats_per_row, 8);
        assert_eq!(s.booking.dates[s.booking.default_date], ShowDate::new("TUE", "13"));
        assert_eq!(s.booking.showtimes[s.booking.default_time], "4:30 PM");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let s = Settings::from_toml_str(
            r#"
            theme = "light"
            [booking]
            price_per_seat = 300
            rows = ["X", "Y"]
            "#,
        )
        .unwrap();
        assert_eq!(s.theme, "light");
        assert_eq!(s.booking.price_per_seat, 300);
        assert_eq!(s.booking.rows, vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(s.booking.seats_per_row, 8);
        assert_eq!(s.movie, MovieInfo::default());
    }

    #[test]
    fn default_toml_parses_back() {
        let text = Settings::default().to_toml_string().unwrap();
        assert_eq!(Settings::from_toml_str(&text).unwrap(), Settings::default());
    }

    #[test]
    fn check_seat_against_layout() {
        let b = BookingSettings::default();
        assert!(b.check_seat(&SeatId::new("H", 7)).is_ok());
        for bad in ["Z9", "A99", "a1", "A9"] {
            let id = SeatId::parse(bad).unwrap();
            assert!(
                matches!(b.check_seat(&id), Err(BookingError::InvalidSeatReference { .. })),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn rejects_broken_layouts() {
        let cases = [
            "[booking]\nrows = []",
            "[booking]\nrows = [\"A\", \"A\"]",
            "[booking]\nrows = [\"A1\"]",
            "[booking]\nseats_per_row = 0",
            "[booking]\nshowtimes = []",
            "[booking]\ndefault_date = 5",
            "[booking]\nbooked_probability = 1.5",
            "theme = \"neon\"",
            "[keybinds]\nfly = [\"f\"]",
            "[keybinds]\nbook = [\"hyper\"]",
        ];
        for case in cases {
            assert!(Settings::from_toml_str(case).is_err(), "accepted: {}", case);
        }
    }
}
