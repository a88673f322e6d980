use std::collections::HashSet;

use crate::app::core::availability::AvailabilitySource;
use crate::app::types::SeatStatus;
use crate::errors::BookingError;

/// A single labelled row of seats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatRow {
    pub label: String,
    seats: Vec<SeatStatus>,
}

impl SeatRow {
    pub fn seats(&self) -> &[SeatStatus] {
        &self.seats
    }
}

/// Fixed-size seat grid addressed by row label and 0-based position.
///
/// Dimensions are set when the grid is built and never change; only the
/// per-seat statuses do. Rows keep the order they were built in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatGrid {
    rows: Vec<SeatRow>,
    seats_per_row: usize,
}

impl SeatGrid {
    /// Build a grid, asking `source` once per seat whether it starts booked.
    ///
    /// Labels must be non-empty, unique and free of digits and whitespace so
    /// every seat has exactly one `SeatId`.
    pub fn generate<A>(
        labels: &[String],
        seats_per_row: usize,
        source: &mut A,
    ) -> Result<Self, BookingError>
    where
        A: AvailabilitySource + ?Sized,
    {
        check_layout(labels, seats_per_row)?;
        let rows = labels
            .iter()
            .map(|label| SeatRow {
                label: label.clone(),
                seats: (0..seats_per_row)
                    .map(|pos| {
                        if source.is_booked(label, pos) {
                            SeatStatus::Booked
                        } else {
                            SeatStatus::Available
                        }
                    })
                    .collect(),
            })
            .collect();
        Ok(SeatGrid {
            rows,
            seats_per_row,
        })
    }

    pub fn rows(&self) -> &[SeatRow] {
        &self.rows
    }

    pub fn row_labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Seats of the row labelled `label`, if it exists.
    pub fn row(&self, label: &str) -> Option<&[SeatStatus]> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.seats.as_slice())
    }

    pub fn status(&self, row: &str, position: usize) -> Option<SeatStatus> {
        self.row(row).and_then(|seats| seats.get(position).copied())
    }

    /// Number of seats currently in `status`.
    pub fn count(&self, status: SeatStatus) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.seats.iter())
            .filter(|s| **s == status)
            .count()
    }

    // Mutable access to exactly one seat; every other seat stays untouched.
    pub(crate) fn status_mut(
        &mut self,
        row: &str,
        position: usize,
    ) -> Result<&mut SeatStatus, BookingError> {
        self.rows
            .iter_mut()
            .find(|r| r.label == row)
            .and_then(|r| r.seats.get_mut(position))
            .ok_or_else(|| BookingError::InvalidSeatReference {
                row: row.to_string(),
                position,
            })
    }
}

/// Layout rules shared with settings validation.
pub fn check_layout(labels: &[String], seats_per_row: usize) -> Result<(), BookingError> {
    if labels.is_empty() {
        return Err(BookingError::InvalidLayout(
            "at least one seat row is required".to_string(),
        ));
    }
    if seats_per_row == 0 {
        return Err(BookingError::InvalidLayout(
            "seats_per_row must be at least 1".to_string(),
        ));
    }
    let mut seen = HashSet::new();
    for label in labels {
        if label.is_empty() || label.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
            return Err(BookingError::InvalidLayout(format!(
                "invalid row label `{}`",
                label
            )));
        }
        if !seen.insert(label.as_str()) {
            return Err(BookingError::InvalidLayout(format!(
                "duplicate row label `{}`",
                label
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(ls: &[&str]) -> Vec<String> {
        ls.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generate_asks_source_per_seat_in_order() {
        let mut calls = Vec::new();
        let mut src = |row: &str, pos: usize| {
            calls.push(format!("{}{}", row, pos));
            row == "B" && pos == 1
        };
        let grid = SeatGrid::generate(&labels(&["A", "B"]), 2, &mut src).unwrap();
        assert_eq!(calls, vec!["A0", "A1", "B0", "B1"]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.seats_per_row(), 2);
        assert_eq!(grid.status("B", 1), Some(SeatStatus::Booked));
        assert_eq!(grid.count(SeatStatus::Booked), 1);
        assert_eq!(grid.count(SeatStatus::Available), 3);
        assert_eq!(grid.row_labels().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn lookups_outside_grid_are_none_or_error() {
        let mut src = |_: &str, _: usize| false;
        let mut grid = SeatGrid::generate(&labels(&["A"]), 3, &mut src).unwrap();
        assert_eq!(grid.status("A", 3), None);
        assert_eq!(grid.status("Q", 0), None);
        assert!(grid.row("Q").is_none());
        assert_eq!(
            grid.status_mut("A", 9).unwrap_err(),
            BookingError::InvalidSeatReference {
                row: "A".to_string(),
                position: 9
            }
        );
    }

    #[test]
    fn generate_rejects_ambiguous_labels() {
        let mut src = |_: &str, _: usize| false;
        for bad in [&["A", "A"][..], &["A", ""][..], &["A1"][..], &["B C"][..], &[][..]] {
            let err = SeatGrid::generate(&labels(bad), 2, &mut src).unwrap_err();
            assert!(matches!(err, BookingError::InvalidLayout(_)), "accepted {:?}", bad);
        }
        assert!(matches!(
            SeatGrid::generate(&labels(&["A"]), 0, &mut src),
            Err(BookingError::InvalidLayout(_))
        ));
    }
}
