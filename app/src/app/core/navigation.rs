use super::*;

impl App {
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Left arrow: previous date/showtime, or previous seat in the row.
    pub fn move_left(&mut self) {
        match self.focus {
            Focus::Date => {
                let i = self.booking.selected_date().saturating_sub(1);
                self.select_date_or_report(i);
            }
            Focus::Time => {
                let i = self.booking.selected_time().saturating_sub(1);
                self.select_time_or_report(i);
            }
            Focus::Seats => self.cursor.position = self.cursor.position.saturating_sub(1),
        }
    }

    /// Right arrow: next date/showtime, or next seat in the row. Clamped at
    /// the end of each list.
    pub fn move_right(&mut self) {
        match self.focus {
            Focus::Date => {
                let last = self.booking.dates().len().saturating_sub(1);
                let i = (self.booking.selected_date() + 1).min(last);
                self.select_date_or_report(i);
            }
            Focus::Time => {
                let last = self.booking.showtimes().len().saturating_sub(1);
                let i = (self.booking.selected_time() + 1).min(last);
                self.select_time_or_report(i);
            }
            Focus::Seats => {
                let last = self.booking.grid().seats_per_row().saturating_sub(1);
                self.cursor.position = (self.cursor.position + 1).min(last);
            }
        }
    }

    /// Up/down only move the seat cursor; on the date and time strips they
    /// do nothing.
    pub fn move_up(&mut self) {
        if self.focus == Focus::Seats {
            self.cursor.row = self.cursor.row.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.focus == Focus::Seats {
            let last = self.booking.grid().row_count().saturating_sub(1);
            self.cursor.row = (self.cursor.row + 1).min(last);
        }
    }

    /// Activate the focused element. Only the seat map reacts.
    pub fn activate(&mut self) {
        if self.focus == Focus::Seats {
            self.toggle_cursor_seat();
        }
    }

    fn select_date_or_report(&mut self, index: usize) {
        if let Err(e) = self.booking.select_date(index) {
            self.show_error(&e);
        }
    }

    fn select_time_or_report(&mut self, index: usize) {
        if let Err(e) = self.booking.select_time(index) {
            self.show_error(&e);
        }
    }
}
