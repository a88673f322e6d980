use cineSeat::app::settings::Settings;
use cineSeat::ui;
use cineSeat::app::ShowDate;
use cineSeat::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 32);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();
    let buf = term.backend().buffer();
    let mut out = String::new();
    for y in 0..buf.area().height {
        for x in 0..buf.area().width {
            if let Some(c) = buf.cell((x, y)) {
                out.push_str(c.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn app() -> App {
    let mut src = |_: &str, pos: usize| pos == 7;
    App::new(&Settings::default(), &mut src).unwrap()
}

#[test]
fn screen_shows_movie_dates_times_and_grid() {
    let screen = render(&app());
    assert!(screen.contains("Dune: Part Two"), "{}", screen);
    assert!(screen.contains("TUE 13"));
    assert!(screen.contains("4:30 PM"));
    assert!(screen.contains("SCREEN"));
    assert!(screen.contains(" A [ ][ ][ ][ ][ ][ ][ ][x]"), "{}", screen);
    assert!(screen.contains(" H [ ]"));
    // no selection yet, so no bottom bar
    assert!(!screen.contains("Book Seats"));
}

#[test]
fn bottom_bar_appears_with_selection() {
    let mut app = app();
    app.toggle_cursor_seat();
    app.move_right();
    app.toggle_cursor_seat();
    let screen = render(&app);
    assert!(screen.contains("A1, A2"), "{}", screen);
    assert!(screen.contains("₹500"));
    assert!(screen.contains("[ Book Seats ]"));
}

#[test]
fn message_modal_is_drawn() {
    let mut app = app();
    app.request_booking();
    let screen = render(&app);
    assert!(screen.contains("Nothing to book"), "{}", screen);
    assert!(screen.contains("[ OK ]"));
}

#[test]
fn cursor_row_stays_visible_in_tall_layouts() {
    let mut settings = Settings::default();
    settings.booking.rows = ('A'..='Z').map(|c| c.to_string()).collect();
    let mut src = |_: &str, _: usize| false;
    let mut app = App::new(&settings, &mut src).unwrap();

    let screen = render(&app);
    assert!(screen.contains(" A [ ]"));
    assert!(!screen.contains(" Z [ ]"));

    for _ in 0..25 {
        app.move_down();
    }
    let screen = render(&app);
    assert!(screen.contains(" Z [ ]"), "{}", screen);
}

#[test]
fn date_strip_scrolls_to_selected_date() {
    let mut settings = Settings::default();
    settings.booking.dates = (1..=20)
        .map(|d| ShowDate::new("DAY", format!("{:02}", d)))
        .collect();
    let mut src = |_: &str, _: usize| false;
    let mut app = App::new(&settings, &mut src).unwrap();

    assert!(!render(&app).contains("DAY 20"));
    app.booking.select_date(19).unwrap();
    let screen = render(&app);
    assert!(screen.contains("DAY 20"), "{}", screen);
    assert!(!screen.contains("DAY 01"));
}
