use cineSeat::app::settings::BookingSettings;
use cineSeat::{BookingError, BookingState, FixedAvailability, RandomAvailability, SeatId, SeatStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_state(seed: u64) -> BookingState {
    let mut src = RandomAvailability::seeded(0.3, seed);
    BookingState::from_settings(&BookingSettings::default(), &mut src).unwrap()
}

fn selected_on_grid(st: &BookingState) -> usize {
    st.grid().count(SeatStatus::Selected)
}

// Random walk of toggles (including bad references) over a seeded layout.
fn walk(st: &mut BookingState, rng: &mut StdRng, steps: usize) {
    let labels: Vec<String> = st.grid().row_labels().map(|s| s.to_string()).collect();
    for _ in 0..steps {
        let row = if rng.random_bool(0.05) {
            "Z".to_string()
        } else {
            labels[rng.random_range(0..labels.len())].clone()
        };
        let pos = rng.random_range(0..9);
        let _ = st.toggle_seat(&row, pos);
    }
}

#[test]
fn booked_seats_never_change() {
    let mut st = random_state(7);
    let booked: Vec<(String, usize)> = st
        .grid()
        .rows()
        .iter()
        .flat_map(|r| {
            r.seats()
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == SeatStatus::Booked)
                .map(move |(p, _)| (r.label.clone(), p))
        })
        .collect();
    assert!(!booked.is_empty(), "seed 7 should book at least one seat");

    for (row, pos) in &booked {
        for _ in 0..3 {
            assert_eq!(st.toggle_seat(row, *pos).unwrap(), SeatStatus::Booked);
        }
    }
    let mut rng = StdRng::seed_from_u64(99);
    walk(&mut st, &mut rng, 500);
    for (row, pos) in &booked {
        assert_eq!(st.seat_status(row, *pos), Some(SeatStatus::Booked));
    }
    assert!(st.selected_seats().iter().all(|id| !booked.contains(&(id.row().to_string(), id.position()))));
}

#[test]
fn double_toggle_is_identity_for_available_seats() {
    let mut st = random_state(3);
    let before = st.grid().clone();
    for row in before.rows() {
        for (pos, status) in row.seats().iter().enumerate() {
            if *status == SeatStatus::Available {
                st.toggle_seat(&row.label, pos).unwrap();
                st.toggle_seat(&row.label, pos).unwrap();
            }
        }
    }
    assert_eq!(st.grid(), &before);
    assert!(st.selected_seats().is_empty());
}

#[test]
fn selection_list_matches_grid_and_price_after_random_walks() {
    for seed in 0..20 {
        let mut st = random_state(seed);
        let mut rng = StdRng::seed_from_u64(seed ^ 0xdead_beef);
        walk(&mut st, &mut rng, 200);

        assert_eq!(st.selected_seats().len(), selected_on_grid(&st));
        for id in st.selected_seats() {
            assert_eq!(st.seat_status(id.row(), id.position()), Some(SeatStatus::Selected));
        }
        let mut unique = st.selected_seats().to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), st.selected_seats().len());
        assert_eq!(
            st.total_price(),
            st.selected_seats().len() as u64 * u64::from(st.price_per_seat())
        );
    }
}

#[test]
fn last_selection_wins() {
    let mut st = random_state(1);
    st.toggle_seat("A", 0).ok();
    st.select_time(4).unwrap();
    st.select_date(3).unwrap();
    st.select_date(0).unwrap();
    assert_eq!(st.selected_date(), 0);
    assert_eq!(st.selected_time(), 4);
    assert!(st.select_date(17).is_err());
    assert_eq!(st.selected_date(), 0);
    assert_eq!(st.active_date().day, "MON");
}

#[test]
fn documented_scenario() {
    let settings = BookingSettings {
        rows: vec!["A".to_string()],
        seats_per_row: 2,
        price_per_seat: 250,
        ..BookingSettings::default()
    };
    let mut src = FixedAvailability::new([SeatId::new("A", 1)]);
    let mut st = BookingState::from_settings(&settings, &mut src).unwrap();
    assert_eq!(st.seat_status("A", 0), Some(SeatStatus::Available));
    assert_eq!(st.seat_status("A", 1), Some(SeatStatus::Booked));

    st.toggle_seat("A", 0).unwrap();
    assert_eq!(st.seat_status("A", 0), Some(SeatStatus::Selected));
    let ids: Vec<String> = st.selected_seats().iter().map(|s| s.to_string()).collect();
    assert_eq!(ids, vec!["A1"]);
    assert_eq!(st.total_price(), 250);

    st.toggle_seat("A", 1).unwrap();
    assert_eq!(st.selected_seats().len(), 1);
    assert_eq!(st.total_price(), 250);

    st.toggle_seat("A", 0).unwrap();
    assert_eq!(st.seat_status("A", 0), Some(SeatStatus::Available));
    assert!(st.selected_seats().is_empty());
    assert_eq!(st.total_price(), 0);

    assert_eq!(
        st.toggle_seat("A", 2),
        Err(BookingError::InvalidSeatReference {
            row: "A".to_string(),
            position: 2
        })
    );
}

#[test]
fn seeded_layouts_are_reproducible() {
    assert_eq!(random_state(42).grid(), random_state(42).grid());
}
