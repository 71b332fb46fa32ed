use bacchus::core::generator::ShiftGenerator;
use bacchus::models::window::DateWindow;
use chrono::{Datelike, Timelike, Weekday};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn window(start: &str, end: &str) -> DateWindow {
    DateWindow::parse(start, end).expect("valid window")
}

#[test]
fn sundays_never_produce_punches() {
    // 2025-06-01 is a Sunday; try a spread of seeds
    for seed in 0..50u64 {
        let mut g = ShiftGenerator::new(StdRng::seed_from_u64(seed), false);
        let records = g.generate(&[1], &window("2025-06-01", "2025-06-01"));
        assert!(records.is_empty(), "seed {} produced a Sunday punch", seed);
    }
}

#[test]
fn saturday_punches_are_overtime_in_range() {
    let ids: Vec<i64> = (1..=10).collect();
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(7), false);
    let records = g.generate(&ids, &window("2025-01-01", "2025-12-31"));

    let saturdays: Vec<_> = records
        .iter()
        .filter(|r| r.date.weekday() == Weekday::Sat)
        .collect();

    for r in &saturdays {
        assert!(
            (5.0..=8.0).contains(&r.hours),
            "saturday hours out of range: {}",
            r.hours
        );
    }

    // 2025 has 52 Saturdays; the overtime rate should sit near 20%
    let slots = 52 * ids.len();
    let rate = saturdays.len() as f64 / slots as f64;
    assert!((0.10..0.32).contains(&rate), "saturday rate {}", rate);
}

#[test]
fn weekday_hours_fall_in_the_short_or_normal_band() {
    let ids: Vec<i64> = (1..=10).collect();
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(11), false);
    let records = g.generate(&ids, &window("2025-01-01", "2025-12-31"));

    let weekdays: Vec<_> = records
        .iter()
        .filter(|r| !matches!(r.date.weekday(), Weekday::Sat | Weekday::Sun))
        .collect();

    let mut short = 0usize;
    let mut normal = 0usize;
    for r in &weekdays {
        if (3.0..=6.0).contains(&r.hours) {
            short += 1;
        } else if (7.5..=8.5).contains(&r.hours) {
            normal += 1;
        } else {
            panic!("weekday hours outside both bands: {}", r.hours);
        }
    }

    // 2025 has 261 weekdays; absences should hover around 5%,
    // short days around 10% of all weekday slots
    let slots = 261 * ids.len();
    let absence_rate = 1.0 - weekdays.len() as f64 / slots as f64;
    assert!((0.02..0.09).contains(&absence_rate), "absence rate {}", absence_rate);

    let short_rate = short as f64 / slots as f64;
    assert!((0.05..0.16).contains(&short_rate), "short-day rate {}", short_rate);
    assert!(normal > short);
}

#[test]
fn accumulation_is_worker_major_in_date_order() {
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(3), false);
    // a Monday-to-Friday week, workers deliberately out of order
    let records = g.generate(&[2, 1], &window("2025-06-02", "2025-06-06"));

    let boundary = records
        .iter()
        .position(|r| r.employee_id == 1)
        .unwrap_or(records.len());

    assert!(records[..boundary].iter().all(|r| r.employee_id == 2));
    assert!(records[boundary..].iter().all(|r| r.employee_id == 1));

    for group in [&records[..boundary], &records[boundary..]] {
        for pair in group.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }
}

#[test]
fn seeded_runs_reproduce_the_same_punches() {
    let w = window("2025-03-01", "2025-05-31");
    let ids = [6, 7, 8];

    let mut a = ShiftGenerator::new(StdRng::seed_from_u64(99), true);
    let mut b = ShiftGenerator::new(StdRng::seed_from_u64(99), true);

    assert_eq!(a.generate(&ids, &w), b.generate(&ids, &w));
}

#[test]
fn derived_shift_times_wrap_the_worked_hours() {
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(21), true);
    let records = g.generate(&[1, 2, 3], &window("2025-02-01", "2025-04-30"));
    assert!(!records.is_empty());

    for r in &records {
        let start = r.start.expect("rich mode sets a start");
        let end = r.end.expect("rich mode sets an end");

        assert_eq!(start.date(), r.date);

        // 08:00 plus at most an hour either way
        let minutes = i64::from(start.time().hour()) * 60 + i64::from(start.time().minute());
        assert!((7 * 60..=9 * 60).contains(&minutes), "start {}", start);

        let worked = (end - start).num_seconds();
        assert_eq!(worked, (r.hours * 3600.0).round() as i64);
    }
}

#[test]
fn plain_mode_leaves_shift_times_unset() {
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(5), false);
    let records = g.generate(&[1], &window("2025-01-06", "2025-01-31"));
    assert!(!records.is_empty());

    for r in &records {
        assert!(r.start.is_none());
        assert!(r.end.is_none());
    }
}

#[test]
fn hours_carry_at_most_two_decimals() {
    let mut g = ShiftGenerator::new(StdRng::seed_from_u64(13), false);
    let records = g.generate(&[1, 2], &window("2025-01-01", "2025-06-30"));

    for r in &records {
        let scaled = r.hours * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "hours {}", r.hours);
    }
}

#[test]
fn a_window_can_produce_no_records_at_all() {
    use rand::rngs::mock::StepRng;

    // Friday, Saturday, Sunday; the stepped rolls land on the absent
    // branch for each day class (a low roll on the weekday, a high one
    // on the Saturday)
    let rng = StepRng::new(0, u64::MAX / 2);
    let mut g = ShiftGenerator::new(rng, false);

    let records = g.generate(&[1], &window("2025-06-06", "2025-06-08"));
    assert!(records.is_empty());
}

#[test]
fn window_end_before_start_is_rejected() {
    assert!(DateWindow::parse("2025-06-30", "2025-06-01").is_err());
    assert!(DateWindow::parse("2025-06-31", "2025-07-01").is_err());
}
