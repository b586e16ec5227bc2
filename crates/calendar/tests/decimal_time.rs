use dectime_calendar::{
    CalendarError, DecimalTime, Instant, Marker, Reading, SECONDS_PER_DAY, UtcOffset, decimal_time,
};

#[test]
fn documented_values() {
    assert_eq!(decimal_time(0, 0).unwrap(), 1000);
    assert_eq!(decimal_time(43_200, 0).unwrap(), 500);
    assert_eq!(decimal_time(86_399, 999_999_999).unwrap(), 0);
}

#[test]
fn non_increasing_through_the_day() {
    let mut previous = decimal_time(0, 0).unwrap();
    for s in 0..SECONDS_PER_DAY {
        for nanos in [0, 1, 500_000_000, 999_999_999] {
            let value = decimal_time(s, nanos).unwrap();
            assert!(value <= 1000, "value {value} out of range at {s}s+{nanos}ns");
            assert!(
                value <= previous,
                "value rose from {previous} to {value} at {s}s+{nanos}ns"
            );
            previous = value;
        }
    }
    assert_eq!(previous, 0);
}

#[test]
fn every_value_below_new_is_reached() {
    let mut seen = [false; 1000];
    for s in 0..SECONDS_PER_DAY {
        let value = decimal_time(s, 1).unwrap();
        seen[value as usize] = true;
    }
    assert!(seen.iter().all(|&hit| hit), "some decimal values never occur");
}

#[test]
fn wraps_to_new_at_next_midnight() {
    let offset = UtcOffset::UTC;
    let before = Instant::new(2 * SECONDS_PER_DAY - 1, 999_999_999).unwrap();
    let after = Instant::new(2 * SECONDS_PER_DAY, 0).unwrap();
    let r1 = Reading::new(before, offset).unwrap();
    let r2 = Reading::new(after, offset).unwrap();
    assert_eq!(r1.decimal.get(), 0);
    assert_eq!(r2.decimal.get(), 1000);
    assert_eq!(r2.decimal.marker(), Some(Marker::New));
    assert_eq!(r1.date.to_string(), "1/2/1970");
    assert_eq!(r2.date.to_string(), "1/3/1970");
}

#[test]
fn markers_only_on_special_values() {
    for s in (0..SECONDS_PER_DAY).step_by(7) {
        let d = DecimalTime::new(s, 0).unwrap();
        let expected = match d.get() {
            1000 => Some(Marker::New),
            500 => Some(Marker::Noon),
            333 => Some(Marker::Teatime),
            _ => None,
        };
        assert_eq!(d.marker(), expected, "marker mismatch at {s}s");
    }
}

#[test]
fn extreme_offsets_near_epoch() {
    let early = Instant::new(3600, 0).unwrap();
    assert_eq!(
        Reading::new(early, UtcOffset::MIN).unwrap_err(),
        CalendarError::BeforeEpoch {
            seconds: 3600 - 12 * 3600
        }
    );
    let reading = Reading::new(early, UtcOffset::MAX).unwrap();
    assert_eq!(reading.time.hms(), (15, 0, 0));
}
