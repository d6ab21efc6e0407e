use jws_config::time_value::TimeValue;

#[test]
fn parse_full_form() {
    let t: TimeValue = "1h30m45s".parse().unwrap();
    assert_eq!(t.total_seconds(), 5445);
}

#[test]
fn parse_seconds_only() {
    assert_eq!("90s".parse::<TimeValue>().unwrap().total_seconds(), 90);
    assert_eq!("90".parse::<TimeValue>().unwrap().total_seconds(), 90);
}

#[test]
fn parse_hours_only() {
    assert_eq!("2h".parse::<TimeValue>().unwrap().total_seconds(), 7200);
}

#[test]
fn parse_rejects_empty_and_junk() {
    assert!("".parse::<TimeValue>().is_err());
    assert!("abc".parse::<TimeValue>().is_err());
    assert!("1h30x".parse::<TimeValue>().is_err());
}

#[test]
fn parse_keeps_fields_unnormalized() {
    let t: TimeValue = "90m".parse().unwrap();
    assert_eq!(t.minutes, 90);
    assert_eq!(t.seconds, 0);
    assert_eq!(t.total_seconds(), 5400);
}

#[test]
fn from_total_seconds_normalizes() {
    let t = TimeValue::from_total_seconds(3725);
    assert_eq!(t.hours, 1);
    assert_eq!(t.minutes, 2);
    assert_eq!(t.seconds, 5);
}

#[test]
fn normalize_redistributes_in_place() {
    let mut t = TimeValue::new(0, 90, 75);
    t.normalize();
    assert_eq!((t.hours, t.minutes, t.seconds), (1, 31, 15));
}

#[test]
fn normalize_is_a_no_op_for_zero() {
    let mut t = TimeValue::new(0, 0, 0);
    t.normalize();
    assert_eq!((t.hours, t.minutes, t.seconds), (0, 0, 0));
}

#[test]
fn equality_ignores_field_distribution() {
    assert_eq!(TimeValue::new(0, 90, 0), TimeValue::new(1, 30, 0));
    assert_ne!(TimeValue::new(0, 0, 1), TimeValue::new(0, 0, 2));
}

#[test]
fn display_always_emits_all_components_normalized() {
    assert_eq!(TimeValue::new(0, 90, 0).to_string(), "1h30m0s");
    assert_eq!(TimeValue::new(0, 0, 0).to_string(), "0h0m0s");
    assert_eq!(TimeValue::from_total_seconds(45).to_string(), "0h0m45s");
}

#[test]
fn set_overwrites_all_fields() {
    let mut t = TimeValue::new(1, 2, 3);
    t.set(4, 5, 6);
    assert_eq!((t.hours, t.minutes, t.seconds), (4, 5, 6));
}

#[test]
fn display_round_trips_through_parse() {
    let t = TimeValue::new(2, 61, 61);
    let reparsed: TimeValue = t.to_string().parse().unwrap();
    assert_eq!(reparsed, t);
}
