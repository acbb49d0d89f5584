use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::{errors::ExpansionError, time_of_day::TimeOfDay};

#[rstest]
#[case("14:00", 14, 0)]
#[case("09:00AM", 9, 0)]
#[case("02:30 PM", 2, 30)]
#[case(" 7:05 ", 7, 5)]
#[case("00:00", 0, 0)]
#[case("23:59", 23, 59)]
#[case("14:00:30", 14, 0)]
#[case("08:15:00 AM", 8, 15)]
fn test_parses_valid_labels(#[case] label: &str, #[case] hour: u32, #[case] minute: u32) {
    let time: TimeOfDay = label.parse().expect("label should parse");

    assert_eq!(time, TimeOfDay { hour, minute });
}

#[rstest]
#[case("25:00")]
#[case("24:00")]
#[case("12:60")]
#[case("ab:cd")]
#[case("14")]
#[case("")]
#[case(":30")]
#[case("14:")]
#[case("-1:00")]
#[case("9.5:00")]
#[case("1PAMM4:00")]
fn test_rejects_malformed_labels(#[case] label: &str) {
    let result = label.parse::<TimeOfDay>();

    assert_eq!(
        result,
        Err(ExpansionError::InvalidTimeFormat(label.to_string()))
    );
}

#[test]
fn test_display_is_zero_padded() {
    assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
    assert_eq!(TimeOfDay::new(24, 0), None);
}
