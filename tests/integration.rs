use chrono::NaiveDate;
use tzline::{
    build_timeline, build_timeline_with, convert, CenteredTime, ClockTime, DayPhase, HourFormat,
    SunWindow, TimeSpec, TimelineOptions,
};

#[test]
fn picker_to_timeline_pipeline() {
    let result = convert(
        "America/Los_Angeles",
        "2:30 PM",
        "December 25, 2023",
        "America/New_York",
        false,
    )
    .unwrap();
    assert_eq!(result.time, "5:30 PM");
    assert_eq!(result.date, "12-25-2023");

    let centered = CenteredTime::parse(&result.date, &result.time).unwrap();
    assert_eq!(centered, CenteredTime::from_conversion(&result).unwrap());

    let timeline = build_timeline(&centered, HourFormat::Normal, SunWindow::default()).unwrap();
    assert_eq!(timeline.centered_cell().label, "5PM");
    assert_eq!(timeline.centered_cell().phase, DayPhase::Day);
    let annotations: Vec<_> = timeline
        .boundaries()
        .filter_map(|(_, cell)| cell.annotation())
        .collect();
    assert_eq!(annotations, vec!["12/25/2023", "12/26/2023"]);
}

#[test]
fn half_past_two_timeline_classification() {
    let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
    let centered = CenteredTime::new(date, 14, 30).unwrap();
    let timeline = build_timeline(&centered, HourFormat::Normal, SunWindow::default()).unwrap();
    let phase_of = |hour| {
        timeline
            .cells()
            .iter()
            .find(|cell| cell.hour == hour)
            .map(|cell| cell.phase)
    };
    assert_eq!(phase_of(14), Some(DayPhase::Day));
    assert_eq!(phase_of(6), Some(DayPhase::Dawn));
}

#[test]
fn round_trip_across_zone_pairs() {
    let zones = ["Europe/London", "Asia/Kathmandu", "America/Sao_Paulo", "Pacific/Auckland"];
    for a in zones {
        for b in zones {
            let there = convert(a, "11:15", "March 1, 2023", b, true).unwrap();
            let date = there.naive_date().unwrap();
            let long_date = tzline::clock::format_long_date(date);
            let back = convert(b, &there.time, &long_date, a, true).unwrap();
            assert_eq!(back.time, "11:15", "{a} -> {b}");
            assert_eq!(back.date, "3-1-2023", "{a} -> {b}");
        }
    }
}

#[test]
fn twelve_and_twenty_four_hour_outputs_agree() {
    let spec = TimeSpec::parse("Asia/Tokyo", "12:05 AM", "July 4, 2022", "America/Denver").unwrap();
    let h24 = spec.convert(true).unwrap();
    let h12 = spec.convert(false).unwrap();
    assert_eq!(
        ClockTime::parse(&h24.time).unwrap().to_twelve_hour(),
        ClockTime::parse(&h12.time).unwrap()
    );
}

#[test]
fn ninety_six_cell_window() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
    for hour in [0, 11, 23] {
        let centered = CenteredTime::new(date, hour, 0).unwrap();
        let timeline = build_timeline_with(
            &centered,
            HourFormat::Military,
            SunWindow::default(),
            TimelineOptions { window_days: 4 },
        )
        .unwrap();
        assert_eq!(timeline.len(), 96);
        assert_eq!(timeline.centered_cell().hour, hour);
        assert_eq!(timeline.boundaries().count(), 4);
        let centred_day = timeline
            .boundaries()
            .filter(|(index, _)| *index <= timeline.centered_index())
            .last()
            .and_then(|(_, cell)| cell.boundary);
        assert_eq!(centred_day, Some(date));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_person_omits_missing_role() {
    let person = tzline::Person {
        id: 3,
        name: "Ada".into(),
        timezone: "Europe/London".into(),
        role: None,
    };
    let json = serde_json::to_string(&person).unwrap();
    assert_eq!(json, r#"{"id":3,"name":"Ada","timezone":"Europe/London"}"#);
    let back: tzline::Person = serde_json::from_str(&json).unwrap();
    assert_eq!(back, person);
}

#[cfg(feature = "serde")]
#[test]
fn serde_palette_uses_camel_case() {
    let json = serde_json::to_string(&tzline::Palette::default()).unwrap();
    assert!(json.contains("nightText"));
    assert!(json.contains("textDarker"));
}
