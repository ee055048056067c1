use delta_dash::models::{CurvePlot, format_sample};

#[test]
fn parses_full_report_entry() {
    let json = r#"{
        "name": "prj:design:report:curve",
        "id": "a1b2c3",
        "x_label": "\"Freq [GHz]\"",
        "y_label": "\"[dB]\"",
        "x_axis": [1.0, 1.5, 2.0],
        "version_ref": "2024.1",
        "y_axis_ref": [10.0, 20.0, 30.0],
        "version_now": "2024.2",
        "y_axis_now": [8.0, 15.0, 33.0],
        "diff": [2.0, 5.0, -3.0],
        "delta": 12.5
    }"#;
    let plot: CurvePlot = serde_json::from_str(json).unwrap();
    assert!(plot.has_reference());
    assert_eq!(plot.version_ref, "2024.1");
    assert_eq!(plot.diff, vec![2.0, 5.0, -3.0]);
    assert_eq!(plot.labels(), vec!["1", "1.5", "2"]);
}

#[test]
fn reference_only_runs_use_numeric_sentinels() {
    // The runner emits -1 (a bare number) for version_ref and delta when no
    // reference data exists, and omits nothing else.
    let json = r#"{
        "name": "n",
        "id": "i",
        "x_axis": [0.0, 1.0],
        "version_ref": -1,
        "version_now": "2024.2",
        "y_axis_now": [1.0, 2.0],
        "delta": -1
    }"#;
    let plot: CurvePlot = serde_json::from_str(json).unwrap();
    assert!(!plot.has_reference());
    assert_eq!(plot.version_ref, "-1");
    assert!(plot.y_axis_ref.is_empty());
    assert!(plot.diff.is_empty());
    assert_eq!(plot.delta, -1.0);
}

#[test]
fn missing_optional_fields_default() {
    let json = r#"{
        "name": "n",
        "id": "i",
        "x_axis": [],
        "y_axis_now": []
    }"#;
    let plot: CurvePlot = serde_json::from_str(json).unwrap();
    assert_eq!(plot.version_ref, "-1");
    assert_eq!(plot.version_now, "-1");
    assert_eq!(plot.delta, -1.0);
    assert!(plot.x_label.is_empty());
}

#[test]
fn sample_formatting() {
    assert_eq!(format_sample(2.0), "2");
    assert_eq!(format_sample(-3.0), "-3");
    assert_eq!(format_sample(1.5), "1.5");
    assert_eq!(format_sample(0.1234567), "0.1235");
    assert_eq!(format_sample(f64::NAN), "NA");
}

#[test]
fn round_trips_through_json() {
    let plot = CurvePlot {
        name: "n".into(),
        id: "i".into(),
        x_label: String::new(),
        y_label: String::new(),
        x_axis: vec![1.0],
        version_ref: "2024.1".into(),
        y_axis_ref: vec![2.0],
        version_now: "2024.2".into(),
        y_axis_now: vec![3.0],
        diff: vec![-1.0],
        delta: 0.5,
    };
    let text = serde_json::to_string(&plot).unwrap();
    let back: CurvePlot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, plot);
}
