use delta_dash::badges::{
    AVG_FLOOR, Badge, BadgeKind, BadgeState, apply_threshold, classify, slider_limit,
};

#[test]
fn danger_iff_delta_above_threshold_and_avg_at_least_floor() {
    for limit in [0.0, 2.5, 5.0, 10.0] {
        for delta in [0.0, 2.5, 5.0, 5.1, 100.0] {
            for avg in [None, Some(2.9), Some(3.0), Some(50.0)] {
                let expected = delta > limit && avg.map_or(true, |a| a >= AVG_FLOOR);
                let got = classify(delta, avg, limit) == BadgeState::Danger;
                assert_eq!(
                    got, expected,
                    "delta={delta} avg={avg:?} limit={limit}"
                );
            }
        }
    }
}

#[test]
fn delta_at_threshold_stays_primary() {
    assert_eq!(classify(5.0, None, 5.0), BadgeState::Primary);
}

#[test]
fn low_average_overrides_large_delta() {
    assert_eq!(classify(100.0, Some(2.0), 5.0), BadgeState::Primary);
}

#[test]
fn apply_threshold_rewrites_whole_class_list() {
    let mut badges = vec![
        Badge::new(BadgeKind::Delta, 2.0),
        Badge::new(BadgeKind::Delta, 8.0),
        Badge::new(BadgeKind::PlotButton, 8.0),
    ];
    // Pre-pollute one class list; apply must replace it wholesale.
    badges[1].classes.push("stale-class".to_string());

    apply_threshold(&mut badges, 5.0);

    assert_eq!(badges[0].classes, ["thresh-elem", "badge", "badge-primary"]);
    assert_eq!(badges[1].classes, ["thresh-elem", "badge", "badge-danger"]);
    assert_eq!(
        badges[2].classes,
        ["btn", "btn-info", "btn-plot", "badge-danger"]
    );
}

#[test]
fn apply_threshold_is_idempotent() {
    let mut badges = vec![
        Badge::new(BadgeKind::Delta, 1.0).with_avg(10.0),
        Badge::new(BadgeKind::Delta, 9.0).with_avg(10.0),
        Badge::new(BadgeKind::PlotButton, 4.0),
    ];
    apply_threshold(&mut badges, 3.5);
    let once = badges.clone();
    apply_threshold(&mut badges, 3.5);
    assert_eq!(badges, once);
}

#[test]
fn badge_state_reflects_classes() {
    let mut badges = vec![Badge::new(BadgeKind::Delta, 9.0)];
    assert_eq!(badges[0].state(), None);
    apply_threshold(&mut badges, 5.0);
    assert_eq!(badges[0].state(), Some(BadgeState::Danger));
    apply_threshold(&mut badges, 10.0);
    assert_eq!(badges[0].state(), Some(BadgeState::Primary));
}

#[test]
fn slider_limit_is_max_delta_never_negative() {
    let badges: Vec<Badge> = [0.5, 7.25, 3.0]
        .iter()
        .map(|d| Badge::new(BadgeKind::Delta, *d))
        .collect();
    assert_eq!(slider_limit(&badges), 7.25);

    let negative: Vec<Badge> = [-4.0, -0.1]
        .iter()
        .map(|d| Badge::new(BadgeKind::Delta, *d))
        .collect();
    assert_eq!(slider_limit(&negative), 0.0);

    assert_eq!(slider_limit(&[]), 0.0);
}
