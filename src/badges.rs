//! Threshold badge coloring.
//!
//! Every element tagged with a delta value wears exactly one of two state
//! classes on top of its base class set: `badge-primary` at or below the
//! threshold, `badge-danger` above it. The class list is fully determined
//! by (delta, avg, threshold), so re-applying the same threshold is a
//! no-op.

/// Threshold applied on page load, before the slider has been touched.
pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Elements whose average magnitude is below this stay primary regardless
/// of delta; tiny signals make the relative delta meaninglessly large.
pub const AVG_FLOOR: f64 = 3.0;

/// The two badge flavors the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// Plain delta badge in a report table.
    Delta,
    /// Plot-selector button on a project page.
    PlotButton,
}

impl BadgeKind {
    pub fn base_classes(self) -> &'static [&'static str] {
        match self {
            BadgeKind::Delta => &["thresh-elem", "badge"],
            BadgeKind::PlotButton => &["btn", "btn-info", "btn-plot"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeState {
    Primary,
    Danger,
}

impl BadgeState {
    pub fn class(self) -> &'static str {
        match self {
            BadgeState::Primary => "badge-primary",
            BadgeState::Danger => "badge-danger",
        }
    }
}

/// A delta-tagged element. `classes` is its only mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub delta: f64,
    pub avg: Option<f64>,
    pub classes: Vec<String>,
}

impl Badge {
    pub fn new(kind: BadgeKind, delta: f64) -> Self {
        Self {
            kind,
            delta,
            avg: None,
            classes: kind.base_classes().iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn with_avg(mut self, avg: f64) -> Self {
        self.avg = Some(avg);
        self
    }

    pub fn state(&self) -> Option<BadgeState> {
        if self.classes.iter().any(|c| c == BadgeState::Danger.class()) {
            Some(BadgeState::Danger)
        } else if self.classes.iter().any(|c| c == BadgeState::Primary.class()) {
            Some(BadgeState::Primary)
        } else {
            None
        }
    }
}

/// Danger iff the delta exceeds the threshold and the average (when known)
/// is at least [`AVG_FLOOR`].
pub fn classify(delta: f64, avg: Option<f64>, limit: f64) -> BadgeState {
    if delta <= limit || avg.is_some_and(|a| a < AVG_FLOOR) {
        BadgeState::Primary
    } else {
        BadgeState::Danger
    }
}

/// Recolor every badge for the given threshold. Replaces each class list
/// wholesale: base classes plus exactly one state class.
pub fn apply_threshold(badges: &mut [Badge], limit: f64) {
    for badge in badges {
        let state = classify(badge.delta, badge.avg, limit);
        badge.classes.clear();
        badge
            .classes
            .extend(badge.kind.base_classes().iter().map(|c| c.to_string()));
        badge.classes.push(state.class().to_string());
    }
}

/// Upper bound for the threshold slider: the maximum delta present, never
/// below zero. An empty badge set yields 0.
pub fn slider_limit(badges: &[Badge]) -> f64 {
    badges.iter().fold(0.0_f64, |max, b| max.max(b.delta))
}
