//! Page lifecycle: the load-time wiring that used to run as top-level
//! script statements, made explicit so embedders call it once and tests
//! can drive it directly.

use crate::badges::{self, Badge, DEFAULT_THRESHOLD};
use crate::nav::{self, NavItem};
use log::debug;

/// The threshold slider widget reduced to the state this crate reads and
/// writes: its upper bound and current value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slider {
    pub max: f64,
    pub value: f64,
}

/// One dashboard page: its threshold badges, the slider when the page has
/// one, and the navigation menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardPage {
    pub badges: Vec<Badge>,
    pub slider: Option<Slider>,
    pub nav: Vec<NavItem>,
}

impl DashboardPage {
    pub fn new(badges: Vec<Badge>, slider: Option<Slider>, nav: Vec<NavItem>) -> Self {
        Self {
            badges,
            slider,
            nav,
        }
    }

    /// Run-once bootstrap: bound the slider by the largest delta present,
    /// color the badges with the default threshold, and highlight the menu
    /// entry for `current_url`. Pages without a slider skip all badge work.
    pub fn init(&mut self, current_url: &str) {
        if let Some(slider) = self.slider.as_mut() {
            slider.max = badges::slider_limit(&self.badges);
            debug!("slider limit set to {}", slider.max);
            badges::apply_threshold(&mut self.badges, DEFAULT_THRESHOLD);
        }
        nav::highlight_menu(&mut self.nav, current_url);
    }

    /// Slider drag handler: remember the value and recolor the badges.
    /// A no-op on pages without a slider.
    pub fn on_slide(&mut self, value: f64) {
        let Some(slider) = self.slider.as_mut() else {
            return;
        };
        slider.value = value;
        badges::apply_threshold(&mut self.badges, value);
    }
}
