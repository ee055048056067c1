use serde::{Deserialize, Serialize};

/// A labeled, ordered sequence of numeric y-values. Pairs positionally with
/// the category labels of the chart it is plotted on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One XY curve entry of a regression report, as emitted by the test runner.
///
/// `y_axis_ref` and `diff` stay empty when the run produced no reference
/// data (reference-only runs); `version_ref` is `-1` and `delta` is `-1`
/// in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurvePlot {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    pub x_axis: Vec<f64>,
    #[serde(default = "version_unset", deserialize_with = "de_version")]
    pub version_ref: String,
    #[serde(default)]
    pub y_axis_ref: Vec<f64>,
    #[serde(default = "version_unset", deserialize_with = "de_version")]
    pub version_now: String,
    pub y_axis_now: Vec<f64>,
    #[serde(default)]
    pub diff: Vec<f64>,
    #[serde(default = "delta_unset")]
    pub delta: f64,
}

fn version_unset() -> String {
    "-1".to_string()
}

fn delta_unset() -> f64 {
    -1.0
}

impl CurvePlot {
    /// Has reference data to compare against.
    pub fn has_reference(&self) -> bool {
        !self.y_axis_ref.is_empty()
    }

    /// X samples formatted as category labels for the chart axis.
    pub fn labels(&self) -> Vec<String> {
        self.x_axis.iter().map(|v| format_sample(*v)).collect()
    }
}

/// Format an x sample compactly: whole numbers without a decimal point,
/// everything else with up to 4 decimals, trailing zeros trimmed.
pub fn format_sample(v: f64) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Serde helper: report versions appear both as strings ("2024.1") and as
/// bare numbers (-1 for "no reference"). Accept both and normalize to String.
fn de_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct VersionVisitor;

    impl<'de> Visitor<'de> for VersionVisitor {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number identifying a version")
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(s.to_string())
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.to_string())
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(format_sample(v))
        }
    }

    deserializer.deserialize_any(VersionVisitor)
}
