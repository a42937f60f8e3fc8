use serde::Serialize;

/// Usage above this percentage is critical.
pub const CRITICAL_THRESHOLD: f64 = 90.0;
/// Usage above this percentage (and not critical) is a warning.
pub const WARNING_THRESHOLD: f64 = 75.0;

/// Display severity for a spent-versus-limit ratio.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UsageStatus {
    Normal,
    Warning,
    Critical,
}

impl UsageStatus {
    pub fn for_percentage(percent: f64) -> Self {
        if percent > CRITICAL_THRESHOLD {
            UsageStatus::Critical
        } else if percent > WARNING_THRESHOLD {
            UsageStatus::Warning
        } else {
            UsageStatus::Normal
        }
    }

    /// Theme color token used for progress bars in this state.
    pub fn color_token(&self) -> &'static str {
        match self {
            UsageStatus::Normal => "primary",
            UsageStatus::Warning => "accent",
            UsageStatus::Critical => "destructive",
        }
    }
}
