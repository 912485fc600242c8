use serde::Serialize;

/// Career zone themes. The color table is fixed; unknown themes fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Growth,
    Martech,
    DemandGen,
    Revops,
    Abm,
    Citadel,
    Default,
}

impl Theme {
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("growth") => Self::Growth,
            Some("martech") => Self::Martech,
            Some("demand-gen") => Self::DemandGen,
            Some("revops") => Self::Revops,
            Some("abm") => Self::Abm,
            Some("citadel") => Self::Citadel,
            _ => Self::Default,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Growth => "#10b981",
            Self::Martech => "#8b5cf6",
            Self::DemandGen => "#f59e0b",
            Self::Revops => "#3b82f6",
            Self::Abm => "#ec4899",
            Self::Citadel => "#ef4444",
            Self::Default => "#6b7280",
        }
    }
}
