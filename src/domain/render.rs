use crate::domain::model::{GeoFeature, VisibilitySets};
use crate::domain::theme::Theme;
use serde::Serialize;

/// Display tier of a role marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayTier {
    FilteredOut,
    Base,
    Highlighted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerState {
    pub id: String,
    pub tier: DisplayTier,
    /// Company name, present only when the marker is labeled.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneStyle {
    pub id: Option<String>,
    pub name: Option<String>,
    pub theme: Theme,
    pub color: &'static str,
}

impl ZoneStyle {
    pub fn for_zones(features: &[GeoFeature]) -> Vec<ZoneStyle> {
        features
            .iter()
            .filter(|feature| feature.is_zone())
            .map(|feature| {
                let theme = Theme::from_name(feature.properties.theme.as_deref());
                ZoneStyle {
                    id: feature.id.clone(),
                    name: feature.properties.name.clone(),
                    theme,
                    color: theme.color(),
                }
            })
            .collect()
    }
}

/// One frame for the rendering surface: every role marker with its tier and label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceUpdate {
    pub markers: Vec<MarkerState>,
}

impl SurfaceUpdate {
    pub fn from_sets(features: &[GeoFeature], sets: &VisibilitySets) -> Self {
        let markers = features
            .iter()
            .filter(|feature| feature.is_role())
            .filter_map(|feature| {
                let id = feature.id.as_ref()?;
                let tier = if sets.highlighted.contains(id) {
                    DisplayTier::Highlighted
                } else if sets.visible.contains(id) {
                    DisplayTier::Base
                } else {
                    DisplayTier::FilteredOut
                };
                let label = sets
                    .labeled
                    .contains(id)
                    .then(|| feature.properties.company.clone().unwrap_or_default());
                Some(MarkerState {
                    id: id.clone(),
                    tier,
                    label,
                })
            })
            .collect();

        Self { markers }
    }

    pub fn ids_in(&self, tier: DisplayTier) -> Vec<&str> {
        self.markers
            .iter()
            .filter(|marker| marker.tier == tier)
            .map(|marker| marker.id.as_str())
            .collect()
    }
}
