use crate::core::indices::Indices;
use crate::core::resolver::RoleResolver;
use crate::domain::model::{Dataset, Position, RoleSummary};
use serde::Serialize;

/// Number of skills shown on the transient marker annotation.
pub const SKILL_SUMMARY_LEN: usize = 3;

/// Result of activating (clicking) a role marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activation {
    pub feature_id: String,
    pub role: RoleSummary,
    pub period: String,
    pub skill_summary: Vec<String>,
    pub has_full_experience: bool,
    /// Where to center the map, for point markers.
    pub focus: Option<Position>,
}

impl Activation {
    pub fn skill_line(&self) -> String {
        self.skill_summary.join(", ")
    }
}

pub fn skill_summary(role: &RoleSummary, indices: &Indices) -> Vec<String> {
    role.skills
        .iter()
        .take(SKILL_SUMMARY_LEN)
        .map(|skill_id| indices.skill_label(skill_id).to_string())
        .collect()
}

/// Resolves the activated feature to its role. Zones and unknown ids are unresolved.
pub fn activate(feature_id: &str, dataset: &Dataset, indices: &Indices) -> Option<Activation> {
    let Some(feature) = dataset.feature(feature_id) else {
        tracing::warn!("Activated feature {} is not in the feature collection", feature_id);
        return None;
    };

    if !feature.is_role() {
        tracing::debug!("Activated feature {} is not a role marker", feature_id);
        return None;
    }

    // The attraction-id rule comes first, and the index holds its first-wins answer.
    let by_attraction = feature
        .id
        .as_deref()
        .and_then(|id| indices.role_for_attraction(id));
    let Some(role) = by_attraction.or_else(|| RoleResolver::resolve(feature, &dataset.roles)) else {
        tracing::info!(
            "No role found for feature {} ({:?})",
            feature_id,
            feature.properties.title
        );
        return None;
    };

    Some(Activation {
        feature_id: feature_id.to_string(),
        period: role.period_label(),
        skill_summary: skill_summary(role, indices),
        has_full_experience: indices.detail_for(&role.id).is_some(),
        focus: feature.point().cloned(),
        role: role.clone(),
    })
}
