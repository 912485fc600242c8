use crate::core::resolver::RoleResolver;
use crate::domain::model::{FilterSelection, GeoFeature, RoleSummary, VisibilitySets};

pub fn skill_predicate(role: &RoleSummary, selection: &FilterSelection) -> bool {
    selection.skills.is_empty() || role.skills.iter().any(|skill| selection.skills.contains(skill))
}

pub fn seniority_predicate(role: &RoleSummary, selection: &FilterSelection) -> bool {
    selection.seniority.admits(&role.seniority)
}

/// Ongoing roles always pass; ended roles pass while the cursor is at or past their end.
pub fn year_predicate(role: &RoleSummary, selection: &FilterSelection) -> bool {
    role.is_ongoing() || role.end_year.is_some_and(|end| end <= selection.year_cursor)
}

/// Industries come from the feature, not from the role.
pub fn industry_predicate(feature: &GeoFeature, selection: &FilterSelection) -> bool {
    selection.industries.is_empty()
        || feature
            .properties
            .industries
            .iter()
            .any(|industry| selection.industries.contains(industry))
}

/// The role started or ended in the scrubbed year.
pub fn is_transitioning(role: &RoleSummary, year_cursor: i32) -> bool {
    match role.end_year {
        Some(end) => end == year_cursor,
        None => role.start_year == year_cursor,
    }
}

pub struct FilterEngine;

impl FilterEngine {
    pub fn passes(feature: &GeoFeature, role: &RoleSummary, selection: &FilterSelection) -> bool {
        skill_predicate(role, selection)
            && seniority_predicate(role, selection)
            && year_predicate(role, selection)
            && industry_predicate(feature, selection)
    }

    /// Pure function of its inputs; called again on every selection or dataset change.
    pub fn compute_visibility(
        features: &[GeoFeature],
        roles: &[RoleSummary],
        selection: &FilterSelection,
    ) -> VisibilitySets {
        let mut sets = VisibilitySets::default();

        for resolved in RoleResolver::join(features, roles) {
            if !Self::passes(resolved.feature, resolved.role, selection) {
                continue;
            }
            // join() only yields features with an id
            let Some(feature_id) = resolved.feature.id.clone() else {
                continue;
            };

            if is_transitioning(resolved.role, selection.year_cursor) {
                sets.highlighted.insert(feature_id.clone());
            }
            sets.labeled.insert(feature_id.clone());
            sets.visible.insert(feature_id);
        }

        tracing::debug!(
            "Visibility: {} visible, {} highlighted (year {})",
            sets.visible.len(),
            sets.highlighted.len(),
            selection.year_cursor
        );

        sets
    }
}
