use crate::domain::model::{GeoFeature, RoleSummary};
use std::fmt;

/// One way of linking a map feature to a role record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    AttractionId,
    RoleId,
    Title,
}

impl MatchRule {
    /// Evaluated in this order; the first rule that matches any role decides.
    pub const PRECEDENCE: [MatchRule; 3] = [Self::AttractionId, Self::RoleId, Self::Title];

    pub fn matches(self, feature: &GeoFeature, role: &RoleSummary) -> bool {
        match self {
            Self::AttractionId => match (&role.attraction_id, &feature.id) {
                (Some(attraction_id), Some(feature_id)) => attraction_id == feature_id,
                _ => false,
            },
            Self::RoleId => feature.id.as_deref() == Some(role.id.as_str()),
            Self::Title => feature.properties.title.as_deref() == Some(role.title.as_str()),
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AttractionId => "attraction id",
            Self::RoleId => "role id",
            Self::Title => "title",
        };
        f.write_str(name)
    }
}

/// A role feature paired with the role it resolved to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedFeature<'a> {
    pub feature: &'a GeoFeature,
    pub role: &'a RoleSummary,
    pub rule: MatchRule,
}

pub struct RoleResolver;

impl RoleResolver {
    /// Rule-major search: every role is tried against a rule before the next, weaker rule
    /// is consulted. Within a rule the first role in collection order wins.
    pub fn resolve_with_rule<'a>(
        feature: &GeoFeature,
        roles: &'a [RoleSummary],
    ) -> Option<(MatchRule, &'a RoleSummary)> {
        MatchRule::PRECEDENCE.iter().find_map(|&rule| {
            roles
                .iter()
                .find(|role| rule.matches(feature, role))
                .map(|role| (rule, role))
        })
    }

    pub fn resolve<'a>(feature: &GeoFeature, roles: &'a [RoleSummary]) -> Option<&'a RoleSummary> {
        Self::resolve_with_rule(feature, roles).map(|(_, role)| role)
    }

    /// Pairs every role-kind feature with its role. Unresolved features are logged and dropped.
    pub fn join<'a>(features: &'a [GeoFeature], roles: &'a [RoleSummary]) -> Vec<ResolvedFeature<'a>> {
        features
            .iter()
            .filter(|feature| feature.is_role())
            .filter_map(|feature| {
                let Some(feature_id) = feature.id.as_deref() else {
                    tracing::debug!("Skipping role feature without id: {:?}", feature.properties.title);
                    return None;
                };

                match Self::resolve_with_rule(feature, roles) {
                    Some((rule, role)) => {
                        tracing::trace!("Feature {} resolved to role {} by {}", feature_id, role.id, rule);
                        Some(ResolvedFeature { feature, role, rule })
                    }
                    None => {
                        tracing::debug!(
                            "No role found for feature {} ({:?})",
                            feature_id,
                            feature.properties.title
                        );
                        None
                    }
                }
            })
            .collect()
    }
}
