use crate::domain::model::{Dataset, RoleDetail, RoleSummary, Skill, YearRange};
use crate::utils::error::{AtlasError, Result};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Lookup tables derived once per dataset load. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Indices {
    pub skill_by_id: HashMap<String, Skill>,
    /// First role per attraction id, in collection order. Answers the attraction-id rule
    /// of activation without scanning.
    pub role_by_attraction_id: HashMap<String, RoleSummary>,
    pub role_detail_by_id: HashMap<String, RoleDetail>,
    /// Sorted, distinct. Taken from role features only, never from role summaries.
    pub industries: Vec<String>,
    pub year_range: YearRange,
}

impl Indices {
    pub fn build(dataset: &Dataset) -> Result<Self> {
        let year_range = year_range(&dataset.roles)?;

        let skill_by_id = dataset
            .skills
            .iter()
            .map(|skill| (skill.id.clone(), skill.clone()))
            .collect();

        let mut seen_roles = HashSet::new();
        let mut role_by_attraction_id = HashMap::new();
        for role in &dataset.roles {
            if !seen_roles.insert(role.id.as_str()) {
                tracing::warn!("Duplicate role id {}, earlier record wins", role.id);
            }
            if let Some(attraction_id) = &role.attraction_id {
                // First record in collection order wins, same as resolution.
                role_by_attraction_id
                    .entry(attraction_id.clone())
                    .or_insert_with(|| role.clone());
            }
        }

        let mut role_detail_by_id = HashMap::new();
        for (key, detail) in &dataset.role_details {
            if !seen_roles.contains(key.as_str()) {
                tracing::warn!("Role detail {} has no matching role summary", key);
            }
            role_detail_by_id.insert(key.clone(), detail.clone());
        }

        let industries: BTreeSet<&str> = dataset
            .features
            .iter()
            .filter(|feature| feature.is_role())
            .flat_map(|feature| feature.properties.industries.iter().map(String::as_str))
            .collect();

        tracing::debug!(
            "Built indices: {} skills, {} attraction ids, {} details, {} industries, years {}..={}",
            dataset.skills.len(),
            role_by_attraction_id.len(),
            role_detail_by_id.len(),
            industries.len(),
            year_range.min,
            year_range.max
        );

        Ok(Self {
            skill_by_id,
            role_by_attraction_id,
            role_detail_by_id,
            industries: industries.into_iter().map(str::to_string).collect(),
            year_range,
        })
    }

    pub fn skill_label<'a>(&'a self, skill_id: &'a str) -> &'a str {
        self.skill_by_id
            .get(skill_id)
            .map(|skill| skill.label.as_str())
            .unwrap_or(skill_id)
    }

    pub fn role_for_attraction(&self, attraction_id: &str) -> Option<&RoleSummary> {
        self.role_by_attraction_id.get(attraction_id)
    }

    pub fn detail_for(&self, role_id: &str) -> Option<&RoleDetail> {
        self.role_detail_by_id.get(role_id)
    }
}

/// Min/max over every start and end year. No years at all means no timeline.
pub fn year_range(roles: &[RoleSummary]) -> Result<YearRange> {
    let mut years = roles
        .iter()
        .flat_map(|role| std::iter::once(role.start_year).chain(role.end_year));

    let first = years.next().ok_or(AtlasError::EmptyTimeline)?;
    let (min, max) = years.fold((first, first), |(min, max), year| {
        (min.min(year), max.max(year))
    });

    Ok(YearRange { min, max })
}
