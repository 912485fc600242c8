use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub label: String,
}

/// Shape of `skills.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsFile {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Seniority {
    Manager,
    Director,
    Leader,
    Other(String),
}

impl Seniority {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manager => "manager",
            Self::Director => "director",
            Self::Leader => "leader",
            Self::Other(level) => level,
        }
    }
}

impl From<String> for Seniority {
    /// Known levels match case-insensitively; anything else is kept verbatim.
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("manager") {
            Self::Manager
        } else if value.eq_ignore_ascii_case("director") {
            Self::Director
        } else if value.eq_ignore_ascii_case("leader") {
            Self::Leader
        } else {
            Self::Other(value)
        }
    }
}

impl From<Seniority> for String {
    fn from(value: Seniority) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub id: String,
    #[serde(default)]
    pub attraction_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub start_year: i32,
    /// `None` while the role is ongoing.
    #[serde(default)]
    pub end_year: Option<i32>,
    pub seniority: Seniority,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl RoleSummary {
    pub fn is_ongoing(&self) -> bool {
        self.end_year.is_none()
    }

    /// "2018–2021", or "2021–Present" for ongoing roles.
    pub fn period_label(&self) -> String {
        match self.end_year {
            Some(end) => format!("{}–{}", self.start_year, end),
            None => format!("{}–Present", self.start_year),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub long_summary: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Zone,
    Role,
    #[default]
    #[serde(other)]
    Other,
}

pub type Position = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

/// Properties of a map feature. Which fields are meaningful depends on `kind`:
/// zones use `theme` and `name`, role markers use `company`, `title` and `industries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub kind: FeatureKind,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(default, deserialize_with = "deserialize_feature_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: FeatureProperties,
}

impl GeoFeature {
    pub fn kind(&self) -> FeatureKind {
        self.properties.kind
    }

    pub fn is_role(&self) -> bool {
        self.kind() == FeatureKind::Role
    }

    pub fn is_zone(&self) -> bool {
        self.kind() == FeatureKind::Zone
    }

    /// Coordinates of point features, used to focus the map on activation.
    pub fn point(&self) -> Option<&Position> {
        match &self.geometry {
            Some(Geometry::Point { coordinates }) => Some(coordinates),
            _ => None,
        }
    }
}

/// GeoJSON allows string or numeric feature ids; both are kept as strings.
fn deserialize_feature_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(id)) => Ok(Some(id)),
        Some(serde_json::Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "feature id must be a string or a number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

/// The four source collections, loaded once per session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub roles: Vec<RoleSummary>,
    pub role_details: BTreeMap<String, RoleDetail>,
    pub skills: Vec<Skill>,
    pub features: Vec<GeoFeature>,
}

impl Dataset {
    pub fn feature(&self, feature_id: &str) -> Option<&GeoFeature> {
        self.features
            .iter()
            .find(|feature| feature.id.as_deref() == Some(feature_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeniorityFilter {
    #[default]
    All,
    Only(Seniority),
}

impl SeniorityFilter {
    pub fn admits(&self, seniority: &Seniority) -> bool {
        match self {
            Self::All => true,
            Self::Only(level) => level == seniority,
        }
    }
}

impl From<String> for SeniorityFilter {
    fn from(value: String) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Seniority::from(value.to_string()))
        }
    }
}

impl From<SeniorityFilter> for String {
    fn from(value: SeniorityFilter) -> Self {
        match value {
            SeniorityFilter::All => "all".to_string(),
            SeniorityFilter::Only(level) => level.into(),
        }
    }
}

impl FromStr for SeniorityFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

/// The user's current filter choices. Owned and mutated by the controlling surface only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub skills: BTreeSet<String>,
    pub industries: BTreeSet<String>,
    pub seniority: SeniorityFilter,
    pub year_cursor: i32,
}

impl FilterSelection {
    /// Nothing filtered, cursor at the end of the timeline.
    pub fn initial(range: YearRange) -> Self {
        Self {
            skills: BTreeSet::new(),
            industries: BTreeSet::new(),
            seniority: SeniorityFilter::All,
            year_cursor: range.max,
        }
    }

    pub fn toggle_skill(&mut self, skill_id: &str) {
        if !self.skills.remove(skill_id) {
            self.skills.insert(skill_id.to_string());
        }
    }

    pub fn toggle_industry(&mut self, industry: &str) {
        if !self.industries.remove(industry) {
            self.industries.insert(industry.to_string());
        }
    }

    pub fn set_seniority(&mut self, seniority: SeniorityFilter) {
        self.seniority = seniority;
    }

    pub fn set_year_cursor(&mut self, year: i32, range: YearRange) {
        self.year_cursor = range.clamp(year);
    }

    pub fn clear(&mut self, range: YearRange) {
        *self = Self::initial(range);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilitySets {
    pub visible: BTreeSet<String>,
    pub highlighted: BTreeSet<String>,
    pub labeled: BTreeSet<String>,
}
