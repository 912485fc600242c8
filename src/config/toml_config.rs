use crate::core::ConfigProvider;
use crate::domain::model::{FilterSelection, SeniorityFilter, YearRange};
use crate::domain::ports::{DataFiles, DataSource};
use crate::utils::error::{AtlasError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATA_EXTENSIONS: [&str; 2] = ["json", "geojson"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub files: DataFiles,
    #[serde(default)]
    pub filters: FilterDefaults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    pub data_dir: Option<String>,
    pub base_url: Option<String>,
}

/// Initial filter selection. Anything left out starts unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub skills: Vec<String>,
    pub industries: Vec<String>,
    pub seniority: Option<String>,
    pub year: Option<i32>,
}

impl FilterDefaults {
    pub fn selection(&self, range: YearRange) -> FilterSelection {
        let mut selection = FilterSelection::initial(range);
        selection.skills.extend(self.skills.iter().cloned());
        selection.industries.extend(self.industries.iter().cloned());
        if let Some(seniority) = &self.seniority {
            selection.set_seniority(SeniorityFilter::from(seniority.clone()));
        }
        if let Some(year) = self.year {
            if !range.contains(year) {
                tracing::warn!(
                    "Year {} outside timeline {}..={}, clamping",
                    year,
                    range.min,
                    range.max
                );
            }
            selection.set_year_cursor(year, range);
        }
        selection
    }
}

impl AtlasConfig {
    /// Reads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AtlasError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AtlasError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AtlasError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for AtlasConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_single_source(
            self.source.data_dir.as_deref(),
            self.source.base_url.as_deref(),
        )?;

        validation::validate_file_extension("files.roles", &self.files.roles, &DATA_EXTENSIONS)?;
        validation::validate_file_extension("files.roles_full", &self.files.roles_full, &DATA_EXTENSIONS)?;
        validation::validate_file_extension("files.skills", &self.files.skills, &DATA_EXTENSIONS)?;
        validation::validate_file_extension("files.features", &self.files.features, &DATA_EXTENSIONS)?;

        Ok(())
    }
}

impl ConfigProvider for AtlasConfig {
    fn data_source(&self) -> Result<DataSource> {
        match (&self.source.data_dir, &self.source.base_url) {
            (Some(dir), None) => Ok(DataSource::Local(PathBuf::from(dir))),
            (None, Some(url)) => Ok(DataSource::Http(url.clone())),
            _ => Err(AtlasError::MissingConfigError {
                field: "source.data_dir or source.base_url".to_string(),
            }),
        }
    }

    fn data_files(&self) -> &DataFiles {
        &self.files
    }
}
