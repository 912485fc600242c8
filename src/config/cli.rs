use crate::adapters::surface::OutputFormat;
use crate::config::toml_config::AtlasConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "career-atlas")]
#[command(about = "Resolve and filter career map features from static JSON data")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding roles.json, roles_full.json, skills.json and the geojson
    #[arg(long, conflicts_with = "base_url")]
    pub data_dir: Option<String>,

    /// Base URL the data files are served from
    #[arg(long)]
    pub base_url: Option<String>,

    /// Only show roles using any of these skill ids
    #[arg(long, value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Only show markers tagged with any of these industries
    #[arg(long, value_delimiter = ',')]
    pub industries: Vec<String>,

    /// Seniority level, or "all"
    #[arg(long)]
    pub seniority: Option<String>,

    /// Year cursor; defaults to the end of the timeline
    #[arg(long)]
    pub year: Option<i32>,

    /// Feature id to activate after filtering
    #[arg(long)]
    pub activate: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the TOML file if given, then lets command line flags override it.
    pub fn resolve(&self) -> Result<AtlasConfig> {
        let mut config = match &self.config {
            Some(path) => AtlasConfig::from_file(path)?,
            None => AtlasConfig::default(),
        };

        if self.data_dir.is_some() || self.base_url.is_some() {
            config.source.data_dir = self.data_dir.clone();
            config.source.base_url = self.base_url.clone();
        }
        if !self.skills.is_empty() {
            config.filters.skills = self.skills.clone();
        }
        if !self.industries.is_empty() {
            config.filters.industries = self.industries.clone();
        }
        if self.seniority.is_some() {
            config.filters.seniority = self.seniority.clone();
        }
        if self.year.is_some() {
            config.filters.year = self.year;
        }

        Ok(config)
    }
}
