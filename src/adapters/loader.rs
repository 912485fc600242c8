use crate::domain::model::{Dataset, FeatureCollection, RoleDetail, RoleSummary, SkillsFile};
use crate::domain::ports::{DataFiles, Storage};
use crate::utils::error::{AtlasError, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Loads the four data files. Any failure aborts the whole load.
pub struct DatasetLoader {
    storage: Box<dyn Storage>,
    files: DataFiles,
}

impl DatasetLoader {
    pub fn new(storage: Box<dyn Storage>, files: DataFiles) -> Self {
        Self { storage, files }
    }

    pub async fn load(&self) -> Result<Dataset> {
        tracing::info!("Loading career data from {}", self.storage.location());

        let (roles, roles_full, skills, features) = tokio::try_join!(
            self.storage.read_file(&self.files.roles),
            self.storage.read_file(&self.files.roles_full),
            self.storage.read_file(&self.files.skills),
            self.storage.read_file(&self.files.features),
        )?;

        let roles: Vec<RoleSummary> = parse(&self.files.roles, &roles)?;
        let role_details: BTreeMap<String, RoleDetail> = parse(&self.files.roles_full, &roles_full)?;
        let skills: SkillsFile = parse(&self.files.skills, &skills)?;
        let features: FeatureCollection = parse(&self.files.features, &features)?;

        let dataset = Dataset {
            roles,
            role_details: key_details(role_details),
            skills: skills.skills,
            features: features.features,
        };

        tracing::info!(
            "Loaded {} roles, {} role details, {} skills, {} features",
            dataset.roles.len(),
            dataset.role_details.len(),
            dataset.skills.len(),
            dataset.features.len()
        );

        Ok(dataset)
    }
}

fn parse<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| AtlasError::parse(file, e))
}

/// The map key is the role id; it overrides whatever the entry says.
fn key_details(details: BTreeMap<String, RoleDetail>) -> BTreeMap<String, RoleDetail> {
    details
        .into_iter()
        .map(|(key, mut detail)| {
            if !detail.id.is_empty() && detail.id != key {
                tracing::warn!("Role detail keyed {} claims id {}", key, detail.id);
            }
            detail.id = key.clone();
            (key, detail)
        })
        .collect()
}
