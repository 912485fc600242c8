mod common;

use anyhow::Result;
use career_atlas::domain::ports::DataFiles;
use career_atlas::{AtlasEngine, AtlasError, ConsoleSurface, DatasetLoader, HttpStorage, LocalStorage};
use common::{features_json, roles_full_json, roles_json, skills_json, write_dataset};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_load_from_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_dataset(temp_dir.path())?;

    let loader = DatasetLoader::new(
        Box::new(LocalStorage::new(temp_dir.path())),
        DataFiles::default(),
    );
    let dataset = loader.load().await?;

    assert_eq!(dataset.roles.len(), 3);
    assert_eq!(dataset.skills.len(), 4);
    assert_eq!(dataset.features.len(), 6);
    assert_eq!(dataset.role_details["acme-growth"].id, "acme-growth");
    assert_eq!(dataset.roles[2].end_year, None);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_fails_the_whole_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_dataset(temp_dir.path())?;
    std::fs::remove_file(temp_dir.path().join("roles_full.json"))?;

    let loader = DatasetLoader::new(
        Box::new(LocalStorage::new(temp_dir.path())),
        DataFiles::default(),
    );
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, AtlasError::IoError(_)));
    Ok(())
}

#[tokio::test]
async fn test_malformed_file_names_the_culprit() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_dataset(temp_dir.path())?;
    std::fs::write(temp_dir.path().join("skills.json"), "{\"skills\": [{\"id\": 1}]}")?;

    let loader = DatasetLoader::new(
        Box::new(LocalStorage::new(temp_dir.path())),
        DataFiles::default(),
    );
    match loader.load().await {
        Err(AtlasError::ParseError { file, .. }) => assert_eq!(file, "skills.json"),
        other => panic!("expected parse error, got {:?}", other.map(|d| d.roles.len())),
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_roles_is_a_fatal_timeline_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_dataset(temp_dir.path())?;
    std::fs::write(temp_dir.path().join("roles.json"), "[]")?;

    let loader = DatasetLoader::new(
        Box::new(LocalStorage::new(temp_dir.path())),
        DataFiles::default(),
    );
    let dataset = loader.load().await?;
    let engine = AtlasEngine::<ConsoleSurface<Vec<u8>>>::new(dataset);
    assert!(matches!(engine, Err(AtlasError::EmptyTimeline)));
    Ok(())
}

#[tokio::test]
async fn test_load_over_http() -> Result<()> {
    let server = MockServer::start();
    let files = [
        ("/data/roles.json", roles_json()),
        ("/data/roles_full.json", roles_full_json()),
        ("/data/skills.json", skills_json()),
        ("/data/world.geojson", features_json()),
    ];
    let mocks: Vec<_> = files
        .iter()
        .map(|(path, body)| {
            server.mock(|when, then| {
                when.method(GET).path(*path);
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(body.clone());
            })
        })
        .collect();

    let data_files = DataFiles {
        features: "world.geojson".to_string(),
        ..DataFiles::default()
    };
    let loader = DatasetLoader::new(Box::new(HttpStorage::new(server.url("/data/"))), data_files);
    let dataset = loader.load().await?;

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(dataset.roles.len(), 3);
    assert_eq!(dataset.features[4].id.as_deref(), Some("42"));
    Ok(())
}

#[tokio::test]
async fn test_http_error_status_is_a_fetch_error() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET);
        then.status(404);
    });

    let loader = DatasetLoader::new(Box::new(HttpStorage::new(server.base_url())), DataFiles::default());
    let err = loader.load().await.unwrap_err();
    assert!(matches!(err, AtlasError::FetchError { status: 404, .. }));
    Ok(())
}
