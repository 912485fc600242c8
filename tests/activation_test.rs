mod common;

use anyhow::Result;
use career_atlas::domain::ports::DataFiles;
use career_atlas::{AtlasEngine, ConsoleSurface, DatasetLoader, LocalStorage, OutputFormat, RoleResolver};
use common::write_dataset;
use tempfile::TempDir;

type Engine = AtlasEngine<ConsoleSurface<Vec<u8>>>;

async fn load_engine() -> Result<(TempDir, Engine)> {
    let temp_dir = TempDir::new()?;
    write_dataset(temp_dir.path())?;
    let dataset = DatasetLoader::new(
        Box::new(LocalStorage::new(temp_dir.path())),
        DataFiles::default(),
    )
    .load()
    .await?;
    Ok((temp_dir, AtlasEngine::new(dataset)?))
}

#[tokio::test]
async fn test_activation_summarises_first_three_skills() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;

    let activation = engine.activate("attr-acme").cloned().expect("acme resolves");
    assert_eq!(activation.role.id, "acme-growth");
    assert_eq!(activation.skill_summary, vec!["SEO", "Paid Social", "Analytics"]);
    assert_eq!(activation.skill_line(), "SEO, Paid Social, Analytics");
    assert_eq!(activation.period, "2012–2016");
    assert_eq!(activation.focus, Some(vec![13.4, 52.5]));
    assert!(activation.has_full_experience);

    let detail = engine.full_experience(&activation.role.id).expect("detail exists");
    assert_eq!(detail.long_summary, "Four years of experiments.");
    assert_eq!(engine.selected().map(|a| a.role.id.as_str()), Some("acme-growth"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_skill_ids_fall_back_to_raw_id() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;

    let activation = engine.activate("globex-martech").cloned().expect("globex resolves");
    assert_eq!(activation.skill_summary, vec!["Marketing Technology", "unknown-skill"]);
    assert!(!activation.has_full_experience);
    Ok(())
}

#[tokio::test]
async fn test_numeric_feature_resolves_by_title() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;

    let activation = engine.activate("42").cloned().expect("title match");
    assert_eq!(activation.role.id, "initech-revops");
    assert_eq!(activation.period, "2020–Present");
    Ok(())
}

#[tokio::test]
async fn test_unresolved_activation_keeps_previous_selection() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;
    engine.activate("attr-acme");

    assert!(engine.activate("orphan").is_none());
    assert!(engine.activate("zone-growth").is_none());
    assert!(engine.activate("does-not-exist").is_none());
    assert_eq!(engine.selected().map(|a| a.feature_id.as_str()), Some("attr-acme"));

    engine.clear_selected_role();
    assert!(engine.selected().is_none());
    Ok(())
}

#[tokio::test]
async fn test_activation_does_not_touch_filter_selection() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;
    engine.attach_surface(|| Ok(ConsoleSurface::new(Vec::new(), OutputFormat::Json)))?;

    let selection = engine.initial_selection();
    let before = selection.clone();
    let sets_before = engine.recompute(&selection)?;
    engine.activate("attr-acme");
    let sets_after = engine.recompute(&selection)?;

    assert_eq!(selection, before);
    assert_eq!(sets_before, sets_after);
    Ok(())
}

#[tokio::test]
async fn test_activation_agrees_with_resolver_for_every_feature() -> Result<()> {
    let (_dir, mut engine) = load_engine().await?;
    let features = engine.dataset().features.clone();
    let roles = engine.dataset().roles.clone();

    for feature in features.iter().filter(|f| f.is_role()) {
        let Some(id) = feature.id.as_deref() else { continue };
        let expected = RoleResolver::resolve(feature, &roles).map(|r| r.id.clone());
        let activated = engine.activate(id).map(|a| a.role.id.clone());
        assert_eq!(activated, expected, "feature {}", id);
    }
    Ok(())
}
