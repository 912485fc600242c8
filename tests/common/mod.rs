#![allow(dead_code)]

use career_atlas::domain::model::{
    FeatureKind, FeatureProperties, GeoFeature, Geometry, RoleSummary, Seniority,
};
use serde_json::{json, Value};
use std::path::Path;

pub fn role(id: &str, start_year: i32, end_year: Option<i32>) -> RoleSummary {
    RoleSummary {
        id: id.to_string(),
        attraction_id: None,
        title: format!("Role {}", id),
        company: format!("Company {}", id),
        start_year,
        end_year,
        seniority: Seniority::Manager,
        skills: vec![],
        tools: vec![],
        location: None,
        summary: String::new(),
        highlights: vec![],
    }
}

pub fn role_feature(id: &str, industries: &[&str]) -> GeoFeature {
    GeoFeature {
        id: Some(id.to_string()),
        geometry: Some(Geometry::Point {
            coordinates: vec![12.5, 41.9],
        }),
        properties: FeatureProperties {
            kind: FeatureKind::Role,
            company: Some(format!("Company at {}", id)),
            industries: industries.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        },
    }
}

pub fn roles_json() -> Value {
    json!([
        {
            "id": "acme-growth",
            "attractionId": "attr-acme",
            "title": "Growth Manager",
            "company": "Acme",
            "startYear": 2012,
            "endYear": 2016,
            "seniority": "manager",
            "skills": ["seo", "paid-social", "analytics", "crm"],
            "tools": ["HubSpot"],
            "location": "Berlin",
            "summary": "Built the growth team.",
            "highlights": ["3x pipeline"]
        },
        {
            "id": "globex-martech",
            "title": "Director of Marketing Technology",
            "company": "Globex",
            "startYear": 2016,
            "endYear": 2020,
            "seniority": "director",
            "skills": ["martech", "unknown-skill"]
        },
        {
            "id": "initech-revops",
            "attractionId": "attr-initech",
            "title": "Head of Revenue Operations",
            "company": "Initech",
            "startYear": 2020,
            "endYear": null,
            "seniority": "leader",
            "skills": ["analytics"]
        }
    ])
}

pub fn roles_full_json() -> Value {
    json!({
        "acme-growth": {
            "longSummary": "Four years of experiments.",
            "responsibilities": ["Own acquisition"],
            "bullets": ["Launched referral loop"]
        }
    })
}

pub fn skills_json() -> Value {
    json!({
        "skills": [
            {"id": "seo", "label": "SEO"},
            {"id": "paid-social", "label": "Paid Social"},
            {"id": "analytics", "label": "Analytics"},
            {"id": "martech", "label": "Marketing Technology"}
        ]
    })
}

pub fn features_json() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "zone-growth",
                "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]]},
                "properties": {"kind": "zone", "theme": "growth", "name": "Growth Gardens"}
            },
            {
                "type": "Feature",
                "id": "zone-misc",
                "geometry": {"type": "Polygon", "coordinates": [[[20.0, 0.0], [30.0, 0.0], [30.0, 10.0], [20.0, 0.0]]]},
                "properties": {"kind": "zone", "theme": "mystery", "name": "Misc"}
            },
            {
                "type": "Feature",
                "id": "attr-acme",
                "geometry": {"type": "Point", "coordinates": [13.4, 52.5]},
                "properties": {"kind": "role", "company": "Acme", "title": "Growth Manager", "industries": ["saas", "tech"]}
            },
            {
                "type": "Feature",
                "id": "globex-martech",
                "geometry": {"type": "Point", "coordinates": [-0.1, 51.5]},
                "properties": {"kind": "role", "company": "Globex", "title": "Director of Marketing Technology", "industries": ["finance"]}
            },
            {
                "type": "Feature",
                "id": 42,
                "geometry": {"type": "Point", "coordinates": [-74.0, 40.7]},
                "properties": {"kind": "role", "company": "Initech", "title": "Head of Revenue Operations", "industries": ["tech"]}
            },
            {
                "type": "Feature",
                "id": "orphan",
                "geometry": {"type": "Point", "coordinates": [2.3, 48.8]},
                "properties": {"kind": "role", "company": "Nobody", "title": "Ghost Role", "industries": ["media"]}
            }
        ]
    })
}

pub fn write_dataset(dir: &Path) -> std::io::Result<()> {
    std::fs::write(dir.join("roles.json"), roles_json().to_string())?;
    std::fs::write(dir.join("roles_full.json"), roles_full_json().to_string())?;
    std::fs::write(dir.join("skills.json"), skills_json().to_string())?;
    std::fs::write(dir.join("career-world.geojson"), features_json().to_string())?;
    Ok(())
}
