use anyhow::{Context as _, Result};
use gtdb_boundary as json;
use gtdb_core::{repositories::GeoTagRepo, usecases};
use std::{fs, path::Path};

/// Loads a JSON array of new geo tags into the store.
///
/// Every record passes the same validation as a regular
/// creation. The first invalid record aborts the import,
/// records before it remain stored.
pub fn import_from_json_file<R: GeoTagRepo>(repo: &R, path: &Path) -> Result<usize> {
    log::info!("Importing geo tags from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let new_geo_tags: Vec<json::NewGeoTag> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid geo tags in {}", path.display()))?;
    let count = new_geo_tags.len();
    for (i, new_geo_tag) in new_geo_tags.into_iter().enumerate() {
        usecases::create_geo_tag(repo, new_geo_tag.into())
            .with_context(|| format!("Unable to import geo tag #{i}"))?;
    }
    log::info!("Imported {count} geo tag(s)");
    Ok(count)
}
