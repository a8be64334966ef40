use super::prelude::*;

pub fn update_geo_tag<R: GeoTagRepo>(repo: &R, id: Id, patch: GeoTagPatch) -> Result<GeoTag> {
    if patch.is_empty() {
        log::debug!("Empty patch for geo tag #{id}");
    }
    let geo_tag = repo.update_geo_tag(id, patch)?;
    log::info!("Updated geo tag #{id}");
    Ok(geo_tag)
}
