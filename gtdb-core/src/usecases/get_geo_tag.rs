use super::prelude::*;

pub fn get_geo_tag<R: GeoTagRepo>(repo: &R, id: Id) -> Result<GeoTag> {
    Ok(repo.get_geo_tag(id)?)
}

pub fn geo_tags_by_name<R: GeoTagRepo>(repo: &R, name: &str) -> Vec<GeoTag> {
    repo.geo_tags_by_name(name)
}
