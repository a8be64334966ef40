use super::prelude::*;
use crate::util::validate::Validate;

/// Unvalidated input for a new geo tag.
#[derive(Debug, Clone)]
pub struct CreateGeoTag {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub hashtag: String,
}

pub fn prepare_new_geo_tag(create: CreateGeoTag) -> Result<NewGeoTag> {
    let CreateGeoTag {
        lat,
        lng,
        name,
        hashtag,
    } = create;
    let pos = MapPoint::from_lat_lng_deg(lat, lng);
    pos.validate()?;
    Ok(NewGeoTag { pos, name, hashtag })
}

pub fn create_geo_tag<R: GeoTagRepo>(repo: &R, create: CreateGeoTag) -> Result<GeoTag> {
    let new_geo_tag = prepare_new_geo_tag(create)?;
    let geo_tag = repo.add_geo_tag(new_geo_tag);
    log::info!(
        "Created geo tag #{} '{}' at {}",
        geo_tag.id,
        geo_tag.name,
        geo_tag.pos
    );
    Ok(geo_tag)
}
