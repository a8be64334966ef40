use super::*;
use gtdb_core::{usecases as uc, util::pagination as p};
use gtdb_entities as e;

impl From<e::geotag::GeoTag> for GeoTag {
    fn from(from: e::geotag::GeoTag) -> Self {
        let e::geotag::GeoTag {
            id,
            pos,
            name,
            hashtag,
        } = from;
        let (latitude, longitude) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            latitude,
            longitude,
            name,
            hashtag,
        }
    }
}

impl From<NewGeoTag> for uc::CreateGeoTag {
    fn from(from: NewGeoTag) -> Self {
        let NewGeoTag {
            latitude,
            longitude,
            name,
            hashtag,
        } = from;
        Self {
            lat: latitude,
            lng: longitude,
            name,
            hashtag,
        }
    }
}

impl From<GeoTagPatch> for e::geotag::GeoTagPatch {
    fn from(from: GeoTagPatch) -> Self {
        let GeoTagPatch { name, hashtag } = from;
        Self { name, hashtag }
    }
}

impl From<DiscoveryQuery> for (uc::GeoTagQuery, p::Pagination) {
    fn from(from: DiscoveryQuery) -> Self {
        let DiscoveryQuery {
            searchterm,
            latitude,
            longitude,
            radius,
            offset,
            limit,
        } = from;
        let query = uc::GeoTagQuery {
            lat: latitude,
            lng: longitude,
            radius_km: radius,
            text: searchterm,
        };
        let pagination = p::Pagination { offset, limit };
        (query, pagination)
    }
}

impl<T, U: From<T>> From<p::Page<T>> for Page<U> {
    fn from(from: p::Page<T>) -> Self {
        let p::Page { total, items } = from;
        Self {
            total,
            items: items.into_iter().map(U::from).collect(),
        }
    }
}
