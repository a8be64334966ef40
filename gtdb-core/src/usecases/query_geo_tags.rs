use super::prelude::*;
use crate::util::{
    filter,
    pagination::{Page, Pagination},
    validate::Validate,
};

/// Unvalidated discovery parameters.
///
/// Without coordinates all geo tags are considered. A missing
/// radius falls back to the default radius of the caller.
#[derive(Debug, Clone, Default)]
pub struct GeoTagQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
    pub text: Option<String>,
}

impl GeoTagQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            lat,
            lng,
            radius_km,
            text,
        } = self;
        lat.is_none() && lng.is_none() && radius_km.is_none() && text.is_none()
    }
}

fn center_of(lat: Option<f64>, lng: Option<f64>) -> Result<Option<MapPoint>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let pos = MapPoint::from_lat_lng_deg(lat, lng);
            pos.validate()?;
            Ok(Some(pos))
        }
        (None, None) => Ok(None),
        _ => Err(Error::InvalidPosition),
    }
}

pub fn query_geo_tags<R: GeoTagRepo>(
    repo: &R,
    query: GeoTagQuery,
    default_radius: Distance,
) -> Result<Vec<GeoTag>> {
    if query.is_empty() {
        return Ok(repo.all_geo_tags());
    }
    let GeoTagQuery {
        lat,
        lng,
        radius_km,
        text,
    } = query;

    let center = center_of(lat, lng)?;
    let radius = radius_km.map(Distance::from_km).unwrap_or_else(|| {
        log::debug!("No radius requested - Using default radius {default_radius}");
        default_radius
    });
    radius.validate()?;

    // An empty search term means "no keyword filter"
    let keyword = text.as_deref().filter(|text| !text.is_empty());

    let geo_tags = match (center, keyword) {
        (Some(center), Some(keyword)) => repo.search_nearby_geo_tags(keyword, center, radius),
        (Some(center), None) => repo.nearby_geo_tags(center, radius),
        (None, Some(keyword)) => repo
            .all_geo_tags()
            .iter()
            .filter(filter::geo_tags_by_keyword(keyword))
            .cloned()
            .collect(),
        (None, None) => repo.all_geo_tags(),
    };
    log::debug!("Found {} geo tag(s)", geo_tags.len());
    Ok(geo_tags)
}

pub fn query_geo_tags_paged<R: GeoTagRepo>(
    repo: &R,
    query: GeoTagQuery,
    default_radius: Distance,
    pagination: &Pagination,
) -> Result<Page<GeoTag>> {
    let geo_tags = query_geo_tags(repo, query, default_radius)?;
    Ok(pagination.apply(geo_tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{usecases::tests::MockDb, util::filter::InRadius};
    use gtdb_entities::builders::*;
    use rand::prelude::*;

    const DEFAULT_RADIUS: Distance = Distance::from_km(1000.0);

    fn berlin_and_paris() -> (MockDb, GeoTag, GeoTag) {
        let db = MockDb::default();
        let a = db.add_geo_tag(
            NewGeoTag::build()
                .lat_lng(52.52, 13.405)
                .name("Berlin")
                .hashtag("#capital")
                .finish(),
        );
        let b = db.add_geo_tag(
            NewGeoTag::build()
                .lat_lng(48.8566, 2.3522)
                .name("Paris")
                .hashtag("#france")
                .finish(),
        );
        (db, a, b)
    }

    fn at_berlin() -> GeoTagQuery {
        GeoTagQuery {
            lat: Some(52.52),
            lng: Some(13.405),
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_returns_everything() {
        let (db, a, b) = berlin_and_paris();
        let res = query_geo_tags(&db, GeoTagQuery::default(), DEFAULT_RADIUS).unwrap();
        assert_eq!(vec![a, b], res);
    }

    #[test]
    fn nearby_only() {
        let (db, a, _) = berlin_and_paris();
        let query = GeoTagQuery {
            radius_km: Some(50.0),
            ..at_berlin()
        };
        assert_eq!(vec![a], query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap());
    }

    #[test]
    fn default_radius_is_used() {
        let (db, a, b) = berlin_and_paris();
        assert_eq!(
            vec![a.clone(), b],
            query_geo_tags(&db, at_berlin(), DEFAULT_RADIUS).unwrap()
        );
        assert_eq!(
            vec![a],
            query_geo_tags(&db, at_berlin(), Distance::from_km(10.0)).unwrap()
        );
    }

    #[test]
    fn search_nearby_with_keyword() {
        let (db, a, _) = berlin_and_paris();
        let query = GeoTagQuery {
            text: Some("cap".into()),
            ..at_berlin()
        };
        assert_eq!(vec![a.clone()], query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap());

        // distance 0 is inside a radius of 1
        let query = GeoTagQuery {
            text: Some("cap".into()),
            radius_km: Some(1.0),
            ..at_berlin()
        };
        assert_eq!(vec![a], query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap());
    }

    #[test]
    fn keyword_is_case_sensitive() {
        let (db, _, _) = berlin_and_paris();
        let query = GeoTagQuery {
            text: Some("CAP".into()),
            ..at_berlin()
        };
        assert!(query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap().is_empty());
    }

    #[test]
    fn empty_keyword_does_not_filter() {
        let (db, a, b) = berlin_and_paris();
        let query = GeoTagQuery {
            text: Some("".into()),
            ..at_berlin()
        };
        assert_eq!(vec![a, b], query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap());
    }

    #[test]
    fn keyword_without_location() {
        let (db, _, b) = berlin_and_paris();
        let query = GeoTagQuery {
            text: Some("#fr".into()),
            ..Default::default()
        };
        assert_eq!(vec![b], query_geo_tags(&db, query, DEFAULT_RADIUS).unwrap());
    }

    #[test]
    fn reject_invalid_parameters() {
        let (db, _, _) = berlin_and_paris();
        let query = GeoTagQuery {
            lat: Some(52.0),
            ..Default::default()
        };
        assert_eq!(
            Err(Error::InvalidPosition),
            query_geo_tags(&db, query, DEFAULT_RADIUS)
        );
        let query = GeoTagQuery {
            lat: Some(100.0),
            lng: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            Err(Error::InvalidPosition),
            query_geo_tags(&db, query, DEFAULT_RADIUS)
        );
        let query = GeoTagQuery {
            radius_km: Some(-1.0),
            ..at_berlin()
        };
        assert_eq!(
            Err(Error::InvalidRadius),
            query_geo_tags(&db, query, DEFAULT_RADIUS)
        );
        let query = GeoTagQuery {
            radius_km: Some(f64::NAN),
            ..at_berlin()
        };
        assert_eq!(
            Err(Error::InvalidRadius),
            query_geo_tags(&db, query, DEFAULT_RADIUS)
        );
    }

    #[test]
    fn paging_after_filtering() {
        let db = MockDb::default();
        for i in 0..10 {
            let lat = if i % 2 == 0 { 0.0 } else { 45.0 };
            db.add_geo_tag(
                NewGeoTag::build()
                    .lat_lng(lat, 0.0)
                    .name(&format!("tag{i}"))
                    .finish(),
            );
        }
        let query = GeoTagQuery {
            lat: Some(0.0),
            lng: Some(0.0),
            radius_km: Some(100.0),
            ..Default::default()
        };
        let pagination = Pagination {
            offset: Some(1),
            limit: Some(2),
        };
        let page = query_geo_tags_paged(&db, query, DEFAULT_RADIUS, &pagination).unwrap();
        assert_eq!(5, page.total);
        let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(vec!["tag2", "tag4"], names);
    }

    #[test]
    fn proximity_and_refinement_properties() {
        let mut rng = rand::thread_rng();
        let db = MockDb::default();
        let keywords = ["foo", "bar", "baz"];
        for i in 0..200 {
            let keyword = keywords[i % keywords.len()];
            db.add_geo_tag(
                NewGeoTag::build()
                    .lat_lng(rng.gen_range(40.0..60.0), rng.gen_range(0.0..20.0))
                    .name(&format!("{keyword}-{i}"))
                    .hashtag(&format!("#{}", keywords[(i + 1) % keywords.len()]))
                    .finish(),
            );
        }
        for _ in 0..20 {
            let center = MapPoint::from_lat_lng_deg(
                rng.gen_range(40.0_f64..60.0),
                rng.gen_range(0.0_f64..20.0),
            );
            let radius = Distance::from_km(rng.gen_range(0.0..1500.0));
            let nearby = db.nearby_geo_tags(center, radius);
            for geo_tag in db.all_geo_tags() {
                assert_eq!(nearby.contains(&geo_tag), geo_tag.in_radius(center, radius));
            }
            let keyword = keywords[rng.gen_range(0..keywords.len())];
            let found = db.search_nearby_geo_tags(keyword, center, radius);
            assert!(found.iter().all(|t| nearby.contains(t)));
            assert!(found.iter().all(|t| t.contains_keyword(keyword)));
            // insertion order is preserved
            assert!(found.windows(2).all(|w| w[0].id < w[1].id));
        }
    }
}
