// Low-level storage access traits.
// Implementations own their collection exclusively and
// only ever hand out copies of the stored entities.

use crate::{entities::*, util::filter::InRadius};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
}

type Result<T> = std::result::Result<T, Error>;

/// Storage of geo tags.
///
/// Every method is atomic with respect to all other
/// methods of the same repository.
pub trait GeoTagRepo {
    /// Assigns the next id and appends the geo tag.
    fn add_geo_tag(&self, new_geo_tag: NewGeoTag) -> GeoTag;

    // In insertion order
    fn all_geo_tags(&self) -> Vec<GeoTag>;
    fn count_geo_tags(&self) -> usize;

    fn get_geo_tag(&self, id: Id) -> Result<GeoTag>;

    // Exact match
    fn geo_tags_by_name(&self, name: &str) -> Vec<GeoTag>;

    fn update_geo_tag(&self, id: Id, patch: GeoTagPatch) -> Result<GeoTag>;

    // Removing an unknown id is not an error, the
    // removed geo tag is returned if there was one.
    fn remove_geo_tag_by_id(&self, id: Id) -> Option<GeoTag>;

    // All geo tags with a distance <= radius, in insertion order
    fn nearby_geo_tags(&self, center: MapPoint, radius: Distance) -> Vec<GeoTag>;

    fn search_nearby_geo_tags(
        &self,
        keyword: &str,
        center: MapPoint,
        radius: Distance,
    ) -> Vec<GeoTag> {
        let mut geo_tags = self.nearby_geo_tags(center, radius);
        geo_tags.retain(|geo_tag| {
            debug_assert!(geo_tag.in_radius(center, radius));
            geo_tag.contains_keyword(keyword)
        });
        geo_tags
    }
}
