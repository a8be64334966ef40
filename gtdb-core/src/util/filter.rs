use crate::entities::*;

pub trait InRadius {
    fn in_radius(&self, center: MapPoint, radius: Distance) -> bool;
}

impl InRadius for MapPoint {
    // The boundary is inclusive.
    fn in_radius(&self, center: MapPoint, radius: Distance) -> bool {
        MapPoint::distance(center, *self) <= radius
    }
}

impl InRadius for GeoTag {
    fn in_radius(&self, center: MapPoint, radius: Distance) -> bool {
        self.pos.in_radius(center, radius)
    }
}

pub fn geo_tags_in_radius(center: MapPoint, radius: Distance) -> impl Fn(&&GeoTag) -> bool {
    move |geo_tag: &&GeoTag| geo_tag.in_radius(center, radius)
}

pub fn geo_tags_by_keyword(keyword: &str) -> impl Fn(&&GeoTag) -> bool + '_ {
    move |geo_tag: &&GeoTag| geo_tag.contains_keyword(keyword)
}
