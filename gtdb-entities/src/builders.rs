pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{geotag_builder::*, new_geotag_builder::*};

pub mod geotag_builder {

    use super::*;
    use crate::{geo::*, geotag::*, id::*};

    #[derive(Debug)]
    pub struct GeoTagBuild {
        geo_tag: GeoTag,
    }

    impl GeoTagBuild {
        pub fn id(mut self, id: u64) -> Self {
            self.geo_tag.id = Id::from(id);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.geo_tag.pos = pos;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.geo_tag.name = name.into();
            self
        }
        pub fn hashtag(mut self, hashtag: &str) -> Self {
            self.geo_tag.hashtag = hashtag.into();
            self
        }
        pub fn finish(self) -> GeoTag {
            self.geo_tag
        }
    }

    impl Builder for GeoTag {
        type Build = GeoTagBuild;
        fn build() -> Self::Build {
            Self::Build {
                geo_tag: GeoTag {
                    id: Id::default(),
                    pos: MapPoint::default(),
                    name: "".into(),
                    hashtag: "".into(),
                },
            }
        }
    }
}

pub mod new_geotag_builder {

    use super::*;
    use crate::{geo::*, geotag::*};

    #[derive(Debug)]
    pub struct NewGeoTagBuild {
        new_geo_tag: NewGeoTag,
    }

    impl NewGeoTagBuild {
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.new_geo_tag.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::from_lat_lng_deg(lat, lng))
        }
        pub fn name(mut self, name: &str) -> Self {
            self.new_geo_tag.name = name.into();
            self
        }
        pub fn hashtag(mut self, hashtag: &str) -> Self {
            self.new_geo_tag.hashtag = hashtag.into();
            self
        }
        pub fn finish(self) -> NewGeoTag {
            self.new_geo_tag
        }
    }

    impl Builder for NewGeoTag {
        type Build = NewGeoTagBuild;
        fn build() -> Self::Build {
            Self::Build {
                new_geo_tag: NewGeoTag {
                    pos: MapPoint::default(),
                    name: "".into(),
                    hashtag: "".into(),
                },
            }
        }
    }
}
