use crate::{geo::MapPoint, id::Id};

/// A named and hash-tagged location.
///
/// Only `name` and `hashtag` may change after the
/// geo tag has been stored.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoTag {
    pub id: Id,
    pub pos: MapPoint,
    pub name: String,
    pub hashtag: String,
}

impl GeoTag {
    pub fn with_id(id: Id, new_geo_tag: NewGeoTag) -> Self {
        let NewGeoTag { pos, name, hashtag } = new_geo_tag;
        Self {
            id,
            pos,
            name,
            hashtag,
        }
    }

    /// Case-sensitive substring match on either `name` or `hashtag`.
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.name.contains(keyword) || self.hashtag.contains(keyword)
    }

    pub fn apply_patch(&mut self, patch: GeoTagPatch) {
        let GeoTagPatch { name, hashtag } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(hashtag) = hashtag {
            self.hashtag = hashtag;
        }
    }
}

/// A geo tag that has not been assigned an [`Id`] yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGeoTag {
    pub pos: MapPoint,
    pub name: String,
    pub hashtag: String,
}

/// Partial update of the mutable fields of a [`GeoTag`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoTagPatch {
    pub name: Option<String>,
    pub hashtag: Option<String>,
}

impl GeoTagPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.hashtag.is_none()
    }
}
