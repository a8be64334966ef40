use crate::{entities::*, repositories::*, util::filter};
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, Error>;

// Single threaded stand-in for a real store.
#[derive(Default)]
pub struct MockDb {
    pub geo_tags: RefCell<Vec<GeoTag>>,
    pub next_id: Cell<Id>,
}

impl GeoTagRepo for MockDb {
    fn add_geo_tag(&self, new_geo_tag: NewGeoTag) -> GeoTag {
        let id = self.next_id.get();
        self.next_id.set(id.next());
        let geo_tag = GeoTag::with_id(id, new_geo_tag);
        self.geo_tags.borrow_mut().push(geo_tag.clone());
        geo_tag
    }

    fn all_geo_tags(&self) -> Vec<GeoTag> {
        self.geo_tags.borrow().clone()
    }

    fn count_geo_tags(&self) -> usize {
        self.geo_tags.borrow().len()
    }

    fn get_geo_tag(&self, id: Id) -> RepoResult<GeoTag> {
        self.geo_tags
            .borrow()
            .iter()
            .find(|x| x.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn geo_tags_by_name(&self, name: &str) -> Vec<GeoTag> {
        self.geo_tags
            .borrow()
            .iter()
            .filter(|x| x.name == name)
            .cloned()
            .collect()
    }

    fn update_geo_tag(&self, id: Id, patch: GeoTagPatch) -> RepoResult<GeoTag> {
        let mut geo_tags = self.geo_tags.borrow_mut();
        let geo_tag = geo_tags
            .iter_mut()
            .find(|x| x.id == id)
            .ok_or(Error::NotFound)?;
        geo_tag.apply_patch(patch);
        Ok(geo_tag.clone())
    }

    fn remove_geo_tag_by_id(&self, id: Id) -> Option<GeoTag> {
        let mut geo_tags = self.geo_tags.borrow_mut();
        let pos = geo_tags.iter().position(|x| x.id == id)?;
        Some(geo_tags.remove(pos))
    }

    fn nearby_geo_tags(&self, center: MapPoint, radius: Distance) -> Vec<GeoTag> {
        self.geo_tags
            .borrow()
            .iter()
            .filter(filter::geo_tags_in_radius(center, radius))
            .cloned()
            .collect()
    }
}
