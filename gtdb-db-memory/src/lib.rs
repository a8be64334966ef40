use gtdb_core::{
    entities::*,
    repositories::{self as repo, GeoTagRepo},
    util::filter,
};
use parking_lot::{Mutex, MutexGuard};

type RepoResult<T> = std::result::Result<T, repo::Error>;

#[derive(Debug, Default)]
struct GeoTagMemory {
    // The id for the next insertion, it is never decremented.
    next_id: Id,
    // Insertion order
    geo_tags: Vec<GeoTag>,
}

/// Process-local storage of geo tags.
///
/// All state lives behind a single lock that is held
/// for the whole duration of every operation. Share it
/// between threads with an `Arc`.
#[derive(Debug, Default)]
pub struct InMemoryGeoTagStore(Mutex<GeoTagMemory>);

impl InMemoryGeoTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<GeoTagMemory> {
        self.0.lock()
    }
}

impl GeoTagRepo for InMemoryGeoTagStore {
    fn add_geo_tag(&self, new_geo_tag: NewGeoTag) -> GeoTag {
        let mut memory = self.lock();
        let id = memory.next_id;
        memory.next_id = id.next();
        let geo_tag = GeoTag::with_id(id, new_geo_tag);
        memory.geo_tags.push(geo_tag.clone());
        log::debug!("Stored geo tag #{id} ({} in total)", memory.geo_tags.len());
        geo_tag
    }

    fn all_geo_tags(&self) -> Vec<GeoTag> {
        self.lock().geo_tags.clone()
    }

    fn count_geo_tags(&self) -> usize {
        self.lock().geo_tags.len()
    }

    fn get_geo_tag(&self, id: Id) -> RepoResult<GeoTag> {
        self.lock()
            .geo_tags
            .iter()
            .find(|geo_tag| geo_tag.id == id)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }

    fn geo_tags_by_name(&self, name: &str) -> Vec<GeoTag> {
        self.lock()
            .geo_tags
            .iter()
            .filter(|geo_tag| geo_tag.name == name)
            .cloned()
            .collect()
    }

    fn update_geo_tag(&self, id: Id, patch: GeoTagPatch) -> RepoResult<GeoTag> {
        let mut memory = self.lock();
        let geo_tag = memory
            .geo_tags
            .iter_mut()
            .find(|geo_tag| geo_tag.id == id)
            .ok_or(repo::Error::NotFound)?;
        geo_tag.apply_patch(patch);
        Ok(geo_tag.clone())
    }

    fn remove_geo_tag_by_id(&self, id: Id) -> Option<GeoTag> {
        let mut memory = self.lock();
        let mut removed = None;
        // Keeps working even if the ids were not unique
        memory.geo_tags.retain(|geo_tag| {
            if geo_tag.id != id {
                return true;
            }
            debug_assert!(removed.is_none());
            removed.get_or_insert_with(|| geo_tag.clone());
            false
        });
        if removed.is_none() {
            log::debug!("No geo tag #{id} to remove");
        }
        removed
    }

    fn nearby_geo_tags(&self, center: MapPoint, radius: Distance) -> Vec<GeoTag> {
        self.lock()
            .geo_tags
            .iter()
            .filter(filter::geo_tags_in_radius(center, radius))
            .cloned()
            .collect()
    }
}
