use super::prelude::*;

/// Removes the geo tag and returns it.
///
/// Deleting the same id again fails with `NotFound`
/// but leaves the store unchanged.
pub fn delete_geo_tag<R: GeoTagRepo>(repo: &R, id: Id) -> Result<GeoTag> {
    let geo_tag = repo
        .remove_geo_tag_by_id(id)
        .ok_or(RepoError::NotFound)?;
    log::info!("Deleted geo tag #{id}");
    Ok(geo_tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::MockDb;
    use gtdb_entities::builders::*;

    #[test]
    fn delete_is_idempotent() {
        let db = MockDb::default();
        let a = db.add_geo_tag(NewGeoTag::build().name("a").finish());
        let b = db.add_geo_tag(NewGeoTag::build().name("b").finish());
        assert_eq!(a, delete_geo_tag(&db, a.id).unwrap());
        assert_eq!(vec![b.clone()], db.all_geo_tags());
        assert_eq!(
            Err(Error::Repo(RepoError::NotFound)),
            delete_geo_tag(&db, a.id)
        );
        assert_eq!(vec![b], db.all_geo_tags());
    }

    #[test]
    fn ids_are_not_reused() {
        let db = MockDb::default();
        let a = db.add_geo_tag(NewGeoTag::build().finish());
        delete_geo_tag(&db, a.id).unwrap();
        let b = db.add_geo_tag(NewGeoTag::build().finish());
        assert!(a.id < b.id);
    }
}
