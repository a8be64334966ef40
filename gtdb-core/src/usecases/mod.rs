mod create_geo_tag;
mod delete_geo_tag;
mod error;
mod get_geo_tag;
mod query_geo_tags;
mod update_geo_tag;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_geo_tag::*, delete_geo_tag::*, error::Error, get_geo_tag::*, query_geo_tags::*,
    update_geo_tag::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, repositories::Error as RepoError};
}
