//! # gtdb-core
//!
//! Business rules of GeoTagDB: the repository contract for
//! geo tag storage and the use cases that drive it.

pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gtdb_entities::{geo::*, geotag::*, id::*};
}
