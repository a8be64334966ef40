use crate::{
    repositories,
    util::validate::{PositionInvalidation, RadiusInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<PositionInvalidation> for Error {
    fn from(_: PositionInvalidation) -> Self {
        Self::InvalidPosition
    }
}

impl From<RadiusInvalidation> for Error {
    fn from(_: RadiusInvalidation) -> Self {
        Self::InvalidRadius
    }
}
