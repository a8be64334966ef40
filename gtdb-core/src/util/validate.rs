use gtdb_entities::geo::{Distance, MapPoint};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionInvalidation {
    #[error("Invalid latitude")]
    Latitude,
    #[error("Invalid longitude")]
    Longitude,
}

impl Validate for MapPoint {
    type Error = PositionInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.lat().is_valid() {
            return Err(Self::Error::Latitude);
        }
        if !self.lng().is_valid() {
            return Err(Self::Error::Longitude);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid radius")]
pub struct RadiusInvalidation;

impl Validate for Distance {
    type Error = RadiusInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.is_valid() && self.to_km().is_finite() {
            Ok(())
        } else {
            Err(RadiusInvalidation)
        }
    }
}
