use itertools::Itertools;
use std::{fmt, num::ParseFloatError, str::FromStr};
use thiserror::Error;

/// Latitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Unchecked conversion, see [`LatCoord::is_valid`].
    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        Some(Self::from_deg(deg.into())).filter(|lat| lat.is_valid())
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// Longitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Unchecked conversion, see [`LngCoord::is_valid`].
    pub const fn from_deg(deg: f64) -> Self {
        Self(deg)
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        Some(Self::from_deg(deg.into())).filter(|lng| lng.is_valid())
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location given in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat.into()), LngCoord::from_deg(lng.into()))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| MapPointParseError::Latitude(lat_deg_str.to_owned(), err))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|err| MapPointParseError::Longitude(lng_deg_str.to_owned(), err))?;
        let lat = LatCoord::try_from_deg(lat_deg).ok_or(MapPointParseError::LatitudeRange(lat_deg))?;
        let lng = LngCoord::try_from_deg(lng_deg).ok_or(MapPointParseError::LongitudeRange(lng_deg))?;
        Ok(MapPoint::new(lat, lng))
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}': {1}")]
    Latitude(String, #[source] ParseFloatError),
    #[error("Invalid longitude '{0}': {1}")]
    Longitude(String, #[source] ParseFloatError),
    #[error("Invalid latitude degrees: {0}")]
    LatitudeRange(f64),
    #[error("Invalid longitude degrees: {0}")]
    LongitudeRange(f64),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_owned()))
        }
    }
}

/// A distance on the surface of the earth in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_km(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_km(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} km", self.0)
    }
}

// The Earth's radius in kilometers.
const EARTH_RADIUS: Distance = Distance::from_km(6371.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    ///
    /// Coordinates are not range checked: invalid points
    /// yield a meaningless or NaN distance.
    pub fn distance(from: MapPoint, to: MapPoint) -> Distance {
        let dlat = (from.lat.to_deg() - to.lat.to_deg()).to_radians();
        let dlng = (from.lng.to_deg() - to.lng.to_deg()).to_radians();

        let h = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + (dlng / 2.0).sin() * (dlng / 2.0).sin() * from.lat.to_rad().cos() * to.lat.to_rad().cos();
        let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        Distance::from_km(EARTH_RADIUS.to_km() * c)
    }
}
