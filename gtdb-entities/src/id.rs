use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Numeric identifier that is assigned by a store on insertion.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Id(u64);

impl Id {
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// The identifier that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for Id {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<Id> for u64 {
    fn from(from: Id) -> Self {
        from.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid id '{input}': {source}")]
pub struct IdParseError {
    input: String,
    #[source]
    source: ParseIntError,
}

impl FromStr for Id {
    type Err = IdParseError;
    fn from_str(s: &str) -> Result<Id, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|source| IdParseError {
                input: s.to_owned(),
                source,
            })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
