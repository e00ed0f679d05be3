//! Utilities for parsing and formatting RFC 3339 timestamps.
//!
//! Every `created_at`/`updated_at`-style wire field decodes into the
//! [`Timestamp`] newtype, which wraps [`OffsetDateTime`].
//!
//! # Parsing RFC 3339 strings
//! ```
//! # use rill::model::Timestamp;
//! #
//! let timestamp = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
//! let timestamp = Timestamp::parse("2024-01-01T00:00:00+00:00").unwrap();
//! let timestamp: Timestamp = "2024-01-01T00:00:00.796Z".parse().unwrap();
//!
//! assert!(Timestamp::parse("2024-01-01T00:00").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use dep_time::format_description::well_known::Rfc3339;
use dep_time::OffsetDateTime;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_cow::CowStr;

use crate::internal::prelude::*;

/// A timestamp in the wire's RFC 3339 format.
///
/// The struct implements `std::fmt::Display` to format the underlying time
/// as an RFC 3339 date-time string such as `2024-01-01T00:00:00Z`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    /// Parses an RFC 3339 date-time string such as `2024-01-01T00:00:00Z` or
    /// `2024-01-01T00:00:00.123+02:00`.
    ///
    /// # Errors
    /// Returns `Err` if the string is not a valid RFC 3339 date-time.
    pub fn parse(input: &str) -> StdResult<Timestamp, ParseError> {
        OffsetDateTime::parse(input, &Rfc3339).map(Timestamp).map_err(ParseError)
    }

    /// Returns the number of non-leap seconds since the UNIX epoch.
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Self(dt)
    }
}

impl std::ops::Deref for Timestamp {
    type Target = OffsetDateTime;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Signifies a failure to parse a string into a [`Timestamp`].
#[derive(Debug)]
pub struct ParseError(dep_time::error::Parse);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> StdResult<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let input = CowStr::deserialize(deserializer)?;
        Timestamp::parse(&input.0).map_err(DeError::custom)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;

    #[test]
    fn parses_and_reformats_utc() {
        let ts = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01T00:00:00Z");
        assert_eq!(ts.unix_timestamp(), 1_704_067_200);
    }

    #[test]
    fn offset_is_preserved() {
        let ts = Timestamp::parse("2021-09-30T14:12:03+02:00").unwrap();
        assert_eq!(ts.to_string(), "2021-09-30T14:12:03+02:00");
    }

    #[test]
    fn rejects_partial_dates() {
        assert!(Timestamp::parse("2024-01-01").is_err());
        assert!(Timestamp::parse("2024-01-01T00:00").is_err());
    }
}
