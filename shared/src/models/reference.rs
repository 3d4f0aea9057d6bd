//! Reference data - small name-only lookup tables linked from employees

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of reference-data kinds
///
/// Each kind maps to a fixed table; there is no string-keyed dynamic table
/// lookup anywhere in the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Nationality,
    Unit,
    Rank,
    Sponsor,
    JobTitle,
    Item,
}

impl ReferenceKind {
    /// All kinds, in a stable order
    pub const ALL: &'static [ReferenceKind] = &[
        ReferenceKind::Nationality,
        ReferenceKind::Unit,
        ReferenceKind::Rank,
        ReferenceKind::Sponsor,
        ReferenceKind::JobTitle,
        ReferenceKind::Item,
    ];

    /// The fixed table name for this kind
    pub const fn table(&self) -> &'static str {
        match self {
            ReferenceKind::Nationality => "nationality",
            ReferenceKind::Unit => "unit",
            ReferenceKind::Rank => "rank",
            ReferenceKind::Sponsor => "sponsor",
            ReferenceKind::JobTitle => "job_title",
            ReferenceKind::Item => "item",
        }
    }

    /// The path segment used in API routes
    pub const fn as_str(&self) -> &'static str {
        self.table()
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for an unknown reference kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference kind: {0}")]
pub struct UnknownReferenceKind(pub String);

impl FromStr for ReferenceKind {
    type Err = UnknownReferenceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nationality" => Ok(ReferenceKind::Nationality),
            "unit" => Ok(ReferenceKind::Unit),
            "rank" => Ok(ReferenceKind::Rank),
            "sponsor" => Ok(ReferenceKind::Sponsor),
            "job_title" => Ok(ReferenceKind::JobTitle),
            "item" => Ok(ReferenceKind::Item),
            other => Err(UnknownReferenceKind(other.to_string())),
        }
    }
}

/// A reference item row (identical shape for all kinds)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReferenceItem {
    pub id: i64,
    pub name: String,
}

/// Create reference item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceItemCreate {
    pub name: String,
}

/// Update reference item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceItemUpdate {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrips_through_str() {
        for kind in ReferenceKind::ALL {
            let parsed: ReferenceKind = kind.as_str().parse().expect("parse");
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "warehouse".parse::<ReferenceKind>().unwrap_err();
        assert_eq!(err, UnknownReferenceKind("warehouse".to_string()));
    }
}
