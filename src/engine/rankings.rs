// sortable leaderboard views

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::data::RankingRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Rank,
    National,
    Logistics,
    Strategy,
    Decision,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Rank,
        SortField::National,
        SortField::Logistics,
        SortField::Strategy,
        SortField::Decision,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Rank => "rank",
            SortField::National => "national",
            SortField::Logistics => "logistics",
            SortField::Strategy => "strategy",
            SortField::Decision => "decision",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "rank" => Some(SortField::Rank),
            "national" | "nat" | "national-score" => Some(SortField::National),
            "logistics" | "log" => Some(SortField::Logistics),
            "strategy" | "str" => Some(SortField::Strategy),
            "decision" | "dec" => Some(SortField::Decision),
            _ => None,
        }
    }

    pub fn value(self, record: &RankingRecord) -> u32 {
        match self {
            SortField::Rank => record.rank,
            SortField::National => record.national_score,
            SortField::Logistics => record.logistics,
            SortField::Strategy => record.strategy,
            SortField::Decision => record.decision,
        }
    }

    /// scores read best-first; rank reads 1 upward
    fn natural_direction(self) -> Direction {
        match self {
            SortField::Rank => Direction::Ascending,
            _ => Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// a parsed sort selection such as "highest-national" or "strategy:asc"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl Default for SortKey {
    fn default() -> Self {
        Self {
            field: SortField::National,
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortKeyError {
    #[error("unknown sort field '{0}' (expected rank, national, logistics, strategy or decision)")]
    UnknownField(String),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        let (field, direction) = if let Some(field) = s.strip_prefix("highest-") {
            (field, Some(Direction::Descending))
        } else if let Some(field) = s.strip_prefix("lowest-") {
            (field, Some(Direction::Ascending))
        } else if let Some((field, dir)) = s.split_once(':') {
            let direction = match dir {
                "asc" | "ascending" | "up" => Direction::Ascending,
                "desc" | "descending" | "down" => Direction::Descending,
                other => return Err(SortKeyError::UnknownDirection(other.to_string())),
            };
            (field, Some(direction))
        } else {
            (s.as_str(), None)
        };

        let field =
            SortField::from_name(field).ok_or_else(|| SortKeyError::UnknownField(field.to_string()))?;

        Ok(Self {
            field,
            direction: direction.unwrap_or_else(|| field.natural_direction()),
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.direction {
            Direction::Descending => "highest",
            Direction::Ascending => "lowest",
        };
        write!(f, "{}-{}", prefix, self.field.as_str())
    }
}

/// sorted copy of `records`; equal values keep their input order
pub fn sort_rankings(
    records: &[RankingRecord],
    field: SortField,
    direction: Direction,
) -> Vec<RankingRecord> {
    let mut sorted = records.to_vec();
    match direction {
        Direction::Ascending => sorted.sort_by_key(|r| field.value(r)),
        Direction::Descending => sorted.sort_by(|a, b| field.value(b).cmp(&field.value(a))),
    }
    sorted
}

pub fn sort_by_key(records: &[RankingRecord], key: SortKey) -> Vec<RankingRecord> {
    sort_rankings(records, key.field, key.direction)
}
