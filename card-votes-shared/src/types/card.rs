use crate::types::CardId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel display value marking a card as unvalued or tied.
///
/// Distinct from every real tier value. A card created without a seed value
/// starts here, and the aggregator writes it back when two or more values tie
/// for the maximum weighted sum.
pub const NO_CONSENSUS: f64 = -1.0;

/// Represents a card being valued by the community.
///
/// `value` is derived once voting has occurred: it is overwritten with the
/// aggregator's output after every vote mutation. It may be edited directly
/// through the administrative path while no votes exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Represents the fields a card listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSortField {
    Name,
    Value,
    UpdatedAt,
}

/// Represents the direction of a card listing's ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Represents the aggregate tier distribution over the whole card catalog.
///
/// Counts are over persisted display values, so `unvalued` includes both
/// never-voted and currently tied cards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardStats {
    pub total: i64,
    pub unvalued: i64,
    pub low: i64,
    pub mid: i64,
    pub high: i64,
    pub one_mm_plus: i64,
}
