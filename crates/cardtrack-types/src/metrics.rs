use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// NOTE: Backend compatibility
//
// Older backends report per-member time as a flat `time_per_member` map of
// seconds keyed by member id. Newer ones send `member_time_stats`, keyed by
// member name, with session and appearance counters. Both are accepted here;
// `Metrics::member_shape()` tells consumers which one they got. When a
// payload carries both, the richer `member_time_stats` wins.
//
// Every field is optional: a card with no recorded history comes back as
// `{"message": "..."}` with no metrics at all.

/// Aggregated card metrics (`GET /api/card/{card_id}/metrics`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Total tracked time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,

    /// Seconds spent per list, keyed by list name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_list: Option<BTreeMap<String, f64>>,

    /// Flat seconds per member (legacy shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_per_member: Option<BTreeMap<String, f64>>,

    /// Detailed per-member statistics (current shape)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_time_stats: Option<BTreeMap<String, MemberTimeStats>>,

    /// Number of times the card entered each list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_counts: Option<BTreeMap<String, u64>>,

    /// Moves into each list, grouped by the member who made them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_counts_by_member: Option<BTreeMap<String, BTreeMap<String, u64>>>,

    /// Informational message sent instead of metrics (e.g. no history yet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberTimeStats {
    #[serde(default)]
    pub total_time: f64,
    #[serde(default)]
    pub sessions: Vec<Value>,
    #[serde(default)]
    pub appears_count: u64,
    #[serde(default)]
    pub leaves_count: u64,
}

/// Which per-member representation a metrics payload carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberShape {
    /// `member_time_stats` is present
    Detailed,
    /// Only `time_per_member` is present
    Flat,
    /// Neither is present
    Absent,
}

/// One member's time, normalized across both backend shapes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberTime {
    pub member: String,
    pub total_time: f64,
    /// Only available from the detailed shape
    pub sessions: Option<usize>,
    pub appears_count: Option<u64>,
    pub leaves_count: Option<u64>,
}

impl Metrics {
    pub fn member_shape(&self) -> MemberShape {
        if self.member_time_stats.is_some() {
            MemberShape::Detailed
        } else if self.time_per_member.is_some() {
            MemberShape::Flat
        } else {
            MemberShape::Absent
        }
    }

    /// Per-member time in whichever shape the backend sent.
    pub fn member_times(&self) -> Vec<MemberTime> {
        match self.member_shape() {
            MemberShape::Detailed => self
                .member_time_stats
                .iter()
                .flatten()
                .map(|(member, stats)| MemberTime {
                    member: member.clone(),
                    total_time: stats.total_time,
                    sessions: Some(stats.sessions.len()),
                    appears_count: Some(stats.appears_count),
                    leaves_count: Some(stats.leaves_count),
                })
                .collect(),
            MemberShape::Flat => self
                .time_per_member
                .iter()
                .flatten()
                .map(|(member, seconds)| MemberTime {
                    member: member.clone(),
                    total_time: *seconds,
                    sessions: None,
                    appears_count: None,
                    leaves_count: None,
                })
                .collect(),
            MemberShape::Absent => Vec::new(),
        }
    }

    /// Seconds recorded for a member key (id for the flat shape, name for the
    /// detailed shape).
    pub fn member_seconds(&self, key: &str) -> Option<f64> {
        match self.member_shape() {
            MemberShape::Detailed => self
                .member_time_stats
                .as_ref()
                .and_then(|stats| stats.get(key))
                .map(|stats| stats.total_time),
            MemberShape::Flat => self
                .time_per_member
                .as_ref()
                .and_then(|times| times.get(key))
                .copied(),
            MemberShape::Absent => None,
        }
    }

    /// Seconds spent in a list, treating a zero entry as missing.
    pub fn list_seconds(&self, list_name: &str) -> Option<f64> {
        self.time_per_list
            .as_ref()
            .and_then(|times| times.get(list_name))
            .copied()
            .filter(|seconds| *seconds != 0.0)
    }
}
