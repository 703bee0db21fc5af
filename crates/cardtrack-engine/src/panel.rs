use crate::format::{PANEL_PRECISION, format_hours};
use cardtrack_core::PanelSettings;
use cardtrack_types::{MemberShape, Metrics};
use serde::Serialize;

pub const NO_METRICS_MESSAGE: &str = "No metrics to display based on current settings.";
pub const NO_MEMBER_DATA: &str = "No member time data available";
pub const NO_MOVE_DATA: &str = "No move count data available";

/// The metrics part of the card panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricsPanel {
    pub sections: Vec<MetricSection>,
    /// Informational message the backend sent with the metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl MetricsPanel {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSection {
    pub title: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PanelBody {
    Text(String),
    Items(Vec<LabeledValue>),
    Members(Vec<MemberRow>),
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

impl LabeledValue {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub member: String,
    /// `None` for backends that only report flat seconds
    pub action: Option<&'static str>,
    pub hours: String,
    pub appears_count: Option<u64>,
    pub leaves_count: Option<u64>,
}

/// Build the metrics sections enabled in `settings`, in panel order:
/// total, per list, per member, list counts, move counts.
pub fn build_metrics_panel(metrics: &Metrics, settings: &PanelSettings) -> MetricsPanel {
    let mut sections = Vec::new();

    if settings.show_total_time
        && let Some(total) = metrics.total_time
    {
        sections.push(MetricSection {
            title: "Total Time",
            body: PanelBody::Text(hours_text(total)),
        });
    }

    if settings.show_time_per_list
        && let Some(per_list) = &metrics.time_per_list
    {
        let items = per_list
            .iter()
            .map(|(list, seconds)| LabeledValue::new(list, hours_text(*seconds)))
            .collect();
        sections.push(MetricSection {
            title: "Time per List",
            body: PanelBody::Items(items),
        });
    }

    if settings.show_time_per_member {
        let body = match metrics.member_shape() {
            MemberShape::Absent => PanelBody::Unavailable(NO_MEMBER_DATA),
            MemberShape::Detailed | MemberShape::Flat => PanelBody::Members(
                metrics
                    .member_times()
                    .into_iter()
                    .map(|member| MemberRow {
                        action: member.sessions.map(|count| {
                            if count > 0 {
                                "Multiple Sessions"
                            } else {
                                "No Sessions"
                            }
                        }),
                        hours: hours_text(member.total_time),
                        appears_count: member.appears_count,
                        leaves_count: member.leaves_count,
                        member: member.member,
                    })
                    .collect(),
            ),
        };
        sections.push(MetricSection {
            title: "Time per Member",
            body,
        });
    }

    if settings.show_list_counts
        && let Some(counts) = &metrics.list_counts
    {
        let items = counts
            .iter()
            .map(|(list, count)| LabeledValue::new(list, count.to_string()))
            .collect();
        sections.push(MetricSection {
            title: "List Counts",
            body: PanelBody::Items(items),
        });
    }

    if settings.show_move_counts {
        let body = match &metrics.move_counts_by_member {
            Some(by_member) => PanelBody::Items(
                by_member
                    .iter()
                    .map(|(member, counts)| {
                        let moves: Vec<String> = counts
                            .iter()
                            .map(|(list, count)| format!("{} ({})", list, count))
                            .collect();
                        LabeledValue::new(member, moves.join(", "))
                    })
                    .collect(),
            ),
            None => PanelBody::Unavailable(NO_MOVE_DATA),
        };
        sections.push(MetricSection {
            title: "Move Counts by Member",
            body,
        });
    }

    MetricsPanel {
        sections,
        notice: metrics.message.clone(),
    }
}

fn hours_text(seconds: f64) -> String {
    format!("{} hours", format_hours(seconds, PANEL_PRECISION))
}
