// Engine module - pure projections from backend data to view models.
// Nothing here performs I/O. The runtime fetches and the CLI renders.

pub mod badges;
pub mod format;
pub mod history;
pub mod panel;

pub use badges::compose_badges;
pub use format::{format_hours, format_timestamp, BADGE_PRECISION, PANEL_PRECISION};
pub use history::{HistoryRow, HistoryTable, HistoryView, render_history};
pub use panel::{
    LabeledValue, MemberRow, MetricSection, MetricsPanel, NO_METRICS_MESSAGE, PanelBody,
    build_metrics_panel,
};
