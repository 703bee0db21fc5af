use cardtrack_engine::{
    HistoryRow, HistoryTable, MemberRow, MetricSection, MetricsPanel, NO_METRICS_MESSAGE,
    PanelBody,
};
use cardtrack_runtime::{HistoryRegion, PanelContent};
use is_terminal::IsTerminal;
use std::fmt;

use crate::presentation::formatters::{Table, paint_badge};
use crate::presentation::view_models::{BadgeListViewModel, CardPanelViewModel};

// --------------------------------------------------------
// Badge List View
// --------------------------------------------------------

pub struct BadgeListView<'a> {
    data: &'a BadgeListViewModel,
    colored: bool,
}

impl<'a> BadgeListView<'a> {
    pub fn new(data: &'a BadgeListViewModel) -> Self {
        Self {
            data,
            colored: std::io::stdout().is_terminal(),
        }
    }
}

impl<'a> fmt::Display for BadgeListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for badge in &self.data.badges {
            writeln!(f, "{}", paint_badge(&badge.text, &badge.color, self.colored))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Card Panel View
// --------------------------------------------------------

pub struct CardPanelView<'a> {
    data: &'a CardPanelViewModel,
}

impl<'a> CardPanelView<'a> {
    pub fn new(data: &'a CardPanelViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for CardPanelView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Card {}", self.data.card_id)?;
        writeln!(f)?;

        match &self.data.content {
            PanelContent::Metrics(panel) => write_metrics(f, panel)?,
            PanelContent::Failed(message) => {
                writeln!(f, "Error loading card metrics: {}", message)?;
            }
        }

        match &self.data.history {
            HistoryRegion::Loaded(view) => {
                for table in [&view.history, &view.detailed].into_iter().flatten() {
                    writeln!(f)?;
                    write_history(f, table)?;
                }
            }
            HistoryRegion::Failed(message) => {
                writeln!(f)?;
                writeln!(f, "Error loading history: {}", message)?;
            }
            HistoryRegion::NotLoaded => {}
        }

        Ok(())
    }
}

fn write_metrics(f: &mut fmt::Formatter, panel: &MetricsPanel) -> fmt::Result {
    if let Some(notice) = &panel.notice {
        writeln!(f, "{}", notice)?;
        if panel.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
    }

    if panel.is_empty() {
        return writeln!(f, "{}", NO_METRICS_MESSAGE);
    }

    for (i, section) in panel.sections.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write_section(f, section)?;
    }
    Ok(())
}

fn write_section(f: &mut fmt::Formatter, section: &MetricSection) -> fmt::Result {
    match &section.body {
        PanelBody::Text(text) => writeln!(f, "{}: {}", section.title, text),
        PanelBody::Items(items) => {
            writeln!(f, "{}:", section.title)?;
            for item in items {
                writeln!(f, "  {}: {}", item.label, item.value)?;
            }
            Ok(())
        }
        PanelBody::Members(rows) => {
            writeln!(f, "{}:", section.title)?;
            write!(f, "{}", member_table(rows))
        }
        PanelBody::Unavailable(message) => {
            writeln!(f, "{}:", section.title)?;
            writeln!(f, "  {}", message)
        }
    }
}

fn member_table(rows: &[MemberRow]) -> Table {
    let detailed = rows.iter().any(|row| row.action.is_some());

    if !detailed {
        let mut table = Table::new(["Member", "Time"]).indent(2);
        for row in rows {
            table.row([row.member.clone(), row.hours.clone()]);
        }
        return table;
    }

    let mut table = Table::new([
        "Member",
        "Action",
        "Time per Card",
        "Times Appears",
        "Times Leaves",
    ])
    .indent(2);
    for row in rows {
        table.row([
            row.member.clone(),
            row.action.unwrap_or_default().to_string(),
            row.hours.clone(),
            count(row.appears_count),
            count(row.leaves_count),
        ]);
    }
    table
}

fn count(value: Option<u64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn write_history(f: &mut fmt::Formatter, history: &HistoryTable) -> fmt::Result {
    writeln!(f, "{}:", history.title)?;
    let mut table = Table::new(history.columns).indent(2);
    for row in &history.rows {
        match row {
            HistoryRow::Entry { cells } => table.row(cells.iter().cloned()),
            HistoryRow::Empty { message } => table.span(*message),
        }
    }
    write!(f, "{}", table)
}
