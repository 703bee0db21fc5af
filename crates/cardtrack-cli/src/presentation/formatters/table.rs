use std::fmt;

/// A left-aligned text table. Rows may be a single message spanning every
/// column.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
    indent: usize,
}

#[derive(Debug)]
enum Row {
    Cells(Vec<String>),
    Span(String),
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            indent: 0,
        }
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows
            .push(Row::Cells(cells.into_iter().map(Into::into).collect()));
    }

    pub fn span(&mut self, message: impl Into<String>) {
        self.rows.push(Row::Span(message.into()));
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            if let Row::Cells(cells) = row {
                for (i, cell) in cells.iter().enumerate() {
                    let width = cell.chars().count();
                    match widths.get_mut(i) {
                        Some(slot) => *slot = (*slot).max(width),
                        None => widths.push(width),
                    }
                }
            }
        }
        widths
    }
}

fn write_line(
    f: &mut fmt::Formatter<'_>,
    indent: usize,
    cells: &[String],
    widths: &[usize],
) -> fmt::Result {
    write!(f, "{:indent$}", "")?;
    let last = cells.len().saturating_sub(1);
    for (i, cell) in cells.iter().enumerate() {
        if i == last {
            write!(f, "{}", cell)?;
        } else {
            let width = widths.get(i).copied().unwrap_or(0);
            write!(f, "{:<width$}  ", cell)?;
        }
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let header: Vec<String> = self.headers.iter().map(|h| h.to_uppercase()).collect();
        write_line(f, self.indent, &header, &widths)?;

        for row in &self.rows {
            match row {
                Row::Cells(cells) => write_line(f, self.indent, cells, &widths)?,
                Row::Span(message) => {
                    writeln!(f, "{:indent$}{}", "", message, indent = self.indent)?
                }
            }
        }
        Ok(())
    }
}
