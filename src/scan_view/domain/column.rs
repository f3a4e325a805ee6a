use serde::Serialize;

/// Horizontal alignment hint for a rendered column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
}

/// Describes one table column for the rendering side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: &'static str,
    pub align: Align,
    /// Percentage string such as `"15%"`
    pub width: &'static str,
}

impl ColumnDescriptor {
    const fn new(name: &'static str, align: Align, width: &'static str) -> Self {
        Self { name, align, width }
    }

    /// Numeric part of `width`
    pub fn width_percent(&self) -> u32 {
        self.width.trim_end_matches('%').parse().unwrap_or(0)
    }
}

const COLUMNS: [ColumnDescriptor; 6] = [
    ColumnDescriptor::new("name", Align::Left, "15%"),
    ColumnDescriptor::new("vulnerabilities", Align::Center, "10%"),
    ColumnDescriptor::new("updates", Align::Center, "15%"),
    ColumnDescriptor::new("sastTool", Align::Center, "15%"),
    ColumnDescriptor::new("rerun", Align::Center, "10%"),
    ColumnDescriptor::new("url", Align::Left, "35%"),
];

/// The six table columns in display order; widths sum to 100%.
pub fn default_columns() -> Vec<ColumnDescriptor> {
    COLUMNS.to_vec()
}
