use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of rows shown per page
pub const PAGE_SIZE: usize = 5;

/// Sentinel filter value meaning "no restriction on this dimension"
pub const ALL: &str = "All";

/// Column the table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Name,
    Vulnerabilities,
    Updates,
    SastTool,
    Rerun,
}

impl SortKey {
    pub const ALL_KEYS: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Vulnerabilities,
        SortKey::Updates,
        SortKey::SastTool,
        SortKey::Rerun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Vulnerabilities => "vulnerabilities",
            SortKey::Updates => "updates",
            SortKey::SastTool => "sastTool",
            SortKey::Rerun => "rerun",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(SortKey::Name),
            "vulnerabilities" | "vulns" => Ok(SortKey::Vulnerabilities),
            "updates" => Ok(SortKey::Updates),
            "sasttool" | "tool" => Ok(SortKey::SastTool),
            "rerun" => Ok(SortKey::Rerun),
            _ => Err(format!(
                "Invalid sort key: {}. Please specify one of: name, vulnerabilities, updates, sastTool, rerun",
                s
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Orients an ascending comparison result; `Equal` stays `Equal`.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// A column that can be narrowed with a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    SastTool,
    Rerun,
}

impl FilterDimension {
    /// Values offered for this dimension, sentinel first
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterDimension::SastTool => &[ALL, "Semgrep", "CodeQL", "Snyk Code", "ESLint"],
            FilterDimension::Rerun => &[ALL, "Yes", "No"],
        }
    }

    /// Parses `value` and checks it is one of [`FilterDimension::options`].
    pub fn parse_option(&self, value: &str) -> Result<FilterSelection, String> {
        if self.options().contains(&value) {
            Ok(FilterSelection::from(value))
        } else {
            Err(format!(
                "Invalid {} filter: {}. Please specify one of: {}",
                self,
                value,
                self.options().join(", ")
            ))
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterDimension::SastTool => write!(f, "sastTool"),
            FilterDimension::Rerun => write!(f, "rerun"),
        }
    }
}

/// Selected value for one filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Only(String),
}

impl FilterSelection {
    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Only(value) => value,
        }
    }

    /// Exact, case-sensitive comparison; `All` admits everything.
    pub fn admits(&self, field: &str) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Only(value) => value == field,
        }
    }
}

impl From<&str> for FilterSelection {
    fn from(value: &str) -> Self {
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Only(value.to_string())
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Active selection for every filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub sast_tool: FilterSelection,
    pub rerun: FilterSelection,
}

impl Filters {
    pub fn get(&self, dimension: FilterDimension) -> &FilterSelection {
        match dimension {
            FilterDimension::SastTool => &self.sast_tool,
            FilterDimension::Rerun => &self.rerun,
        }
    }

    pub fn set(&mut self, dimension: FilterDimension, selection: FilterSelection) {
        match dimension {
            FilterDimension::SastTool => self.sast_tool = selection,
            FilterDimension::Rerun => self.rerun = selection,
        }
    }

    /// True when no dimension restricts the rows
    pub fn is_unrestricted(&self) -> bool {
        self.sast_tool == FilterSelection::All && self.rerun == FilterSelection::All
    }
}

/// Mutable view state; owned by the controller, read by the engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub filters: Filters,
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Updates,
            sort_order: SortOrder::Desc,
            filters: Filters::default(),
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}
