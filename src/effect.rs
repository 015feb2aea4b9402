use crate::validate::CatalogIssue;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Surface validation findings in the log.
    ReportIssues { issues: Vec<CatalogIssue> },
}
