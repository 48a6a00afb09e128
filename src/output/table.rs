//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::client::Organization;

/// Organization for table display
#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "NAME")]
    name: String,
}

impl From<&Organization> for OrgRow {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
        }
    }
}

/// Format organizations as a table
pub fn format_orgs(orgs: &[Organization]) -> String {
    if orgs.is_empty() {
        return "No organizations found.".to_string();
    }

    let rows: Vec<OrgRow> = orgs.iter().map(OrgRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}
