use clientdesk_core::{query::SortField, table::ClientTableState};
use clientdesk_model::ClientRecord;
use std::fmt::Write as _;

const COLUMNS: [&str; 7] = [
    "Client ID",
    "Client Name",
    "Client Type",
    "Email",
    "Status",
    "Created At",
    "Updated By",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn row_cells(record: &ClientRecord) -> [String; 7] {
    [
        record.id.to_string(),
        record.name.clone(),
        record.client_type.to_string(),
        record.email.clone(),
        record.status.to_string(),
        record.created_at.format(DATE_FORMAT).to_string(),
        record.updated_by.clone().unwrap_or_else(|| "-".to_string()),
    ]
}

/// Plain-text table with one row per record, columns padded to fit.
pub fn render_table(records: &[ClientRecord]) -> String {
    if records.is_empty() {
        return "(no clients)\n".to_string();
    }

    let rows: Vec<[String; 7]> = records.iter().map(row_cells).collect();
    let mut widths = COLUMNS.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// One-line summary of the tab and active sort, e.g.
/// `Tab: Company | 4 clients | Sort (1): Client Name Z-A`.
pub fn render_summary(state: &ClientTableState, visible: usize) -> String {
    let noun = if visible == 1 { "client" } else { "clients" };
    let sort = match state.sort_badge() {
        None => "Sort: none".to_string(),
        Some(count) => {
            let criteria: Vec<String> = state
                .rule_set
                .iter()
                .map(|c| format!("{} {}", c.label(), c.direction.describe(c.field.kind())))
                .collect();
            format!("Sort ({count}): {}", criteria.join(", "))
        }
    };
    format!("Tab: {} | {visible} {noun} | {sort}", state.active_tab)
}

/// Summary line followed by the visible table.
pub fn render_view(state: &ClientTableState) -> String {
    let rows = state.visible_records();
    let mut out = render_summary(state, rows.len());
    out.push('\n');
    out.push_str(&render_table(&rows));
    out
}

/// The sort panel: numbered criteria plus the fields that can still be added.
pub fn render_rules(state: &ClientTableState) -> String {
    let mut out = String::new();
    let panel = if state.sort_panel_open { "open" } else { "closed" };
    let _ = writeln!(out, "Sort panel ({panel})");

    if state.rule_set.is_empty() {
        let _ = writeln!(out, "  no sort fields");
    }
    for (index, criterion) in state.rule_set.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} [{}] {}",
            index + 1,
            criterion.label(),
            criterion.field.key(),
            criterion.direction.describe(criterion.field.kind())
        );
    }

    let available: Vec<&str> = state
        .available_fields()
        .into_iter()
        .map(SortField::label)
        .collect();
    if available.is_empty() {
        let _ = writeln!(out, "  available: none");
    } else {
        let _ = writeln!(out, "  available: {}", available.join(", "));
    }
    out
}

/// Every sortable field with its key, label and whether the panel offers it.
pub fn render_fields(offered: &[SortField]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}  {:<12}  {:<5}  offered", "key", "label", "kind");
    for field in SortField::ALL {
        let kind = format!("{:?}", field.kind()).to_lowercase();
        let mark = if offered.contains(&field) { "yes" } else { "no" };
        let _ = writeln!(out, "{:<10}  {:<12}  {:<5}  {mark}", field.key(), field.label(), kind);
    }
    out
}
