//! Rendering of command reports

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};

use crate::commands::{BindReport, ParseReport};

pub fn render_parse(report: &ParseReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Position", "Name", "Occurrences"]);

    for placeholder in &report.placeholders {
        table.add_row(vec![
            Cell::new(placeholder.position),
            Cell::new(&placeholder.name),
            Cell::new(placeholder.occurrences),
        ]);
    }

    format!("{}\n\n{table}", report.rewritten)
}

pub fn render_bind(report: &BindReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Marker", "Value"]);

    for (index, value) in report.binds.iter().enumerate() {
        table.add_row(vec![Cell::new(index + 1), Cell::new(value)]);
    }

    format!("{}\n\n{table}", report.rewritten)
}
