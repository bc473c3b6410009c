use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::types::RunResult;

/// Print the human-readable run summary to stdout.
pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Rows read"), count_cell(result.rows_read)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(result.duplicates_removed),
    ]);
    table.add_row(vec![
        Cell::new("Rows written"),
        count_cell(result.rows_written),
    ]);
    println!("{table}");

    println!(
        "Projected columns: {}",
        result.projected_columns.join(", ")
    );
    if !result.missing_columns.is_empty() {
        println!(
            "Missing canonical columns: {}",
            result.missing_columns.join(", ")
        );
    }

    println!("Data quality findings:");
    for finding in result.report.findings() {
        println!("{finding}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
