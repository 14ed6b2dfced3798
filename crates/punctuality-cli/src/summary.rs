use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use punctuality_model::RejectionEntry;

use crate::types::ProcessResult;

pub fn print_summary(result: &ProcessResult) {
    println!("Input: {}", result.input.display());
    match &result.outputs {
        Some(paths) => {
            println!("Accepted: {}", paths.accepted_csv.display());
            println!("Rejected: {}", paths.rejected_csv.display());
            if let Some(path) = &paths.sqlite {
                println!("SQLite: {}", path.display());
            }
            println!("Rejection report: {}", paths.report_json.display());
        }
        None => println!("Dry run: no outputs written"),
    }
    println!("{}", totals_table(result));
    if !result.rejections.is_empty() {
        println!();
        println!("Rejections:");
        println!("{}", rejection_table(&result.rejections.entries));
    }
}

fn totals_table(result: &ProcessResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Lines"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("SQLite rows"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(result.total_lines).add_attribute(Attribute::Bold),
        count_cell(result.accepted, Color::Green),
        count_cell(result.rejected, Color::Red),
        result.sqlite_rows.map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    table
}

fn rejection_table(entries: &[RejectionEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Description"),
        header_cell("Count"),
        header_cell("Example lines"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in entries {
        let examples = entry
            .example_lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(entry.kind.code()).fg(Color::Blue),
            Cell::new(&entry.message),
            Cell::new(entry.count).fg(Color::Red),
            Cell::new(examples),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
