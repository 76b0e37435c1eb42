use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use isocodes_cli::types::PipelineSummary;

pub fn print_summary(summary: &PipelineSummary) {
    println!("Source: {}", summary.source);
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Records read"), Cell::new(summary.records)]);
    table.add_row(vec![
        Cell::new("Unique keys"),
        Cell::new(summary.unique_keys),
    ]);
    table.add_row(vec![
        Cell::new("Overwritten"),
        count_cell(summary.overwritten, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(summary.skipped.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rows written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.emitted).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if !summary.skipped.is_empty() {
        let keys: Vec<String> = summary.skipped.iter().map(ToString::to_string).collect();
        println!("Skipped keys: {}", keys.join(", "));
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
