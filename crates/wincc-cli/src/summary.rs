use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wincc_cli::types::RunResult;
use wincc_model::PointCategory;

pub fn print_summary(result: &RunResult) {
    println!("{}", run_table(result));
    if !result.outcome.tags.is_empty() {
        println!("{}", tag_table(result));
    }
}

fn run_table(result: &RunResult) -> Table {
    let request = &result.request;
    let outcome = &result.outcome;
    let output = match (&result.written, result.dry_run) {
        (Some(path), _) => Cell::new(path.display()),
        (None, true) => dim_cell("dry run, not written"),
        (None, false) => dim_cell("not written"),
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Run"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Input"), Cell::new(request.input.display())]);
    table.add_row(vec![Cell::new("Output"), output]);
    table.add_row(vec![Cell::new("PLC"), Cell::new(&request.filter.plc)]);
    table.add_row(vec![
        Cell::new("Point type"),
        Cell::new(&request.filter.point_type),
    ]);
    table.add_row(vec![
        Cell::new("Filter"),
        Cell::new(&request.filter.designation_pattern),
    ]);
    table.add_row(vec![Cell::new("Tags matched"), count_cell(outcome.matched)]);
    table.add_row(vec![
        Cell::new("Simulated skipped"),
        count_cell(outcome.skipped_simulated),
    ]);
    table.add_row(vec![
        Cell::new("Tags converted"),
        count_cell(outcome.tags.len()),
    ]);
    table.add_row(vec![
        Cell::new("Interlocks"),
        count_cell(outcome.interlock_count()),
    ]);
    table.add_row(vec![
        Cell::new("Rows written"),
        Cell::new(result.rows_written()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Duration"),
        dim_cell(format!("{} ms", result.duration.as_millis())),
    ]);
    table
}

fn tag_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tag"),
        header_cell("Category"),
        header_cell("Rows"),
        header_cell("Interlocks"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for tag in &result.outcome.tags {
        table.add_row(vec![
            Cell::new(&tag.designation)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            category_cell(tag.category),
            Cell::new(tag.base_rows),
            count_cell(tag.interlocks),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(category: PointCategory) -> Cell {
    let color = match category {
        PointCategory::Motor => Color::Green,
        PointCategory::Valve => Color::Yellow,
        PointCategory::Analog => Color::Magenta,
        PointCategory::Unknown => Color::DarkGrey,
    };
    Cell::new(category).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
