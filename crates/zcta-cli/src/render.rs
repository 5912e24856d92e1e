//! Table rendering for lookup results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use zcta_model::ZipCode;

use crate::lookup::{CentroidRow, NormalizeRow, ZctaRow, ZipsRow};

const MISSING: &str = "-";

pub fn zcta_table(rows: &[ZctaRow], styled: bool) -> Table {
    let mut table = new_table(&["Input", "ZCTA"], styled);
    for row in rows {
        table.add_row(vec![Cell::new(&row.input), code_cell(row.zcta.as_ref())]);
    }
    table
}

pub fn zips_table(rows: &[ZipsRow], styled: bool) -> Table {
    let mut table = new_table(&["Input", "ZIP Codes"], styled);
    for row in rows {
        let zips = if row.zip_codes.is_empty() {
            dim_cell(MISSING)
        } else {
            let joined: Vec<&str> = row.zip_codes.iter().map(ZipCode::as_str).collect();
            Cell::new(joined.join(", "))
        };
        table.add_row(vec![Cell::new(&row.input), zips]);
    }
    table
}

pub fn centroid_table(rows: &[CentroidRow], styled: bool) -> Table {
    let mut table = new_table(&["Input", "ZCTA", "Latitude", "Longitude"], styled);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.input),
            code_cell(row.zcta.as_ref()),
            coordinate_cell(row.latitude),
            coordinate_cell(row.longitude),
        ]);
    }
    table
}

pub fn normalize_table(rows: &[NormalizeRow], styled: bool) -> Table {
    let mut table = new_table(&["Input", "Code"], styled);
    for row in rows {
        table.add_row(vec![Cell::new(&row.input), code_cell(row.code.as_ref())]);
    }
    table
}

fn new_table(headers: &[&str], styled: bool) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|label| header_cell(label)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn code_cell(code: Option<&ZipCode>) -> Cell {
    code.map_or_else(|| dim_cell(MISSING), Cell::new)
}

fn coordinate_cell(value: Option<f64>) -> Cell {
    value.map_or_else(|| dim_cell(MISSING), Cell::new)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
