use crate::error::SplitError;
use calamine::{open_workbook_auto_from_rs, Data, Error, Reader};
use std::io::Cursor;

/// Header of the one column this tool reads. Fixed contract, not a schema
/// discovery: only the first sheet, only this column.
const NAME_COLUMN: &str = "Name";

/// Read the "Name" column of the first sheet, one entry per data row in row
/// order. Rows without a usable value keep their position as `None` so the
/// list stays index-aligned with page numbers.
pub fn read_names(bytes: &[u8]) -> Result<Vec<Option<String>>, SplitError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(Error::Msg("workbook has no sheets"))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let name_col = header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == NAME_COLUMN));

    Ok(rows
        .map(|row| {
            name_col
                .and_then(|col| row.get(col))
                .and_then(cell_to_name)
        })
        .collect())
}

/// Render a cell the way a spreadsheet UI displays it: `42`, not `42.0`.
fn cell_to_name(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
