/// Filename stem for the page at `index` (0-based): the spreadsheet name at
/// that position when one exists, otherwise `Page-N` with N 1-based.
pub fn output_name(index: usize, names: &[Option<String>]) -> String {
    match names.get(index) {
        Some(Some(name)) => name.clone(),
        _ => format!("Page-{}", index + 1),
    }
}
