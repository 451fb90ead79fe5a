use crate::error::SplitError;
use std::io::{Cursor, Write};
use zip::write::FileOptions;

/// Bundle `(stem, content)` pairs into a single zip blob, appending `.pdf` to
/// every entry name. Entries are written in arrival order with no
/// deduplication; a duplicate stem produces a duplicate entry, and readers
/// resolving by name see the last one.
pub fn build(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, SplitError> {
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buffer);
        let options =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (stem, content) in entries {
            zip.start_file(format!("{stem}.pdf"), options)?;
            zip.write_all(content)?;
        }

        zip.finish()?;
    }
    Ok(buffer.into_inner())
}
