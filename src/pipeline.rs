use crate::archive;
use crate::error::SplitError;
use crate::namer::output_name;
use crate::pdf::PdfDocument;
use crate::sheet;
use tracing::{info, warn};

/// Everything one invocation consumes. Both inputs are fully in memory; the
/// pipeline holds no state across invocations.
pub struct SplitRequest {
    pub pdf_bytes: Vec<u8>,
    pub sheet_bytes: Vec<u8>,
}

pub struct SplitOutcome {
    /// Serialized zip archive, one entry per source page.
    pub archive: Vec<u8>,
    pub pages: u32,
    /// Pages named from the spreadsheet rather than the Page-N fallback.
    pub named: usize,
}

/// Run the whole split: parse the PDF, read the name column, extract every
/// page in increasing order, and bundle the results. Fails as a whole; a
/// `SplitOutcome` is only returned when every page made it into the archive.
pub fn run(request: SplitRequest) -> Result<SplitOutcome, SplitError> {
    let doc = PdfDocument::from_bytes(&request.pdf_bytes)?;
    let pages = doc.page_count();
    info!(pages, "loaded PDF");

    let names = sheet::read_names(&request.sheet_bytes)?;
    info!(rows = names.len(), "read spreadsheet name column");

    // One advisory before the loop, never per page.
    if (names.len() as u32) < pages {
        warn!(
            names = names.len(),
            pages, "spreadsheet has fewer names than pages; using Page-N for the rest"
        );
    }

    let mut entries = Vec::with_capacity(pages as usize);
    for page_num in 1..=pages {
        let content = doc.single_page(page_num)?;
        let stem = output_name(page_num as usize - 1, &names);
        entries.push((stem, content));
    }

    let named = names
        .iter()
        .take(pages as usize)
        .filter(|name| name.is_some())
        .count();

    let archive = archive::build(&entries)?;
    Ok(SplitOutcome {
        archive,
        pages,
        named,
    })
}
