use crate::error::SplitError;
use lopdf::Document;

/// A loaded PDF, read once and never mutated; every page extraction works on
/// its own clone.
pub struct PdfDocument {
    doc: Document,
}

impl PdfDocument {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SplitError> {
        let doc = Document::load_mem(bytes)?;
        Ok(PdfDocument { doc })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Copy one page (1-indexed) into a standalone document and serialize it.
    ///
    /// The page is carried over as-is by cloning the whole document and
    /// deleting every other page, so the output is a byte-level copy of the
    /// original page's objects, not a re-render.
    pub fn single_page(&self, page_num: u32) -> Result<Vec<u8>, SplitError> {
        let mut single = self.doc.clone();

        let pages_to_delete: Vec<u32> = self
            .doc
            .get_pages()
            .keys()
            .copied()
            .filter(|&num| num != page_num)
            .collect();

        if !pages_to_delete.is_empty() {
            single.delete_pages(&pages_to_delete);
        }

        let mut bytes = Vec::new();
        single.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
