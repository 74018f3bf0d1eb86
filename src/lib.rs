mod docx;
mod error;
mod fonts;
mod images;
mod layout;
mod model;
mod options;
mod pdf;

pub use docx::unpack_media;
pub use error::Error;
pub use model::{Document, Extraction, Paragraph, Run, RunStyle, StyledLine};
pub use options::RenderOptions;
pub use pdf::{generate_pdf, render};

use std::path::Path;

/// Plain text of every run, one run per line, without formatting tags.
pub fn extract_text(docx: &Path) -> Result<String, Error> {
    let (doc, _) = docx::extract(docx)?;
    Ok(doc.plain_text())
}

/// Runs with their formatting flags, plus the names of the embedded media
/// entries (`word/media/...`).
pub fn extract_text_with_formatting(docx: &Path) -> Result<Extraction, Error> {
    let (doc, media) = docx::extract(docx)?;
    Ok(Extraction {
        lines: doc.styled_lines(),
        media,
    })
}

/// Parses the document model itself, for callers that need paragraph
/// boundaries.
pub fn parse_document(docx: &Path) -> Result<Document, Error> {
    docx::extract(docx).map(|(doc, _)| doc)
}

/// Text only: every run rendered in the regular face, media ignored.
pub fn convert(input: &Path, output: &Path) -> Result<(), Error> {
    let (doc, _) = docx::extract(input)?;
    generate_pdf(&doc.plain_lines(), &[], output, &RenderOptions::default())
}

/// Formatted runs and media. Media names are resolved against
/// `opts.media_root`.
pub fn convert_with_options(
    input: &Path,
    output: &Path,
    opts: &RenderOptions,
) -> Result<(), Error> {
    let extraction = extract_text_with_formatting(input)?;
    generate_pdf(&extraction.lines, &extraction.media, output, opts)
}
