use std::fmt;

#[derive(Debug)]
pub enum Error {
    ArchiveOpen(zip::result::ZipError),
    EntryRead(String, zip::result::ZipError),
    Xml(roxmltree::Error),
    InvalidDocx(String),
    Pdf(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArchiveOpen(e) => write!(f, "failed to open DOCX: {e}"),
            Error::EntryRead(name, e) => write!(f, "failed to read {name}: {e}"),
            Error::Xml(e) => write!(f, "failed to parse document.xml: {e}"),
            Error::InvalidDocx(reason) => write!(f, "not a valid DOCX file: {reason}"),
            Error::Pdf(e) => write!(f, "PDF error: {e}"),
            Error::Io(e) => write!(f, "failed to save PDF: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ArchiveOpen(e) | Error::EntryRead(_, e) => Some(e),
            Error::Xml(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::InvalidDocx(_) | Error::Pdf(_) => None,
        }
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
