use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::Error;
use crate::model::{Document, Paragraph, Run, RunStyle};

pub(crate) const DOCUMENT_PART: &str = "word/document.xml";
pub(crate) const MEDIA_PREFIX: &str = "word/media/";

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// What a single pass over the archive yields.
pub(crate) struct Package {
    pub(crate) document_xml: Option<Vec<u8>>,
    pub(crate) media: Vec<String>,
}

fn open_archive(path: &Path) -> Result<ZipArchive<File>, Error> {
    let file = File::open(path).map_err(|e| Error::ArchiveOpen(ZipError::Io(e)))?;
    ZipArchive::new(file).map_err(Error::ArchiveOpen)
}

fn is_wml(node: roxmltree::Node, name: &str) -> bool {
    node.tag_name().name() == name && node.tag_name().namespace() == Some(WML_NS)
}

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children().find(|n| is_wml(*n, name))
}

pub(crate) fn read_package(path: &Path) -> Result<Package, Error> {
    let mut zip = open_archive(path)?;

    let mut document_xml = None;
    let mut media = Vec::new();

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| Error::EntryRead(format!("entry #{i}"), e))?;
        let name = entry.name().to_string();

        if name == DOCUMENT_PART {
            let mut buf = Vec::new();
            entry
                .read_to_end(&mut buf)
                .map_err(|e| Error::EntryRead(name.clone(), ZipError::Io(e)))?;
            document_xml = Some(buf);
        } else if name.starts_with(MEDIA_PREFIX) && !entry.is_dir() {
            media.push(name);
        }
    }

    log::debug!(
        "scanned {} entries: document part {}, {} media",
        zip.len(),
        if document_xml.is_some() { "found" } else { "missing" },
        media.len()
    );

    Ok(Package { document_xml, media })
}

pub(crate) fn parse_document(xml: &[u8]) -> Result<Document, Error> {
    let xml = std::str::from_utf8(xml)
        .map_err(|e| Error::InvalidDocx(format!("{DOCUMENT_PART} is not UTF-8: {e}")))?;
    let xml = roxmltree::Document::parse(xml)?;
    let root = xml.root_element();

    if !is_wml(root, "document") {
        return Err(Error::InvalidDocx(format!(
            "unexpected root element <{}> in {DOCUMENT_PART}",
            root.tag_name().name()
        )));
    }

    let Some(body) = wml(root, "body") else {
        return Ok(Document::default());
    };

    let paragraphs = body
        .children()
        .filter(|n| is_wml(*n, "p"))
        .map(parse_paragraph)
        .collect();

    Ok(Document { paragraphs })
}

fn parse_paragraph(node: roxmltree::Node) -> Paragraph {
    let mut runs = Vec::new();
    for child in node.children() {
        if is_wml(child, "r") {
            runs.push(parse_run(child));
        } else if is_wml(child, "hyperlink") {
            runs.extend(child.children().filter(|n| is_wml(*n, "r")).map(parse_run));
        }
    }
    Paragraph { runs }
}

fn parse_run(node: roxmltree::Node) -> Run {
    let rpr = wml(node, "rPr");
    let has = |name: &str| rpr.and_then(|n| wml(n, name)).is_some();

    let style = RunStyle {
        bold: has("b"),
        italic: has("i"),
        underline: has("u"),
    };

    let mut text = String::new();
    for child in node.children() {
        if child.tag_name().namespace() != Some(WML_NS) {
            continue;
        }
        match child.tag_name().name() {
            "t" => text.push_str(child.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }

    Run { text, style }
}

/// Reads the document part and the media names from `path`. A DOCX without a
/// document part yields an empty document.
pub fn extract(path: &Path) -> Result<(Document, Vec<String>), Error> {
    let package = read_package(path)?;
    let doc = match package.document_xml {
        Some(xml) => parse_document(&xml)?,
        None => {
            log::debug!("{} has no {DOCUMENT_PART}", path.display());
            Document::default()
        }
    };
    Ok((doc, package.media))
}

/// Writes every `word/media/` entry of the archive below `dest`, keeping the
/// archive-relative path, and returns the written files.
pub fn unpack_media(path: &Path, dest: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut zip = open_archive(path)?;
    let mut written = Vec::new();

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| Error::EntryRead(format!("entry #{i}"), e))?;
        if entry.is_dir() || !entry.name().starts_with(MEDIA_PREFIX) {
            continue;
        }
        let Some(relative) = entry.enclosed_name() else {
            log::warn!("skipping media entry with unsafe path: {}", entry.name());
            continue;
        };

        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|e| Error::EntryRead(entry.name().to_string(), ZipError::Io(e)))?;
        written.push(target);
    }

    log::debug!("unpacked {} media files to {}", written.len(), dest.display());
    Ok(written)
}
