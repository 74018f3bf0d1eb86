#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::{CompressionMethod, ZipWriter};
use zip::write::SimpleFileOptions;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}"><w:body>{body}</w:body></w:document>"#
    )
}

/// `<w:p>` holding one `<w:r>` per `(rPr children, text)` pair.
pub fn paragraph(runs: &[(&str, &str)]) -> String {
    let runs: String = runs
        .iter()
        .map(|(rpr, text)| {
            let rpr = if rpr.is_empty() {
                String::new()
            } else {
                format!("<w:rPr>{rpr}</w:rPr>")
            };
            format!(r#"<w:r>{rpr}<w:t xml:space="preserve">{text}</w:t></w:r>"#)
        })
        .collect();
    format!("<w:p>{runs}</w:p>")
}

/// Writes a zip with the given entries. Names ending in `/` become directories.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    write_zip_with(path, entries, SimpleFileOptions::default());
}

/// Like [`write_zip`] but without compression, so entry bytes appear verbatim
/// in the archive.
pub fn write_stored_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    write_zip_with(path, entries, options);
}

fn write_zip_with(path: &Path, entries: &[(&str, &[u8])], options: SimpleFileOptions) {
    let file = File::create(path).expect("create fixture");
    let mut zip = ZipWriter::new(file);
    for (name, data) in entries {
        if name.ends_with('/') {
            zip.add_directory(*name, options).expect("add directory");
        } else {
            zip.start_file(*name, options).expect("start entry");
            zip.write_all(data).expect("write entry");
        }
    }
    zip.finish().expect("finish zip");
}

pub fn docx_with_body(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("input.docx");
    let xml = document_xml(body);
    write_zip(
        &path,
        &[
            ("[Content_Types].xml", b"<Types/>".as_slice()),
            ("word/document.xml", xml.as_bytes()),
        ],
    );
    path
}

pub fn write_png(path: &Path, width: u32, height: u32) -> Vec<u8> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create media dir");
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 30, 30]))
        .save(path)
        .expect("write png");
    std::fs::read(path).expect("read png back")
}

pub fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}
