mod common;

use common::{docx_with_body, document_xml, paragraph, write_stored_zip, write_zip};
use docx2pdf_lite::{Error, RunStyle, StyledLine};

#[test]
fn single_plain_run() {
    let dir = tempfile::tempdir().unwrap();
    let docx = docx_with_body(dir.path(), &paragraph(&[("", "Hello")]));

    assert_eq!(docx2pdf_lite::extract_text(&docx).unwrap(), "Hello");
}

#[test]
fn bold_italic_run_is_tagged_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let docx = docx_with_body(dir.path(), &paragraph(&[("<w:i/><w:b/>", "Hi")]));

    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert_eq!(extraction.tagged_text(), "BIHi");
    assert_eq!(
        extraction.lines,
        [StyledLine {
            text: "Hi".into(),
            style: RunStyle { bold: true, italic: true, underline: false },
        }]
    );
}

#[test]
fn one_line_per_run_across_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let body = [
        paragraph(&[("<w:b/>", "Title"), ("", " plain")]),
        paragraph(&[("<w:u w:val=\"single\"/>", "under")]),
        paragraph(&[("", "Bob")]),
    ]
    .concat();
    let docx = docx_with_body(dir.path(), &body);

    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert_eq!(extraction.tagged_text(), "BTitle\n plain\nUunder\nBob");
    assert_eq!(extraction.lines[3].style, RunStyle::PLAIN);

    let plain = docx2pdf_lite::extract_text(&docx).unwrap();
    assert_eq!(plain, "Title\n plain\nunder\nBob");
}

#[test]
fn paragraph_level_formatting_is_not_inherited() {
    let dir = tempfile::tempdir().unwrap();
    let body = r#"<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>x</w:t></w:r></w:p>"#;
    let docx = docx_with_body(dir.path(), body);

    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert_eq!(extraction.lines[0].style, RunStyle::PLAIN);
}

#[test]
fn paragraph_structure_is_kept_in_the_document_model() {
    let dir = tempfile::tempdir().unwrap();
    let body = [
        paragraph(&[("", "a"), ("", "b")]),
        "<w:p/>".to_string(),
        paragraph(&[("", "c")]),
    ]
    .concat();
    let docx = docx_with_body(dir.path(), &body);

    let doc = docx2pdf_lite::parse_document(&docx).unwrap();
    let runs: Vec<usize> = doc.paragraphs.iter().map(|p| p.runs.len()).collect();
    assert_eq!(runs, [2, 0, 1]);
}

#[test]
fn tabs_breaks_and_hyperlinks() {
    let dir = tempfile::tempdir().unwrap();
    let body = r#"<w:p>
        <w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r>
        <w:hyperlink><w:r><w:rPr><w:u/></w:rPr><w:t>link</w:t></w:r></w:hyperlink>
    </w:p>"#;
    let docx = docx_with_body(dir.path(), body);

    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert_eq!(extraction.lines.len(), 2);
    assert_eq!(extraction.lines[0].text, "a\tb\nc");
    assert_eq!(extraction.lines[1].tagged(), "Ulink");
}

#[test]
fn empty_body_is_an_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let docx = docx_with_body(dir.path(), "");

    assert_eq!(docx2pdf_lite::extract_text(&docx).unwrap(), "");
    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert!(extraction.lines.is_empty());
}

#[test]
fn missing_document_part_is_an_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    write_zip(&docx, &[("[Content_Types].xml", b"<Types/>".as_slice())]);

    assert_eq!(docx2pdf_lite::extract_text(&docx).unwrap(), "");
}

#[test]
fn media_names_are_collected_in_archive_order() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    let xml = document_xml(&paragraph(&[("", "text")]));
    write_zip(
        &docx,
        &[
            ("word/media/", b"".as_slice()),
            ("word/media/image2.png", b"png".as_slice()),
            ("word/document.xml", xml.as_bytes()),
            ("word/media/image1.jpeg", b"jpg".as_slice()),
            ("word/styles.xml", b"<styles/>".as_slice()),
        ],
    );

    let extraction = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap();
    assert_eq!(extraction.media, ["word/media/image2.png", "word/media/image1.jpeg"]);
    assert_eq!(extraction.tagged_text(), "text");
}

#[test]
fn not_a_zip_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.docx");
    std::fs::write(&path, b"definitely not a zip").unwrap();

    let err = docx2pdf_lite::extract_text(&path).unwrap_err();
    assert!(matches!(err, Error::ArchiveOpen(_)), "{err:?}");
    assert!(err.to_string().starts_with("failed to open DOCX"));
}

#[test]
fn missing_input_fails_to_open() {
    let dir = tempfile::tempdir().unwrap();
    let err = docx2pdf_lite::extract_text(&dir.path().join("nope.docx")).unwrap_err();
    assert!(matches!(err, Error::ArchiveOpen(_)), "{err:?}");
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    write_zip(&docx, &[("word/document.xml", b"<w:document><w:body>".as_slice())]);

    let err = docx2pdf_lite::extract_text_with_formatting(&docx).unwrap_err();
    assert!(matches!(err, Error::Xml(_)), "{err:?}");
}

#[test]
fn corrupted_document_part_is_an_entry_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    let xml = document_xml(&paragraph(&[("", "Hello")]));
    write_stored_zip(&docx, &[("word/document.xml", xml.as_bytes())]);

    let mut bytes = std::fs::read(&docx).unwrap();
    let at = bytes
        .windows(5)
        .position(|w| w == b"Hello")
        .expect("stored entry text");
    bytes[at] = b'J';
    std::fs::write(&docx, bytes).unwrap();

    let err = docx2pdf_lite::extract_text(&docx).unwrap_err();
    match err {
        Error::EntryRead(name, _) => assert_eq!(name, "word/document.xml"),
        other => panic!("expected EntryRead, got {other:?}"),
    }
}

#[test]
fn unexpected_root_element_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    write_zip(&docx, &[("word/document.xml", b"<html><body/></html>".as_slice())]);

    let err = docx2pdf_lite::extract_text(&docx).unwrap_err();
    assert!(matches!(err, Error::InvalidDocx(_)), "{err:?}");
}

#[test]
fn unpack_media_writes_entries_below_destination() {
    let dir = tempfile::tempdir().unwrap();
    let docx = dir.path().join("input.docx");
    let xml = document_xml("");
    write_zip(
        &docx,
        &[
            ("word/document.xml", xml.as_bytes()),
            ("word/media/image1.png", b"first".as_slice()),
            ("word/media/nested/image2.gif", b"second".as_slice()),
        ],
    );

    let out = dir.path().join("unpacked");
    let written = docx2pdf_lite::unpack_media(&docx, &out).unwrap();

    assert_eq!(written.len(), 2);
    assert_eq!(std::fs::read(out.join("word/media/image1.png")).unwrap(), b"first");
    assert_eq!(
        std::fs::read(out.join("word/media/nested/image2.gif")).unwrap(),
        b"second"
    );
    assert!(!out.join("word/document.xml").exists());
}
