use pdf_writer::{Name, Pdf, Ref};

use crate::model::RunStyle;

pub(crate) struct FontEntry {
    pub(crate) pdf_name: String,
    pub(crate) font_ref: Ref,
    pub(crate) widths_1000: Vec<f32>,
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Characters outside the encoding, and control characters, are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0020..=0x007E | 0x00A0..=0x00FF => Some(c as u8),
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2020 => Some(0x86),
            0x2021 => Some(0x87),
            0x02C6 => Some(0x88),
            0x2030 => Some(0x89),
            0x0160 => Some(0x8A),
            0x2039 => Some(0x8B),
            0x0152 => Some(0x8C),
            0x017D => Some(0x8E),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95),
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x02DC => Some(0x98),
            0x2122 => Some(0x99),
            0x0161 => Some(0x9A),
            0x203A => Some(0x9B),
            0x0153 => Some(0x9C),
            0x017E => Some(0x9E),
            0x0178 => Some(0x9F),
            _ => None,
        })
        .collect()
}

/// Approximate Helvetica widths at 1000 units/em for WinAnsi chars 32..=255.
/// The bold faces run a little wider on letters.
fn helvetica_widths(bold: bool) -> Vec<f32> {
    let extra = if bold { 55.0 } else { 0.0 };
    (32u8..=255u8)
        .map(|b| match b {
            32 => 278.0,
            33..=47 => 333.0,
            48..=57 => 556.0,
            58..=64 => 333.0,
            73 | 74 => 278.0,
            77 => 833.0,
            65..=90 => 667.0 + extra,
            91..=96 => 333.0,
            102 | 105 | 106 | 108 | 116 => 278.0 + extra,
            109 | 119 => 833.0 + extra,
            97..=122 => 556.0 + extra,
            _ => 556.0,
        })
        .collect()
}

fn base14_name(bold: bool, italic: bool) -> &'static [u8] {
    match (bold, italic) {
        (true, true) => b"Helvetica-BoldOblique",
        (true, false) => b"Helvetica-Bold",
        (false, true) => b"Helvetica-Oblique",
        (false, false) => b"Helvetica",
    }
}

/// The four Helvetica faces a conversion can switch between, indexed by
/// bold/italic.
pub(crate) struct FontSet {
    entries: [FontEntry; 4],
}

impl FontSet {
    pub(crate) fn register(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> Self {
        let mut face = |n: usize, bold: bool, italic: bool| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(base14_name(bold, italic)))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            FontEntry {
                pdf_name: format!("F{n}"),
                font_ref,
                widths_1000: helvetica_widths(bold),
            }
        };
        let entries = [
            face(1, false, false),
            face(2, true, false),
            face(3, false, true),
            face(4, true, true),
        ];
        FontSet { entries }
    }

    pub(crate) fn entry(&self, style: RunStyle) -> &FontEntry {
        let slot = usize::from(style.bold) + 2 * usize::from(style.italic);
        &self.entries[slot]
    }

    pub(crate) fn entries(&self) -> &[FontEntry] {
        &self.entries
    }

    /// Width of `text` in points once encoded for the given face.
    pub(crate) fn measure(&self, style: RunStyle, text: &str, size: f32) -> f32 {
        let widths = &self.entry(style).widths_1000;
        to_winansi_bytes(text)
            .into_iter()
            .map(|b| widths.get(usize::from(b).saturating_sub(32)).copied().unwrap_or(0.0))
            .sum::<f32>()
            * size
            / 1000.0
    }
}
