/// Formatting flags of a run. A flag is set only when the matching element
/// (`w:b`, `w:i`, `w:u`) is present in the run's own `w:rPr`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl RunStyle {
    pub const PLAIN: RunStyle = RunStyle {
        bold: false,
        italic: false,
        underline: false,
    };

    /// `"B"`, `"I"` and `"U"` for each active flag, always in that order.
    pub fn tag(&self) -> String {
        let mut tag = String::with_capacity(3);
        if self.bold {
            tag.push('B');
        }
        if self.italic {
            tag.push('I');
        }
        if self.underline {
            tag.push('U');
        }
        tag
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: RunStyle,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// One line per run, in paragraph then run order.
    pub fn styled_lines(&self) -> Vec<StyledLine> {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .map(|run| StyledLine {
                text: run.text.clone(),
                style: run.style,
            })
            .collect()
    }

    pub fn plain_lines(&self) -> Vec<StyledLine> {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .map(|run| StyledLine::plain(run.text.clone()))
            .collect()
    }

    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A run flattened for rendering. The style travels next to the text rather
/// than being encoded into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub style: RunStyle,
}

impl StyledLine {
    pub fn plain(text: impl Into<String>) -> Self {
        StyledLine {
            text: text.into(),
            style: RunStyle::PLAIN,
        }
    }

    /// Tag immediately followed by the text, e.g. `"BIHi"`.
    pub fn tagged(&self) -> String {
        format!("{}{}", self.style.tag(), self.text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub lines: Vec<StyledLine>,
    /// Archive entry names under `word/media/`, in archive order.
    pub media: Vec<String>,
}

impl Extraction {
    pub fn tagged_text(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::tagged)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
