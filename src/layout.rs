use crate::model::{RunStyle, StyledLine};
use crate::options::RenderOptions;

const TAB: &str = "    ";

/// Something placed on a page. Vertical positions are measured from the top
/// edge of the page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Item {
    Text {
        style: RunStyle,
        x: f32,
        baseline: f32,
        text: String,
    },
    Image {
        index: usize,
        x: f32,
        top: f32,
        width: f32,
        height: f32,
    },
}

#[derive(Debug, Default)]
pub(crate) struct PageLayout {
    pub(crate) items: Vec<Item>,
}

struct Cursor<'a> {
    opts: &'a RenderOptions,
    pages: Vec<PageLayout>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(opts: &'a RenderOptions) -> Self {
        Cursor {
            opts,
            pages: vec![PageLayout::default()],
            y: opts.margin_top,
        }
    }

    /// Starts a new page when `height` no longer fits above the bottom
    /// margin. A fresh page always accepts the block.
    fn reserve(&mut self, height: f32) {
        let limit = self.opts.page_height - self.opts.margin_bottom;
        let at_top = self.y <= self.opts.margin_top;
        if self.y + height > limit && !at_top {
            self.pages.push(PageLayout::default());
            self.y = self.opts.margin_top;
        }
    }

    fn push(&mut self, item: Item) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }
}

/// Greedy word wrap. Words wider than `max_width` are broken between
/// characters. Leading and repeated spaces are kept; the space a row is
/// broken at is consumed. Always returns at least one row.
pub(crate) fn wrap(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for (i, word) in text.split(' ').enumerate() {
        let after_break = current.is_empty() && !rows.is_empty();
        if i > 0 && !after_break {
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }
            rows.push(std::mem::take(&mut current));
        }
        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1 && measure(&current) > max_width {
                current.pop();
                rows.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
    }

    rows.push(current);
    rows
}

/// Lays out one fixed-width cell per line, then stacks the images below the
/// text. `images` holds the pixel size of each image to place.
pub(crate) fn layout(
    lines: &[StyledLine],
    images: &[(u32, u32)],
    opts: &RenderOptions,
    measure: impl Fn(RunStyle, &str) -> f32,
) -> Vec<PageLayout> {
    let mut cursor = Cursor::new(opts);
    let x = opts.margin_left + opts.cell_padding;
    let max_width = opts.cell_width - 2.0 * opts.cell_padding;

    for line in lines {
        let text = line.text.replace('\t', TAB);
        for segment in text.split('\n') {
            for row in wrap(segment, max_width, |s| measure(line.style, s)) {
                cursor.reserve(opts.row_height);
                cursor.push(Item::Text {
                    style: line.style,
                    x,
                    baseline: cursor.y + 0.5 * opts.row_height + 0.3 * opts.font_size,
                    text: row,
                });
                cursor.y += opts.row_height;
            }
        }
    }

    for (index, &(px_w, px_h)) in images.iter().enumerate() {
        if px_w == 0 || px_h == 0 {
            continue;
        }
        let scale = (opts.image_width / px_w as f32).min(opts.image_height / px_h as f32);
        let width = px_w as f32 * scale;
        let height = px_h as f32 * scale;

        cursor.reserve(height);
        cursor.push(Item::Image {
            index,
            x: opts.margin_left,
            top: cursor.y,
            width,
            height,
        });
        cursor.y += height + opts.image_gap;
    }

    log::debug!(
        "laid out {} lines and {} images on {} pages",
        lines.len(),
        images.len(),
        cursor.pages.len()
    );
    cursor.pages
}
