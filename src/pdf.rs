use std::path::Path;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::error::Error;
use crate::fonts::{FontSet, to_winansi_bytes};
use crate::images::{self, LoadedImage};
use crate::layout::{self, Item};
use crate::model::StyledLine;
use crate::options::RenderOptions;

pub fn render(
    lines: &[StyledLine],
    media: &[String],
    opts: &RenderOptions,
) -> Result<Vec<u8>, Error> {
    let mut pdf = Pdf::new();

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    let fonts = FontSet::register(&mut pdf, &mut alloc);

    let loaded: Vec<LoadedImage> = media
        .iter()
        .map(|name| images::load(&opts.media_root, name))
        .collect::<Result<_, _>>()?;
    let mut image_ids = Vec::with_capacity(loaded.len());
    for image in &loaded {
        let image_id = alloc();
        image.write(&mut pdf, image_id, &mut alloc)?;
        image_ids.push(image_id);
    }
    let sizes: Vec<(u32, u32)> = loaded
        .iter()
        .map(|image| (image.pixel_width, image.pixel_height))
        .collect();

    let pages = layout::layout(lines, &sizes, opts, |style, text| {
        fonts.measure(style, text, opts.font_size)
    });

    let mut page_ids = Vec::with_capacity(pages.len());

    for page in &pages {
        let page_id = alloc();
        let content_id = alloc();

        let mut content = Content::new();
        let mut x_objects: Vec<(String, Ref)> = Vec::new();

        for item in &page.items {
            match item {
                Item::Text { style, x, baseline, text } => {
                    let font = fonts.entry(*style);
                    content
                        .begin_text()
                        .set_font(Name(font.pdf_name.as_bytes()), opts.font_size)
                        .next_line(*x, opts.page_height - baseline)
                        .show(Str(&to_winansi_bytes(text)))
                        .end_text();
                }
                Item::Image { index, x, top, width, height } => {
                    let name = format!("Im{}", index + 1);
                    content
                        .save_state()
                        .transform([*width, 0.0, 0.0, *height, *x, opts.page_height - top - height])
                        .x_object(Name(name.as_bytes()))
                        .restore_state();
                    x_objects.push((name, image_ids[*index]));
                }
            }
        }

        pdf.stream(content_id, &content.finish());

        {
            let mut page_writer = pdf.page(page_id);
            page_writer
                .media_box(Rect::new(0.0, 0.0, opts.page_width, opts.page_height))
                .parent(pages_id)
                .contents(content_id);

            let mut resources = page_writer.resources();
            {
                let mut font_dict = resources.fonts();
                for font in fonts.entries() {
                    font_dict.pair(Name(font.pdf_name.as_bytes()), font.font_ref);
                }
            }
            if !x_objects.is_empty() {
                let mut x_object_dict = resources.x_objects();
                for (name, id) in &x_objects {
                    x_object_dict.pair(Name(name.as_bytes()), *id);
                }
            }
        }

        page_ids.push(page_id);
    }

    let page_count = i32::try_from(page_ids.len())
        .map_err(|_| Error::Pdf("too many pages".into()))?;
    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids(page_ids).count(page_count);

    Ok(pdf.finish())
}

/// Renders `lines` and writes the PDF to `output`, replacing any existing file.
pub fn generate_pdf(
    lines: &[StyledLine],
    media: &[String],
    output: &Path,
    opts: &RenderOptions,
) -> Result<(), Error> {
    let bytes = render(lines, media, opts)?;
    std::fs::write(output, bytes).map_err(Error::Io)
}
