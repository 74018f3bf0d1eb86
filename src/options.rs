use std::path::PathBuf;

const MM: f32 = 72.0 / 25.4;

/// Page geometry and resource lookup for the renderer. All lengths are in
/// PDF points.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    /// Rows that would cross `page_height - margin_bottom` go to a new page.
    pub margin_bottom: f32,
    pub cell_width: f32,
    pub row_height: f32,
    pub cell_padding: f32,
    pub font_size: f32,
    /// Media names are resolved relative to this directory.
    pub media_root: PathBuf,
    pub image_width: f32,
    pub image_height: f32,
    pub image_gap: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            page_width: 210.0 * MM,
            page_height: 297.0 * MM,
            margin_left: 10.0 * MM,
            margin_top: 10.0 * MM,
            margin_bottom: 20.0 * MM,
            cell_width: 190.0 * MM,
            row_height: 10.0 * MM,
            cell_padding: 1.0 * MM,
            font_size: 12.0,
            media_root: PathBuf::from("."),
            image_width: 100.0 * MM,
            image_height: 100.0 * MM,
            image_gap: 5.0 * MM,
        }
    }
}
