use clap::Parser;
use docx2pdf_lite::RenderOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "docx2pdf-lite", about = "Convert DOCX files to PDF")]
struct Args {
    /// Input DOCX file
    input: PathBuf,
    /// Output PDF file (defaults to input with .pdf extension)
    output: Option<PathBuf>,
    /// Text only: ignore run formatting and images
    #[arg(long)]
    plain: bool,
    /// Directory that image names (word/media/...) are resolved against
    #[arg(long, value_name = "DIR")]
    media_root: Option<PathBuf>,
    /// Unpack the DOCX media into DIR first and resolve images there
    #[arg(long, value_name = "DIR", conflicts_with = "media_root")]
    unpack_media: Option<PathBuf>,
    /// Font size in points
    #[arg(long, default_value_t = 12.0)]
    font_size: f32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("Error: file not found: {}", args.input.display());
        std::process::exit(1);
    }
    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("pdf"));

    let result = if args.plain {
        docx2pdf_lite::convert(&args.input, &output)
    } else {
        run_formatted(&args, &output)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_formatted(args: &Args, output: &Path) -> Result<(), docx2pdf_lite::Error> {
    let mut opts = RenderOptions {
        font_size: args.font_size,
        ..RenderOptions::default()
    };

    if let Some(dir) = &args.unpack_media {
        docx2pdf_lite::unpack_media(&args.input, dir)?;
        opts.media_root = dir.clone();
    } else if let Some(dir) = &args.media_root {
        opts.media_root = dir.clone();
    }

    docx2pdf_lite::convert_with_options(&args.input, output, &opts)
}
