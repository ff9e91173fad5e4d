use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use fractal_viewer::core::viewport::session::default_region;
use fractal_viewer::render::palette::Palette;
use fractal_viewer::{KernelVariant, OfflineRenderer, PpmPresenter, RenderRequest};

#[derive(Parser, Debug)]
#[command(name = "fractal_viewer", about = "Render the Mandelbrot set to a PPM image")]
struct Args {
    /// Image width in pixels
    width: u32,

    /// Image height in pixels
    height: u32,

    /// Kernel that computes the escape-time grid
    #[arg(long, value_enum, default_value_t = KernelArg::Parallel)]
    kernel: KernelArg,

    /// Iteration budget per pixel
    #[arg(long, default_value_t = 256)]
    max_iterations: u32,

    /// Output file
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KernelArg {
    Serial,
    Parallel,
}

impl From<KernelArg> for KernelVariant {
    fn from(arg: KernelArg) -> Self {
        match arg {
            KernelArg::Serial => Self::Serial,
            KernelArg::Parallel => Self::Parallel,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let request = RenderRequest::new(
        args.width,
        args.height,
        default_region(),
        args.max_iterations,
        args.kernel.into(),
    )?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let renderer = OfflineRenderer::new(PpmPresenter::new());
    renderer.render_to_file(&request, Palette::default(), &args.output)?;

    Ok(())
}
