use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gui", about = "Interactive Mandelbrot viewer")]
struct Args {
    /// Window width in pixels
    #[arg(default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(default_value_t = 600)]
    height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    fractal_viewer::input::gui::run_gui(args.width, args.height)
}
