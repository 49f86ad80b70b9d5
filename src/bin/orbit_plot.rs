use clap::Parser;
use enginuity::plot::{PlotOptions, read_trace, render_trace};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render an orbit trace CSV (index,x_km,y_km[,z_km]) to PNG"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/orbit.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
    /// Draw only the trace and the Earth disc (no caption, axes or labels)
    #[arg(long, default_value_t = false)]
    bare: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let trace = read_trace(&cli.input)?;
    let options = PlotOptions {
        width: cli.width,
        height: cli.height,
        bare: cli.bare,
    };
    render_trace(&trace, &cli.output, &options)?;
    Ok(())
}
