use clap::Parser;
use mandelbrot_explorer::{PpmFilePresenter, SnapshotArgs, SnapshotController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = SnapshotArgs::parse();
    let config = args.view.config();
    let viewport = config.build_viewport(args.view.canvas_size()?)?;

    let mut controller = SnapshotController::new(PpmFilePresenter::new(config.background));
    controller.generate(&viewport, config.colour_map_kind)?;
    controller.write(&args.output)?;

    Ok(())
}
