use clap::Parser;
use mandelbrot_explorer::{GuiArgs, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = GuiArgs::parse();
    let config = args.view.config();
    let presenter_factory = PixelsPresenterFactory::new(config.background);
    let command = RunGuiCommand::new(presenter_factory, config, args.view.canvas_size()?);

    command.execute()
}
