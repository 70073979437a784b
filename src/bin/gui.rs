use clap::Parser;
use mandel_render::{CliArgs, run_gui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = CliArgs::parse().into_options()?;
    run_gui(options)?;

    Ok(())
}
