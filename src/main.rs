use clap::Parser;
use log::{error, info};
use mandel_render::{CliArgs, WorkerExit, run_headless};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = CliArgs::parse().into_options()?;
    let report = run_headless(options)?;

    match report.exit {
        WorkerExit::Completed { elapsed } => {
            info!(
                "finished in {:.3}s after {} presented frames",
                elapsed.as_secs_f64(),
                report.frames_presented
            );
        }
        WorkerExit::Aborted { at } => {
            info!("stopped at x={}, y={}", at.x, at.y);
        }
        WorkerExit::Failed { message } => {
            error!("render failed: {}", message);
            return Err(message.into());
        }
    }

    Ok(())
}
