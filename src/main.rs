use anyhow::{Context, Result};
use shrub::cli::commands::SampleCommand;
use shrub::cli::sample::sample_configuration;
use shrub::cli::{Cli, Command};
use shrub::OutputFormat;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging; stdout is reserved for the document
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    match &cli.command {
        Command::Sample(cmd) => render_sample(cmd)?,
    }

    Ok(())
}

fn render_sample(cmd: &SampleCommand) -> Result<()> {
    let config = sample_configuration(&cmd.expansion)
        .context("Failed to build sample configuration")?;

    let document = config
        .render(OutputFormat::from(cmd.format))
        .context("Failed to render configuration")?;

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote pipeline definition to {}", path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}
