use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vibegen::{Builder, Config, ShellError, Templates, cli, server};

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    let args = cli::Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::read(args.config.as_deref())
        .inspect_err(|e| tracing::error!("Error loading configuration: {e}"))?;
    args.apply_to(&mut config)?;

    let page = config.page()?;
    let templates = Templates::new(config.template_folder.as_deref())
        .inspect_err(|e| tracing::error!("Error parsing template: {e}"))?;

    if args.stdout {
        let html = page.render(&templates)?;
        print!("{html}");
    } else if let Some(output_dir) = args.export {
        let stats = Builder::new(page, templates, output_dir).build()?;
        tracing::info!("Exported {} page(s) in {:?}", stats.pages, stats.duration);
    } else {
        // Server mode - default when no flags specified (or explicit -s)
        let server = server::Server::init(config.host.0, config.port, page, templates);
        server.start().await?;
    }
    Ok(())
}
