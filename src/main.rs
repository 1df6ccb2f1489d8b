use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, WriteLogger};

use sideline::core::config::{self, CliOverrides};
use sideline::data::{DataSource, FixtureSource, UnavailableSource};

#[derive(Parser)]
#[command(name = "sideline", about = "Team roster browser for the terminal")]
struct Args {
    /// JSON catalog to load instead of the bundled roster
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Route to open on start, e.g. /athlete or /athlete/3
    #[arg(short, long)]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A broken config file should not keep the app from starting
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::SidelineConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            catalog_path: args.catalog,
            start_route: args.route,
        },
    );

    // Initialize file logger - writes to sideline.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("sideline.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    info!("Sideline starting up at {}", resolved.start_route);
    if let Some(e) = config_error {
        error!("Ignoring config file: {}", e);
    }

    let source = build_source(resolved.catalog_path.as_deref());
    sideline::tui::run(resolved, source)
}

/// Picks the roster source. A catalog that cannot be read still starts the
/// app; the failure shows up as the load-failed state.
fn build_source(path: Option<&std::path::Path>) -> Arc<dyn DataSource> {
    let built = match path {
        Some(path) => FixtureSource::from_path(path),
        None => FixtureSource::bundled(),
    };
    match built {
        Ok(source) => Arc::new(source),
        Err(e) => {
            error!("Catalog unavailable: {}", e);
            Arc::new(UnavailableSource::new(e.to_string()))
        }
    }
}
