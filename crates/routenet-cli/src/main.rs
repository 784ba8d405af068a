use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use routenet_cli::output::{
    CityListView, CityView, ItineraryView, MapUrlView, NoPathView, OutputFormat, PathView,
    SavedView, StatsView,
};
use routenet_lib::{
    calculate_route_info, calculate_shortest_path, load_network, map_url, resolve_network_paths,
    Error as LibError, RouteNetwork,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Route network queries and itinerary planning")]
struct Cli {
    /// Network file to load. Repeat to merge several files in order.
    #[arg(long = "data", global = true, value_name = "PATH")]
    data: Vec<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every city in the network.
    Cities,
    /// Show details and non-stop destinations of one city.
    City {
        /// City code, e.g. MEX.
        code: String,
    },
    /// Show aggregate statistics about the network.
    Stats,
    /// Price and time an itinerary given as consecutive city codes.
    Route {
        #[arg(required = true, value_name = "CODE")]
        codes: Vec<String>,
    },
    /// Find the shortest path between two cities.
    Path {
        /// Departure city code.
        #[arg(long = "from")]
        from: String,
        /// Destination city code.
        #[arg(long = "to")]
        to: String,
    },
    /// Print a great-circle map URL covering every flight.
    MapUrl,
    /// Write the network to a file in canonical form.
    Save {
        /// Destination file; overwritten when it exists.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load(&cli.data)?;
    let format = cli.format;

    match cli.command {
        Command::Cities => emit(format, &CityListView::new(&network)),
        Command::City { code } => handle_city(&network, format, &code),
        Command::Stats => emit(format, &StatsView::new(&network)),
        Command::Route { codes } => handle_route(&network, format, codes),
        Command::Path { from, to } => handle_path(&network, format, &from, &to),
        Command::MapUrl => emit(
            format,
            &MapUrlView {
                url: map_url(&network),
            },
        ),
        Command::Save { path } => handle_save(&network, format, &path),
    }
}

fn load(explicit: &[PathBuf]) -> Result<RouteNetwork> {
    let paths = resolve_network_paths(explicit)
        .context("failed to locate route network data; pass --data or set ROUTENET_DATA")?;
    debug!(files = ?paths, "loading route network");
    load_network(&paths).with_context(|| {
        let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        format!("failed to load route network from {}", listed.join(", "))
    })
}

fn emit<V: fmt::Display + Serialize>(format: OutputFormat, view: &V) -> Result<()> {
    let rendered = format.render(view).context("failed to render output")?;
    print!("{rendered}");
    Ok(())
}

fn handle_city(network: &RouteNetwork, format: OutputFormat, code: &str) -> Result<()> {
    let vertex = network.vertex(code).ok_or_else(|| LibError::UnknownVertex {
        code: code.to_string(),
    })?;
    emit(format, &CityView::new(network, vertex))
}

fn handle_route(network: &RouteNetwork, format: OutputFormat, codes: Vec<String>) -> Result<()> {
    let info = calculate_route_info(network, &codes)
        .with_context(|| format!("invalid itinerary {}", codes.join(" -> ")))?;
    emit(format, &ItineraryView::new(codes, info))
}

fn handle_path(network: &RouteNetwork, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let Some(path) = calculate_shortest_path(network, from, to)? else {
        return emit(format, &NoPathView::new(from, to));
    };
    let info = calculate_route_info(network, &path.steps)?;
    emit(format, &PathView::new(path, info))
}

fn handle_save(network: &RouteNetwork, format: OutputFormat, path: &Path) -> Result<()> {
    network
        .save(path)
        .with_context(|| format!("failed to save route network to {}", path.display()))?;
    emit(format, &SavedView::new(path, network))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
