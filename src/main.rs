use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use databridge_geo::catalog::features::ZONE_NAME_PROPERTY;
use databridge_geo::catalog::{parse_srid_catalog, point_to_feature, zones_to_feature_collection};
use databridge_geo::config::FileConfig;
use databridge_geo::{AutoProjection, CoordinateConverter, GeoPoint, TransformContext, ZoneCatalog};

/// Resolve state-plane projections and convert coordinates
///
/// Examples:
///   # Which state-plane zone and WKT apply to a point
///   databridge-geo resolve --lat 30.5 --lon -97.8 --unit "us survey foot"
///
///   # Project a point into a catalog SRID
///   databridge-geo to-xy --srid 2277 --lat 30.2672 --lon -97.7431
///
///   # Back from state plane to lat/lon
///   databridge-geo to-geo --srid 2277 --x 3114000 --y 10070000
///
///   # Web Mercator both ways
///   databridge-geo mercator --lat 40.7128 --lon -74.006
///   databridge-geo mercator --inverse --x -8238310 --y 4970071
#[derive(Parser, Debug)]
#[command(name = "databridge-geo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to config file (optional, auto-searches databridge-geo.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Zone boundary GeoJSON (overrides config)
    #[arg(long, global = true)]
    zones: Option<PathBuf>,

    /// SRID catalog, one `srid;wkt` per line (overrides config)
    #[arg(long, global = true)]
    srids: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the zone containing a point and its projection WKT
    Resolve {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// "us survey foot", "metre" or "foot" (defaults to config)
        #[arg(long)]
        unit: Option<String>,
    },
    /// Geographic point to native coordinates
    ToXy {
        #[command(flatten)]
        system: SystemArgs,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Native coordinates to a geographic point
    ToGeo {
        #[command(flatten)]
        system: SystemArgs,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// WGS84 to Web Mercator, or back with --inverse
    Mercator {
        #[arg(long)]
        inverse: bool,
        #[arg(long, allow_hyphen_values = true, required_unless_present = "inverse")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, required_unless_present = "inverse")]
        lon: Option<f64>,
        #[arg(long, allow_hyphen_values = true, required_if_eq("inverse", "true"))]
        x: Option<f64>,
        #[arg(long, allow_hyphen_values = true, required_if_eq("inverse", "true"))]
        y: Option<f64>,
    },
    /// Export the boundary of a zone as GeoJSON
    Zone {
        #[arg(long)]
        name: String,
        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

/// Which coordinate system to convert with
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SystemArgs {
    /// SRID from the catalog
    #[arg(long)]
    srid: Option<u32>,
    /// File holding a WKT coordinate system
    #[arg(long)]
    wkt_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = if let Some(ref config_path) = cli.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            let config: FileConfig =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.relative_to(config_path)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = cli.verbose || file_config.verbose;
    init_logging(verbose);

    let zones_path = cli.zones.clone().unwrap_or(file_config.zones.clone());
    let srids_path = cli.srids.clone().unwrap_or(file_config.srids.clone());
    let context = TransformContext::shared().context("Failed to set up PROJ transforms")?;

    match cli.command {
        Command::Resolve { lat, lon, unit } => {
            let unit = unit.unwrap_or_else(|| file_config.unit.to_string());
            let catalog = load_catalog(&zones_path, &srids_path)?;
            let resolved = AutoProjection::new(catalog)
                .resolve(lat, lon, &unit)
                .context("Failed to resolve projection")?;

            println!("Zone: {}", resolved.zone);
            if let Some(srid) = resolved.srid {
                println!("SRID: {}", srid);
            }
            println!("Unit: {}", resolved.unit);
            println!("WKT:  {}", resolved.wkt);
        }
        Command::ToXy { system, lat, lon } => {
            let converter = build_converter(&system, &srids_path, context)?;
            let point = GeoPoint::new(lat, lon)?;
            let (x, y) = converter.to_xy(point)?;
            println!(
                "{} -> ({:.4}, {:.4}) [{}]",
                point,
                x,
                y,
                converter.unit().unwrap_or("native units")
            );
        }
        Command::ToGeo { system, x, y } => {
            let converter = build_converter(&system, &srids_path, context)?;
            let point = converter.to_geo(x, y)?;
            println!("({:.4}, {:.4}) -> {}", x, y, point);
        }
        Command::Mercator {
            inverse,
            lat,
            lon,
            x,
            y,
        } => {
            if inverse {
                let (x, y) = x.zip(y).context("--inverse needs --x and --y")?;
                let point = context.web_mercator_to_geo(x, y)?;
                println!("({:.2}, {:.2}) -> {}", x, y, point);
            } else {
                let (lat, lon) = lat.zip(lon).context("--lat and --lon are required")?;
                let point = GeoPoint::new(lat, lon)?;
                let (x, y) = context.geo_to_web_mercator(point)?;
                println!("{} -> ({:.2}, {:.2})", point, x, y);
            }
        }
        Command::Zone { name, output } => {
            let catalog = load_catalog(&zones_path, &srids_path)?;
            let zones: Vec<_> = catalog.zones_named(&name).collect();
            if zones.is_empty() {
                bail!("Zone not found in catalog: {}", name);
            }

            let mut collection = zones_to_feature_collection(zones.iter().copied());
            if verbose {
                for zone in &zones {
                    let Some((lat, lon)) = zone.bounds().center() else {
                        continue;
                    };
                    let mut props = geojson::JsonObject::new();
                    props.insert("role".to_string(), "bbox-center".into());
                    props.insert(ZONE_NAME_PROPERTY.to_string(), zone.id.clone().into());
                    collection
                        .features
                        .push(point_to_feature(GeoPoint::new(lat, lon)?, props));
                }
            }

            let text = serde_json::to_string_pretty(&collection)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} polygon(s) to {}", zones.len(), path.display());
                }
                None => println!("{}", text),
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(zones: &Path, srids: &Path) -> Result<Arc<ZoneCatalog>> {
    let spinner = create_spinner("Loading zone catalog...");
    let start = Instant::now();
    let catalog = ZoneCatalog::load(zones, srids).context("Failed to load zone catalog")?;
    spinner.finish_with_message(format!(
        "Loaded {} zone polygons and {} projections [{:.1}s]",
        catalog.zones().len(),
        catalog.projections().len(),
        start.elapsed().as_secs_f32()
    ));
    Ok(Arc::new(catalog))
}

fn build_converter(
    system: &SystemArgs,
    srids: &Path,
    context: Arc<TransformContext>,
) -> Result<CoordinateConverter> {
    let wkt = if let Some(ref path) = system.wkt_file {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read WKT file: {}", path.display()))?
    } else if let Some(srid) = system.srid {
        let text = std::fs::read_to_string(srids)
            .with_context(|| format!("Failed to read SRID catalog: {}", srids.display()))?;
        let catalog = ZoneCatalog::new(Vec::new(), parse_srid_catalog(&text));
        catalog
            .projection_by_srid(srid)
            .map(|p| p.wkt.clone())
            .with_context(|| format!("SRID {} not in catalog", srid))?
    } else {
        bail!("Either --srid or --wkt-file is required");
    };

    CoordinateConverter::from_wkt(&wkt, context).context("Failed to build coordinate converter")
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
