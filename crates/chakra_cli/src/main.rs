use std::path::{Path, PathBuf};
use std::process::exit;

use chakra_base::{
    ALL_CHARTS, ChartData, ChartView, DivisionalChart, GRID_LAYOUT, ProjectionConfig, abbreviation,
    nakshatra_from_longitude, navamsha_longitude, project_longitude, rashi_from_longitude,
    whole_sign_house, zodiac_sign,
};
use chakra_bridge::{BirthForm, FileEngine, compute_chart};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chakra", about = "Vedic whole-sign and navamsha chart CLI")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra, pada and lord from ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// D-9 (Navamsha) longitude of a D-1 longitude
    Navamsa {
        /// D-1 ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Project a D-1 longitude into a divisional chart
    Project {
        /// D-1 ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Chart id (D-1, D-9; D9, d-9 and 9 also accepted)
        #[arg(long, default_value = "D-1")]
        chart: String,
        /// Fail on unknown chart ids instead of using D-1
        #[arg(long)]
        strict: bool,
    },
    /// Whole-sign house of a body
    House {
        /// Body longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Ascendant longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        asc: f64,
    },
    /// List the supported divisional charts
    Charts,
    /// Render a chart payload saved from the ephemeris engine
    Chart {
        /// Path to the chart JSON payload
        #[arg(long)]
        input: PathBuf,
        /// Chart id (D-1, D-9; D9, d-9 and 9 also accepted)
        #[arg(long, default_value = "D-1")]
        chart: String,
        /// Fail on unknown chart ids instead of using D-1
        #[arg(long)]
        strict: bool,
        /// Draw the South-Indian 4x4 grid
        #[arg(long)]
        grid: bool,
    },
    /// Validate birth data and print the engine request
    Birth {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Timezone offset in minutes
        #[arg(long, allow_hyphen_values = true)]
        tz: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Location name
        #[arg(long)]
        place: String,
        /// Altitude in metres
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        alt: String,
        /// House system: W (whole sign) or P (Placidus)
        #[arg(long, default_value = "W")]
        house_system: String,
        /// Answer the request from a saved engine payload and render it
        #[arg(long)]
        payload: Option<PathBuf>,
        /// Chart id used when rendering the payload
        #[arg(long, default_value = "D-1")]
        chart: String,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    exit(1);
}

/// Map shorthand chart ids typed on the command line (`D9`, `d-9`, `9`) to
/// their canonical code. Anything else is passed through unchanged.
fn canonical_chart_id(raw: &str) -> &str {
    let t = raw.trim();
    let digits = t.strip_prefix(['D', 'd']).unwrap_or(t);
    let digits = digits.strip_prefix('-').unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw;
    }
    digits
        .parse::<u16>()
        .ok()
        .and_then(DivisionalChart::from_divisions)
        .map_or(raw, |chart| chart.code())
}

fn require_chart(id: &str, strict: bool) -> DivisionalChart {
    let config = ProjectionConfig { strict };
    config
        .resolve(canonical_chart_id(id))
        .unwrap_or_else(|e| fail(e))
}

fn load_chart(path: &Path) -> ChartData {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
    ChartData::from_json(&json).unwrap_or_else(|e| fail(e))
}

fn print_view(view: &ChartView) {
    println!("{} Chart", view.chart);
    println!(
        "Ascendant: {} ({}) - {}",
        view.ascendant_rashi.name(),
        view.ascendant_rashi.western_name(),
        view.ascendant_nakshatra
    );
    println!();
    for house in view.house_views() {
        let symbols: Vec<&str> = house.bodies.iter().map(|b| abbreviation(&b.name)).collect();
        println!(
            "House {:>2} [{:<11}] {}",
            house.house,
            house.rashi.western_name(),
            symbols.join(" ")
        );
    }
    println!();
    for d in &view.details {
        let info = rashi_from_longitude(d.projected_longitude);
        println!(
            "{:<4} {:<14} {:>8.4} deg  {} {}  house {:>2}  {}",
            abbreviation(&d.body.name),
            d.body.name,
            d.projected_longitude,
            d.rashi.western_name(),
            info.dms,
            d.house,
            d.nakshatra
        );
    }
}

fn print_grid(view: &ChartView) {
    const W: usize = 14;
    let mut cells = vec![vec![String::new(); 4]; 4];
    for cell in GRID_LAYOUT {
        let text = view
            .houses
            .get(cell.house)
            .map(|bodies| {
                bodies
                    .iter()
                    .map(|b| abbreviation(&b.name))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();
        cells[usize::from(cell.row - 1)][usize::from(cell.col - 1)] =
            format!("{:>2}:{text}", cell.house);
    }
    cells[1][1] = format!("{}", view.chart);
    cells[1][2] = view.ascendant_rashi.western_name().to_string();

    let rule = format!("+{}", format!("{}+", "-".repeat(W)).repeat(4));
    println!("{rule}");
    for row in &cells {
        let line: String = row
            .iter()
            .map(|c| format!("{c:<width$.width$}|", width = W))
            .collect();
        println!("|{line}");
        println!("{rule}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {}, Lord {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.lord,
                info.degrees_in_nakshatra
            );
        }

        Commands::Navamsa { lon } => {
            let d9 = navamsha_longitude(lon);
            let info = rashi_from_longitude(d9);
            println!(
                "D-9: {:.4} deg - {} ({}) {}",
                d9,
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms
            );
        }

        Commands::Project { lon, chart, strict } => {
            let chart = require_chart(&chart, strict);
            let projected = project_longitude(chart, lon);
            println!(
                "{}: {:.4} deg - {}",
                chart,
                projected,
                zodiac_sign(projected).western_name()
            );
        }

        Commands::House { lon, asc } => {
            let house = whole_sign_house(lon, asc);
            println!(
                "House {house} ({} from {} ascendant)",
                zodiac_sign(lon).western_name(),
                zodiac_sign(asc).western_name()
            );
        }

        Commands::Charts => {
            for chart in ALL_CHARTS {
                println!(
                    "{:<4} {:<9} {:>2} division(s)  {}",
                    chart.code(),
                    chart.name(),
                    chart.divisions(),
                    chart.description()
                );
            }
        }

        Commands::Chart {
            input,
            chart,
            strict,
            grid,
        } => {
            let chart = require_chart(&chart, strict);
            let data = load_chart(&input);
            let view = ChartView::build(&data, chart).unwrap_or_else(|e| fail(e));
            if grid {
                print_grid(&view);
            } else {
                print_view(&view);
            }
        }

        Commands::Birth {
            date,
            time,
            tz,
            lat,
            lon,
            place,
            alt,
            house_system,
            payload,
            chart,
        } => {
            let form = BirthForm {
                date,
                time,
                timezone: tz,
                latitude: lat,
                longitude: lon,
                location_name: place,
                altitude: alt,
                house_system,
            };
            let birth = form.parse().unwrap_or_else(|errs| {
                for (field, msg) in &errs.fields {
                    eprintln!("{field}: {msg}");
                }
                exit(1);
            });
            println!("{}", birth.engine_args().to_json());

            if let Some(path) = payload {
                let chart = require_chart(&chart, false);
                debug!(path = %path.display(), "answering request from saved payload");
                let data = compute_chart(&FileEngine::new(path), &birth)
                    .unwrap_or_else(|e| fail(e));
                let view = ChartView::build(&data, chart).unwrap_or_else(|e| fail(e));
                println!();
                print_view(&view);
            }
        }
    }
}
