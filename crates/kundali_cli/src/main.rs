use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use kundali_chart::{
    BirthInput, Chart, ChartBuilder, ChartError, CompatibilityReport, DashaReport, DatedPeriod,
    TransitReport, compatibility_report, dasha_report_for_birth, transit_report,
};
use kundali_core::{AnalyticEphemeris, ConfigError, EngineConfig};
use kundali_vedic_base::{deg_to_dms, nakshatra_from_longitude, rashi_from_longitude};

#[derive(Parser)]
#[command(
    name = "kundali",
    about = "Vedic birth charts, dashas, transits and compatibility"
)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Engine configuration file (TOML); defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Local date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// UTC offset in hours
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    tz: f64,
}

impl From<BirthArgs> for BirthInput {
    fn from(a: BirthArgs) -> Self {
        BirthInput::new(a.date, a.time, a.lat, a.lon, a.tz)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Vimshottari dasha timeline from the natal Moon
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Transits on a date against the natal chart
    Transit {
        #[command(flatten)]
        birth: BirthArgs,
        /// Transit date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Compatibility of two people, each given as DATE,TIME,LAT,LON,TZ
    Compat {
        #[arg(long, value_parser = parse_birth, allow_hyphen_values = true)]
        person1: BirthInput,
        #[arg(long, value_parser = parse_birth, allow_hyphen_values = true)]
        person2: BirthInput,
    },
    /// Rashi of a sidereal longitude
    Rashi {
        /// Sidereal longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada of a sidereal longitude
    Nakshatra {
        /// Sidereal longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Decimal degrees to degrees, minutes and seconds
    Dms {
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

/// `DATE,TIME,LAT,LON,TZ` to a birth input. Validation happens at build time.
fn parse_birth(s: &str) -> Result<BirthInput, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [date, time, lat, lon, tz] = parts.as_slice() else {
        return Err(format!("expected DATE,TIME,LAT,LON,TZ, got '{s}'"));
    };
    let num = |field: &str, v: &str| {
        v.parse::<f64>()
            .map_err(|_| format!("{field} is not a number: '{v}'"))
    };
    Ok(BirthInput::new(
        *date,
        *time,
        num("latitude", *lat)?,
        num("longitude", *lon)?,
        num("timezone", *tz)?,
    ))
}

#[derive(Debug)]
enum CliError {
    Config(ConfigError),
    Chart(ChartError),
    Json(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Chart(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "JSON output failed: {e}"),
        }
    }
}

impl Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ChartError> for CliError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn emit<T: Serialize>(json: bool, value: &T, text: fn(&T)) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    tracing::debug!(?config, "engine config");
    let eph = AnalyticEphemeris::new(&config);

    match cli.command {
        Commands::Chart { birth } => {
            let chart = ChartBuilder::new(&eph, &config).build(&birth.into())?;
            emit(cli.json, &chart, print_chart)
        }

        Commands::Dasha { birth, on } => {
            let report = dasha_report_for_birth(&eph, &birth.into(), on.unwrap_or_else(today))?;
            emit(cli.json, &report, print_dasha)
        }

        Commands::Transit { birth, on } => {
            let report = transit_report(&eph, &config, &birth.into(), on.unwrap_or_else(today))?;
            emit(cli.json, &report, print_transits)
        }

        Commands::Compat { person1, person2 } => {
            let report = compatibility_report(&eph, &config, &person1, &person2)?;
            emit(cli.json, &report, print_compatibility)
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            if cli.json {
                let value = serde_json::json!({
                    "rashi": info.rashi,
                    "index": info.rashi_index,
                    "degrees_in_rashi": info.degrees_in_rashi,
                    "dms": info.dms,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "{} ({}) - {} ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.dms,
                    info.degrees_in_rashi
                );
            }
            Ok(())
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            if cli.json {
                let value = serde_json::json!({
                    "nakshatra": info.nakshatra,
                    "index": info.nakshatra_index,
                    "pada": info.pada,
                    "degrees_in_nakshatra": info.degrees_in_nakshatra,
                    "progress": info.progress,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra
                );
            }
            Ok(())
        }

        Commands::Dms { deg } => {
            let dms = deg_to_dms(deg);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&dms)?);
            } else {
                let sign = if deg < 0.0 { "-" } else { "" };
                println!("{sign}{dms}");
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

fn print_chart(chart: &Chart) {
    let asc = &chart.ascendant;
    println!(
        "Ascendant: {} {:.2} deg ({:.2} deg, {})",
        asc.sign, asc.degree, asc.longitude, asc.nakshatra
    );
    println!("Ayanamsa:  {:.6} deg", chart.birth_info.ayanamsa);
    println!();
    println!(
        "{:<8} {:<11} {:>5} {:>9} {:>8}  {:<12} {:<18} Pada",
        "Planet", "Sign", "House", "Longitude", "Strength", "Dignity", "Nakshatra"
    );
    for (graha, p) in &chart.planets {
        let retro = if p.retrograde { " R" } else { "" };
        println!(
            "{:<8} {:<11} {:>5} {:>9.2} {:>8.2}  {:<12} {:<18} {}{retro}",
            graha.to_string(),
            p.sign.to_string(),
            p.house.number(),
            p.longitude,
            p.strength,
            p.dignity.label(),
            p.nakshatra.to_string(),
            p.pada
        );
    }
    println!();
    println!("Houses:");
    for h in &chart.houses {
        let occupants: Vec<String> = h.occupants.iter().map(|g| g.to_string()).collect();
        println!(
            "  {:>2} {:<11} lord {:<8} strength {:>6.2}  {}",
            h.number.number(),
            h.sign.to_string(),
            h.lord.to_string(),
            h.strength,
            occupants.join(", ")
        );
    }
    println!();
    println!("Aspects:");
    for (graha, houses) in &chart.aspects {
        let list: Vec<String> = houses.iter().map(|b| b.to_string()).collect();
        println!("  {:<8} {}", graha.to_string(), list.join(", "));
    }
    println!();
    if chart.yogas.is_empty() {
        println!("Yogas: none");
    } else {
        println!("Yogas:");
        for y in &chart.yogas {
            println!("  {} - {}", y.name(), y.effect());
        }
    }
}

fn print_period(p: &DatedPeriod, current: Option<&DatedPeriod>) {
    let marker = if current == Some(p) { "*" } else { " " };
    println!(
        " {marker} {:<8} {} to {}  ({:.2} y)",
        p.lord.to_string(),
        p.start_date,
        p.end_date,
        p.years
    );
}

fn print_dasha(report: &DashaReport) {
    let n = &report.birth_nakshatra;
    println!(
        "Birth nakshatra: {} (lord {}), {:.1}% traversed",
        n.name,
        n.lord,
        n.progress * 100.0
    );
    println!();
    println!("Mahadashas:");
    for p in &report.mahadasha_periods {
        print_period(p, report.current_mahadasha.as_ref());
    }
    if let Some(maha) = &report.current_mahadasha {
        println!();
        println!("Antardashas of {}:", maha.lord);
        for p in &report.antardasha_periods {
            print_period(p, report.current_antardasha.as_ref());
        }
    }
}

fn print_transits(report: &TransitReport) {
    println!(
        "Transits on {} (natal ascendant {})",
        report.transit_date, report.birth_chart.ascendant.sign
    );
    println!();
    for t in &report.transits {
        println!(
            "{:<8} natal house {:>2}, in {:<11} house {:>2}  {:?}/{:?}",
            t.planet.to_string(),
            t.birth_house.number(),
            t.transit_sign.to_string(),
            t.transit_house.number(),
            t.effects.strength,
            t.effects.impact
        );
        for area in &t.effects.areas_affected {
            println!("           {area}");
        }
        for remedy in &t.effects.remedies {
            println!("           remedy: {remedy}");
        }
    }
}

fn print_compatibility(report: &CompatibilityReport) {
    let c = &report.compatibility;
    println!("Overall: {} ({:?})", c.overall_score, c.grade);
    println!();
    println!(
        "Mangal dosha: {:>3}  {}",
        c.mangal_dosha.compatibility_score, c.mangal_dosha.description
    );
    println!(
        "Nakshatra:    {:>3}  {} / {} - {}",
        c.nakshatra_compatibility.compatibility_score,
        c.nakshatra_compatibility.person1_nakshatra,
        c.nakshatra_compatibility.person2_nakshatra,
        c.nakshatra_compatibility.description
    );
    println!(
        "Planetary:    {:>6.2}  {}",
        c.planetary_compatibility.average_score, c.planetary_compatibility.description
    );
    println!(
        "Houses:       {:>6.2}  {}",
        c.house_compatibility.average_score, c.house_compatibility.description
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_person_argument() {
        let p = parse_birth("1977-10-29, 21:30, 13.0833, 80.2833, 5.5").unwrap();
        assert_eq!(p.date, "1977-10-29");
        assert_eq!(p.time, "21:30");
        assert_eq!(p.timezone, 5.5);
    }

    #[test]
    fn rejects_bad_person_argument() {
        assert!(parse_birth("1977-10-29,21:30,13.0").is_err());
        assert!(parse_birth("1977-10-29,21:30,north,80.0,5.5").is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kundali", "chart", "--date", "1977-10-29", "--time", "21:30", "--lat", "13.0833",
            "--lon", "-80.2833", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Chart { birth } => {
                assert_eq!(birth.lon, -80.2833);
                assert_eq!(birth.tz, 0.0);
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn dasha_query_date() {
        let cli = Cli::try_parse_from([
            "kundali", "dasha", "--date", "1977-10-29", "--time", "21:30", "--lat", "13",
            "--lon", "80", "--on", "2024-01-15",
        ])
        .unwrap();
        match cli.command {
            Commands::Dasha { on, .. } => {
                assert_eq!(on, NaiveDate::from_ymd_opt(2024, 1, 15));
            }
            _ => panic!("expected dasha"),
        }
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "kundali", "--config", "/nonexistent/kundali.toml", "dms", "12.5",
        ])
        .unwrap();
        assert!(matches!(run(cli), Err(CliError::Config(ConfigError::Io(_)))));
    }
}
