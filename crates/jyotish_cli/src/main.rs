use std::io::Read;

use clap::{Parser, Subcommand};
use jyotish_core::{
    DEFAULT_YEAR_DAYS, DashaPeriod, DashaTree, Graha, Rashi, Varga, build_houses_by_code,
    deg_to_dms, detect_vargottama, expand_children, varga_rashi_info,
};
use jyotish_time::{LocalMoment, UtcTime, convert_local_to_julian_day};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "jyotish", about = "Jyotish chart core CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a civil date/time in a timezone to UTC and Julian Day
    Jd {
        /// Local datetime (YYYY-MM-DDThh:mm:ss)
        date: String,
        /// IANA timezone name (e.g. Asia/Kolkata)
        #[arg(long, default_value = "UTC")]
        tz: String,
    },
    /// Divisional sign of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Varga scheme code (1, 3, 5, 6, 8, 9, 10, 11, 16, 20, 24, 27, 40, 45, 60)
        #[arg(long, default_value = "9")]
        scheme: u16,
    },
    /// 12-house divisional chart from body longitudes
    Houses {
        /// Varga scheme code
        #[arg(long, default_value = "1")]
        scheme: u16,
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Body placement as Name:longitude (repeatable)
        #[arg(long = "body", required = true)]
        bodies: Vec<String>,
    },
    /// Flag grahas holding the same sign in D1 and D9
    Vargottama {
        /// Ascendant sidereal longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Body placement as Name:longitude (repeatable)
        #[arg(long = "body", required = true)]
        bodies: Vec<String>,
    },
    /// Vimshottari mahadasha row from birth time and Moon longitude
    Dasha {
        /// Birth UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon sidereal longitude at birth, in degrees
        #[arg(long)]
        moon: f64,
        /// Days per dasha year
        #[arg(long, default_value = "360")]
        year_days: f64,
        /// Query datetime: print the active chain instead of the full row
        #[arg(long)]
        at: Option<String>,
        /// Depth of the active chain (0 = mahadasha only)
        #[arg(long, default_value = "2")]
        depth: u8,
    },
    /// Expand one dasha period into its nine children (JSON in, JSON out)
    DashaExpand {
        /// Request JSON; reads stdin when omitted
        json: Option<String>,
    },
}

/// JSON request for `dasha-expand`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpandRequest {
    parent: PeriodSpec,
    #[serde(default = "default_year_days")]
    year_days: f64,
}

fn default_year_days() -> f64 {
    DEFAULT_YEAR_DAYS
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PeriodSpec {
    lord: String,
    start_utc: String,
    end_utc: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChildSpec {
    lord: String,
    start_utc: String,
    end_utc: String,
    days: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExpandResponse {
    success: bool,
    parent: PeriodSpec,
    year_days: f64,
    children: Vec<ChildSpec>,
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

fn parse_utc(s: &str) -> Result<UtcTime, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(UtcTime::new(year, month, day, hour, minute, second))
}

fn require_utc(s: &str) -> UtcTime {
    parse_utc(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    })
}

fn require_graha(s: &str) -> Graha {
    Graha::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid graha name: {s}");
        eprintln!("Valid: Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu");
        eprintln!("       (or Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn)");
        std::process::exit(1);
    })
}

/// Parse a `Name:longitude` body placement.
fn parse_body(s: &str) -> (Graha, f64) {
    let Some((name, lon)) = s.split_once(':') else {
        eprintln!("Invalid body placement: {s} (expected Name:longitude)");
        std::process::exit(1);
    };
    let graha = require_graha(name);
    let lon: f64 = lon.parse().unwrap_or_else(|e| {
        eprintln!("Invalid longitude for {name}: {e}");
        std::process::exit(1);
    });
    (graha, lon)
}

fn parse_bodies(specs: &[String]) -> Vec<(Graha, f64)> {
    specs.iter().map(|s| parse_body(s)).collect()
}

fn print_period(label: &str, period: &DashaPeriod) {
    println!(
        "{label}{} {} -> {} ({:.2} days)",
        period.lord.name(),
        UtcTime::from_jd_utc(period.start_jd),
        UtcTime::from_jd_utc(period.end_jd),
        period.duration_days()
    );
}

fn period_spec(period: &DashaPeriod) -> ChildSpec {
    ChildSpec {
        lord: period.lord.name().to_string(),
        start_utc: UtcTime::from_jd_utc(period.start_jd).to_string(),
        end_utc: UtcTime::from_jd_utc(period.end_jd).to_string(),
        days: period.duration_days(),
    }
}

fn emit_expand_error(msg: String) -> ! {
    let body = ErrorResponse {
        success: false,
        error: msg,
    };
    // serialization of a two-field struct cannot fail
    println!("{}", serde_json::to_string(&body).unwrap_or_default());
    std::process::exit(1);
}

fn run_dasha_expand(input: &str) {
    let request: ExpandRequest = match serde_json::from_str(input) {
        Ok(r) => r,
        Err(e) => emit_expand_error(format!("invalid request: {e}")),
    };

    let Some(lord) = Graha::from_name(&request.parent.lord) else {
        emit_expand_error(format!("unknown lord: {}", request.parent.lord));
    };
    let start = match parse_utc(&request.parent.start_utc) {
        Ok(t) => t.to_jd_utc(),
        Err(e) => emit_expand_error(format!("bad startUtc: {e}")),
    };
    let end = match parse_utc(&request.parent.end_utc) {
        Ok(t) => t.to_jd_utc(),
        Err(e) => emit_expand_error(format!("bad endUtc: {e}")),
    };
    if end <= start {
        emit_expand_error("endUtc must be after startUtc".to_string());
    }

    let duration_years = (end - start) / request.year_days;
    let children = match expand_children(lord, duration_years, start, request.year_days, 1) {
        Ok(c) => c,
        Err(e) => emit_expand_error(e.to_string()),
    };

    let response = ExpandResponse {
        success: true,
        parent: request.parent,
        year_days: request.year_days,
        children: children.iter().map(period_spec).collect(),
    };
    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => emit_expand_error(e.to_string()),
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd { date, tz } => {
            let utc_fields = require_utc(&date);
            let moment = LocalMoment::from_fields(
                utc_fields.year,
                utc_fields.month,
                utc_fields.day,
                utc_fields.hour,
                utc_fields.minute,
                utc_fields.second,
                &tz,
            )
            .unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let conv = convert_local_to_julian_day(&moment).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!("UTC: {}", conv.utc);
            println!("JD:  {:.7}", conv.julian_day);
        }

        Commands::Varga { lon, scheme } => {
            let Some(varga) = Varga::from_code(scheme) else {
                eprintln!("Unsupported varga scheme: D{scheme}");
                std::process::exit(1);
            };
            let info = varga_rashi_info(lon, varga).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let dms = deg_to_dms(lon);
            println!(
                "{} in {}: {} ({}) [{} deg {} min {:.1} sec]",
                lon,
                varga.name(),
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds
            );
        }

        Commands::Houses { scheme, asc, bodies } => {
            let placements = parse_bodies(&bodies);
            let chart = build_houses_by_code(scheme, &placements, asc).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            println!(
                "{} chart, ascendant {}",
                chart.varga.name(),
                Rashi::from_index(chart.asc_sign).name()
            );
            for house in &chart.houses {
                let names: Vec<&str> = house.grahas.iter().map(|g| g.name()).collect();
                println!(
                    "House {:2} {:<10} {}",
                    house.number,
                    Rashi::from_index(house.sign).name(),
                    names.join(" ")
                );
            }
        }

        Commands::Vargottama { asc, bodies } => {
            let placements = parse_bodies(&bodies);
            let rashi = build_houses_by_code(1, &placements, asc).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let navamsha = build_houses_by_code(9, &placements, asc).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            for (graha, flag) in detect_vargottama(&rashi, &navamsha) {
                let d1 = rashi.sign_of(graha).map(Rashi::from_index);
                let d9 = navamsha.sign_of(graha).map(Rashi::from_index);
                println!(
                    "{:<8} D1 {:<10} D9 {:<10} {}",
                    graha.name(),
                    d1.map_or("-", Rashi::name),
                    d9.map_or("-", Rashi::name),
                    if flag { "vargottama" } else { "-" }
                );
            }
        }

        Commands::Dasha {
            birth,
            moon,
            year_days,
            at,
            depth,
        } => {
            let birth_jd = require_utc(&birth).to_jd_utc();
            let tree = DashaTree::new(birth_jd, moon, year_days).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            match at {
                None => {
                    for period in tree.roots() {
                        print_period("", period);
                    }
                }
                Some(at) => {
                    let query_jd = require_utc(&at).to_jd_utc();
                    let chain = tree.snapshot(query_jd, depth).unwrap_or_else(|e| {
                        eprintln!("{e}");
                        std::process::exit(1);
                    });
                    if chain.is_empty() {
                        eprintln!("query instant falls outside the 120-year cycle");
                        std::process::exit(1);
                    }
                    for period in &chain {
                        let indent = "  ".repeat(period.depth as usize);
                        print_period(&indent, period);
                    }
                }
            }
        }

        Commands::DashaExpand { json } => {
            let input = match json {
                Some(s) => s,
                None => {
                    let mut buf = String::new();
                    if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                        emit_expand_error(format!("failed to read stdin: {e}"));
                    }
                    buf
                }
            };
            run_dasha_expand(&input);
        }
    }
}
