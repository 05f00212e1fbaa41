//! fooddata
//!
//! Usage:
//!   fooddata foods [min_protein_g] [top_n]
//!   fooddata names [name]

use std::path::Path;

use tracing_subscriber::EnvFilter;

use fooddata::build_info;
use fooddata::config::Config;
use fooddata::loader;
use fooddata::nutrition::{MatchPolicy, DEFAULT_MIN_PROTEIN_G};
use fooddata::reports::{self, charts, table, FoodReport, NameReport};
use fooddata::models::Sex;
use fooddata::AnalysisError;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 640;
const DEFAULT_TOP_N: usize = 20;
const DEFAULT_NAME: &str = "Andrew";

fn usage() -> String {
    "usage: fooddata foods [min_protein_g] [top_n]\n       fooddata names [name]".to_string()
}

fn parse_arg<T: std::str::FromStr>(arg: Option<&String>, default: T, what: &str) -> Result<T, AnalysisError> {
    match arg {
        None => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| AnalysisError::InvalidInput(format!("{} must be a number, got '{}'", what, s))),
    }
}

fn write_chart(result: Result<Vec<u8>, AnalysisError>, path: &Path) -> Result<(), AnalysisError> {
    match result {
        Ok(png) => {
            std::fs::write(path, png)?;
            eprintln!("Chart: {}", path.display());
        }
        // A missing chart shouldn't lose the rest of the report
        Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
    }
    Ok(())
}

fn run_foods(config: &Config, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let min_protein_g = parse_arg(args.first(), DEFAULT_MIN_PROTEIN_G, "min_protein_g")?;
    let top_n = parse_arg(args.get(1), DEFAULT_TOP_N, "top_n")?;

    eprintln!("Food database: {}", config.food_db_path.display());
    let load = loader::load_food_records(&config.food_db_path)?;

    let report = FoodReport::build(&load.records, load.rejected.len(), MatchPolicy::default(), min_protein_g)?;

    println!(
        "{} foods, {} rejected, {} viable protein sources (>= {} g protein)\n",
        report.total_foods, report.rejected_records, report.viable_foods, min_protein_g
    );
    print!("{}", table::format_food_table(&report.ranked, top_n));

    std::fs::create_dir_all(&config.output_dir)?;
    write_chart(
        charts::protein_density_chart(&report.ranked, top_n, CHART_WIDTH, CHART_HEIGHT),
        &config.output_dir.join("protein_density.png"),
    )?;
    reports::write_json(&report, config.output_dir.join("food_report.json"))?;

    Ok(())
}

fn run_names(config: &Config, args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let name = args.first().map(String::as_str).unwrap_or(DEFAULT_NAME);

    eprintln!("Name files: {} ({}-{})", config.names_dir.display(), config.year_start, config.year_end);
    let records = loader::load_years(&config.names_dir, config.years())?;
    let report = NameReport::build(&records, name);

    println!("Total births by year and sex\n");
    print!("{}", table::format_sex_counts_table(&report.births_by_sex));

    println!("\nBirths named {}\n", name);
    print!("{}", table::format_sex_counts_table(&report.name_history));
    println!(
        "\n{}: {:.2}% F, {:.2}% M of {} births",
        name,
        report.sex_share.female_pct,
        report.sex_share.male_pct,
        report.sex_share.counts.total()
    );

    println!("\nMost popular names\n");
    print!("{}", table::format_top_names_table(&report.most_popular));

    println!("\nUnique names by year\n");
    print!("{}", table::format_unique_names_table(&report.unique_names));

    println!("\nShare of years as the most popular female name\n");
    print!("{}", table::format_name_shares_table(&report.top_female_shares));
    println!("\nShare of years as the most popular male name\n");
    print!("{}", table::format_name_shares_table(&report.top_male_shares));

    std::fs::create_dir_all(&config.output_dir)?;
    let out = &config.output_dir;
    write_chart(
        charts::births_by_sex_chart(&report.births_by_sex, CHART_WIDTH, CHART_HEIGHT),
        &out.join("births_by_sex.png"),
    )?;
    write_chart(
        charts::name_history_chart(name, &report.name_history, CHART_WIDTH, CHART_HEIGHT),
        &out.join(charts::name_chart_file(name)),
    )?;
    write_chart(
        charts::average_length_chart(&report.average_name_length, CHART_WIDTH, CHART_HEIGHT),
        &out.join("average_name_length.png"),
    )?;
    write_chart(
        charts::unique_names_chart(&report.unique_names, CHART_WIDTH, CHART_HEIGHT),
        &out.join("unique_names.png"),
    )?;
    write_chart(
        charts::top_name_share_chart(&report.top_female_shares, Sex::Female, CHART_WIDTH, CHART_HEIGHT),
        &out.join("top_names_female.png"),
    )?;
    write_chart(
        charts::top_name_share_chart(&report.top_male_shares, Sex::Male, CHART_WIDTH, CHART_HEIGHT),
        &out.join("top_names_male.png"),
    )?;
    reports::write_json(&report, out.join("name_report.json"))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so tables on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fooddata=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()?;

    match args.first().map(String::as_str) {
        Some("foods") => run_foods(&config, &args[1..]),
        Some("names") => run_names(&config, &args[1..]),
        _ => {
            eprintln!("{}", usage());
            Err(AnalysisError::InvalidInput("missing or unknown command".to_string()).into())
        }
    }
}
