use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use funding_analysis::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "funding")]
#[command(about = "Startup funding analysis over a cleaned funding dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    //path to csv data file (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    //path to a json configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    //overall analysis of the whole dataset
    Overall {
        #[command(flatten)]
        source: SourceArgs,

        //monthly trend metric (total, count)
        #[arg(long, default_value = "total")]
        metric: String,

        //year for the top startups table (defaults to the earliest year)
        #[arg(long)]
        year: Option<i32>,

        //output path for the full report as json
        #[arg(long)]
        output_json: Option<PathBuf>,
    },

    //portfolio of one investor
    Investor {
        #[command(flatten)]
        source: SourceArgs,

        //investor name
        #[arg(long)]
        name: String,

        //investor match mode (substring, exact)
        #[arg(long = "match")]
        match_mode: Option<String>,

        //output path for the full report as json
        #[arg(long)]
        output_json: Option<PathBuf>,
    },

    //profile and funding history of one startup
    Startup {
        #[command(flatten)]
        source: SourceArgs,

        //startup name
        #[arg(long)]
        name: String,

        //output path for the full report as json
        #[arg(long)]
        output_json: Option<PathBuf>,
    },

    //list every distinct investor name
    Investors {
        #[command(flatten)]
        source: SourceArgs,
    },

    //list every distinct startup name
    Startups {
        #[command(flatten)]
        source: SourceArgs,
    },

    //rank groups of a single dimension
    Top {
        #[command(flatten)]
        source: SourceArgs,

        //dimension to group by (vertical, subvertical, city, round, investors, investor, startup, year, month)
        #[arg(long)]
        by: String,

        //reduction (total, count, max)
        #[arg(long, default_value = "total")]
        measure: String,

        //number of rows to keep
        #[arg(long, default_value = "5")]
        n: usize,

        //output path for the ranked table as csv
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    //write the default configuration to a json file
    InitConfig {
        #[arg(long, default_value = "funding.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Overall {
            source,
            metric,
            year,
            output_json,
        } => {
            let session = open_session(&source)?;
            let measure = Measure::parse(&metric)
                .filter(|m| *m != Measure::Max)
                .ok_or_else(|| anyhow::anyhow!("Unknown trend metric: {}", metric))?;

            emit(&session.overall_report(measure, year), output_json)?;
        }
        Commands::Investor {
            source,
            name,
            match_mode,
            output_json,
        } => {
            let session = open_session(&source)?;
            let mode = match match_mode {
                Some(mode) => Some(
                    InvestorMatch::parse(&mode)
                        .ok_or_else(|| anyhow::anyhow!("Unknown match mode: {}", mode))?,
                ),
                None => None,
            };

            emit(&session.investor_report(&name, mode), output_json)?;
        }
        Commands::Startup {
            source,
            name,
            output_json,
        } => {
            let session = open_session(&source)?;
            emit(&session.startup_report(&name), output_json)?;
        }
        Commands::Investors { source } => {
            let session = open_session(&source)?;
            for investor in session.investor_names() {
                println!("{}", investor);
            }
        }
        Commands::Startups { source } => {
            let session = open_session(&source)?;
            for startup in session.startup_names() {
                println!("{}", startup);
            }
        }
        Commands::Top {
            source,
            by,
            measure,
            n,
            output_csv,
        } => {
            let session = open_session(&source)?;
            run_top(&session, &by, &measure, n, output_csv)?;
        }
        Commands::InitConfig { output } => {
            AnalysisConfiguration::default().to_json_file(&output)?;
            println!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

fn open_session(source: &SourceArgs) -> Result<Session> {
    let mut config = match &source.config {
        Some(path) => AnalysisConfiguration::from_json_file(path)?,
        None => AnalysisConfiguration::default(),
    };

    if let Some(data) = &source.data {
        config.data_path = data.clone();
    }

    log::info!("opening session on {:?}", config.data_path);
    Session::open(config)
}

//prints a report and optionally saves it as json
fn emit<R: Report>(report: &R, output_json: Option<PathBuf>) -> Result<()> {
    report.print();

    if let Some(path) = output_json {
        report
            .save_json(&path)
            .context(format!("Failed to write report '{}' to {:?}", report.title(), path))?;
        println!("\nReport saved to {:?}", path);
    }

    Ok(())
}

fn run_top(
    session: &Session,
    by: &str,
    measure_name: &str,
    n: usize,
    output_csv: Option<PathBuf>,
) -> Result<()> {
    let dimension =
        Dimension::parse(by).ok_or_else(|| anyhow::anyhow!("Unknown dimension: {}", by))?;
    let measure = Measure::parse(measure_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown measure: {}", measure_name))?;

    let result = session.engine().top_n(dimension, n, measure);
    result.pretty_print_table(measure.label());

    if let Some(path) = output_csv {
        save_result_csv(&result, &path)?;
        println!("Table saved to {:?}", path);
    }

    Ok(())
}

fn save_result_csv(result: &AggregationResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to create CSV file: {:?}", path))?;

    for entry in &result.entries {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}
