//! # Smart Sleep Score CLI
//!
//! Terminal front-end for the sleep cost calculator. Values come from flags
//! (or environment variables), or are prompted for with `--interactive`.
//!
//! ```text
//! sleep_cli --income 75000 --disruptor snoring-apnea --pdf report.pdf
//! sleep_cli --interactive --share email
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sleep_core::assumptions::{
    DEFAULT_ANNUAL_INCOME, DEFAULT_MATTRESS_PRICE, DEFAULT_MONTHLY_CAFFEINE,
};
use sleep_core::calculations::calculate_results_with;
use sleep_core::export::{default_report_filename, export_report_pdf};
use sleep_core::format::{format_break_even, format_currency, format_percent};
use sleep_core::share::{email_link, generate_share_text, sms_link, SmsPlatform, DEFAULT_SHARE_URL};
use sleep_core::{Assumptions, CalculatorResults, CalculatorSession, SLEEP_DISRUPTORS};

#[derive(Debug, Parser)]
#[command(name = "sleep_cli", version, about = "Calculate the ROI of investing in better sleep")]
struct Args {
    /// Annual income in dollars
    #[arg(long, env = "SLEEP_SCORE_INCOME", default_value_t = DEFAULT_ANNUAL_INCOME)]
    income: f64,

    /// Sleep issue id (repeatable); see --list-disruptors
    #[arg(long = "disruptor", value_name = "ID")]
    disruptors: Vec<String>,

    /// Monthly caffeine spending; 0 uses the $3.50/day average
    #[arg(long, default_value_t = DEFAULT_MONTHLY_CAFFEINE)]
    caffeine: f64,

    /// Mattress price in dollars
    #[arg(long, env = "SLEEP_SCORE_PRICE", default_value_t = DEFAULT_MATTRESS_PRICE)]
    price: f64,

    /// Prompt for each value instead of using flags
    #[arg(short, long)]
    interactive: bool,

    /// Print the disruptor catalog and exit
    #[arg(long)]
    list_disruptors: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Write a PDF report to this path
    #[arg(long, value_name = "PATH", conflicts_with = "pdf_default")]
    pdf: Option<PathBuf>,

    /// Write a PDF report named sleep-score-report-<date>.pdf
    #[arg(long)]
    pdf_default: bool,

    /// Print share text or a share link
    #[arg(long, value_enum, conflicts_with = "json")]
    share: Option<ShareTarget>,

    /// Link included in share text
    #[arg(long, default_value = DEFAULT_SHARE_URL)]
    url: String,

    /// JSON file overriding model assumptions
    #[arg(long, value_name = "PATH")]
    assumptions: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ShareTarget {
    Text,
    Email,
    Sms,
    SmsIos,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "sleep_core=debug,sleep_cli=debug"
    } else {
        "sleep_core=warn,sleep_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    print!("{} [{}]: ", prompt, hint);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    parse_yes_no(&input, default)
}

/// Empty or unrecognized answers keep `default`.
fn parse_yes_no(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

fn fill_interactively(session: &mut CalculatorSession, args: &Args) {
    println!("Smart Sleep Score");
    println!("Calculate the ROI of investing in better sleep");
    println!();

    session.set_income(prompt_f64("Annual income ($)", args.income));

    println!();
    println!("Sleep issues affecting you:");
    for d in SLEEP_DISRUPTORS.iter() {
        let question = format!("  {} (+{}/yr)", d.label, format_currency(d.annual_cost));
        let selected = session.is_selected(d.id);
        if prompt_yes_no(&question, selected) != selected {
            session.toggle_disruptor(d.id);
        }
    }
    println!();

    session.set_caffeine(prompt_f64("Monthly caffeine spending ($, 0 = daily average)", args.caffeine));
    session.set_mattress_price(prompt_f64("Smart mattress price ($)", args.price));
    println!();
}

fn print_catalog() {
    println!("{:<22} {:>8}  {}", "ID", "COST/YR", "LABEL");
    for d in SLEEP_DISRUPTORS.iter() {
        println!("{:<22} {:>8}  {}", d.id, format_currency(d.annual_cost), d.label);
        println!("{:<22} {:>8}  {}", "", "", d.description);
    }
}

fn print_summary(results: &CalculatorResults) {
    println!("═══════════════════════════════════════");
    println!("  YOUR SMART SLEEP SCORE: {}/100  (Grade {})", results.sleep_score, results.score_grade);
    println!("═══════════════════════════════════════");
    println!("  {}", results.score_message);
    println!();
    println!("Key Metrics:");
    println!("  ROI:            {}", format_percent(results.roi));
    println!("  Break-even:     {}", format_break_even(results.break_even_months));
    println!("  10-Year Value:  {}", format_currency(results.ten_year_value));
    println!("  Yearly Savings: {}", format_currency(results.yearly_savings));
    println!();
    println!("Current Annual Sleep Costs:");
    println!("  Sleep Issues:          {}", format_currency(results.annual_sleep_cost));
    println!("  Caffeine/Stimulants:   {}", format_currency(results.annual_caffeine_cost));
    println!(
        "  Productivity Loss ({}): {}",
        format_percent(results.productivity_loss_percent),
        format_currency(results.annual_productivity_loss)
    );
    println!("  Total Annual Cost:     {}", format_currency(results.total_annual_cost));
}

fn run(args: &Args) -> Result<()> {
    if args.list_disruptors {
        print_catalog();
        return Ok(());
    }

    let assumptions = match &args.assumptions {
        Some(path) => Assumptions::load(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default(),
    };

    let mut session = CalculatorSession::new();
    session.set_income(args.income);
    session.set_caffeine(args.caffeine);
    session.set_mattress_price(args.price);
    for id in &args.disruptors {
        if !session.is_selected(id) {
            session.toggle_disruptor(id);
        }
    }

    if args.interactive {
        fill_interactively(&mut session, args);
    }

    let inputs = session.inputs().clone();
    tracing::debug!(?inputs, "calculating");

    let results = calculate_results_with(&inputs, &assumptions).map_err(|e| {
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        anyhow::Error::new(e)
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_summary(&results);
    }

    let pdf_path = match (&args.pdf, args.pdf_default) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(default_report_filename(
            chrono::Local::now().date_naive(),
        ))),
        (None, false) => None,
    };
    if let Some(path) = pdf_path {
        export_report_pdf(&inputs, &results, &path)
            .with_context(|| format!("exporting report to {}", path.display()))?;
        tracing::info!("PDF report saved to {}", path.display());
    }

    if let Some(target) = args.share {
        let output = match target {
            ShareTarget::Text => generate_share_text(&results, &args.url),
            ShareTarget::Email => email_link(&results, &args.url),
            ShareTarget::Sms => sms_link(&results, &args.url, SmsPlatform::Other),
            ShareTarget::SmsIos => sms_link(&results, &args.url, SmsPlatform::Ios),
        };
        println!();
        println!("{}", output);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
