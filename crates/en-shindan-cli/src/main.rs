//! En-Shindan CLI - Personality diagnosis from the terminal
//!
//! Runs the diagnosis engine locally, or sends the form to an En-Shindan API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Select};

use api::ShindanClient;
use config::Config;
use en_shindan::{biorhythm, calendar, region, DiagnosisForm, DiagnosisProfile, Element};

#[derive(Parser)]
#[command(name = "en-shindan")]
#[command(about = "En-Shindan CLI - 縁診断 from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full diagnosis (prompts for anything not given as a flag)
    Diagnose(DiagnoseArgs),

    /// Show the biorhythm phase for a birth date
    Biorhythm {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// Reference date (defaults to today in the configured offset)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// List all prefectures with their element and area
    Regions,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args)]
struct DiagnoseArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: Option<String>,
    /// Given name in Roman letters
    #[arg(long)]
    first_name: Option<String>,
    /// Family name in Roman letters
    #[arg(long)]
    last_name: Option<String>,
    /// Birth prefecture (e.g., 東京都)
    #[arg(long)]
    birth_region: Option<String>,
    /// Current prefecture
    #[arg(long)]
    current_region: Option<String>,
    /// Four quiz answers, comma-separated (e.g., "木,火,木,水")
    #[arg(long, value_delimiter = ',')]
    answers: Vec<String>,
    /// Reference date for the biorhythm (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<String>,
    /// Print the raw JSON profile
    #[arg(long)]
    json: bool,
    /// Send the form to the configured server instead of computing locally
    #[arg(long)]
    remote: bool,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the API base URL
    SetUrl {
        /// Base URL (e.g., http://localhost:8080)
        url: String,
    },
    /// Set the reference clock offset in hours east of UTC
    SetOffset {
        #[arg(allow_negative_numbers = true)]
        hours: i32,
    },
}

const QUESTIONS: [&str; 4] = [
    "Q1 仕事の進め方 (workPattern)",
    "Q2 人との関わり方 (relationshipStyle)",
    "Q3 ストレスとの向き合い方 (stressHandling)",
    "Q4 理想の暮らし方 (lifestylePreference)",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diagnose(args) => cmd_diagnose(args).await,
        Commands::Biorhythm { birth_date, as_of } => cmd_biorhythm(&birth_date, as_of.as_deref()),
        Commands::Regions => cmd_regions(),
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Commands
// ============================================

async fn cmd_diagnose(args: DiagnoseArgs) -> Result<()> {
    let config = Config::load()?;

    if args.remote && args.as_of.is_some() {
        bail!("--as-of cannot be combined with --remote (the server uses its own clock)");
    }

    let answers = split_answers(&args.answers)?;
    let form = prompt_missing(form_from_args(&args, answers))?;

    let profile = if args.remote {
        let client = ShindanClient::new(&config.base_url);
        if !client.health().await.unwrap_or(false) {
            bail!("En-Shindan API is not reachable at {}", config.base_url);
        }
        client.diagnose(&form).await?
    } else {
        let reference = reference_for(args.as_of.as_deref(), config.utc_offset()?)?;
        en_shindan::diagnose(&form, reference)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }

    Ok(())
}

fn cmd_biorhythm(birth_date: &str, as_of: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let birth = calendar::parse_birth_date(birth_date)?;
    let reference = reference_for(as_of, config.utc_offset()?)?;

    let state = biorhythm::phase_at(birth, reference.date_naive());
    println!("{} ({})", state.phase.to_string().bold(), state.energy.cyan());
    println!(
        "  Day {} of {} in phase ({}%), day {} of the cycle",
        state.days_into_phase + 1,
        state.phase_duration,
        state.progress,
        state.day_in_cycle
    );

    Ok(())
}

fn cmd_regions() -> Result<()> {
    println!("{}", "Prefectures:".bold());
    for name in region::prefectures() {
        let area = region::area_of(name).map(|a| a.name()).unwrap_or("-");
        println!(
            "  {:<6} {} {}",
            name,
            region::element_of(name).symbol().cyan(),
            area.dimmed()
        );
    }
    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        Some(ConfigAction::SetOffset { hours }) => {
            config.set_utc_offset_hours(hours)?;
            config.save()?;
            println!("{} UTC offset set to {:+} hours", "✓".green(), hours);
        }
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
            println!("  UTC offset: {:+} hours", config.utc_offset_hours);
            println!("  Logic version: {}", en_shindan::LOGIC_VERSION);
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn split_answers(raw: &[String]) -> Result<Option<[String; 4]>> {
    match raw {
        [] => Ok(None),
        [a, b, c, d] => Ok(Some([
            a.trim().to_string(),
            b.trim().to_string(),
            c.trim().to_string(),
            d.trim().to_string(),
        ])),
        _ => bail!("--answers needs exactly 4 values, got {}", raw.len()),
    }
}

fn form_from_args(args: &DiagnoseArgs, answers: Option<[String; 4]>) -> DiagnosisForm {
    let [work_pattern, relationship_style, stress_handling, lifestyle_preference] =
        answers.map(|a| a.map(Some)).unwrap_or_default();

    DiagnosisForm {
        birth_date: args.birth_date.clone(),
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        birth_region: args.birth_region.clone(),
        current_region: args.current_region.clone(),
        work_pattern,
        relationship_style,
        stress_handling,
        lifestyle_preference,
    }
}

fn prompt_missing(mut form: DiagnosisForm) -> Result<DiagnosisForm> {
    if form.birth_date.is_none() {
        form.birth_date = Some(prompt_text("Birth date (YYYY-MM-DD)")?);
    }
    if form.first_name.is_none() {
        form.first_name = Some(prompt_text("First name (Roman letters)")?);
    }
    if form.last_name.is_none() {
        form.last_name = Some(prompt_text("Last name (Roman letters)")?);
    }
    if form.birth_region.is_none() {
        form.birth_region = Some(prompt_region("Birth prefecture")?);
    }
    if form.current_region.is_none() {
        form.current_region = Some(prompt_region("Current prefecture")?);
    }

    let slots = [
        &mut form.work_pattern,
        &mut form.relationship_style,
        &mut form.stress_handling,
        &mut form.lifestyle_preference,
    ];
    for (slot, question) in slots.into_iter().zip(QUESTIONS) {
        if slot.is_none() {
            *slot = Some(prompt_element(question)?);
        }
    }

    Ok(form)
}

fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .context("Failed to read input")
}

fn prompt_region(prompt: &str) -> Result<String> {
    let names: Vec<&str> = region::prefectures().collect();
    let tokyo = names.iter().position(|n| *n == "東京都").unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&names)
        .default(tokyo)
        .interact()
        .context("Failed to read selection")?;
    Ok(names[index].to_string())
}

fn prompt_element(prompt: &str) -> Result<String> {
    let labels: Vec<String> = Element::ALL
        .iter()
        .map(|e| format!("{} ({})", e.symbol(), e.folder()))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read selection")?;
    Ok(Element::ALL[index].symbol().to_string())
}

/// Reference time: midnight of `as_of` in `offset`, or now
fn reference_for(as_of: Option<&str>, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let Some(raw) = as_of else {
        return Ok(Utc::now().with_timezone(&offset));
    };

    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid --as-of date: {:?} (expected YYYY-MM-DD)", raw))?;

    date.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .context("Reference date is not representable in the configured offset")
}

fn print_profile(profile: &DiagnosisProfile) {
    let natural = &profile.natural_type;
    let name = &profile.name;
    let bio = &profile.biorhythm;
    let energy = &profile.region_energy;

    println!("{}", "縁診断".bold());
    println!(
        "  {} {} (position {})",
        "生まれ持った縁:".dimmed(),
        natural.natural_type.green().bold(),
        natural.position
    );
    println!(
        "  {} {} [結縁 {} / 深縁 {} / 広縁 {}]",
        "名前の縁:".dimmed(),
        name.bond_type.to_string().green(),
        name.scores.ketsuen,
        name.scores.shinen,
        name.scores.kouen
    );
    println!(
        "  {} {}",
        "引き寄せた縁:".dimmed(),
        profile.attraction.attraction_type.green()
    );
    println!(
        "  {} {} ({}) {}%, day {}/{}",
        "バイオリズム:".dimmed(),
        bio.phase.to_string().green(),
        bio.energy,
        bio.progress,
        bio.days_into_phase + 1,
        bio.phase_duration
    );
    println!(
        "  {} {} {} → {} {}",
        "地域エネルギー:".dimmed(),
        energy.birth.region,
        energy.birth.element.symbol().cyan(),
        energy.current.region,
        energy.current.element.symbol().cyan()
    );
    println!();
    println!("  Result page: {}", natural.result_path().dimmed());
    println!(
        "  {}",
        format!(
            "calculated at {} (v{})",
            profile.calculated_at.to_rfc3339(),
            profile.version
        )
        .dimmed()
    );
}
