use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fiat_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fiat")]
#[command(about = "33-day consecration companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Begin a new journey toward a feast
    Begin {
        /// Target feast id (see `fiat feasts`)
        #[arg(long)]
        feast: Option<String>,

        /// Explicit start date (YYYY-MM-DD); defaults to the next valid
        /// start date for the feast
        #[arg(long)]
        start_date: Option<String>,

        /// Discard the active journey and begin again
        #[arg(long)]
        restart: bool,

        /// Accept a start date whose day 34 does not fall on the feast
        #[arg(long)]
        force: bool,
    },

    /// Show today's content and prayers (default)
    Today {
        /// Language mode (latin, english, latin-english, english-latin)
        #[arg(long)]
        mode: Option<String>,
    },

    /// Mark a day complete
    Complete {
        /// Day number; defaults to the current day
        #[arg(long)]
        day: Option<u32>,
    },

    /// Show journey progress
    Status,

    /// List feasts with their next start dates
    Feasts,

    /// Write or read the reflection for a day
    Journal {
        /// Day number (1-34)
        day: u32,

        /// Reflection text; omit to print the stored entry
        text: Option<String>,
    },

    /// Export the journal to CSV
    Export {
        /// Output file; defaults to journal.csv in the data directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fiat_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Begin {
            feast,
            start_date,
            restart,
            force,
        }) => cmd_begin(data_dir, feast, start_date, restart, force, &config),
        Some(Commands::Today { mode }) => cmd_today(data_dir, mode, &config),
        Some(Commands::Complete { day }) => cmd_complete(data_dir, day),
        Some(Commands::Status) => cmd_status(data_dir),
        Some(Commands::Feasts) => cmd_feasts(),
        Some(Commands::Journal { day, text }) => cmd_journal(data_dir, day, text),
        Some(Commands::Export { out }) => cmd_export(data_dir, out),
        None => cmd_today(data_dir, None, &config),
    }
}

fn store_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("journeys.json")
}

fn journal_path(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("journal.jsonl")
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| Error::Other(format!("Invalid date '{}': {}", s, e)))
}

fn parse_mode(s: &str) -> Option<LanguageMode> {
    match s.to_lowercase().as_str() {
        "latin" => Some(LanguageMode::Latin),
        "english" => Some(LanguageMode::English),
        "latin-english" | "both" => Some(LanguageMode::LatinEnglish),
        "english-latin" => Some(LanguageMode::EnglishLatin),
        _ => {
            eprintln!("Unknown language mode: {}. Using configured default.", s);
            None
        }
    }
}

fn cmd_begin(
    data_dir: PathBuf,
    feast: Option<String>,
    start_date: Option<String>,
    restart: bool,
    force: bool,
    config: &Config,
) -> Result<()> {
    let feast_id = feast.unwrap_or_else(|| config.program.feast.clone());
    let feast = feast_by_id(&feast_id)
        .ok_or_else(|| Error::Other(format!("Unknown feast '{}'; see `fiat feasts`", feast_id)))?;

    let now = Utc::now();
    let today = calendar::start_of_day(now);

    let start = match start_date {
        Some(ref s) => {
            let date = parse_date(s)?;
            if !feast.is_valid_start_date(date) {
                if !force {
                    return Err(Error::Other(format!(
                        "{} is not aligned with {}: day 34 would not fall on the feast. \
                         Pass --force to use it anyway.",
                        date, feast.name
                    )));
                }
                eprintln!(
                    "Note: {} is not aligned with {}; day 34 will not fall on the feast.",
                    date, feast.name
                );
            }
            date
        }
        None => feast.next_start_date(today),
    };

    let path = store_path(&data_dir);
    let mut store = JourneyStore::load(&path)?;

    if store.active().is_some() {
        if !restart {
            return Err(Error::State(
                "A journey is already in progress. Pass --restart to discard it.".into(),
            ));
        }
        if let Some(discarded) = store.discard_active() {
            println!("Discarded journey begun {}.", discarded.start_date);
        }
    }

    let journey = Journey::new(start, now);
    store.push(journey);
    store.save(&path)?;

    let target = start + chrono::Duration::days(START_OFFSET_DAYS);
    println!("✓ Journey begun!");
    println!("  Feast:      {} ({})", feast.name, target);
    println!("  Start date: {}", start);
    if start > today {
        println!("  The program begins on {}.", start);
    }

    Ok(())
}

fn cmd_today(data_dir: PathBuf, mode: Option<String>, config: &Config) -> Result<()> {
    let store = JourneyStore::load(&store_path(&data_dir))?;
    let Some(journey) = store.active() else {
        println!("No journey in progress. Run `fiat begin` to start one.");
        return Ok(());
    };

    let today = calendar::start_of_day(Utc::now());
    if !journey.has_started(today) {
        println!("Your journey begins on {}.", journey.start_date);
        return Ok(());
    }

    let mode = mode
        .as_deref()
        .and_then(parse_mode)
        .unwrap_or(config.display.language_mode);

    let program = get_default_program();
    let errors = program.validate();
    if !errors.is_empty() {
        eprintln!("Program content errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::ContentValidation("Invalid program content".into()));
    }

    let day = journey.current_day(today);
    let view = day_view(program, day)
        .ok_or_else(|| Error::Other(format!("No content for day {}", day)))?;

    display_day(&view, journey, today);

    println!("  Prayers for {}:", view.phase.name());
    println!();
    for prayer in program.prayers_for(view.phase) {
        println!("  ── {} ──", prayer.name);
        let rendered = formatted(&prayer.text, mode)?;
        for line in rendered.lines() {
            println!("  {}", line);
        }
        println!();
    }

    Ok(())
}

fn cmd_complete(data_dir: PathBuf, day: Option<u32>) -> Result<()> {
    let path = store_path(&data_dir);
    let mut store = JourneyStore::load(&path)?;
    let Some(journey) = store.active_mut() else {
        println!("No journey in progress. Run `fiat begin` to start one.");
        return Ok(());
    };

    let now = Utc::now();
    let today = calendar::start_of_day(now);
    let day = day.unwrap_or_else(|| journey.current_day(today));

    if !journey.can_access(day, today) {
        return Err(Error::State(format!(
            "Day {} is not yet accessible (today is day {}).",
            day,
            journey.current_day(today)
        )));
    }

    let newly = journey.complete_day(day, now)?;
    let finished = journey.is_completed;
    let remaining = journey.days_remaining();

    // Mutation only becomes durable here; a failed save leaves the file as
    // it was and the caller may retry.
    store.save(&path)?;

    if newly {
        println!("✓ Day {} complete!", day);
    } else {
        println!("Day {} was already complete.", day);
    }

    if finished {
        println!();
        println!("  Totus tuus — the consecration is complete.");
    } else {
        println!("  {} days remaining.", remaining);
    }

    Ok(())
}

fn cmd_status(data_dir: PathBuf) -> Result<()> {
    let store = JourneyStore::load(&store_path(&data_dir))?;
    let Some(journey) = store.active() else {
        match store.journeys.iter().filter(|j| j.is_completed).count() {
            0 => println!("No journey in progress. Run `fiat begin` to start one."),
            n => println!("No journey in progress ({} completed). Run `fiat begin` to start another.", n),
        }
        return Ok(());
    };

    let today = calendar::start_of_day(Utc::now());
    let day = journey.current_day(today);
    let completed = journey.completed_days.len();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  JOURNEY STATUS");
    println!("╰─────────────────────────────────────────╯");
    println!();

    if !journey.has_started(today) {
        println!("  Begins on {}.", journey.start_date);
        println!();
        return Ok(());
    }

    if let Some(phase) = Phase::for_day(day) {
        println!("  Day {} of {} — {}", day, PROGRAM_DAYS, phase.name());
        println!("  {}", phase.subtitle());
    }
    println!();
    println!(
        "  Completed: {}/{} ({:.0}%)",
        completed,
        PROGRAM_DAYS,
        journey.progress() * 100.0
    );
    println!("  Remaining: {}", journey.days_remaining());

    match journey.next_incomplete_day(today) {
        Some(next) if next < day => {
            println!("  Behind schedule: day {} still awaits you.", next);
        }
        Some(next) => {
            println!("  Next up: day {}.", next);
        }
        None => {
            println!("  All caught up.");
        }
    }
    println!();

    Ok(())
}

fn cmd_feasts() -> Result<()> {
    let today = calendar::start_of_day(Utc::now());

    println!("\n  {:<24} {:<12} {:<12}", "FEAST", "NEXT", "START BY");
    println!("  {:─<24} {:─<12} {:─<12}", "", "", "");
    for feast in FEASTS {
        let next = feast.next_occurrence(today);
        let start = feast.next_start_date(today);
        println!("  {:<24} {:<12} {:<12}", feast.name, next.to_string(), start.to_string());
        println!("    id: {} — {}", feast.id, feast.description);
    }
    println!();

    Ok(())
}

fn cmd_journal(data_dir: PathBuf, day: u32, text: Option<String>) -> Result<()> {
    if !(1..=PROGRAM_DAYS).contains(&day) {
        return Err(Error::DayOutOfRange {
            day,
            max: PROGRAM_DAYS,
        });
    }

    let path = journal_path(&data_dir);

    match text {
        Some(text) => {
            let entry = JournalEntry {
                day,
                text,
                updated_at: Utc::now(),
            };
            let mut journal = JsonlJournal::new(&path);
            journal.append(&entry)?;
            println!("✓ Reflection saved for day {}.", day);
        }
        None => match fiat_core::journal::entry_for_day(&path, day)? {
            Some(entry) => {
                let label = ordinal_label(day).unwrap_or_default();
                println!("\n  {} Day — {}", label, entry.updated_at.date_naive());
                println!("  {}", entry.text);
                println!();
            }
            None => println!("No reflection recorded for day {}.", day),
        },
    }

    Ok(())
}

fn cmd_export(data_dir: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let csv_path = out.unwrap_or_else(|| data_dir.join("journal.csv"));
    let count = journal_to_csv(&journal_path(&data_dir), &csv_path)?;

    if count == 0 {
        println!("No journal entries to export.");
    } else {
        println!("✓ Exported {} entries to {}", count, csv_path.display());
    }

    Ok(())
}

fn display_day(view: &DayView, journey: &Journey, today: NaiveDate) {
    let day = view.content.day;
    let label = ordinal_label(day).unwrap_or_default();

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {} DAY — {}", label.to_uppercase(), view.phase.name().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", view.content.title);
    println!(
        "  {} · day {} of {} in this phase",
        view.phase.subtitle(),
        view.position_in_phase,
        view.phase.day_count()
    );
    println!();

    println!("  {}", view.content.meditation);
    if let Some(ref source) = view.content.meditation_source {
        println!("    — {}", source);
    }
    println!();
    println!("  Reflect: {}", view.content.reflection);
    println!();
    println!(
        "  Progress: day {}/{} · {} of {} days completed",
        day,
        PROGRAM_DAYS,
        journey.completed_days.len(),
        PROGRAM_DAYS
    );
    if !journey.completed_days.contains(&journey.current_day(today)) {
        println!("  (run `fiat complete` when today's exercises are done)");
    }
    println!();
}
