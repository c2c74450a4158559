mod init;
pub use init::cmd_init;

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use regex::Regex;

/// Global override for the start of directory discovery (set by -C flag)
static DIR_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

use crate::catalog::{self, MONTHS};
use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::backend::FileBackend;
use crate::io::config_io::{self, ConfigError};
use crate::model::{PlanKind, PlannerConfig, ReadingEntry, id};
use crate::ops::progress::ProgressStore;
use crate::ops::search;
use crate::render::{render_entries, render_entry};
use crate::util::EthiopicDate;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    // Store -C override for open_store()
    if let Some(ref dir) = cli.dir {
        let abs = std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?;
        DIR_OVERRIDE.lock().unwrap().replace(abs);
    }

    match cli.command {
        None => unreachable!("handled in main"),
        Some(cmd) => match cmd {
            // Init is handled in main.rs before directory discovery
            Commands::Init(args) => cmd_init(args, None),

            // Catalog-only commands (no store needed)
            Commands::Months => cmd_months(json),
            Commands::Search(args) => cmd_search(args, json),
            Commands::Details(args) => cmd_details(args, json),

            // Store-backed commands
            Commands::List(args) => cmd_list(args, json),
            Commands::Show(args) => cmd_show(args, json),
            Commands::Toggle(args) => cmd_toggle(args, json),
            Commands::Note(args) => cmd_note(args, json),
            Commands::Progress => cmd_progress(json),
            Commands::Today => cmd_today(json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn open_store() -> Result<(PlannerConfig, ProgressStore<FileBackend>), ConfigError> {
    let start = match DIR_OVERRIDE.lock().unwrap().as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(ConfigError::IoError)?,
    };
    let dir = config_io::discover_dir(&start)?;
    let config = config_io::load_config(&dir)?;
    Ok((config, ProgressStore::load(FileBackend::new(dir))))
}

fn parse_plan_arg(name: &str) -> Result<PlanKind, String> {
    PlanKind::parse_name(name)
        .ok_or_else(|| format!("unknown plan '{}' (expected: calendar, chronological, nt90)", name))
}

/// Resolve an identifier to a catalog entry, or a uniform error.
fn resolve_entry(entry_id: &str) -> Result<ReadingEntry, String> {
    catalog::entry_by_id(entry_id).ok_or_else(|| format!("no such reading: {}", entry_id))
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_months(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let months: Vec<MonthJson> = MONTHS.iter().map(month_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&months)?);
    } else {
        for month in &MONTHS {
            println!(
                "{:<10} {} ({}) — {}: {}",
                month.slug, month.name, month.english, month.theme, month.reading
            );
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (config, store) = open_store()?;
    let plan = match args.plan.as_deref() {
        Some(name) => parse_plan_arg(name)?,
        None => PlanKind::parse_name(&config.planner.default_plan).unwrap_or(PlanKind::Calendar),
    };

    if args.month.is_some() && plan != PlanKind::Calendar {
        return Err("--month only applies to the calendar plan".into());
    }

    // (group heading, entries) sections
    let sections: Vec<(String, Vec<ReadingEntry>)> = match plan {
        PlanKind::Calendar => match args.month.as_deref() {
            Some(slug) => {
                let month = catalog::month_by_slug(slug)
                    .ok_or_else(|| format!("unknown month: {}", slug))?;
                vec![(
                    format!("{} ({})", month.name, month.english),
                    catalog::calendar_entries(slug),
                )]
            }
            None => MONTHS
                .iter()
                .map(|m| {
                    (
                        format!("{} ({})", m.name, m.english),
                        catalog::calendar_entries(m.slug),
                    )
                })
                .collect(),
        },
        PlanKind::Chronological => vec![(
            "Chronological (48 weeks)".to_string(),
            catalog::chronological_entries(),
        )],
        PlanKind::Nt90 => vec![(
            "New Testament in 90 Days".to_string(),
            catalog::nt90_entries(),
        )],
    };

    if json {
        let cards: Vec<CardJson> = sections
            .iter()
            .flat_map(|(_, entries)| render_entries(entries, &store))
            .map(|card| card_to_json(&card, store.note(&card.id)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&cards)?);
    } else {
        let mut first = true;
        for (heading, entries) in &sections {
            if !first {
                println!();
            }
            first = false;
            println!("{}", heading);
            for card in render_entries(entries, &store) {
                println!("  {}", format_card_line(&card));
            }
        }
    }
    Ok(())
}

fn cmd_show(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, store) = open_store()?;
    let entry = resolve_entry(&args.id)?;
    let card = render_entry(&entry, &store);
    let note = store.note(&args.id);

    if json {
        println!("{}", serde_json::to_string_pretty(&card_to_json(&card, note))?);
    } else {
        for line in format_card_detail(&card, note) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_toggle(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut store) = open_store()?;
    let entry = resolve_entry(&args.id)?;
    let completed = store.toggle(&args.id);

    if json {
        let card = render_entry(&entry, &store);
        let note = store.note(&args.id);
        println!("{}", serde_json::to_string_pretty(&card_to_json(&card, note))?);
    } else if completed {
        println!("{} marked complete", args.id);
    } else {
        println!("{} marked incomplete", args.id);
    }
    Ok(())
}

fn cmd_note(args: NoteArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, mut store) = open_store()?;
    let entry = resolve_entry(&args.id)?;

    match args.text {
        Some(text) => {
            store.set_note(&args.id, &text);
            if json {
                let card = render_entry(&entry, &store);
                let note = store.note(&args.id);
                println!("{}", serde_json::to_string_pretty(&card_to_json(&card, note))?);
            } else if store.note(&args.id).is_some() {
                println!("{} note updated", args.id);
            } else {
                println!("{} note cleared", args.id);
            }
        }
        None => match store.note(&args.id) {
            Some(note) => println!("{}", note),
            None => println!("(no note)"),
        },
    }
    Ok(())
}

fn cmd_details(args: IdArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Details are total over the catalog, but an unknown id is still an error
    resolve_entry(&args.id)?;
    let parsed = id::parse_id(&args.id);
    let detail = catalog::study_detail(parsed.plan, parsed.key);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&detail_to_json(&args.id, detail))?
        );
    } else {
        for line in format_study_detail(&args.id, detail) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_search(args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let re = Regex::new(&args.pattern)?;
    let plan_filter = args.plan.as_deref().map(parse_plan_arg).transpose()?;
    let hits = search::search_catalog(&re, plan_filter);

    if json {
        let out: Vec<SearchHitJson> = hits.iter().map(hit_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        // One line per entry, even when several fields matched
        let mut seen = HashSet::new();
        for hit in &hits {
            if seen.insert(hit.id.clone()) {
                println!("[{}] {:<14} {}", hit.plan, hit.id, hit.text);
            }
        }
    }
    Ok(())
}

fn cmd_progress(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, store) = open_store()?;

    let mut calendar = 0;
    let mut chronological = 0;
    let mut nt90 = 0;
    for entry_id in store.completed_ids() {
        match id::parse_id(entry_id).plan {
            PlanKind::Calendar => calendar += 1,
            PlanKind::Chronological => chronological += 1,
            PlanKind::Nt90 => nt90 += 1,
        }
    }

    if json {
        let out = ProgressJson {
            completed: store.completed_count(),
            total: crate::ops::progress::NOMINAL_TOTAL,
            percent: store.percent(),
            calendar,
            chronological,
            nt90,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "{}/{} readings complete ({}%)",
            store.completed_count(),
            crate::ops::progress::NOMINAL_TOTAL,
            store.percent()
        );
        println!("  calendar:      {}", calendar);
        println!("  chronological: {}", chronological);
        println!("  nt90:          {}", nt90);
    }
    Ok(())
}

fn cmd_today(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, store) = open_store()?;
    let today = EthiopicDate::today();
    let month = &MONTHS[today.month_index()];
    let entry_id = id::calendar_id(month.slug, today.day);

    match catalog::entry_by_id(&entry_id) {
        Some(entry) => {
            let card = render_entry(&entry, &store);
            let note = store.note(&entry_id);
            if json {
                println!("{}", serde_json::to_string_pretty(&card_to_json(&card, note))?);
            } else {
                println!("{} {}, {}", month.name, today.day, today.year);
                for line in format_card_detail(&card, note) {
                    println!("{}", line);
                }
            }
        }
        None => {
            // Pagume 6 in leap years has no scheduled reading
            if json {
                println!("null");
            } else {
                println!(
                    "{} {}, {} — no reading scheduled today",
                    month.name, today.day, today.year
                );
            }
        }
    }
    Ok(())
}
