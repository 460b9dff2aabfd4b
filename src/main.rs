//! Macro diario
//!
//! A small terminal front end over the diary core: load the food table once,
//! then take search/add/manual/clear commands on stdin and print running
//! totals. Stands in for whichever presentation layer embeds the library.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveTime};
use tracing_subscriber::EnvFilter;

use macrodiario::{build_info, Macros, Session, TableCache, TableSpec};

/// Get the table path from the environment or the first positional argument
fn get_table_path() -> Option<PathBuf> {
    std::env::var("MACRODIARIO_TABLE")
        .map(PathBuf::from)
        .ok()
        .or_else(|| std::env::args().nth(1).map(PathBuf::from))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr so stdout stays clean for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrodiario=info".parse()?))
        .with_writer(io::stderr)
        .init();

    build_info::print_startup_banner();

    let table_path = match get_table_path() {
        Some(p) => p,
        None => {
            eprintln!("Usage: macrodiario <table.csv>  (or set MACRODIARIO_TABLE)");
            std::process::exit(2);
        }
    };

    // Semicolon sources exist in the wild; pick the delimiter from the header line
    let spec = sniff_spec(&table_path)?;

    let mut cache = TableCache::new();
    let table = cache.load_path(&table_path, &spec)?;
    eprintln!("Loaded {} foods from {}", table.len(), table_path.display());

    let mut session = Session::new(table);
    let stdin = io::stdin();
    print_prompt();

    for line in stdin.lock().lines() {
        let line = line?;
        if !run_command(&mut session, line.trim()) {
            break;
        }
        print_prompt();
    }

    Ok(())
}

fn print_prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

/// Choose ';' when the header line contains more semicolons than commas
fn sniff_spec(path: &PathBuf) -> Result<TableSpec, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let header = raw.lines().next().unwrap_or("");
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    let delimiter = if semicolons > commas { ';' } else { ',' };
    Ok(TableSpec { delimiter, ..TableSpec::default() })
}

/// Handle one command line; returns false to quit
fn run_command(session: &mut Session, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "search" => {
            let hits = session.search(rest);
            if hits.is_empty() {
                println!("(no matches)");
            }
            for record in hits {
                println!(
                    "{} | {:.0} kcal | C {:.1} g | P {:.1} g | G {:.1} g (per 100 g)",
                    record.name,
                    record.per_100g.kcal,
                    record.per_100g.carb,
                    record.per_100g.prot,
                    record.per_100g.gord
                );
            }
        }
        "add" => match parse_add(rest) {
            Some((grams, name)) => {
                match session.add_weighed(name, grams, now_hhmm()) {
                    Ok(entry) => println!("logged {} ({:.0} g): {:.0} kcal", entry.food_name, grams, entry.macros.kcal),
                    Err(e) => println!("error: {}", e),
                }
            }
            None => println!("usage: add <grams> <food name>"),
        },
        "manual" => match parse_manual(rest) {
            Some((macros, name)) => {
                let entry = session.add_manual(name, macros, now_hhmm());
                println!("logged {}: {:.0} kcal", entry.food_name, entry.macros.kcal);
            }
            None => println!("usage: manual <kcal> <carb> <prot> <gord> <food name>"),
        },
        "totals" => print_totals(&session.totals()),
        "list" => {
            if session.entries().is_empty() {
                println!("(diary is empty)");
            }
            for entry in session.entries() {
                let qty = entry
                    .quantity_grams
                    .map(|g| format!("{:.0} g", g))
                    .unwrap_or_else(|| "manual".to_string());
                println!(
                    "{} {} ({}) - {:.0} kcal | C {:.1} | P {:.1} | G {:.1}",
                    entry.time, entry.food_name, qty, entry.macros.kcal,
                    entry.macros.carb, entry.macros.prot, entry.macros.gord
                );
            }
        }
        "export" => match serde_json::to_string_pretty(session.entries()) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("error: {}", e),
        },
        "clear" => {
            session.clear();
            println!("diary cleared");
        }
        _ => println!("commands: search add manual totals list export clear quit"),
    }
    true
}

fn parse_add(rest: &str) -> Option<(f64, &str)> {
    let (grams, name) = rest.split_once(' ')?;
    let grams: f64 = grams.parse().ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((grams, name))
}

fn parse_manual(rest: &str) -> Option<(Macros, &str)> {
    let mut parts = rest.splitn(5, ' ');
    let kcal: f64 = parts.next()?.parse().ok()?;
    let carb: f64 = parts.next()?.parse().ok()?;
    let prot: f64 = parts.next()?.parse().ok()?;
    let gord: f64 = parts.next()?.parse().ok()?;
    let name = parts.next()?.trim();
    if name.is_empty() {
        return None;
    }
    Some((Macros::new(kcal, carb, prot, gord), name))
}

fn now_hhmm() -> NaiveTime {
    Local::now().time()
}

/// Kcal rounds to whole numbers, gram fields to one decimal, like the app's
/// metric tiles; rounding happens only here, never in stored values
fn print_totals(totals: &Macros) {
    println!(
        "Total: {:.0} kcal | Carb {:.1} g | Prot {:.1} g | Gord {:.1} g",
        totals.kcal, totals.carb, totals.prot, totals.gord
    );
}
