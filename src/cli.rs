// src/cli.rs
use std::{env, error::Error, fs, path::PathBuf};

use crate::config::options::{ExportFormat, ExportOptions, ScanOptions};
use crate::data::{display_total, format_rp, ResultSet, SortKey};
use crate::file;
use crate::markdown;
use crate::progress::Progress;
use crate::scrape;
use crate::store::{self, HistoryEntry, HistoryStore, JsonHistoryStore};

pub struct Params {
    pub input: Option<PathBuf>,      // saved order page
    pub scan: ScanOptions,
    pub export: ExportOptions,
    pub do_export: bool,
    pub sort: Option<SortKey>,
    pub desc: bool,
    pub filter: String,
    pub total_only: bool,
    pub raw: bool,
    pub no_discount: bool,           // overrides the persisted setting
    pub save: bool,
    pub list_history: bool,
    pub load: Option<usize>,
    pub delete: Option<usize>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: None,
            scan: ScanOptions::default(),
            export: ExportOptions::default(),
            do_export: false,
            sort: None,
            desc: false,
            filter: s!(),
            total_only: false,
            raw: false,
            no_discount: false,
            save: false,
            list_history: false,
            load: None,
            delete: None,
        }
    }
}

/// Prints scan progress to stderr so stdout stays machine-readable.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    // Persisted discount preference is the default; the flag wins.
    let settings = store::load_settings();
    params.scan.use_discount = settings.use_discount && !params.no_discount;

    let mut history = JsonHistoryStore::default_location();

    if params.list_history {
        return list_history(&history);
    }
    if let Some(ix) = params.delete {
        history.delete_at(ix.checked_sub(1).ok_or("History entries are numbered from 1")?)?;
        println!("Deleted history entry {ix}");
        return Ok(());
    }

    // Results either come from a history entry or from parsing a page.
    let results = if let Some(ix) = params.load {
        let entries = history.list()?;
        let entry = entries
            .get(ix.checked_sub(1).ok_or("History entries are numbered from 1")?)
            .ok_or_else(|| format!("No history entry {ix}"))?;
        entry.results.clone()
    } else {
        let input = params.input.as_ref().ok_or("Missing input page (see --help)")?;
        let html = fs::read_to_string(input)
            .map_err(|e| format!("Cannot read {}: {e}", input.display()))?;
        let mut progress = ConsoleProgress;
        scrape::collect_orders(&html, &params.scan, Some(&mut progress))?
    };

    if results.is_empty() {
        println!("No matching elements found.");
        return Ok(());
    }

    if params.total_only {
        println!("{}", format_rp(results.grand_total()));
    } else {
        print_table(&results, &params);
        println!("\nGrand Total: {}", format_rp(results.grand_total()));
    }

    if params.raw {
        println!("\n{}", markdown::to_raw_string(&results));
    }

    if params.save {
        history.append(HistoryEntry::snapshot(&results))?;
        println!("Saved to history ({})", history.path().display());
    }

    if params.do_export {
        let path = file::write_export(&params.export, &results)?;
        println!("Exported {}", path.display());
    }

    Ok(())
}

fn print_table(results: &ResultSet, params: &Params) {
    let ix = results.view_indices(&params.filter, params.sort, params.desc);
    let records = results.records();

    let shop_w = ix
        .iter()
        .map(|&i| records[i].shop_name.chars().count())
        .chain(["Shop Name".len()])
        .max()
        .unwrap_or(0);
    let item_w = ix
        .iter()
        .map(|&i| records[i].item_name.chars().count())
        .chain(["Item Name".len()])
        .max()
        .unwrap_or(0);

    println!("{:<4} {:<shop_w$} {:<item_w$} {}", "No", "Shop Name", "Item Name", "Total Order");
    for &i in &ix {
        let r = &records[i];
        println!(
            "{:<4} {:<shop_w$} {:<item_w$} {}",
            i + 1,
            r.shop_name,
            r.item_name,
            display_total(r.total_order),
        );
    }
}

fn list_history(history: &JsonHistoryStore) -> Result<(), Box<dyn Error>> {
    let entries = history.list()?;
    if entries.is_empty() {
        println!("History is empty.");
        return Ok(());
    }
    for (i, entry) in entries.iter().enumerate() {
        let when = entry.timestamp.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M");
        println!(
            "{:>2}. {} — {} item(s) — {}",
            i + 1,
            when,
            entry.results.len(),
            format_rp(entry.total_amount),
        );
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                params.input = Some(PathBuf::from(file::normalize_separators(&v)));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.export.format = match v.to_ascii_lowercase().as_str() {
                    "md" | "markdown" => ExportFormat::Markdown,
                    "csv" => ExportFormat::Csv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory")?;
                params.export.set_dir(&file::normalize_separators(&v));
            }
            "--export" => params.do_export = true,
            "--total" => params.total_only = true,
            "--raw" => params.raw = true,
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sort = Some(match v.to_ascii_lowercase().as_str() {
                    "scan" => SortKey::Scan,
                    "shop" => SortKey::Shop,
                    "item" => SortKey::Item,
                    "price" => SortKey::Price,
                    other => return Err(format!("Unknown sort key: {}", other).into()),
                });}
            "--desc" => params.desc = true,
            "--filter" => params.filter = args.next().ok_or("Missing value for --filter")?,
            "--no-discount" => params.no_discount = true,
            "--lookahead" => {
                let v: usize = args.next().ok_or("Missing value for --lookahead")?.parse()?;
                params.scan.lookahead = v;
            }
            "--save" => params.save = true,
            "--history" => params.list_history = true,
            "--load" => params.load = Some(args.next().ok_or("Missing entry number for --load")?.parse()?),
            "--delete" => params.delete = Some(args.next().ok_or("Missing entry number for --delete")?.parse()?),
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other if !other.starts_with('-') && params.input.is_none() => {
                params.input = Some(PathBuf::from(file::normalize_separators(other)));
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
