// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `tzline`: what time is it for the people you work with?
//!
//! | Command | Effect |
//! |---------|--------|
//! | `show` | every person's converted time and a coloured timeline slice |
//! | `convert` | one conversion between two zones |
//! | `add` / `rename` / `move` / `role` / `remove` / `clear` | edit the board |
//! | `list` | the board as stored |
//! | `zones` | the selectable timezones with their current GMT offsets |

mod render;
mod store;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use render::{render_heading, render_marker, render_timeline, RenderOptions};
use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use store::BoardFile;
use tzline::{convert, now, Action, Board, HourFormat, Palette, SunWindow};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// tzline CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Compare local times across timezones",
    after_help = "The board is stored as JSON in the platform config directory unless --board is given"
)]
pub struct Cli {
    /// Path to the board file
    #[arg(long, global = true)]
    pub board: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show everyone's time for a reference date and time
    Show(ShowArgs),
    /// Convert one date and time between two zones
    Convert {
        /// Source IANA zone
        #[arg(long)]
        from: String,
        /// Target IANA zone
        #[arg(long)]
        to: String,
        /// "H:MM" or "H:MM AM/PM"
        #[arg(long)]
        at: String,
        /// "Month D, YYYY"
        #[arg(long)]
        date: String,
        /// 24-hour output
        #[arg(long)]
        military: bool,
    },
    /// Add a person
    Add {
        name: String,
        timezone: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// Rename a person
    Rename { id: u64, name: String },
    /// Move a person to another timezone
    Move { id: u64, timezone: String },
    /// Set or clear a person's role
    Role { id: u64, role: Option<String> },
    /// Remove a person
    Remove { id: u64 },
    /// Remove everyone
    Clear,
    /// List the board
    List,
    /// List selectable timezones
    Zones {
        /// Only zones whose label contains this text
        filter: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Reference time, "H:MM" or "H:MM AM/PM" (default: now)
    #[arg(long)]
    pub at: Option<String>,

    /// Reference date, "Month D, YYYY" (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Zone the reference time is read in
    #[arg(long, env = "TZLINE_LOCAL_TZ", default_value = "America/New_York")]
    pub local_tz: String,

    /// 24-hour times and labels
    #[arg(long)]
    pub military: bool,

    /// Sunrise, "H:MM" (default 6:00)
    #[arg(long)]
    pub sunrise: Option<String>,

    /// Sunset, "H:MM" (default 18:00)
    #[arg(long)]
    pub sunset: Option<String>,

    /// Cells visible per timeline
    #[arg(long, default_value_t = 9)]
    pub cells: usize,

    /// Columns per cell
    #[arg(long, default_value_t = 6)]
    pub width: usize,

    /// Plain text output
    #[arg(long)]
    pub no_color: bool,
}

fn main() {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config_log = ConfigBuilder::new().add_filter_allow_str("tzline").build();
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error setting up logging: {error}");
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> CliResult<()> {
    let file = match &args.board {
        Some(path) => BoardFile::at(path),
        None => BoardFile::default_location()?,
    };
    debug!("Board file = {:?}", file.path());

    match args.command {
        Command::Show(show_args) => show(&file.load()?, &show_args),
        Command::Convert {
            from,
            to,
            at,
            date,
            military,
        } => {
            let result = convert(&from, &at, &date, &to, military)?;
            println!("{}  {}", result.time, result.date);
            Ok(())
        }
        Command::Add {
            name,
            timezone,
            role,
        } => edit(
            &file,
            Action::Add {
                name,
                timezone,
                role,
            },
        ),
        Command::Rename { id, name } => edit(&file, Action::Rename { id, name }),
        Command::Move { id, timezone } => edit(&file, Action::SetTimezone { id, timezone }),
        Command::Role { id, role } => edit(&file, Action::SetRole { id, role }),
        Command::Remove { id } => edit(&file, Action::Remove { id }),
        Command::Clear => edit(&file, Action::Clear),
        Command::List => {
            for person in file.load()?.people() {
                let role = person.role.as_deref().unwrap_or("");
                println!("{:>4}  {:<24} {:<32} {role}", person.id, person.name, person.timezone);
            }
            Ok(())
        }
        Command::Zones { filter } => {
            let needle = filter.map(|f| f.to_lowercase());
            for zone in tzline::catalogue(Utc::now()) {
                if needle
                    .as_deref()
                    .map_or(true, |n| zone.value.to_lowercase().contains(n))
                {
                    println!("{}", zone.value);
                }
            }
            Ok(())
        }
    }
}

/// Apply one action and persist the result.
fn edit(file: &BoardFile, action: Action) -> CliResult<()> {
    let mut board = file.load()?;
    let store = file.clone();
    let failed = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&failed);
    board.subscribe(move |people| {
        if let Err(error) = store.save(people) {
            *slot.borrow_mut() = Some(error);
        }
    });

    let touched = board.dispatch(action)?;
    if let Some(error) = failed.borrow_mut().take() {
        return Err(error.into());
    }
    match touched.and_then(|id| board.get(id)) {
        Some(person) => println!("{}  {}  {}", person.id, person.name, person.timezone),
        None => println!("{} people", board.people().len()),
    }
    Ok(())
}

fn show(board: &Board, args: &ShowArgs) -> CliResult<()> {
    let current = match (&args.at, &args.date) {
        (Some(_), Some(_)) => None,
        _ => Some(now::current_in_zone(&args.local_tz)?),
    };
    let time = args
        .at
        .clone()
        .or_else(|| current.as_ref().map(|c| c.time.clone()))
        .unwrap_or_default();
    let date = args
        .date
        .clone()
        .or_else(|| current.as_ref().map(|c| c.date.clone()))
        .unwrap_or_default();
    info!("Reference {date} {time} in {}", args.local_tz);

    let format = if args.military {
        HourFormat::Military
    } else {
        HourFormat::Normal
    };
    let sun = SunWindow::from_optional(args.sunrise.as_deref(), args.sunset.as_deref())?;
    let options = RenderOptions {
        visible_cells: args.cells,
        cell_width: args.width,
        color: !args.no_color,
    };
    let palette = Palette::default();

    if board.people().is_empty() {
        println!("The board is empty; add someone with `tzline add NAME ZONE`.");
        return Ok(());
    }

    println!("{date} {time} ({})", args.local_tz);
    for row in board.compare(&args.local_tz, &time, &date, format, sun)? {
        let (cells, notes) = render_timeline(&row.timeline, &options, &palette);
        println!();
        println!("{}", render_heading(&row));
        println!("{cells}");
        println!("{}", render_marker(&options));
        if !notes.is_empty() {
            println!("{notes}");
        }
    }
    Ok(())
}
