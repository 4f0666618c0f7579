//! Jotter command-line front-end.
//!
//! # Responsibility
//! - Render the list and detail screens as terminal output.
//! - Own the presentation concerns the store refuses: delete confirmation,
//!   navigation-path handling, empty states.

use clap::{Parser, Subcommand};
use jotter_core::{
    default_log_level, init_logging, FileStorage, Note, NoteId, NoteStore, ViewState,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "jotter",
    version = jotter_core::core_version(),
    about = "Local single-user note store"
)]
struct Cli {
    /// Data directory holding the note blob and logs.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a note.
    Add { title: String, content: String },
    /// List notes, newest first, optionally filtered by a search term.
    List {
        /// Case-insensitive substring matched against title and content.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Show one note by id.
    Show { id: NoteId },
    /// Replace a note's title and content.
    Edit {
        id: NoteId,
        title: String,
        content: String,
    },
    /// Delete a note by id.
    Rm {
        id: NoteId,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Resolve a navigation path (`/notes` or `/notes/{id}`) and render it.
    Open { path: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = match cli.data_dir.clone().or_else(default_data_dir) {
        Some(dir) => dir,
        None => {
            eprintln!("error: no data directory available; pass --data-dir");
            return ExitCode::FAILURE;
        }
    };

    // Logging failure degrades to a silent session, never a refusal to run.
    if let Err(err) = init_logging(default_log_level(), &data_dir.join("logs")) {
        eprintln!("warning: logging disabled: {err}");
    }

    let storage = match FileStorage::create(&data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!(
                "error: cannot open data directory `{}`: {err}",
                data_dir.display()
            );
            return ExitCode::FAILURE;
        }
    };
    info!(
        "event=cli_open module=cli status=ok slot={}",
        storage.path().display()
    );
    let mut store = NoteStore::open(Box::new(storage));

    match run(&cli.command, &mut store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command, store: &mut NoteStore) -> Result<(), String> {
    match command {
        Command::Add { title, content } => {
            let note = store
                .create(title, content)
                .map_err(|err| err.to_string())?;
            info!("event=cli_add module=cli status=ok id={}", note.id);
            println!("created {}", note.id);
            Ok(())
        }
        Command::List { search } => {
            render_list(store, search);
            Ok(())
        }
        Command::Show { id } => {
            match store.find(*id) {
                Some(note) => render_detail(note),
                None => render_not_found(),
            }
            Ok(())
        }
        Command::Edit { id, title, content } => {
            let current = store
                .find(*id)
                .cloned()
                .ok_or_else(|| format!("note not found: {id}"))?;
            let edited = Note {
                title: title.clone(),
                content: content.clone(),
                ..current
            };
            let updated = store.update(edited).map_err(|err| err.to_string())?;
            println!("updated {}", updated.id);
            Ok(())
        }
        Command::Rm { id, yes } => {
            let Some(note) = store.find(*id).cloned() else {
                println!("nothing to delete: {id}");
                return Ok(());
            };
            if !*yes && !confirm(&format!("delete \"{}\"? [y/N] ", note.title))? {
                println!("aborted");
                return Ok(());
            }
            store.remove(*id);
            println!("deleted {id}");
            Ok(())
        }
        Command::Open { path } => {
            match ViewState::resolve(path, store) {
                ViewState::List => render_list(store, ""),
                ViewState::Detail(id) => {
                    // resolve guarantees the id exists; re-check instead of unwrap.
                    if let Some(note) = store.find(id) {
                        render_detail(note);
                    }
                }
                ViewState::NotFound => render_not_found(),
            }
            Ok(())
        }
    }
}

fn render_list(store: &NoteStore, search: &str) {
    let notes = store.list(search);
    if notes.is_empty() {
        if search.trim().is_empty() {
            println!("No notes yet.");
        } else {
            println!("No notes match \"{}\".", search.trim());
        }
        return;
    }

    println!("{} note(s)", notes.len());
    for note in &notes {
        println!(
            "{}  {}  {}",
            note.id,
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.title
        );
    }
}

fn render_detail(note: &Note) {
    println!("{}", note.title);
    println!("created {}", note.created_at.to_rfc3339());
    println!();
    println!("{}", note.content);
}

fn render_not_found() {
    println!("Note not found. It doesn't exist or has been deleted.");
}

fn confirm(prompt: &str) -> Result<bool, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|err| err.to_string())?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| err.to_string())?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("jotter"))
}
