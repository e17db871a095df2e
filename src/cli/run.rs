use super::Console;
use crate::{
    logging,
    prelude::{
        AppError, ContactManager, TxtStore,
        command::{Cli, Commands},
        domain::Command,
        manager::{Entry, Scan},
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const FOOTER: &str = "-------------------------";

pub fn run_app() -> Result<(), AppError> {
    // .env may carry AGENDA_FILE; load it before clap reads the environment.
    dotenv().ok();
    let cli = Cli::parse();

    logging::init_logging(cli.verbosity());
    info!(file = %cli.file.display(), "using agenda file");

    let mut manager = ContactManager::new(Box::new(TxtStore::new(&cli.file)));
    let mut console = Console::stdio();

    match cli.command {
        None => run_menu(&mut manager, &mut console),
        Some(Commands::Add { name, phone }) => insert_contact(&mut manager, &mut console, name, phone),
        Some(Commands::List) => list_contacts(&manager, &mut console),
        Some(Commands::Search { name }) => search_contacts(&manager, &mut console, &name),
    }
}

/// Runs the numeric menu until the user picks exit or input runs out.
/// Only console write failures escape; everything else is reported.
pub fn run_menu<R, W, E>(
    manager: &mut ContactManager,
    console: &mut Console<R, W, E>,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        let outcome = match console.parse_command_from_menu() {
            Ok(Command::InsertContact) => prompt_and_insert(manager, console),
            Ok(Command::ListContacts) => list_contacts(manager, console),
            Ok(Command::SearchContact) => match console.prompt("Enter the name to search: ") {
                Ok(name) => search_contacts(manager, console, &name),
                Err(e) => Err(e),
            },
            Ok(Command::Exit) => {
                console.say("Leaving the system...")?;
                return Ok(());
            }
            Err(AppError::ParseInt(e)) => {
                debug!(error = %e, "non-numeric menu input");
                console.complain("Error: please enter numbers only.")
            }
            Err(AppError::ParseCommand(choice)) => {
                debug!(choice = %choice, "unknown menu option");
                console.say("Invalid option!")
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => continue,
            Err(AppError::EndOfInput) => {
                debug!("console input closed");
                console.say("\nLeaving the system...")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn prompt_and_insert<R, W, E>(
    manager: &mut ContactManager,
    console: &mut Console<R, W, E>,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    console.say("Enter the details:")?;
    let name = console.prompt("Name: ")?;
    let phone = console.prompt("Fone: ")?;

    insert_contact(manager, console, name, phone)
}

pub fn insert_contact<R, W, E>(
    manager: &mut ContactManager,
    console: &mut Console<R, W, E>,
    name: String,
    phone: String,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match manager.insert(name, phone) {
        Ok(contact) => {
            info!(name = %contact.name, "record added");
            console.say("Record added successfully...")
        }
        Err(e) => console.complain(format!("Error inserting line into file: {e}")),
    }
}

pub fn list_contacts<R, W, E>(
    manager: &ContactManager,
    console: &mut Console<R, W, E>,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let scan = match manager.list() {
        Ok(scan) => scan,
        Err(e) => return console.complain(format!("Error: {e}")),
    };

    console.say("\n--- Contact List ---")?;
    print_entries(console, &scan)?;
    console.say(FOOTER)
}

pub fn search_contacts<R, W, E>(
    manager: &ContactManager,
    console: &mut Console<R, W, E>,
    name: &str,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let scan = match manager.search(name) {
        Ok(scan) => scan,
        Err(e) => return console.complain(format!("Error: {e}")),
    };

    console.say(format!("\n--- Search results for \"{name}\" ---"))?;
    print_entries(console, &scan)?;

    if !scan.has_records() {
        console.say("No contact found with this name.")?;
    }
    console.say(FOOTER)
}

fn print_entries<R, W, E>(console: &mut Console<R, W, E>, scan: &Scan) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for entry in &scan.entries {
        match entry {
            Entry::Record(contact) => console.say(contact)?,
            Entry::Malformed(line) => {
                console.complain(format!("[ERROR] {}", AppError::MalformedLine(line.clone())))?
            }
        }
    }
    Ok(())
}
