//! CLI command handling.

use std::fs;
use std::io::Read;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::cli::args::{Args, Commands};
use crate::settings::{self, Settings};
use crate::state::{ConnectionFacts, ConnectionStatus};
use crate::vpn::{self, ProtocolSelection, TransmissionKind, VpnProtocolKind};

/// Dispatches the parsed arguments to the matching command.
///
/// # Errors
///
/// Returns an error if the command fails (unreadable snapshot,
/// settings I/O failure).
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Status { facts, json } => run_status(&facts, json),
        Commands::Protocol {
            protocol,
            transmission,
            save,
        } => run_protocol(protocol, transmission, save),
        Commands::Preference => run_preference(),
    }
}

/// Reads a facts snapshot, classifies it and prints the status.
fn run_status(source: &str, json: bool) -> Result<()> {
    let content = read_facts(source)?;
    let facts: ConnectionFacts = serde_json::from_str(&content)
        .wrap_err_with(|| format!("invalid facts snapshot: {source}"))?;
    let status = vpn::resolve(&facts);

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status);
    }
    Ok(())
}

fn read_facts(source: &str) -> Result<String> {
    if source == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .wrap_err("failed to read facts from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(source).wrap_err_with(|| format!("failed to read facts: {source}"))
    }
}

fn print_status(status: &ConnectionStatus) {
    println!("{status}");
    match status {
        ConnectionStatus::Disabled(Some(location))
        | ConnectionStatus::WaitingForNetwork(Some(location))
        | ConnectionStatus::Connecting(Some(location)) => {
            println!("   Location: {location}");
        }
        ConnectionStatus::Connected { banner, .. } => {
            println!("   Banner: {banner}");
        }
        _ => {}
    }
}

/// Normalizes a protocol choice, prints it and optionally persists it.
fn run_protocol(
    protocol: VpnProtocolKind,
    transmission: Option<TransmissionKind>,
    save: bool,
) -> Result<()> {
    let selection = ProtocolSelection::new(protocol, transmission);
    print_selection(selection);

    if save {
        let mut current = settings::load().unwrap_or_else(|_| Settings::default());
        current.protocol = selection;
        settings::save(&current)?;
        println!("   Saved as preferred protocol");
    }
    Ok(())
}

fn print_selection(selection: ProtocolSelection) {
    println!("{selection}");
    println!("   Label key: {}", selection.display_label());
    println!(
        "   Local agent: {}",
        if selection.local_agent_enabled() {
            "supported"
        } else {
            "not supported"
        }
    );
}

/// Prints the persisted protocol preference.
fn run_preference() -> Result<()> {
    let settings = settings::load()?;
    print_selection(settings.protocol);
    Ok(())
}
