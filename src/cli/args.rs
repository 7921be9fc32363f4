//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::vpn::{TransmissionKind, VpnProtocolKind};

/// Tunnelstate - VPN status classification and protocol selection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a connection facts snapshot and print the resulting status
    Status {
        /// Path to a JSON facts snapshot, or "-" to read from stdin
        #[arg(default_value = "-")]
        facts: String,
        /// Emit the classified status as JSON
        #[arg(long)]
        json: bool,
    },
    /// Normalize a protocol choice and print its properties
    Protocol {
        /// Requested VPN protocol
        protocol: VpnProtocolKind,
        /// Transmission method (defaults to udp for concrete protocols)
        transmission: Option<TransmissionKind>,
        /// Persist the normalized selection as the preferred protocol
        #[arg(long)]
        save: bool,
    },
    /// Print the persisted protocol preference
    Preference,
}
