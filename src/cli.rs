use crate::requests::RequestKind;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "btpkit")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Shape BTP CLI request parameters and plan role updates", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Marshal a request document into CLI parameters
    Params(ParamsArgs),

    /// Compute role additions and removals for a role collection
    Delta(DeltaArgs),

    /// Resolve provider settings from configuration and environment
    Provider(ProviderArgs),

    /// Check the parameter tables of every request kind
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ============================================================================
// Params
// ============================================================================

#[derive(Parser)]
pub struct ParamsArgs {
    /// Kind of request the document describes
    #[arg(value_enum)]
    pub kind: RequestKind,

    /// Request document (.toml or .json)
    pub file: PathBuf,

    /// Print parameters as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Delta
// ============================================================================

#[derive(Parser)]
pub struct DeltaArgs {
    /// Desired role collection document
    #[arg(long)]
    pub desired: PathBuf,

    /// Current role collection document
    #[arg(long)]
    pub current: PathBuf,

    /// Role collection name (defaults to the desired document's name)
    #[arg(long)]
    pub role_collection: Option<String>,

    /// Subaccount ID (defaults to the desired document's subaccount)
    #[arg(long)]
    pub subaccount: Option<String>,

    /// Print the delta as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Provider
// ============================================================================

#[derive(Parser)]
pub struct ProviderArgs {
    /// Provider configuration document; environment only when omitted
    pub file: Option<PathBuf>,

    /// Terraform version reported in the user agent
    #[arg(long, default_value = "0.0.0")]
    pub terraform_version: String,
}
