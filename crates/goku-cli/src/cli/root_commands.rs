use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate an interface (and optionally a mock) from a struct's methods.
    Iface(IfaceArgs),
    /// Print the goku version.
    Version,
}

#[derive(Clone, Debug, Args)]
pub struct IfaceArgs {
    /// Name of the struct to read methods from.
    #[arg(value_name = "STRUCT")]
    pub struct_name: String,

    /// Directory holding the struct's package.
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Also generate a mock type with this name.
    #[arg(short, long)]
    pub mock: Option<String>,

    /// Interface name (defaults to the struct name plus the configured suffix).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Package name for the generated file.
    #[arg(short, long)]
    pub package: Option<String>,

    /// Include methods starting with a lowercase letter.
    #[arg(long)]
    pub private: bool,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the extracted contract as JSON instead of Go source.
    #[arg(long)]
    pub json: bool,
}
