use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "openwide", bin_name = "openwide", version)]
#[command(about = "Dental clinic appointment registry with an interactive menu", long_about = None)]
pub struct Cli {
    /// Verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Read settings from this file instead of the platform config directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Menu entries, numbered as the operator types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Cancel,
    View,
    Update,
    Search,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::Cancel),
            3 => Some(MenuChoice::View),
            4 => Some(MenuChoice::Update),
            5 => Some(MenuChoice::Search),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
