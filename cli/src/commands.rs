pub mod demo;
pub mod membership;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gymkit")]
#[command(about = "A small gym domain model, driven from the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Hide the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (repeat for less)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a sample gym and walk through every operation
    #[command(alias = "d")]
    Demo,
    /// Create a membership, optionally extend it, and show its status
    #[command(alias = "m")]
    Membership(MembershipArgs),
}

#[derive(Args)]
pub struct MembershipArgs {
    /// Member identifier
    #[arg(long, default_value_t = 0)]
    pub id: i32,

    /// First day of the membership; defaults to today
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Length of the membership in months
    #[arg(long, allow_negative_numbers = true)]
    pub months: Option<i32>,

    /// Months to add to the end date afterwards (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    pub extend: Option<i32>,

    /// Mark the membership as active
    #[arg(long)]
    pub active: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
