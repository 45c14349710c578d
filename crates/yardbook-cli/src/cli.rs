//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};

/// Yardbook CLI - Keep a personal yardage book for every club in the bag.
#[derive(Debug, Parser)]
#[command(name = "yardbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Database file path
    #[arg(short, long, global = true, env = "YARDBOOK_DATABASE")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the clubs in the bag
    Clubs(ClubsArgs),

    /// Manage a club's shot types
    Shots(ShotsArgs),

    /// Recommend club/shot combinations for a target yardage
    Recommend(RecommendArgs),

    /// Show the yardage ladder around a target
    Ladder(LadderArgs),

    /// Log practice sessions at the range
    Range(RangeArgs),

    /// Show or edit the golfer profile
    Profile(ProfileArgs),

    /// Show or edit app settings
    Settings(SettingsArgs),

    /// Load the default bag into an empty yardage book
    Seed(SeedArgs),

    /// Purge expired shot types and backfill nicknames
    Maintain(MaintainArgs),
}

/// Arguments for the clubs command.
#[derive(Debug, Parser)]
pub struct ClubsArgs {
    #[command(subcommand)]
    pub action: ClubsAction,
}

/// Club actions.
#[derive(Debug, Subcommand)]
pub enum ClubsAction {
    /// List clubs in bag order
    List {
        /// List archived clubs instead
        #[arg(short, long)]
        archived: bool,
    },

    /// Add a club with a single "Full" shot type
    Add {
        /// Club name (e.g., "7 Iron")
        name: String,

        /// Full-swing carry distance in yards
        distance: u32,

        /// Short label; generated from the name if omitted
        #[arg(short, long)]
        nickname: Option<String>,
    },

    /// Rename a club or change its nickname
    Update {
        /// Club name, nickname or ID
        club: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New nickname
        #[arg(short, long)]
        nickname: Option<String>,
    },

    /// Move a club out of the bag
    Archive {
        /// Club name, nickname or ID
        club: String,
    },

    /// Bring an archived club back into the bag
    Restore {
        /// Club name, nickname or ID
        club: String,
    },

    /// Permanently delete a club and its shot types
    Delete {
        /// Club name, nickname or ID
        club: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Set the bag order
    Reorder {
        /// Clubs in their new order
        #[arg(required = true, num_args = 1..)]
        clubs: Vec<String>,
    },
}

/// Arguments for the shots command.
#[derive(Debug, Parser)]
pub struct ShotsArgs {
    #[command(subcommand)]
    pub action: ShotsAction,
}

/// Shot-type actions.
#[derive(Debug, Subcommand)]
pub enum ShotsAction {
    /// List a club's shot types, archived ones included
    List {
        /// Club name, nickname or ID
        club: String,
    },

    /// Add a shot type to a club
    Add {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name (e.g., "3/4")
        name: String,

        /// Carry distance in yards
        distance: u32,
    },

    /// Change a shot type's name or carry distance
    Update {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name or ID
        shot: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New carry distance in yards
        #[arg(long)]
        distance: Option<u32>,
    },

    /// Archive a shot type; it is purged after the retention period
    Archive {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name or ID
        shot: String,
    },

    /// Restore an archived shot type
    Restore {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name or ID
        shot: String,
    },

    /// Permanently delete a shot type
    Delete {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name or ID
        shot: String,
    },

    /// List every distinct shot-type name in the book
    Names,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// Target yardage
    pub target: u32,

    /// Only consider this shot type ("all" for every type)
    #[arg(short = 't', long)]
    pub shot_type: Option<String>,
}

/// Arguments for the ladder command.
#[derive(Debug, Parser)]
pub struct LadderArgs {
    /// Target yardage
    pub target: u32,

    /// Pin this club as the selection instead of the top recommendation
    #[arg(long, requires = "shot")]
    pub club: Option<String>,

    /// Shot type for the pinned club
    #[arg(long, requires = "club")]
    pub shot: Option<String>,

    /// Only consider this shot type ("all" for every type)
    #[arg(short = 't', long)]
    pub shot_type: Option<String>,

    /// Show the seven-combination picker instead of the ladder
    #[arg(long)]
    pub picker: bool,
}

/// Arguments for the range command.
#[derive(Debug, Parser)]
pub struct RangeArgs {
    #[command(subcommand)]
    pub action: RangeAction,
}

/// Range session actions.
#[derive(Debug, Subcommand)]
pub enum RangeAction {
    /// Start a session for a club/shot-type combination
    Start {
        /// Club name, nickname or ID
        club: String,

        /// Shot-type name
        #[arg(default_value = "Full")]
        shot: String,
    },

    /// Log one or more shot distances
    Log {
        /// Session ID (or unique prefix)
        session: String,

        /// Distances in yards
        #[arg(required = true, num_args = 1..)]
        distances: Vec<u32>,
    },

    /// Log a shot from spoken text (e.g., "about 152 yards")
    Say {
        /// Session ID (or unique prefix)
        session: String,

        /// Transcript of what was said
        transcript: String,
    },

    /// Remove a shot from a session
    Remove {
        /// Session ID (or unique prefix)
        session: String,

        /// Shot ID (or unique prefix)
        shot: String,
    },

    /// Show a session and its shots
    Show {
        /// Session ID (or unique prefix)
        session: String,
    },

    /// Finish a session and print its statistics
    End {
        /// Session ID (or unique prefix)
        session: String,

        /// Also save the median as the combination's distance
        #[arg(long)]
        save: bool,
    },

    /// List sessions, newest first
    List,

    /// Permanently delete a session
    Delete {
        /// Session ID (or unique prefix)
        session: String,
    },

    /// Save a session's median as the combination's distance
    Save {
        /// Session ID (or unique prefix)
        session: String,
    },

    /// List saved session results, newest first
    Saved,
}

/// Arguments for the profile command.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,

    /// Update profile fields
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Handicap index (0-54)
        #[arg(long, allow_hyphen_values = true)]
        handicap: Option<i32>,

        /// Primary shot type used for display distances
        #[arg(long)]
        primary: Option<String>,
    },
}

/// Arguments for the settings command.
#[derive(Debug, Parser)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsAction,
}

/// Settings actions.
#[derive(Debug, Subcommand)]
pub enum SettingsAction {
    /// Show the settings
    Show,

    /// Set the ladder tolerance percentage (0-100)
    Tolerance {
        /// Percentage either side of the target
        percent: u32,
    },
}

/// Arguments for the seed command.
#[derive(Debug, Parser)]
pub struct SeedArgs {
    /// Random seed for the generated shot-type distances
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the maintain command.
#[derive(Debug, Parser)]
pub struct MaintainArgs {
    /// Report what would be purged without deleting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Keep running on the configured interval until Ctrl+C
    #[arg(short, long, conflicts_with = "cycles")]
    pub watch: bool,

    /// Run this many sweeps on the configured interval, then exit
    #[arg(long)]
    pub cycles: Option<usize>,
}
