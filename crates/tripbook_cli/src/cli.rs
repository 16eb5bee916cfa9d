use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI parser for the `tripbook` binary.
#[derive(Debug, Parser)]
#[command(name = "tripbook", version, about = "Tripbook - contacts and trips for travel agents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// SQLite file holding the address book
    #[arg(long, global = true, env = "TRIPBOOK_DATA", default_value = "data/tripbook.db")]
    pub data: PathBuf,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "TRIPBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "TRIPBOOK_LOG_DIR")]
    pub log_dir: Option<String>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> CliConfig {
        CliConfig {
            data_file: self.data.clone(),
            log_level: self
                .log_level
                .clone()
                .unwrap_or_else(|| tripbook_core::default_log_level().to_string()),
            log_dir: self.log_dir.clone().filter(|dir| !dir.trim().is_empty()),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every contact.
    List,
    /// Show every trip.
    ListTrips,
    /// Show contacts whose name contains any keyword.
    Find {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Show trips matching every given filter.
    FindTrip(FindTripArgs),
    /// Add a contact.
    AddContact(ContactArgs),
    /// Add a trip.
    AddTrip(TripArgs),
    /// Delete the contact at a displayed position.
    DeleteContact { index: usize },
    /// Delete the trip at a displayed position.
    DeleteTrip { index: usize },
    /// Edit the contact at a displayed position.
    EditContact(EditContactArgs),
    /// Edit the trip at a displayed position.
    EditTrip(EditTripArgs),
    /// Remove all contacts and trips.
    Clear,
}

#[derive(Debug, Args)]
pub struct FindTripArgs {
    /// Trip name keywords; any one matching is enough
    #[arg(long = "name", num_args = 1..)]
    pub keywords: Vec<String>,
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub on: Option<String>,
    #[arg(long, requires = "to")]
    pub from: Option<String>,
    #[arg(long, requires = "from")]
    pub to: Option<String>,
    #[arg(long)]
    pub customer: Option<String>,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub address: String,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TripArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub accommodation: String,
    #[arg(long)]
    pub itinerary: String,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub note: String,
    #[arg(long = "customer")]
    pub customers: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub index: usize,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Replaces all tags
    #[arg(long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub clear_tags: bool,
}

#[derive(Debug, Args)]
pub struct EditTripArgs {
    pub index: usize,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub accommodation: Option<String>,
    #[arg(long)]
    pub itinerary: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub note: Option<String>,
    /// Replaces all customers
    #[arg(long = "customer", conflicts_with = "clear_customers")]
    pub customers: Vec<String>,
    #[arg(long)]
    pub clear_customers: bool,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tripbook",
            "list",
            "--data",
            "/tmp/book.db",
            "--log-level",
            "warn",
        ])
        .expect("cli should parse");

        let config = cli.config();
        assert_eq!(config.data_file, PathBuf::from("/tmp/book.db"));
        assert_eq!(config.log_level, "warn");
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn find_requires_keywords() {
        assert!(Cli::try_parse_from(["tripbook", "find"]).is_err());
    }

    #[test]
    fn find_trip_rejects_on_with_range() {
        let parsed = Cli::try_parse_from([
            "tripbook",
            "find-trip",
            "--on",
            "2024-05-01",
            "--from",
            "2024-05-01",
            "--to",
            "2024-05-03",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn repeated_tags_are_collected() {
        let cli = Cli::try_parse_from([
            "tripbook",
            "add-contact",
            "--name",
            "Alice",
            "--phone",
            "94351253",
            "--email",
            "alice@example.com",
            "--address",
            "Jurong West",
            "--tag",
            "friends",
            "--tag",
            "vip",
        ])
        .expect("cli should parse");

        let Commands::AddContact(args) = cli.command else {
            panic!("expected add-contact");
        };
        assert_eq!(args.tags, vec!["friends", "vip"]);
    }
}
