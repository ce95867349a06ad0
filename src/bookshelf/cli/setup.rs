use bookshelf::model::Availability;
use bookshelf::store::fs::DEFAULT_DATA_FILE;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "bookshelf",
    bin_name = "bookshelf",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep a small library catalogue in a CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Book,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Book => "Book Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "search" => Some(CommandGroup::Core),
            "show" | "update" | "delete" => Some(CommandGroup::Book),
            "check" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Book, CommandGroup::Misc]
    }
}

/// The grouped overview printed for `-h` and `help`.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = format!("bookshelf {version}\n");
    output.push_str("Keep a small library catalogue in a CSV file\n\n");
    output.push_str("Usage: bookshelf [OPTIONS] [COMMAND]\n");
    output.push_str("       bookshelf            (same as `bookshelf list`)\n");

    for group in CommandGroup::all() {
        let rows: Vec<(String, String)> = cmd
            .get_subcommands()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .map(|sc| {
                let aliases: Vec<&str> = sc.get_aliases().collect();
                let name = if aliases.is_empty() {
                    sc.get_name().to_string()
                } else {
                    format!("{} ({})", sc.get_name(), aliases.join(", "))
                };
                let about = sc.get_about().map(|a| a.to_string()).unwrap_or_default();
                (name, about)
            })
            .collect();

        output.push_str(&format!("\n{}\n", group.heading()));
        let width = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(0);
        for (name, about) in rows {
            output.push_str(&format!("  {:<width$}  {}\n", name, about));
        }
    }

    let labels: Vec<&str> = Availability::ALL.iter().map(|a| a.label()).collect();
    output.push_str("\nAvailability values:\n");
    output.push_str(&format!("  {}\n", labels.join(", ")));
    output.push_str("  (any case; `checked-out` style also accepted)\n");

    output.push_str(&format!(
        "\nBooks are stored in ./{} unless `bookshelf config data-file <PATH>` says otherwise.\n",
        DEFAULT_DATA_FILE
    ));

    output.push_str("\nOptions:\n");
    output.push_str("  -v, --verbose    Debug logging on stderr\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

impl Commands {
    /// Canonical subcommand name, as clap knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Core(CoreCommands::Add { .. }) => "add",
            Commands::Core(CoreCommands::List { .. }) => "list",
            Commands::Core(CoreCommands::Search { .. }) => "search",
            Commands::Book(BookCommands::Show { .. }) => "show",
            Commands::Book(BookCommands::Update { .. }) => "update",
            Commands::Book(BookCommands::Delete { .. }) => "delete",
            Commands::Misc(MiscCommands::Check { .. }) => "check",
            Commands::Misc(MiscCommands::Config { .. }) => "config",
            Commands::Misc(MiscCommands::Help { .. }) => "help",
        }
    }
}

/// `bookshelf <command> -h`: clap's own help for that command.
pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(c) => print_help_for_command(c.name()),
        None => print_grouped_help(),
    }
}

/// Help for a command given by name or alias (`help ls` works).
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => {
            eprintln!("Unknown command: {}", name);
            eprintln!();
            print_grouped_help();
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Book(BookCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a book
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Unique book id (case-sensitive)
        id: String,
        title: String,
        author: String,
        genre: String,
        /// Available, "Checked Out", Reserved or "Under Maintenance"
        availability: String,
    },

    /// List all books
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Print the books as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find a book by id or exact title (case-insensitive)
    #[command(display_order = 3)]
    Search {
        /// Search words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Show one book by its exact id
    #[command(alias = "get", display_order = 10)]
    Show { id: String },

    /// Change a book's details (unset fields keep their value)
    #[command(alias = "u", display_order = 11)]
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        availability: Option<String>,
    },

    /// Delete a book
    #[command(alias = "rm", display_order = 12)]
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Report lines of the data file that are not valid books
    #[command(display_order = 30)]
    Check {
        /// Rewrite the file without them
        #[arg(long)]
        fix: bool,
    },

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for bookshelf or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
