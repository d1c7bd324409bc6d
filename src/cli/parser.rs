use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for bridgebook
/// CLI application to manage barbershop appointments with SQLite
#[derive(Parser)]
#[command(
    name = "bridgebook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Appointment booking CLI: services, stylists, availability and reservations using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Load the demo catalog (services, add-ons, stylists and schedules)
    Seed,

    /// List services and add-ons with durations and prices
    Services,

    /// List stylists and their weekly schedules
    Stylists {
        #[arg(long = "id", help = "Show a single stylist by id")]
        id: Option<String>,
    },

    /// Show bookable start times for a stylist, service and date
    Slots {
        /// Date of the appointment (YYYY-MM-DD)
        date: String,

        #[arg(long = "stylist", help = "Stylist id (see `stylists`)")]
        stylist: String,

        #[arg(long = "service", help = "Service id (see `services`)")]
        service: String,

        #[arg(long = "add-on", help = "Add-on id, repeatable")]
        add_ons: Vec<String>,
    },

    /// Book an appointment at a start time chosen from `slots`
    Book {
        /// Date of the appointment (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        time: String,

        #[arg(long = "stylist", help = "Stylist id")]
        stylist: String,

        #[arg(long = "service", help = "Service id")]
        service: String,

        #[arg(long = "add-on", help = "Add-on id, repeatable")]
        add_ons: Vec<String>,

        #[arg(long = "name", help = "Client full name")]
        name: String,

        #[arg(long = "email", help = "Client email address")]
        email: String,

        #[arg(long = "phone", help = "Client phone number")]
        phone: String,

        #[arg(long = "notes", help = "Notes for the stylist (max 500 chars)")]
        notes: Option<String>,

        #[arg(long = "marketing", help = "Opt in to marketing emails")]
        marketing: bool,
    },

    /// Cancel a booking by id
    Cancel {
        /// Booking id as shown by `list`
        booking_id: String,
    },

    /// List bookings
    List {
        #[arg(long, short, help = "Filter by date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Filter by stylist id")]
        stylist: Option<String>,
    },

    /// Export booking data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Filter export by stylist id")]
        stylist: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
