use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to record class attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance register: classes, students, periods and attendance percentages on SQLite",
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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or list classes
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Add, list or bulk-import students
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Create or list periods (one class session each)
    Period {
        #[command(subcommand)]
        action: PeriodAction,
    },

    /// Mark attendance or show a student's attendance percentage
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Serve JSON requests, one per line, on stdin/stdout
    Serve,
}

#[derive(Subcommand)]
pub enum ClassAction {
    /// Add a class
    Add {
        /// Class identifier (integer, unique)
        class_id: i64,

        /// Class name
        class_name: String,

        #[arg(long = "dept", help = "Department of the class")]
        department: Option<String>,
    },

    /// List all classes
    List {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Add a student
    Add {
        /// Registration number (unique)
        reg_no: String,

        /// Student name
        student_name: String,

        /// Class identifier
        class_id: i64,
    },

    /// List students
    List {
        #[arg(long = "class", help = "Only students of this class")]
        class_id: Option<i64>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Import students from a CSV file (header row, then reg_no,name,class_id)
    Import {
        /// CSV file to import
        file: String,
    },
}

#[derive(Subcommand)]
pub enum PeriodAction {
    /// Create a period
    Create {
        /// Class identifier
        class_id: i64,

        /// Subject taught in the period
        subject_name: String,

        /// Date of the period (YYYY-MM-DD)
        period_date: String,

        /// Period number within the day (1, 2, 3, ...)
        period_number: i64,
    },

    /// List periods
    List {
        #[arg(long = "class", help = "Only periods of this class")]
        class_id: Option<i64>,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum AttendanceAction {
    /// Mark students present or absent for a period
    Mark {
        /// Period identifier
        period_id: i64,

        /// Marks as REG_NO=STATE (STATE: 1/0, p/a, present/absent, true/false)
        #[arg(required = true, value_name = "REG_NO=STATE")]
        entries: Vec<String>,
    },

    /// Show the cumulative attendance of a student
    Show {
        /// Registration number
        reg_no: String,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
}
