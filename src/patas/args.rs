use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patas")]
#[command(about = "Record keeper for small pet shops", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the data file (defaults to the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a batch of customers and animals in one go
    #[command(alias = "reg")]
    Register {
        /// Customer as "name;email;phone;national id;postal code;gender"
        /// (trailing parts optional)
        #[arg(long = "customer", value_name = "FIELDS")]
        customers: Vec<String>,

        /// Animal as "name;species;sex" (species and sex optional)
        #[arg(long = "animal", value_name = "FIELDS")]
        animals: Vec<String>,

        /// Create the animals without owners, up for adoption
        #[arg(long)]
        ownerless: bool,

        /// Note applied to every animal in the batch
        #[arg(long)]
        note: Option<String>,
    },

    /// Manage customers
    #[command(subcommand, alias = "c")]
    Customers(CustomerCmd),

    /// Manage animals
    #[command(subcommand, alias = "a")]
    Animals(AnimalCmd),

    /// Manage appointments
    #[command(subcommand, alias = "ap")]
    Appointments(AppointmentCmd),

    /// Manage employees
    #[command(subcommand, alias = "e")]
    Employees(EmployeeCmd),

    /// Session product log (not persisted)
    #[command(subcommand)]
    Products(LogCmd),

    /// Session sale log (not persisted)
    #[command(subcommand)]
    Sales(LogCmd),

    /// Print the totals report
    Report,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CustomerCmd {
    /// List customers
    #[command(alias = "ls")]
    List {
        /// Case-insensitive filter matched against every column
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit a customer; omitted flags keep current values, "" clears one
    Edit {
        /// Current name of the customer
        name: String,

        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        national_id: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        /// male, female, non-binary, prefer-not-to-say, or free text
        #[arg(long)]
        gender: Option<String>,
    },

    /// Delete a customer and detach it from every animal
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnimalCmd {
    /// List animals with their positions
    #[command(alias = "ls")]
    List {
        /// Case-insensitive filter matched against name, owners, species, sex
        #[arg(short, long)]
        search: Option<String>,

        /// Show only animals up for adoption
        #[arg(long)]
        adoption: bool,
    },

    /// Edit an animal by its list position; omitted flags keep current values
    Edit {
        position: usize,

        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,

        /// dog, cat, rodent, bird, or free text
        #[arg(long)]
        species: Option<String>,

        /// male or female
        #[arg(long)]
        sex: Option<String>,

        #[arg(long)]
        note: Option<String>,

        /// Mark the animal ownerless (rejected while owners remain)
        #[arg(long)]
        ownerless: bool,
    },

    /// Delete an animal
    #[command(alias = "rm")]
    Delete {
        position: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Associate an existing customer with an animal
    AddOwner {
        position: usize,
        customer: String,
    },

    /// Detach a customer from an animal
    RemoveOwner {
        position: usize,
        customer: String,
    },

    /// Create a customer from just a name and add it as owner
    QuickAdd {
        position: usize,
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCmd {
    /// Book an appointment for an animal
    Add {
        /// Animal list position
        animal: usize,

        /// Date as dd/mm/yyyy
        #[arg(long)]
        date: String,

        /// Time as HH:MM
        #[arg(long)]
        time: String,

        /// What the appointment is for (required)
        #[arg(long)]
        details: String,
    },

    /// List appointments with their positions
    #[command(alias = "ls")]
    List {
        /// Case-insensitive filter matched against every column
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit an appointment by position; omitted flags keep current values
    Edit {
        position: usize,

        /// Animal list position
        #[arg(long)]
        animal: Option<usize>,

        /// Date as dd/mm/yyyy
        #[arg(long)]
        date: Option<String>,

        /// Time as HH:MM
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        details: Option<String>,
    },

    /// Delete an appointment
    #[command(alias = "rm")]
    Delete {
        position: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCmd {
    /// Register an employee
    Add {
        /// Employee as "name;email;phone;national id;postal code;gender"
        /// (trailing parts optional)
        fields: String,
    },

    /// List employees
    #[command(alias = "ls")]
    List {
        /// Case-insensitive filter matched against every column
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit an employee; omitted flags keep current values, "" clears one
    Edit {
        /// Current name of the employee
        name: String,

        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        national_id: Option<String>,

        #[arg(long)]
        postal_code: Option<String>,

        /// male, female, non-binary, prefer-not-to-say, or free text
        #[arg(long)]
        gender: Option<String>,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCmd {
    /// Append an entry to the log
    Add { text: String },

    /// Print the log
    #[command(alias = "ls")]
    List,
}
