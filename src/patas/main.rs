use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use patas::api::PatasApi;
use patas::commands::animals::AnimalUpdate;
use patas::commands::helpers;
use patas::commands::register::{AnimalEntry, RegistrationBatch};
use patas::commands::{CmdMessage, CmdResult, MessageLevel, Table};
use patas::config::PatasConfig;
use patas::error::{PatasError, Result};
use patas::model::{AnimalSex, Gender, Person, PersonFields, Species};
use patas::store::fs::FilePersister;
use patas::validate::ValidationError;
use std::io::Write;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{AnimalCmd, AppointmentCmd, Cli, Commands, CustomerCmd, EmployeeCmd, LogCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PatasApi<FilePersister>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli);

    match cli.command {
        // Config edits only touch config.json; no need to load the store.
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        command => {
            let mut ctx = init_context(&data_dir)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Register {
            customers,
            animals,
            ownerless,
            note,
        } => handle_register(ctx, customers, animals, ownerless, note),
        Commands::Customers(cmd) => match cmd {
            CustomerCmd::List { search } => {
                print_result(&ctx.api.customers(search.as_deref())?);
                Ok(())
            }
            CustomerCmd::Edit {
                name,
                new_name,
                email,
                phone,
                national_id,
                postal_code,
                gender,
            } => {
                let index = helpers::customer_index(ctx.api.store(), &name)?;
                let fields = merged_person_fields(
                    &ctx.api.store().customers[index],
                    new_name,
                    email,
                    phone,
                    national_id,
                    postal_code,
                    gender,
                );
                print_result(&ctx.api.edit_customer(&name, fields)?);
                Ok(())
            }
            CustomerCmd::Delete { name, yes } => {
                if !yes && !confirm(&format!("Delete customer {}?", name)) {
                    println!("Aborted.");
                    return Ok(());
                }
                print_result(&ctx.api.delete_customer(&name)?);
                Ok(())
            }
        },
        Commands::Animals(cmd) => handle_animals(ctx, cmd),
        Commands::Appointments(cmd) => handle_appointments(ctx, cmd),
        Commands::Employees(cmd) => handle_employees(ctx, cmd),
        Commands::Products(cmd) => match cmd {
            LogCmd::Add { text } => {
                print_result(&ctx.api.add_product(&text)?);
                Ok(())
            }
            LogCmd::List => {
                print_result(&ctx.api.products()?);
                Ok(())
            }
        },
        Commands::Sales(cmd) => match cmd {
            LogCmd::Add { text } => {
                print_result(&ctx.api.add_sale(&text)?);
                Ok(())
            }
            LogCmd::List => {
                print_result(&ctx.api.sales()?);
                Ok(())
            }
        },
        Commands::Report => {
            print_result(&ctx.api.report()?);
            Ok(())
        }
        Commands::Config { .. } => unreachable!("handled above"),
    }
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "patas", "patas")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

fn init_context(data_dir: &Path) -> Result<AppContext> {
    let config = PatasConfig::load(data_dir).unwrap_or_default();
    let persister = FilePersister::new(data_dir.join(config.data_file()));
    let (api, load_error) = PatasApi::open(persister);
    if let Some(e) = load_error {
        eprintln!(
            "{}",
            format!("Failed to load data: {}. Starting with empty records.", e).red()
        );
    }
    Ok(AppContext { api })
}

fn handle_register(
    ctx: &mut AppContext,
    customers: Vec<String>,
    animals: Vec<String>,
    ownerless: bool,
    note: Option<String>,
) -> Result<()> {
    let batch = RegistrationBatch {
        customers: customers.iter().map(|s| parse_person_fields(s)).collect(),
        animals: animals
            .iter()
            .map(|s| parse_animal_entry(s))
            .collect::<Result<_>>()?,
        ownerless,
        note: note.unwrap_or_default(),
    };
    print_result(&ctx.api.register(batch)?);
    Ok(())
}

fn handle_animals(ctx: &mut AppContext, cmd: AnimalCmd) -> Result<()> {
    match cmd {
        AnimalCmd::List { search, adoption } => {
            print_result(&ctx.api.animals(search.as_deref(), adoption)?);
        }
        AnimalCmd::Edit {
            position,
            new_name,
            species,
            sex,
            note,
            ownerless,
        } => {
            let index = helpers::animal_index(ctx.api.store(), position)?;
            let current = &ctx.api.store().animals[index];
            let update = AnimalUpdate {
                name: new_name.unwrap_or_else(|| current.name.clone()),
                species: match species {
                    Some(s) => parse_species(&s),
                    None => current.species.clone(),
                },
                sex: match sex {
                    Some(s) => parse_sex(&s)?,
                    None => current.sex,
                },
                note: note.unwrap_or_else(|| current.note.clone()),
                ownerless,
            };
            print_result(&ctx.api.edit_animal(position, update)?);
        }
        AnimalCmd::Delete { position, yes } => {
            let index = helpers::animal_index(ctx.api.store(), position)?;
            let name = ctx.api.store().animals[index].name.clone();
            if !yes && !confirm(&format!("Delete animal {}?", name)) {
                println!("Aborted.");
                return Ok(());
            }
            print_result(&ctx.api.delete_animal(position)?);
        }
        AnimalCmd::AddOwner { position, customer } => {
            print_result(&ctx.api.add_owner(position, &customer)?);
        }
        AnimalCmd::RemoveOwner { position, customer } => {
            print_result(&ctx.api.remove_owner(position, &customer)?);
        }
        AnimalCmd::QuickAdd { position, name } => {
            print_result(&ctx.api.quick_add_owner(position, &name)?);
        }
    }
    Ok(())
}

fn handle_appointments(ctx: &mut AppContext, cmd: AppointmentCmd) -> Result<()> {
    match cmd {
        AppointmentCmd::Add {
            animal,
            date,
            time,
            details,
        } => {
            let date = parse_date(&date)?;
            let time = parse_time(&time)?;
            print_result(&ctx.api.book_appointment(animal, date, time, &details)?);
        }
        AppointmentCmd::List { search } => {
            print_result(&ctx.api.appointments(search.as_deref())?);
        }
        AppointmentCmd::Edit {
            position,
            animal,
            date,
            time,
            details,
        } => {
            let index = helpers::appointment_index(ctx.api.store(), position)?;
            let current = ctx.api.store().appointments[index].clone();
            let animal_position = match animal {
                Some(p) => p,
                None => ctx
                    .api
                    .store()
                    .animals
                    .iter()
                    .position(|a| a.id == current.animal)
                    .map(|i| i + 1)
                    .ok_or_else(|| {
                        PatasError::NotFound(
                            "the appointment's animal (it was removed; pass --animal)".to_string(),
                        )
                    })?,
            };
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => current.when.date(),
            };
            let time = match time {
                Some(s) => parse_time(&s)?,
                None => current.when.time(),
            };
            let details = details.unwrap_or(current.details);
            print_result(&ctx.api.edit_appointment(position, animal_position, date, time, &details)?);
        }
        AppointmentCmd::Delete { position, yes } => {
            if !yes && !confirm(&format!("Delete appointment #{}?", position)) {
                println!("Aborted.");
                return Ok(());
            }
            print_result(&ctx.api.delete_appointment(position)?);
        }
    }
    Ok(())
}

fn handle_employees(ctx: &mut AppContext, cmd: EmployeeCmd) -> Result<()> {
    match cmd {
        EmployeeCmd::Add { fields } => {
            print_result(&ctx.api.add_employee(parse_person_fields(&fields))?);
        }
        EmployeeCmd::List { search } => {
            print_result(&ctx.api.employees(search.as_deref())?);
        }
        EmployeeCmd::Edit {
            name,
            new_name,
            email,
            phone,
            national_id,
            postal_code,
            gender,
        } => {
            let index = helpers::employee_index(ctx.api.store(), &name)?;
            let fields = merged_person_fields(
                &ctx.api.store().employees[index],
                new_name,
                email,
                phone,
                national_id,
                postal_code,
                gender,
            );
            print_result(&ctx.api.edit_employee(&name, fields)?);
        }
        EmployeeCmd::Delete { name, yes } => {
            if !yes && !confirm(&format!("Delete employee {}?", name)) {
                println!("Aborted.");
                return Ok(());
            }
            print_result(&ctx.api.delete_employee(&name)?);
        }
    }
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = PatasConfig::load(data_dir).unwrap_or_default();
    match (key.as_deref(), value) {
        (None, _) | (Some("data-file"), None) => {
            println!("data-file = {}", config.data_file());
        }
        (Some("data-file"), Some(v)) => {
            config.set_data_file(&v);
            config.save(data_dir)?;
            println!("data-file = {}", config.data_file());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

/// Splits "name;email;phone;national id;postal code;gender"; blank or
/// missing trailing parts become unset optionals.
fn parse_person_fields(input: &str) -> PersonFields {
    let mut parts = input.split(';').map(str::trim);
    let opt = |s: Option<&str>| s.filter(|v| !v.is_empty()).map(str::to_string);

    let name = parts.next().unwrap_or_default().to_string();
    let email = opt(parts.next());
    let phone = opt(parts.next());
    let national_id = opt(parts.next());
    let postal_code = opt(parts.next());
    let gender = Gender::from_input(parts.next().unwrap_or(""));
    PersonFields {
        name,
        email,
        phone,
        national_id,
        postal_code,
        gender,
    }
}

/// Splits "name;species;sex"; species defaults to dog, sex to male, matching
/// the original form defaults.
fn parse_animal_entry(input: &str) -> Result<AnimalEntry> {
    let mut parts = input.split(';').map(str::trim);
    let name = parts.next().unwrap_or_default().to_string();
    let species = match parts.next() {
        Some(s) if !s.is_empty() => parse_species(s),
        _ => Species::Dog,
    };
    let sex = match parts.next() {
        Some(s) if !s.is_empty() => parse_sex(s)?,
        _ => AnimalSex::Male,
    };
    Ok(AnimalEntry { name, species, sex })
}

fn parse_species(s: &str) -> Species {
    Species::from_input(s)
}

fn parse_sex(s: &str) -> Result<AnimalSex> {
    AnimalSex::from_input(s).ok_or_else(|| PatasError::Validation(ValidationError::InvalidSex))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .map_err(|_| PatasError::Validation(ValidationError::InvalidDate))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| PatasError::Validation(ValidationError::InvalidTime))
}

/// Merges edit flags over the current record: omitted flags keep the stored
/// value, an explicit empty string clears an optional field.
fn merged_person_fields(
    current: &Person,
    new_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    national_id: Option<String>,
    postal_code: Option<String>,
    gender: Option<String>,
) -> PersonFields {
    PersonFields {
        name: new_name.unwrap_or_else(|| current.name.clone()),
        email: merge_opt(email, current.email.clone()),
        phone: merge_opt(phone, current.phone.clone()),
        national_id: merge_opt(national_id, current.national_id.clone()),
        postal_code: merge_opt(postal_code, current.postal_code.clone()),
        gender: match gender {
            Some(g) => Gender::from_input(&g),
            None => current.gender.clone(),
        },
    }
}

fn merge_opt(new: Option<String>, current: Option<String>) -> Option<String> {
    match new {
        Some(v) if v.is_empty() => None,
        Some(v) => Some(v),
        None => current,
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

fn print_result(result: &CmdResult) {
    if let Some(table) = &result.table {
        print_table(table);
    }
    for line in &result.lines {
        println!("{}", line);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

const MAX_COL_WIDTH: usize = 40;

fn print_table(table: &Table) {
    if table.rows.is_empty() {
        println!("No records found.");
        return;
    }

    let mut widths: Vec<usize> = table.header.iter().map(|h| h.width()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width()).min(MAX_COL_WIDTH);
        }
    }

    let header = table
        .header
        .iter()
        .enumerate()
        .map(|(i, h)| pad_cell(h, widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.bold());
    println!("{}", "-".repeat(header.width()));

    for row in &table.rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad_cell(cell, widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line);
    }
}

fn pad_cell(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
