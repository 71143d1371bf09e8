//! The appointment screen: book, list with a free-text filter, edit, delete.
//!
//! The date and the time are captured independently and merged into a single
//! timestamp; appointments reference their animal by id and survive the
//! animal's deletion.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use uuid::Uuid;

use crate::commands::{helpers, CmdMessage, CmdResult, Table};
use crate::error::Result;
use crate::model::Appointment;
use crate::ownership;
use crate::store::Store;
use crate::validate::ValidationError;

const COLUMNS: [&str; 5] = ["#", "Animal", "Date", "Time", "Details"];

/// Merges the independently captured components: the date's day, the time's
/// hour and minute, seconds and sub-seconds zeroed.
pub fn merge_schedule(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
    date.and_time(time)
}

/// How an appointment's animal renders: name plus owner summary, or a
/// removal marker when the animal no longer exists.
fn animal_label(store: &Store, id: Uuid) -> String {
    match store.animals.iter().find(|a| a.id == id) {
        Some(animal) => format!(
            "{} ({})",
            animal.name,
            ownership::owner_summary(animal, &store.customers)
        ),
        None => "(removed)".to_string(),
    }
}

fn row(store: &Store, position: usize, appointment: &Appointment) -> Vec<String> {
    vec![
        format!("{}", position + 1),
        animal_label(store, appointment.animal),
        appointment.date_display(),
        appointment.time_display(),
        appointment.details.clone(),
    ]
}

fn matches(store: &Store, appointment: &Appointment, filter: &str) -> bool {
    helpers::contains_ci(&animal_label(store, appointment.animal), filter)
        || helpers::contains_ci(&appointment.date_display(), filter)
        || helpers::contains_ci(&appointment.time_display(), filter)
        || helpers::contains_ci(&appointment.details, filter)
}

/// Books an appointment for the animal at the given list position.
pub fn create(
    store: &mut Store,
    animal_position: usize,
    date: NaiveDate,
    time: NaiveTime,
    details: &str,
) -> Result<CmdResult> {
    let index = helpers::animal_index(store, animal_position)?;
    let details = details.trim();
    if details.is_empty() {
        return Err(ValidationError::EmptyDetails.into());
    }

    let appointment = Appointment::new(
        store.animals[index].id,
        merge_schedule(date, time),
        details.to_string(),
    );
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment booked for {} on {} {}",
        store.animals[index].name,
        appointment.date_display(),
        appointment.time_display()
    )));
    store.appointments.push(appointment);
    Ok(result)
}

/// Lists appointments with their 1-based positions, assigned before
/// filtering.
pub fn list(store: &Store, filter: Option<&str>) -> Result<CmdResult> {
    let rows = store
        .appointments
        .iter()
        .enumerate()
        .filter(|(_, a)| filter.is_none_or(|f| matches(store, a, f)))
        .map(|(i, a)| row(store, i, a))
        .collect();
    Ok(CmdResult::default().with_table(Table {
        header: COLUMNS.to_vec(),
        rows,
    }))
}

/// Replaces every field of an appointment, same validation as booking.
pub fn edit(
    store: &mut Store,
    position: usize,
    animal_position: usize,
    date: NaiveDate,
    time: NaiveTime,
    details: &str,
) -> Result<CmdResult> {
    let index = helpers::appointment_index(store, position)?;
    let animal_index = helpers::animal_index(store, animal_position)?;
    let details = details.trim();
    if details.is_empty() {
        return Err(ValidationError::EmptyDetails.into());
    }

    let appointment = &mut store.appointments[index];
    appointment.animal = store.animals[animal_index].id;
    appointment.when = merge_schedule(date, time);
    appointment.details = details.to_string();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment updated: {} {}",
        store.appointments[index].date_display(),
        store.appointments[index].time_display()
    )));
    Ok(result)
}

pub fn delete(store: &mut Store, position: usize) -> Result<CmdResult> {
    let index = helpers::appointment_index(store, position)?;
    let appointment = store.appointments.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment deleted: {} {}",
        appointment.date_display(),
        appointment.time_display()
    )));
    Ok(result)
}
