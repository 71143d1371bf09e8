use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender of a customer or employee. The registration form offers a fixed set
/// of options plus a free-text entry; the free text lives in `Other` and is
/// validated like any other name-ish field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
    Other(String),
}

impl Gender {
    /// Maps shell input onto the fixed options, falling back to `Other` for
    /// anything unrecognized. Blank input means the question was skipped.
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "non-binary" | "nonbinary" => Gender::NonBinary,
            "" | "prefer-not-to-say" | "n/a" => Gender::PreferNotToSay,
            _ => Gender::Other(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::NonBinary => write!(f, "Non-binary"),
            Gender::PreferNotToSay => write!(f, "Prefer not to say"),
            Gender::Other(text) => write!(f, "{}", text),
        }
    }
}

/// Species of an animal, with the same fixed-or-free-text split as [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
    Rodent,
    Bird,
    Other(String),
}

impl Species {
    pub fn from_input(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            "rodent" => Species::Rodent,
            "bird" => Species::Bird,
            _ => Species::Other(s.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Dog => write!(f, "Dog"),
            Species::Cat => write!(f, "Cat"),
            Species::Rodent => write!(f, "Rodent"),
            Species::Bird => write!(f, "Bird"),
            Species::Other(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimalSex {
    Male,
    Female,
}

impl AnimalSex {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(AnimalSex::Male),
            "female" | "f" => Some(AnimalSex::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnimalSex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnimalSex::Male => write!(f, "Male"),
            AnimalSex::Female => write!(f, "Female"),
        }
    }
}

/// The raw field set a form submits for a person, before validation. Optional
/// fields arrive as `None` when left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub postal_code: Option<String>,
    pub gender: Gender,
}

/// A person record. Customers and employees share one shape; the two
/// collections are fully separate and uniqueness is scoped per collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub national_id: Option<String>,
    pub postal_code: Option<String>,
    pub gender: Gender,
}

impl Person {
    pub fn new(fields: PersonFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            national_id: fields.national_id,
            postal_code: fields.postal_code,
            gender: fields.gender,
        }
    }

    /// Overwrites every field from a validated edit submission. The id stays.
    pub fn apply(&mut self, fields: PersonFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.national_id = fields.national_id;
        self.postal_code = fields.postal_code;
        self.gender = fields.gender;
    }

    /// Display label: the name, plus the national ID when one is on file.
    pub fn label(&self) -> String {
        match &self.national_id {
            Some(id) => format!("{} (ID: {})", self.name, id),
            None => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: Uuid,
    pub name: String,
    /// Owning customers by id, in the order they were associated.
    pub owners: Vec<Uuid>,
    pub without_owner: bool,
    pub available_for_adoption: bool,
    pub note: String,
    pub species: Species,
    pub sex: AnimalSex,
}

impl Animal {
    /// A new animal starts without owners and up for adoption; ownership
    /// operations flip the flags as owners come and go.
    pub fn new(name: String, note: String, species: Species, sex: AnimalSex) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            owners: Vec::new(),
            without_owner: true,
            available_for_adoption: true,
            note,
            species,
            sex,
        }
    }
}

/// An appointment holds a non-owning reference to its animal; deleting the
/// animal leaves the appointment in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub animal: Uuid,
    pub when: NaiveDateTime,
    pub details: String,
}

impl Appointment {
    pub fn new(animal: Uuid, when: NaiveDateTime, details: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            animal,
            when,
            details,
        }
    }

    pub fn date_display(&self) -> String {
        self.when.format("%d/%m/%Y").to_string()
    }

    pub fn time_display(&self) -> String {
        self.when.format("%H:%M").to_string()
    }
}
