//! Registrar configuration and schedule seed data.
//!
//! Loaded from TOML. Every section is optional and falls back to the
//! built-in term:
//!
//! ```toml
//! [registrar]
//! id_prefix = "UOB-"
//! max_classes = 5
//!
//! [schedule]
//! slots = ["8:30 AM - 10:30 AM", "10:30 AM - 12:30 PM", "12:30 PM - 2:30 PM", "2:30 PM - 4:30 PM"]
//!
//! [[schedule.courses]]
//! day = "Sunday"
//! slot = 0
//! name = "Data Structures"
//! code = "CS101"
//! priority = "High"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::course::{Course, Priority, DEFAULT_CREDIT_HOURS, DEFAULT_MAX_STUDENTS};
use crate::error::{EnrollmentError, Result};
use crate::schedule::{Day, Schedule, SLOTS_PER_DAY};
use crate::student::{IdGenerator, SequentialIds, Student, DEFAULT_ID_PREFIX, DEFAULT_MAX_CLASSES};

/// Built-in slot labels shared by every day.
pub const STANDARD_SLOTS: [&str; SLOTS_PER_DAY] = [
    "8:30 AM - 10:30 AM",
    "10:30 AM - 12:30 PM",
    "12:30 PM - 2:30 PM",
    "2:30 PM - 4:30 PM",
];

/// Built-in term as `(name, code, priority)`, indexed by day then slot.
pub const STANDARD_COURSES: [[(&str, &str, Option<&str>); SLOTS_PER_DAY]; 4] = [
    [
        ("Data Structures", "CS101", Some("High")),
        ("AI", "CS102", None),
        ("Web Development", "CS103", None),
        ("Mathematics", "CS104", None),
    ],
    [
        ("Machine Learning", "CS105", None),
        ("Cyber Security", "CS106", None),
        ("Cloud Computing", "CS107", None),
        ("Game Development", "CS108", None),
    ],
    [
        ("Databases", "CS109", None),
        ("Networks", "CS110", None),
        ("Operating Systems", "CS111", None),
        ("Algorithms", "CS112", None),
    ],
    [
        ("Software Engineering", "CS113", None),
        ("Web Design", "CS114", None),
        ("Mobile Apps", "CS115", None),
        ("Big Data", "CS116", None),
    ],
];

/// Top-level config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub registrar: RegistrarSettings,
    #[serde(default)]
    pub schedule: ScheduleSeed,
}

/// Student registration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrarSettings {
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_max_classes")]
    pub max_classes: usize,
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_max_classes() -> usize {
    DEFAULT_MAX_CLASSES
}

impl Default for RegistrarSettings {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
            max_classes: default_max_classes(),
        }
    }
}

/// Slot labels plus one entry per timetable cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSeed {
    #[serde(default = "standard_slots")]
    pub slots: Vec<String>,
    #[serde(default = "standard_courses")]
    pub courses: Vec<CourseSeed>,
}

impl Default for ScheduleSeed {
    fn default() -> Self {
        Self {
            slots: standard_slots(),
            courses: standard_courses(),
        }
    }
}

fn standard_slots() -> Vec<String> {
    STANDARD_SLOTS.iter().map(|s| s.to_string()).collect()
}

fn standard_courses() -> Vec<CourseSeed> {
    Day::ALL
        .into_iter()
        .zip(STANDARD_COURSES)
        .flat_map(|(day, row)| {
            row.into_iter()
                .enumerate()
                .map(move |(slot, (name, code, priority))| CourseSeed {
                    day,
                    slot,
                    name: name.to_string(),
                    code: code.to_string(),
                    priority: priority.map(Priority::from).unwrap_or_default(),
                    credit_hours: DEFAULT_CREDIT_HOURS,
                    max_students: DEFAULT_MAX_STUDENTS,
                })
        })
        .collect()
}

/// One course placed in a timetable cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSeed {
    pub day: Day,
    pub slot: usize,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_credit_hours")]
    pub credit_hours: u32,
    #[serde(default = "default_max_students")]
    pub max_students: u32,
}

fn default_credit_hours() -> u32 {
    DEFAULT_CREDIT_HOURS
}

fn default_max_students() -> u32 {
    DEFAULT_MAX_STUDENTS
}

impl CourseSeed {
    pub fn to_course(&self) -> Course {
        Course::new(&self.name, &self.code)
            .with_credit_hours(self.credit_hours)
            .with_max_students(self.max_students)
            .with_priority(self.priority.clone())
    }
}

impl RegistrarConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// `Toml` on malformed input, `InvalidConfig` when `max_classes` is zero.
    /// Schedule seed problems surface from [`RegistrarConfig::build_schedule`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.registrar.max_classes == 0 {
            return Err(EnrollmentError::InvalidConfig(
                "registrar.max_classes must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn id_generator(&self) -> SequentialIds {
        SequentialIds::new(&self.registrar.id_prefix)
    }

    pub fn build_schedule(&self) -> Result<Schedule> {
        Schedule::build(&self.schedule)
    }

    /// Registers a student with the configured class limit.
    pub fn new_student(&self, ids: &mut impl IdGenerator, name: impl Into<String>) -> Student {
        Student::new(ids, name).with_max_classes(self.registrar.max_classes)
    }
}
