//! Weekly timetable: a day × slot table of shared course handles.
//!
//! Slot labels are stored once and shared by every day, so slot `i` on any
//! day runs during `slot_labels()[i]`. A day either holds exactly
//! [`SLOTS_PER_DAY`] courses or is a holiday with none.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ScheduleSeed, STANDARD_COURSES, STANDARD_SLOTS};
use crate::course::{Course, CourseHandle};
use crate::error::{EnrollmentError, Result};
use crate::outcome::Outcome;

/// Number of teaching slots per day.
pub const SLOTS_PER_DAY: usize = 4;

const DAYS: usize = Day::ALL.len();

/// Teaching day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
}

impl Day {
    /// All days in declaration order, which is also lookup order.
    pub const ALL: [Day; 4] = [Day::Sunday, Day::Monday, Day::Tuesday, Day::Wednesday];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
        }
    }
}

impl FromStr for Day {
    type Err = EnrollmentError;

    /// Exact match on the day name; `"sunday"` and `" Sunday"` are rejected.
    fn from_str(s: &str) -> Result<Self> {
        Day::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| EnrollmentError::InvalidDay(s.to_string()))
    }
}

impl TryFrom<String> for Day {
    type Error = EnrollmentError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.as_str().to_string()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable snapshot of one occupied timetable cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEntry {
    pub day: Day,
    pub slot: usize,
    pub time: String,
    pub course: Course,
}

type DayRow = [CourseHandle; SLOTS_PER_DAY];

/// The weekly timetable. Owns every course placed in it.
#[derive(Debug)]
pub struct Schedule {
    slots: [String; SLOTS_PER_DAY],
    /// Indexed by [`Day::index`]; `None` marks a holiday.
    days: [Option<DayRow>; DAYS],
}

impl Schedule {
    /// Builds the built-in 16-course timetable.
    pub fn standard() -> Self {
        let slots = STANDARD_SLOTS.map(str::to_string);
        let days = std::array::from_fn(|d| {
            Some(std::array::from_fn(|slot| {
                let (name, code, priority) = STANDARD_COURSES[d][slot];
                let course = Course::new(name, code);
                let course = match priority {
                    Some(label) => course.with_priority(label),
                    None => course,
                };
                CourseHandle::new(course)
            }))
        });
        Self { slots, days }
    }

    /// Builds a timetable from seed data.
    ///
    /// # Errors
    /// Returns `EnrollmentError::InvalidSeed` unless the seed has exactly
    /// [`SLOTS_PER_DAY`] slot labels and exactly one course per (day, slot)
    /// cell, with unique non-empty codes and positive capacity and credit hours.
    pub fn build(seed: &ScheduleSeed) -> Result<Self> {
        let slots: [String; SLOTS_PER_DAY] =
            seed.slots.clone().try_into().map_err(|labels: Vec<String>| {
                EnrollmentError::InvalidSeed(format!(
                    "expected {} slot labels, got {}",
                    SLOTS_PER_DAY,
                    labels.len()
                ))
            })?;

        let mut cells: [[Option<CourseHandle>; SLOTS_PER_DAY]; DAYS] =
            std::array::from_fn(|_| std::array::from_fn(|_| None));
        let mut codes: Vec<&str> = Vec::with_capacity(seed.courses.len());

        for entry in &seed.courses {
            if entry.slot >= SLOTS_PER_DAY {
                return Err(EnrollmentError::InvalidSeed(format!(
                    "{}: slot {} out of range 0..{}",
                    entry.code, entry.slot, SLOTS_PER_DAY
                )));
            }
            if entry.code.trim().is_empty() {
                return Err(EnrollmentError::InvalidSeed(format!(
                    "{} slot {}: empty course code",
                    entry.day, entry.slot
                )));
            }
            if entry.max_students == 0 || entry.credit_hours == 0 {
                return Err(EnrollmentError::InvalidSeed(format!(
                    "{}: capacity and credit hours must be positive",
                    entry.code
                )));
            }
            if codes.contains(&entry.code.as_str()) {
                return Err(EnrollmentError::InvalidSeed(format!(
                    "duplicate course code {}",
                    entry.code
                )));
            }

            let cell = &mut cells[entry.day.index()][entry.slot];
            if cell.is_some() {
                return Err(EnrollmentError::InvalidSeed(format!(
                    "{} slot {} assigned twice",
                    entry.day, entry.slot
                )));
            }
            *cell = Some(CourseHandle::new(entry.to_course()));
            codes.push(&entry.code);
        }

        let mut days: [Option<DayRow>; DAYS] = std::array::from_fn(|_| None);
        for (day, row) in Day::ALL.into_iter().zip(cells) {
            let row = row
                .into_iter()
                .enumerate()
                .map(|(slot, cell)| {
                    cell.ok_or_else(|| {
                        EnrollmentError::InvalidSeed(format!("{day} slot {slot} has no course"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            // Length is SLOTS_PER_DAY by construction.
            days[day.index()] = row.try_into().ok();
        }

        log::debug!("built schedule with {} courses", seed.courses.len());
        Ok(Self { slots, days })
    }

    pub fn slot_labels(&self) -> &[String] {
        &self.slots
    }

    pub fn is_holiday(&self, day: Day) -> bool {
        self.days[day.index()].is_none()
    }

    /// Courses on `day` in slot order; empty on a holiday.
    pub fn day_courses(&self, day: Day) -> &[CourseHandle] {
        self.days[day.index()]
            .as_ref()
            .map_or(&[][..], |row| &row[..])
    }

    pub fn course_at(&self, day: Day, slot: usize) -> Option<&CourseHandle> {
        self.day_courses(day).get(slot)
    }

    /// First course with `code`, in day order then slot order.
    pub fn find_by_code(&self, code: &str) -> Option<CourseHandle> {
        Day::ALL
            .into_iter()
            .flat_map(|day| self.day_courses(day))
            .find(|course| course.borrow().code() == code)
            .cloned()
    }

    /// Renders one line per slot, or a "No courses available." line for an
    /// unknown label or a holiday.
    pub fn render_day(&self, label: &str) -> String {
        let day = label.parse::<Day>().ok();
        let mut out = format!("Schedule for {label}:\n");

        let courses = day.map_or(&[][..], |d| self.day_courses(d));
        if courses.is_empty() {
            out.push_str("No courses available.\n");
        } else {
            for (time, course) in self.slots.iter().zip(courses) {
                out.push_str(&format!("{}: {}\n", time, course.borrow().summary()));
            }
        }
        out
    }

    /// Empties `label`'s day. Students keep their handles to its courses.
    ///
    /// # Errors
    /// Returns `EnrollmentError::InvalidDay` for an unrecognized label.
    pub fn set_holiday(&mut self, label: &str) -> Result<Outcome> {
        let day: Day = label.parse()?;
        self.days[day.index()] = None;
        log::debug!("holiday set for {day}");
        Ok(Outcome::HolidaySet { day })
    }

    /// Course in the slot labelled `time_label`, taking the first non-holiday
    /// day in day order.
    ///
    /// # Errors
    /// Returns `EnrollmentError::CourseNotFound` when no slot has that label
    /// or every day is a holiday.
    pub fn lookup_by_time(&self, time_label: &str) -> Result<CourseHandle> {
        let not_found = || EnrollmentError::CourseNotFound(time_label.to_string());
        let slot = self
            .slots
            .iter()
            .position(|label| label == time_label)
            .ok_or_else(not_found)?;

        Day::ALL
            .into_iter()
            .find_map(|day| self.course_at(day, slot).cloned())
            .ok_or_else(not_found)
    }

    /// Snapshots of every occupied cell, in day order then slot order.
    pub fn entries(&self) -> Vec<SlotEntry> {
        Day::ALL
            .into_iter()
            .flat_map(|day| {
                self.day_courses(day)
                    .iter()
                    .enumerate()
                    .map(move |(slot, course)| SlotEntry {
                        day,
                        slot,
                        time: self.slots[slot].clone(),
                        course: course.snapshot(),
                    })
            })
            .collect()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::standard()
    }
}
