//! # enrollment-engine
//!
//! Course enrollment and weekly timetable engine.
//!
//! Tracks capacity-bounded courses with attendance ledgers, students holding a
//! bounded set of course references, and a fixed day × slot timetable that can
//! be queried by time label. Every mutating operation returns a [`Result`] of
//! [`Outcome`] so callers decide how to present successes and failures.
//!
//! ## Quick start
//!
//! ```rust
//! use enrollment_engine::{Schedule, SequentialIds, Student};
//!
//! let schedule = Schedule::standard();
//! let mut ids = SequentialIds::default();
//! let mut ali = Student::new(&mut ids, "Ali");
//!
//! let cs101 = schedule.find_by_code("CS101").unwrap();
//! let outcome = ali.enroll_in_class(&cs101).unwrap();
//! assert_eq!(outcome.to_string(), "Successfully enrolled in Data Structures!");
//! assert_eq!(cs101.borrow().enrolled_students(), 1);
//!
//! ali.drop_class("CS101").unwrap();
//! assert_eq!(cs101.borrow().enrolled_students(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`course`] — `Course`, `Priority`, and the shared `CourseHandle`
//! - [`student`] — `Student` plus the `IdGenerator` seam for student ids
//! - [`schedule`] — `Day` and the day × slot `Schedule` table
//! - [`outcome`] — success values returned by mutating operations
//! - [`config`] — TOML-loadable registrar settings and schedule seed data
//! - [`error`] — Error types

pub mod config;
pub mod course;
pub mod error;
pub mod outcome;
pub mod schedule;
pub mod student;

pub use config::{CourseSeed, RegistrarConfig, RegistrarSettings, ScheduleSeed};
pub use course::{Course, CourseHandle, Priority};
pub use error::{EnrollmentError, Result};
pub use outcome::Outcome;
pub use schedule::{Day, Schedule, SlotEntry, SLOTS_PER_DAY};
pub use student::{IdGenerator, SequentialIds, Student};
