//! Student model and id generation.
//!
//! A student holds non-owning handles to the courses it is enrolled in,
//! unique by code and bounded by `max_classes`, plus an append-only activity
//! log. Ids come from an injected [`IdGenerator`] rather than global state.

use std::fmt;

use crate::course::CourseHandle;
use crate::error::{EnrollmentError, Result};
use crate::outcome::Outcome;

/// Default cap on concurrently held classes.
pub const DEFAULT_MAX_CLASSES: usize = 5;
/// Prefix used by [`SequentialIds::default`].
pub const DEFAULT_ID_PREFIX: &str = "UOB-";

/// Source of student ids. Ids must never repeat for a given generator.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Monotonic `<prefix><4-digit zero-padded sequence>` ids, starting at 1.
///
/// The start is a `u32` while the counter is a `u64`, so the sequence cannot
/// overflow in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Continues the sequence from `next` instead of 1.
    pub fn starting_at(mut self, next: u32) -> Self {
        self.next = u64::from(next);
        self
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{:04}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// A registered student.
#[derive(Debug, Clone)]
pub struct Student {
    id: String,
    name: String,
    classes: Vec<CourseHandle>,
    activity_log: Vec<String>,
    max_classes: usize,
}

impl Student {
    /// Registers a student under the next id from `ids`.
    pub fn new(ids: &mut impl IdGenerator, name: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            classes: Vec::new(),
            activity_log: Vec::new(),
            max_classes: DEFAULT_MAX_CLASSES,
        }
    }

    /// Sets the class limit.
    pub fn with_max_classes(mut self, max_classes: usize) -> Self {
        self.max_classes = max_classes;
        self
    }

    /// Re-registers under a fresh id and name, clearing classes and log.
    ///
    /// Held courses are forgotten without releasing their seats, matching a
    /// fresh registration.
    pub fn reinitialize(&mut self, ids: &mut impl IdGenerator, name: impl Into<String>) {
        self.id = ids.next_id();
        self.name = name.into();
        self.classes.clear();
        self.activity_log.clear();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[CourseHandle] {
        &self.classes
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }

    /// Codes of held classes, in enrollment order.
    pub fn class_codes(&self) -> Vec<String> {
        self.classes.iter().map(CourseHandle::code).collect()
    }

    /// Enrolls in `course`.
    ///
    /// Checks run in a fixed order: same course already held, class limit
    /// reached, same code already held, then course capacity.
    ///
    /// # Errors
    /// `Conflict`, `ClassLimitExceeded`, `AlreadyEnrolled` or `CourseFull`.
    /// The student is unchanged on any failure.
    pub fn enroll_in_class(&mut self, course: &CourseHandle) -> Result<Outcome> {
        if let Some(existing) = self.classes.iter().find(|held| *held == course) {
            return Err(EnrollmentError::Conflict {
                name: existing.name(),
            });
        }

        if self.classes.len() >= self.max_classes {
            return Err(EnrollmentError::ClassLimitExceeded {
                max: self.max_classes,
            });
        }

        let code = course.code();
        if self.classes.iter().any(|held| held.code() == code) {
            return Err(EnrollmentError::AlreadyEnrolled { code });
        }

        course.borrow_mut().enroll()?;

        let name = course.name();
        self.classes.push(course.clone());
        self.log_activity(format!("Enrolled in {name}."));
        log::debug!("{} enrolled in {}", self.id, code);
        Ok(Outcome::Enrolled { name, code })
    }

    /// Drops the held class with `course_code`.
    ///
    /// The reference is always removed. The seat is released through
    /// [`Course::unenroll`](crate::course::Course::unenroll); a course that is
    /// already empty keeps its counter at zero.
    ///
    /// # Errors
    /// `CourseNotFound` when no held class has that code.
    pub fn drop_class(&mut self, course_code: &str) -> Result<Outcome> {
        let index = self
            .classes
            .iter()
            .position(|held| held.code() == course_code)
            .ok_or_else(|| EnrollmentError::CourseNotFound(course_code.to_string()))?;

        let course = self.classes.remove(index);
        if let Err(err) = course.borrow_mut().unenroll() {
            log::warn!("{} dropped {}: {}", self.id, course_code, err);
        }

        let name = course.name();
        self.log_activity(format!("Dropped {name}."));
        log::debug!("{} dropped {}", self.id, course_code);
        Ok(Outcome::Dropped {
            name,
            code: course_code.to_string(),
        })
    }

    pub fn log_activity(&mut self, activity: impl Into<String>) {
        self.activity_log.push(activity.into());
    }

    pub fn activity_history(&self) -> &[String] {
        &self.activity_log
    }

    pub fn render_activity_log(&self) -> String {
        self.activity_log.join("\n")
    }

    /// `ID: UOB-0001, Name: Ali, Enrolled Classes: CS101, CS105`
    pub fn summary(&self) -> String {
        format!(
            "ID: {}, Name: {}, Enrolled Classes: {}",
            self.id,
            self.name,
            self.class_codes().join(", ")
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
