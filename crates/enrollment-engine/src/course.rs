//! Course model.
//!
//! A course is a capacity-bounded enrollment unit with an attendance ledger.
//! The occupancy counter only moves through [`Course::enroll`] and
//! [`Course::unenroll`], so `0 <= enrolled_students <= max_students` holds at
//! all times.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EnrollmentError, Result};

/// Credit hours assigned when none are given.
pub const DEFAULT_CREDIT_HOURS: u32 = 3;
/// Capacity assigned when none is given.
pub const DEFAULT_MAX_STUDENTS: u32 = 25;

/// Course priority. Any label is accepted; unknown labels are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Custom(String),
}

impl From<&str> for Priority {
    fn from(s: &str) -> Self {
        let label = s.trim();
        match label.to_ascii_lowercase().as_str() {
            "low" => Priority::Low,
            "normal" => Priority::Normal,
            "high" => Priority::High,
            _ => Priority::Custom(label.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::from(s.as_str())
    }
}

impl FromStr for Priority {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Priority::from(s))
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        p.to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => f.write_str("Low"),
            Priority::Normal => f.write_str("Normal"),
            Priority::High => f.write_str("High"),
            Priority::Custom(label) => f.write_str(label),
        }
    }
}

/// A course offering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    name: String,
    code: String,
    credit_hours: u32,
    max_students: u32,
    enrolled_students: u32,
    priority: Priority,
    /// Student id → presence marks in the order they were recorded.
    attendance: BTreeMap<String, Vec<bool>>,
}

impl Course {
    /// Creates an empty course with default credit hours, capacity and priority.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            credit_hours: DEFAULT_CREDIT_HOURS,
            max_students: DEFAULT_MAX_STUDENTS,
            enrolled_students: 0,
            priority: Priority::Normal,
            attendance: BTreeMap::new(),
        }
    }

    /// Sets the credit hours. Zero is raised to 1.
    pub fn with_credit_hours(mut self, credit_hours: u32) -> Self {
        self.credit_hours = credit_hours.max(1);
        self
    }

    /// Sets the capacity. Zero is raised to 1; seed data with a zero
    /// capacity is rejected earlier by [`Schedule::build`](crate::Schedule::build).
    pub fn with_max_students(mut self, max_students: u32) -> Self {
        self.max_students = max_students.max(1);
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn credit_hours(&self) -> u32 {
        self.credit_hours
    }

    pub fn max_students(&self) -> u32 {
        self.max_students
    }

    pub fn enrolled_students(&self) -> u32 {
        self.enrolled_students
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn is_full(&self) -> bool {
        self.enrolled_students >= self.max_students
    }

    pub fn seats_left(&self) -> u32 {
        self.max_students.saturating_sub(self.enrolled_students)
    }

    /// Clears occupancy and attendance, keeping the course identity.
    ///
    /// Students already holding this course keep their reference; their later
    /// drop is absorbed by [`Course::unenroll`] refusing to go below zero.
    pub fn reset(&mut self) {
        self.enrolled_students = 0;
        self.attendance.clear();
    }

    /// Takes one seat.
    ///
    /// # Errors
    /// Returns `EnrollmentError::CourseFull` when no seat is left. Nothing is
    /// changed on failure.
    pub fn enroll(&mut self) -> Result<()> {
        if self.is_full() {
            log::warn!("{} ({}) is full", self.name, self.code);
            return Err(EnrollmentError::CourseFull {
                name: self.name.clone(),
            });
        }
        self.enrolled_students += 1;
        Ok(())
    }

    /// Releases one seat.
    ///
    /// # Errors
    /// Returns `EnrollmentError::NotEnrolled` when the course is empty.
    pub fn unenroll(&mut self) -> Result<()> {
        if self.enrolled_students == 0 {
            return Err(EnrollmentError::NotEnrolled {
                name: self.name.clone(),
            });
        }
        self.enrolled_students -= 1;
        Ok(())
    }

    /// Appends a presence mark for `student_id`. Enrollment is not checked.
    pub fn mark_attendance(&mut self, student_id: &str, present: bool) {
        self.attendance
            .entry(student_id.to_string())
            .or_default()
            .push(present);
        log::debug!(
            "attendance for {} in {}: {}",
            student_id,
            self.code,
            if present { "present" } else { "absent" }
        );
    }

    /// Read-only view of the whole attendance ledger.
    pub fn attendance_snapshot(&self) -> &BTreeMap<String, Vec<bool>> {
        &self.attendance
    }

    pub fn attendance_for(&self, student_id: &str) -> Option<&[bool]> {
        self.attendance.get(student_id).map(Vec::as_slice)
    }

    /// One line per student: `UOB-0001: present, absent`.
    pub fn render_attendance(&self) -> String {
        if self.attendance.is_empty() {
            return "No attendance recorded.".to_string();
        }
        self.attendance
            .iter()
            .map(|(id, marks)| {
                let marks: Vec<&str> = marks
                    .iter()
                    .map(|&p| if p { "present" } else { "absent" })
                    .collect();
                format!("{}: {}", id, marks.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `Data Structures (CS101), Priority: High, Credit Hours: 3, Enrolled: 0/25`
    pub fn summary(&self) -> String {
        format!(
            "{} ({}), Priority: {}, Credit Hours: {}, Enrolled: {}/{}",
            self.name,
            self.code,
            self.priority,
            self.credit_hours,
            self.enrolled_students,
            self.max_students
        )
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Shared handle to a course owned by the timetable.
///
/// Students keep clones of the handle, so a course stays reachable from a
/// student after its day is turned into a holiday. Two handles are equal only
/// when they point at the same course.
#[derive(Debug, Clone)]
pub struct CourseHandle(Rc<RefCell<Course>>);

impl CourseHandle {
    pub fn new(course: Course) -> Self {
        Self(Rc::new(RefCell::new(course)))
    }

    pub fn borrow(&self) -> Ref<'_, Course> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Course> {
        self.0.borrow_mut()
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }

    pub fn code(&self) -> String {
        self.0.borrow().code.clone()
    }

    /// Owned copy of the course as it is right now.
    pub fn snapshot(&self) -> Course {
        self.0.borrow().clone()
    }
}

impl PartialEq for CourseHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for CourseHandle {}

impl From<Course> for CourseHandle {
    fn from(course: Course) -> Self {
        Self::new(course)
    }
}
