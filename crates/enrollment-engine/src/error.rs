//! Error types for enrollment and timetable operations.
//!
//! Every variant is a recoverable condition. Display strings are the
//! human-readable reasons; callers add their own `Error:` prefix.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// Enrollment attempted on a course already at capacity.
    #[error("{name} is full.")]
    CourseFull { name: String },

    /// The student already holds this exact course.
    #[error("Conflict with {name}.")]
    Conflict { name: String },

    /// The student already holds a different course with the same code.
    #[error("You are already enrolled in {code}.")]
    AlreadyEnrolled { code: String },

    #[error("You have reached the maximum number of classes ({max}).")]
    ClassLimitExceeded { max: usize },

    /// A drop by code or a lookup by time label matched nothing.
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    /// Unenroll requested on a course with no enrolled students.
    #[error("{name} has no enrolled students.")]
    NotEnrolled { name: String },

    #[error("Invalid schedule seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EnrollmentError {
    /// Whether this is a duplicate enrollment, by identity or by code.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Conflict { .. } | Self::AlreadyEnrolled { .. })
    }
}

pub type Result<T> = std::result::Result<T, EnrollmentError>;
