//! `registrar` CLI — browse the weekly timetable and run enrollment scenarios.
//!
//! State lives for one invocation only; every command seeds a fresh timetable
//! from the config file (or the built-in term) and applies `--holiday` first.
//!
//! ## Usage
//!
//! ```sh
//! # Show Sunday's timetable
//! registrar schedule Sunday
//!
//! # Whole week as JSON
//! registrar courses --json
//!
//! # Which course runs at a given time
//! registrar --holiday Sunday lookup "10:30 AM - 12:30 PM"
//!
//! # Enroll a student in two courses, then drop one
//! registrar enroll --student Ali CS101 CS105 --drop CS101
//!
//! # Walk through the full enrollment scenario
//! registrar demo
//!
//! # Use a custom term
//! registrar --config term.toml schedule Monday
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use enrollment_engine::{CourseHandle, Day, EnrollmentError, RegistrarConfig, Schedule, Student};
use std::fmt::Display;

#[derive(Parser)]
#[command(
    name = "registrar",
    version,
    about = "Course enrollment and weekly timetable CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config with registrar settings and schedule seed
    #[arg(long, global = true)]
    config: Option<String>,

    /// Day to mark as a holiday before running the command (repeatable)
    #[arg(long, global = true)]
    holiday: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the timetable for one day, or every day
    Schedule {
        /// Day label (e.g. "Sunday"); all days when omitted
        day: Option<String>,
    },
    /// List every scheduled course
    Courses {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find the course running in a time slot
    Lookup {
        /// Slot label, e.g. "10:30 AM - 12:30 PM"
        time: String,
    },
    /// Register a student, enroll in courses by code, then apply drops
    Enroll {
        /// Student name
        #[arg(short, long)]
        student: String,
        /// Course codes to enroll in, in order
        #[arg(required = true)]
        codes: Vec<String>,
        /// Course codes to drop after enrolling (repeatable)
        #[arg(long = "drop")]
        drops: Vec<String>,
    },
    /// Run the enrollment walk-through against the seeded timetable
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = load_config(cli.config.as_deref())?;
    let mut schedule = config
        .build_schedule()
        .context("Failed to build schedule from config")?;

    for day in &cli.holiday {
        report(schedule.set_holiday(day));
    }

    match cli.command {
        Commands::Schedule { day } => match day {
            Some(day) => print!("{}", schedule.render_day(&day)),
            None => {
                for day in Day::ALL {
                    println!("{}", schedule.render_day(day.as_str()));
                }
            }
        },
        Commands::Courses { json } => {
            let entries = schedule.entries();
            if json {
                let pretty = serde_json::to_string_pretty(&entries)
                    .context("Failed to serialize schedule")?;
                println!("{}", pretty);
            } else if entries.is_empty() {
                println!("No courses available.");
            } else {
                for entry in &entries {
                    println!("{} {}: {}", entry.day, entry.time, entry.course.summary());
                }
            }
        }
        Commands::Lookup { time } => print_lookup(&schedule, &time),
        Commands::Enroll {
            student,
            codes,
            drops,
        } => {
            let mut ids = config.id_generator();
            let mut student = config.new_student(&mut ids, student);

            for code in &codes {
                match find_course(&schedule, code) {
                    Ok(course) => report(student.enroll_in_class(&course)),
                    Err(err) => println!("Error: {}", err),
                }
            }
            for code in &drops {
                report(student.drop_class(code));
            }

            println!("\n{}", student);
            println!("\nActivity Log:");
            println!("{}", student.render_activity_log());
        }
        Commands::Demo => run_demo(&config, &mut schedule)?,
    }

    Ok(())
}

/// The enrollment walk-through: enroll, attendance, drop, holiday, lookup.
fn run_demo(config: &RegistrarConfig, schedule: &mut Schedule) -> Result<()> {
    let mut ids = config.id_generator();
    let mut student = config.new_student(&mut ids, "Ali");

    let first_day = Day::ALL
        .into_iter()
        .find(|day| !schedule.is_holiday(*day))
        .context("Every day is a holiday; nothing to demo")?;

    print!("{}", schedule.render_day(first_day.as_str()));

    let course = schedule
        .course_at(first_day, 0)
        .cloned()
        .context("First slot is empty")?;
    println!();
    report(student.enroll_in_class(&course));

    print_activity_log(&student, "Activity Log:");

    {
        let mut course = course.borrow_mut();
        course.mark_attendance(student.id(), true);
        course.mark_attendance(student.id(), false);
    }
    println!("\nAttendance for {}:", course.name());
    println!("{}", course.borrow().render_attendance());

    println!("\nDropping a course:");
    report(student.drop_class(&course.code()));

    print_activity_log(&student, "Updated Activity Log:");

    println!("\nSetting holiday:");
    report(schedule.set_holiday(first_day.as_str()));

    println!("\nUpdated Schedule for {}:", first_day);
    print!("{}", schedule.render_day(first_day.as_str()));

    let time = schedule
        .slot_labels()
        .get(1)
        .cloned()
        .context("Schedule has no second slot")?;
    println!();
    print_lookup(schedule, &time);

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<RegistrarConfig> {
    match path {
        Some(path) => RegistrarConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path)),
        None => Ok(RegistrarConfig::default()),
    }
}

fn find_course(schedule: &Schedule, code: &str) -> enrollment_engine::Result<CourseHandle> {
    schedule
        .find_by_code(code)
        .ok_or_else(|| EnrollmentError::CourseNotFound(code.to_string()))
}

fn print_lookup(schedule: &Schedule, time: &str) {
    match schedule.lookup_by_time(time) {
        Ok(course) => println!("Lecture at {}: {}", time, course.borrow().summary()),
        Err(_) => println!("No lecture at {}.", time),
    }
}

fn print_activity_log(student: &Student, heading: &str) {
    println!("\n{}", heading);
    println!("{}", student.render_activity_log());
}

/// Domain failures are reported, not fatal.
fn report<T: Display>(result: enrollment_engine::Result<T>) {
    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(err) => println!("Error: {}", err),
    }
}
