//! The lesson programs, one per binary.
//!
//! Each lesson renders a fixed sequence of lines. [`Lesson::run`] writes
//! them to stdout; [`Lesson::render`] returns them as a `String`.

use std::io::{self, Write as _};

use tracing::debug;

use crate::conditional;
use crate::double::{instances, times_two};
use crate::error::Result;
use crate::flagged::{collapsed, split};
use crate::label::times_two_and_print;

/// A self-contained demonstration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    /// `times_two` by inference and by annotation.
    GenericDouble,
    /// Named `i32` / `f64` instances of `times_two`.
    ExplicitInstantiation,
    /// Doubling then printing through per-type `Print` impls.
    TypePrint,
    /// Const, run-time and gated conditional doubling.
    ConditionalDouble,
    /// The single-body flagged type.
    FlagClass,
    /// The per-flag-body flagged type.
    FlagClassSplit,
}

impl Lesson {
    pub const ALL: [Lesson; 6] = [
        Lesson::GenericDouble,
        Lesson::ExplicitInstantiation,
        Lesson::TypePrint,
        Lesson::ConditionalDouble,
        Lesson::FlagClass,
        Lesson::FlagClassSplit,
    ];

    /// The binary name of this lesson.
    pub const fn name(self) -> &'static str {
        match self {
            Lesson::GenericDouble => "generic_double",
            Lesson::ExplicitInstantiation => "explicit_instantiation",
            Lesson::TypePrint => "type_print",
            Lesson::ConditionalDouble => "conditional_double",
            Lesson::FlagClass => "flag_class",
            Lesson::FlagClassSplit => "flag_class_split",
        }
    }

    pub fn from_name(name: &str) -> Option<Lesson> {
        Self::ALL.into_iter().find(|lesson| lesson.name() == name)
    }

    /// Write this lesson's lines into `out`.
    pub fn write_to<W: std::fmt::Write>(self, out: &mut W) -> std::fmt::Result {
        match self {
            Lesson::GenericDouble => {
                writeln!(out, "{}", times_two(10))?;
                writeln!(out, "{}", times_two::<i32>(10))?;
                writeln!(out, "{}", times_two(10.5))?;
                writeln!(out, "{}", times_two::<f64>(f64::from(10_i32)))
            }
            Lesson::ExplicitInstantiation => {
                writeln!(out, "{}", instances::times_two_i32(10))?;
                writeln!(out, "{}", instances::times_two_f64(10.5))
            }
            Lesson::TypePrint => {
                times_two_and_print(out, 10)?;
                times_two_and_print(out, 10.5)
            }
            Lesson::ConditionalDouble => {
                conditional::print_times_two_and_or::<true, 10, _>(out)?;
                conditional::print_times_two_and_or::<false, 3, _>(out)?;
                conditional::print_times_two_and_or_runtime(out, true, 10)?;
                conditional::print_times_two_and_or_runtime(out, false, 3)?;
                conditional::print_times_two_and_or_gated::<true, 10, _>(out)?;
                conditional::print_times_two_and_or_gated::<false, 3, _>(out)
            }
            Lesson::FlagClass => {
                collapsed::TimesTwoAndOrPrint::<true, 10, i32>::new(10).print(out)?;
                collapsed::TimesTwoAndOrPrint::<false, 3, i32>::new(3).print(out)
            }
            Lesson::FlagClassSplit => {
                split::TimesTwoAndOrPrint::<true, 10, i32>::new(10).print(out)?;
                split::TimesTwoAndOrPrint::<false, 3, i32>::new(3).print(out)
            }
        }
    }

    pub fn render(self) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    /// Render, then write to stdout.
    pub fn run(self) -> Result<()> {
        debug!(lesson = self.name(), "running lesson");
        let rendered = self.render()?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        debug!(lesson = self.name(), bytes = rendered.len(), "lesson written");
        Ok(())
    }
}

impl std::fmt::Display for Lesson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Install a stderr subscriber at `WARN`.
///
/// Stdout carries only lesson lines. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
