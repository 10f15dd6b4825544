use std::{
    io::{self, Stdout, Write},
    sync::{Mutex, OnceLock},
};

use common::console::write_line;
use log::debug;

use crate::{FIRST_ACCESS_BANNER, INITIAL_COURSE_NAME};

static REGISTRY: OnceLock<Mutex<CourseRegistry<Stdout>>> = OnceLock::new();

/// Process-wide registry printing to stdout, created on first access.
pub fn global() -> &'static Mutex<CourseRegistry<Stdout>> {
    REGISTRY.get_or_init(|| Mutex::new(CourseRegistry::init(io::stdout())))
}

/// Named course value echoing every change on its sink.
pub struct CourseRegistry<W> {
    course_name: String,
    change_count: u64,
    out: W,
}

impl<W> CourseRegistry<W>
where
    W: Write,
{
    /// Announces itself once; `reset` never does it again.
    pub fn init(mut out: W) -> Self {
        write_line(&mut out, FIRST_ACCESS_BANNER);
        CourseRegistry {
            course_name: INITIAL_COURSE_NAME.to_owned(),
            change_count: 0,
            out,
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn change_count(&self) -> u64 {
        self.change_count
    }

    pub fn set_course_name(&mut self, course_name: impl Into<String>) {
        self.course_name = course_name.into();
        self.change_count += 1;
        debug!(
            "Course name set to '{}' ({} changes)",
            self.course_name, self.change_count
        );
        self.print_name();
    }

    pub fn print_name(&mut self) {
        write_line(&mut self.out, &self.course_name);
    }

    pub(crate) fn write_banner(&mut self, banner: &str) {
        write_line(&mut self.out, banner);
    }

    pub fn reset(&mut self) {
        debug!("Course registry reset");
        INITIAL_COURSE_NAME.clone_into(&mut self.course_name);
        self.change_count = 0;
    }
}
