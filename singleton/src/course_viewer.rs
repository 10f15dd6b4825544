use std::io::Write;

use crate::{CourseRegistry, VIEWER_BANNER};

/// Client of the registry: opening one prints its banner, then the course
/// the registry currently holds.
#[derive(Debug)]
pub struct CourseViewer {
    course_name: String,
}

impl CourseViewer {
    pub fn open<W>(registry: &mut CourseRegistry<W>) -> Self
    where
        W: Write,
    {
        registry.write_banner(VIEWER_BANNER);
        registry.print_name();
        CourseViewer {
            course_name: registry.course_name().to_owned(),
        }
    }

    /// Course held by the registry when this viewer was opened.
    pub fn course_name(&self) -> &str {
        &self.course_name
    }
}
