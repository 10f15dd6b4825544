mod display_listener;
mod university_newsletter;

pub use display_listener::NewsletterDisplayListener;
pub use university_newsletter::UniversityNewsletter;

use common::subject_observer::Observer;

/// Course announced by a newsletter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub max: i32,
}

impl Course {
    pub fn new(name: impl Into<String>, max: i32) -> Self {
        Course {
            name: name.into(),
            max,
        }
    }
}

/// Anything able to receive course announcements.
pub trait NewsletterListener: Observer<Course> {}

impl<T> NewsletterListener for T where T: Observer<Course> + ?Sized {}

pub trait Display {
    fn display(&mut self, course_name: &str, course_max: i32);
}
