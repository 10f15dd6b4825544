use std::{io::Write, sync::Mutex};

use common::console::write_line;
use log::debug;
use newsletter::{NewsletterDisplayListener, UniversityNewsletter};
use singleton::{CourseRegistry, CourseViewer};

use crate::{config::app::AppConfig, AppError};

pub fn greet<W: Write>(out: &mut W, config: &AppConfig) {
    write_line(out, &config.greeting);
}

/// Subscribes one display per configured name, each writing to a sink built
/// by `sink`, then announces the configured course.
pub fn run_newsletter<W, F>(
    config: &AppConfig,
    mut sink: F,
) -> UniversityNewsletter<NewsletterDisplayListener<W>>
where
    W: Write,
    F: FnMut() -> W,
{
    let mut newsletter = UniversityNewsletter::new();
    for display_name in &config.displays {
        newsletter.subscribe(NewsletterDisplayListener::new(display_name.as_str(), sink()));
    }
    debug!("{} displays subscribed", newsletter.len());

    newsletter.update_data(config.course_name.as_str(), config.course_max);
    newsletter
}

/// Prints the registry, then renames it and opens a viewer for every name.
pub fn run_singleton<W>(
    registry: &Mutex<CourseRegistry<W>>,
    renamed_courses: &[String],
) -> Result<Vec<CourseViewer>, AppError>
where
    W: Write,
{
    let mut registry = registry.lock().map_err(|_| AppError::RegistryPoisoned)?;
    registry.print_name();

    let viewers = renamed_courses
        .iter()
        .map(|course_name| {
            registry.set_course_name(course_name.as_str());
            CourseViewer::open(&mut *registry)
        })
        .collect();
    Ok(viewers)
}
