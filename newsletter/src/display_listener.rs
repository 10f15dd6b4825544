use std::{
    fmt,
    io::{self, Stdout, Write},
};

use common::{console::write_line, subject_observer::Observer};
use log::debug;

use crate::{Course, Display};

/// Listener rendering every announcement on its own sink.
///
/// Two listeners are equal when their display name and last received course
/// are; the sink takes no part in the comparison.
pub struct NewsletterDisplayListener<W = Stdout> {
    display_name: String,
    course: Course,
    out: W,
}

impl NewsletterDisplayListener<Stdout> {
    pub fn stdout(display_name: impl Into<String>) -> Self {
        Self::new(display_name, io::stdout())
    }
}

impl<W> NewsletterDisplayListener<W>
where
    W: Write,
{
    pub fn new(display_name: impl Into<String>, out: W) -> Self {
        NewsletterDisplayListener {
            display_name: display_name.into(),
            course: Course::default(),
            out,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn course(&self) -> &Course {
        &self.course
    }
}

impl<W> Display for NewsletterDisplayListener<W>
where
    W: Write,
{
    fn display(&mut self, course_name: &str, course_max: i32) {
        let line = format!(
            "Mostrando en {} [Curso {} abierto con capacidad de {}]",
            self.display_name, course_name, course_max
        );
        write_line(&mut self.out, &line);
    }
}

impl<W> Observer<Course> for NewsletterDisplayListener<W>
where
    W: Write,
{
    fn update(&mut self, course: &Course) {
        debug!("{} received {:?}", self.display_name, course);
        self.course.clone_from(course);
        self.display(&course.name, course.max);
    }
}

impl<W> PartialEq for NewsletterDisplayListener<W> {
    fn eq(&self, other: &Self) -> bool {
        self.display_name == other.display_name && self.course == other.course
    }
}

impl<W> fmt::Debug for NewsletterDisplayListener<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsletterDisplayListener")
            .field("display_name", &self.display_name)
            .field("course", &self.course)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use common::subject_observer::Observer;
    use common_test::SharedBuffer;

    use super::NewsletterDisplayListener;
    use crate::{Course, Display};

    #[test]
    fn test_display() {
        // Given
        let buffer = SharedBuffer::default();
        let mut listener = NewsletterDisplayListener::new("Teléfono", buffer.clone());

        // When
        listener.display("Progra 2", 30);

        // Then
        assert_eq!(
            "Mostrando en Teléfono [Curso Progra 2 abierto con capacidad de 30]\n",
            buffer.contents()
        );
        assert_eq!(
            &Course::default(),
            listener.course(),
            "Display should not change the listener"
        );
    }

    #[test]
    fn test_update() {
        // Given
        let buffer = SharedBuffer::default();
        let mut listener = NewsletterDisplayListener::new("Pagina Web", buffer.clone());

        // When
        listener.update(&Course::new("Bases de Datos", 25));

        // Then
        assert_eq!(
            &Course::new("Bases de Datos", 25),
            listener.course(),
            "Should keep the received course"
        );
        assert_eq!(
            vec!["Mostrando en Pagina Web [Curso Bases de Datos abierto con capacidad de 25]"],
            buffer.lines()
        );
    }

    #[test]
    fn test_update_renders_negative_capacity_as_is() {
        // Given
        let buffer = SharedBuffer::default();
        let mut listener = NewsletterDisplayListener::new("Kiosko", buffer.clone());

        // When
        listener.update(&Course::new("", -1));

        // Then
        assert_eq!(
            vec!["Mostrando en Kiosko [Curso  abierto con capacidad de -1]"],
            buffer.lines()
        );
    }

    #[test]
    fn test_eq_ignores_sink() {
        // Given
        let mut first = NewsletterDisplayListener::new("Teléfono", SharedBuffer::default());
        let second = NewsletterDisplayListener::new("Teléfono", SharedBuffer::default());
        let other = NewsletterDisplayListener::new("Pagina Web", SharedBuffer::default());

        // Then
        assert_eq!(first, second, "Same name and course should be equal");
        assert_ne!(first, other, "Different names should differ");

        // When
        first.update(&Course::new("Progra 2", 30));

        // Then
        assert_ne!(first, second, "Different courses should differ");
    }
}
