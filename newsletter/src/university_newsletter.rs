use common::subject_observer::Subject;
use log::{debug, trace};

use crate::{Course, NewsletterListener};

/// Publishes course announcements to its subscribers.
///
/// Subscribers are owned and notified in subscription order. A notification
/// updates the stored subscribers in place, so a later `unsubscribe` has to
/// name the listener as it is after the last announcement.
///
/// ```
/// use newsletter::{NewsletterDisplayListener, UniversityNewsletter};
///
/// let mut newsletter = UniversityNewsletter::new();
/// newsletter.subscribe(NewsletterDisplayListener::stdout("Teléfono"));
/// newsletter.update_data("Progra 2", 30);
/// ```
#[derive(Debug)]
pub struct UniversityNewsletter<L> {
    subscribers: Vec<L>,
    course: Course,
}

impl<L> Default for UniversityNewsletter<L> {
    fn default() -> Self {
        Self {
            subscribers: Default::default(),
            course: Default::default(),
        }
    }
}

impl<L> UniversityNewsletter<L>
where
    L: NewsletterListener,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn subscribers(&self) -> &[L] {
        &self.subscribers
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn subscribe(&mut self, subscriber: L) {
        self.subscribers.push(subscriber);
        debug!("Subscriber added, {} registered", self.subscribers.len());
    }

    pub fn notify_subscribers(&mut self) {
        let course = &self.course;
        for (index, subscriber) in self.subscribers.iter_mut().enumerate() {
            trace!("Notifying subscriber {index} of {course:?}");
            subscriber.update(course);
        }
    }

    pub fn update_data(&mut self, course_name: impl Into<String>, course_max: i32) -> &Course {
        self.course = Course::new(course_name, course_max);
        debug!("Course updated to {:?}", self.course);
        self.notify_subscribers();
        &self.course
    }
}

impl<L> UniversityNewsletter<L>
where
    L: NewsletterListener + PartialEq,
{
    /// Removes the first subscriber equal to `subscriber`, if any.
    pub fn unsubscribe(&mut self, subscriber: &L) -> Option<L> {
        let position = self.subscribers.iter().position(|s| s == subscriber)?;
        debug!("Subscriber {position} removed");
        Some(self.subscribers.remove(position))
    }
}

impl<L> Subject<Course> for UniversityNewsletter<L>
where
    L: NewsletterListener,
{
    type Observer = L;

    fn register_observer(&mut self, observer: L) {
        self.subscribe(observer);
    }

    fn unregister_observer(&mut self, observer: &L) -> Option<L>
    where
        L: PartialEq,
    {
        self.unsubscribe(observer)
    }

    fn notify_observers(&mut self) {
        self.notify_subscribers();
    }
}
