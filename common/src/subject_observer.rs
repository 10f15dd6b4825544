use std::{cell::RefCell, rc::Rc};

pub trait Observer<E> {
    fn update(&mut self, event: &E);
}

/// A shared observer stays reachable by its owner after registration, so the
/// refreshed state can be read back once the subject has notified it.
impl<E, O> Observer<E> for Rc<RefCell<O>>
where
    O: Observer<E> + ?Sized,
{
    fn update(&mut self, event: &E) {
        self.borrow_mut().update(event);
    }
}

impl<E, O> Observer<E> for Box<O>
where
    O: Observer<E> + ?Sized,
{
    fn update(&mut self, event: &E) {
        (**self).update(event);
    }
}

pub trait Subject<E> {
    type Observer: Observer<E>;

    fn register_observer(&mut self, observer: Self::Observer);

    /// Removes the first registered observer equal to `observer`.
    fn unregister_observer(&mut self, observer: &Self::Observer) -> Option<Self::Observer>
    where
        Self::Observer: PartialEq;

    fn notify_observers(&mut self);
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::Observer;

    #[derive(Default)]
    struct Counter {
        total: u32,
    }

    impl Observer<u32> for Counter {
        fn update(&mut self, event: &u32) {
            self.total += event;
        }
    }

    #[test]
    fn test_shared_observer_update() {
        // Given
        let counter = Rc::new(RefCell::new(Counter::default()));
        let mut handle = counter.clone();

        // When
        handle.update(&3);
        handle.update(&4);

        // Then
        assert_eq!(
            7,
            counter.borrow().total,
            "Updates through a shared handle should reach the inner observer"
        );
    }
}
