use std::cell::RefCell;
use std::rc::Rc;

use crate::control::rocket::RocketStatus;

/// Reacts to rocket state changes. Observers see a snapshot and cannot feed
/// anything back into the rocket.
pub trait Observer {
    fn on_update(&mut self, status: &RocketStatus);
}

pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// Ordered list of observers; registration order is notification order.
#[derive(Default)]
pub struct Observable {
    observers: Vec<SharedObserver>,
}

impl Observable {
    pub fn new() -> Self {
        Observable {
            observers: Vec::new(),
        }
    }

    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    pub fn notify_observers(&self, status: &RocketStatus) {
        for observer in &self.observers {
            observer.borrow_mut().on_update(status);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
