use pyprov::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter capturing messages for assertions
///
/// Messages are recorded behind a shared handle so they stay inspectable
/// after the reporter has been moved into a use case.
#[derive(Default)]
pub struct MockProgressReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle onto the recorded messages.
    pub fn log_handle(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.messages)
    }
}

impl ProgressReporter for MockProgressReporter {
    fn begin(&self, message: &str) {
        self.messages.borrow_mut().push(format!("begin: {}", message));
    }

    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(format!("report: {}", message));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {}", message));
    }

    fn complete(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("complete: {}", message));
    }
}
