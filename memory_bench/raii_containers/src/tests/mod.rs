use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

mod properties;

/// Bumps a shared counter when dropped.
#[derive(Clone)]
struct Droppable(Arc<AtomicUsize>);

impl Droppable {
    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }
}

impl Drop for Droppable {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn drops(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Appends its id to a shared log when dropped.
struct Recorded {
    id: usize,
    log: Rc<RefCell<Vec<usize>>>,
}

impl Drop for Recorded {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}
