use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where a component forwards its live surface handle.
///
/// `Some(node)` is published on mount, `None` on unmount.
pub enum RefSink<N> {
    Callback(Box<dyn FnMut(Option<N>)>),
    Container(Rc<RefCell<Option<N>>>),
}

impl<N> RefSink<N> {
    pub fn callback(f: impl FnMut(Option<N>) + 'static) -> Self {
        RefSink::Callback(Box::new(f))
    }

    /// A container sink plus the shared cell it writes into.
    pub fn container() -> (Self, Rc<RefCell<Option<N>>>) {
        let cell = Rc::new(RefCell::new(None));
        (RefSink::Container(Rc::clone(&cell)), cell)
    }

    pub fn publish(&mut self, node: Option<N>) {
        match self {
            RefSink::Callback(f) => f(node),
            RefSink::Container(cell) => *cell.borrow_mut() = node,
        }
    }
}

impl<N> fmt::Debug for RefSink<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefSink::Callback(_) => f.write_str("RefSink::Callback(..)"),
            RefSink::Container(_) => f.write_str("RefSink::Container(..)"),
        }
    }
}
