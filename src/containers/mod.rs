pub mod new_bill;

pub use new_bill::{Event, NewBill};

/// Blocking, user-visible message (the page's `window.alert`).
pub trait Alert {
    fn alert(&self, message: &str);
}
