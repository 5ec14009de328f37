/// Receives the counter value after every mutation.
///
/// Screens usually register a closure that updates their label; any
/// `FnMut(i64)` qualifies.
pub trait Observer {
    fn on_change(&mut self, value: i64);
}

impl<F> Observer for F
where
    F: FnMut(i64),
{
    fn on_change(&mut self, value: i64) {
        self(value)
    }
}
