/// Hook invoked for every reload signal received from the room.
pub trait Reload: Send {
    fn reload(&mut self);
}

impl<F> Reload for F
where
    F: FnMut() + Send,
{
    fn reload(&mut self) {
        self()
    }
}
