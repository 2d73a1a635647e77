/// Fire-and-forget terminal bell.
///
/// Tasks only record that a beep is due; the display emits it with the next
/// flush, so game logic never touches the terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bell {
    pending: u32,
}

impl Bell {
    pub fn ring(&mut self) {
        self.pending += 1;
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    /// Return the number of beeps requested since the last call.
    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}
