use arrayvec::ArrayVec;

/// Maximum number of buttons tracked at once.
pub const PRESSED_BUTTONS_CAP: usize = 32;

/// Buttons currently held on a seat, kept sorted ascending.
///
/// Adding never deduplicates, while erasing removes every copy of a button. A button that got
/// stuck after a lost release event is therefore cleared by the next release of that button.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PressedButtons {
    buttons: ArrayVec<u32, PRESSED_BUTTONS_CAP>,
}

impl PressedButtons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `button` in sorted position. Does nothing when the set is full.
    pub fn add(&mut self, button: u32) {
        if self.buttons.is_full() {
            trace!("pressed button set is full, dropping {button:#x}");
            return;
        }

        let idx = self.buttons.partition_point(|b| *b <= button);
        self.buttons.insert(idx, button);
    }

    /// Removes every occurrence of `button`.
    pub fn erase(&mut self, button: u32) {
        self.buttons.retain(|b| *b != button);
    }

    /// Whether the held buttons are exactly `keys`, which must be sorted ascending.
    pub fn equals(&self, keys: &[u32]) -> bool {
        self.buttons.as_slice() == keys
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.buttons
    }

    #[cfg(test)]
    pub fn verify_invariants(&self) {
        assert!(self.buttons.len() <= PRESSED_BUTTONS_CAP);
        assert!(
            self.buttons.windows(2).all(|w| w[0] <= w[1]),
            "buttons must be sorted: {:?}",
            self.buttons
        );
    }
}
