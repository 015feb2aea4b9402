use serde::{Deserialize, Serialize};

/// Single optional slot. Mutators report whether the slot changed so the
/// reducer can tell the view to re-render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.current.as_ref() == Some(item)
    }

    /// Replaces whatever was selected.
    pub fn select(&mut self, item: T) -> bool {
        if self.is_selected(&item) {
            return false;
        }
        self.current = Some(item);
        true
    }

    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clears when `item` is already selected, selects it otherwise.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.is_selected(&item) {
            self.current = None;
        } else {
            self.current = Some(item);
        }
        true
    }
}
