//! Circular cursor over a non-empty list

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: isize, len: usize },
    #[error("carousel needs at least one item")]
    InvalidState,
}

/// Always holds at least one item and `index < items.len()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "CarouselParts<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

#[derive(Deserialize)]
struct CarouselParts<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> TryFrom<CarouselParts<T>> for Carousel<T> {
    type Error = CarouselError;

    fn try_from(parts: CarouselParts<T>) -> Result<Self, Self::Error> {
        let mut carousel = Carousel::new(parts.items)?;
        carousel.jump_to(parts.index as isize)?;
        Ok(carousel)
    }
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::InvalidState);
        }
        Ok(Self { items, index: 0 })
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn previous(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }

    pub fn jump_to(&mut self, index: isize) -> Result<(), CarouselError> {
        let len = self.items.len();
        match usize::try_from(index) {
            Ok(i) if i < len => {
                self.index = i;
                Ok(())
            }
            _ => Err(CarouselError::OutOfRange { index, len }),
        }
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A carousel always holds at least one item.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel() -> Carousel<&'static str> {
        Carousel::new(vec!["endfield", "rhodes", "steel-oath", "sesqa"]).unwrap()
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(
            Carousel::<u8>::new(Vec::new()),
            Err(CarouselError::InvalidState)
        );
    }

    #[test]
    fn previous_from_zero_wraps_to_last() {
        let mut c = carousel();
        c.previous();
        assert_eq!(c.index(), 3);
        assert_eq!(*c.current(), "sesqa");
    }

    #[test]
    fn single_item_is_never_empty() {
        let mut c = Carousel::new(vec!["endfield"]).unwrap();
        c.next();
        c.previous();
        assert!(!c.is_empty());
        assert_eq!(c.len(), 1);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = carousel();
        for _ in 0..c.len() {
            c.next();
        }
        assert_eq!(c.index(), 0);
        assert_eq!(*c.current(), "endfield");
    }

    #[test]
    fn single_item_stays_put() {
        let mut c = Carousel::new(vec![7]).unwrap();
        c.next();
        c.previous();
        assert_eq!(*c.current(), 7);
    }

    #[test]
    fn jump_bounds() {
        let mut c = carousel();
        assert_eq!(c.jump_to(2), Ok(()));
        assert_eq!(*c.current(), "steel-oath");
        assert_eq!(
            c.jump_to(4),
            Err(CarouselError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            c.jump_to(-1),
            Err(CarouselError::OutOfRange { index: -1, len: 4 })
        );
        // Failed jumps leave the cursor where it was.
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn deserializing_checks_invariants() {
        let ok: Carousel<u8> = ron::from_str("(items: [1, 2, 3], index: 2)").unwrap();
        assert_eq!(*ok.current(), 3);

        assert!(ron::from_str::<Carousel<u8>>("(items: [], index: 0)").is_err());
        assert!(ron::from_str::<Carousel<u8>>("(items: [1], index: 1)").is_err());
    }
}
