//! Banner carousel position.
//!
//! Pure index arithmetic; the storefront drives it from a timer and from
//! the prev/next/dot buttons.

/// Index of the visible slide among `len` slides, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Start at the first slide.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Advance one slide.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Go back one slide.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    /// Autoplay step: same as [`Carousel::next`], from wherever the carousel is now.
    pub fn tick(&mut self) -> usize {
        self.next()
    }
}
