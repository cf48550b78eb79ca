//! Toroidal coordinate mapping.
//!
//! The grid's left edge touches its right edge and its top edge touches its
//! bottom edge. `Torus` turns a signed coordinate into a linear index into the
//! board buffer.

/// Fixed grid dimensions with wraparound on both axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Torus {
    width: usize,
    height: usize,
}

impl Torus {
    /// # Panics
    ///
    /// Panics if either dimension is zero or the area does not fit in `isize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid must be at least 1x1, got {width}x{height}");
        assert!(
            width
                .checked_mul(height)
                .is_some_and(|area| area <= isize::MAX as usize),
            "grid {width}x{height} is too large"
        );
        Self { width, height }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the torus
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Normalize a coordinate that is at most one cell outside the grid.
    ///
    /// Overshooting by one wraps to the opposite edge. This is a single step,
    /// not a modulo: neighbor lookups never reach further, so anything beyond
    /// one cell is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is more than one cell outside the grid.
    pub fn wrap(&self, x: isize, y: isize) -> (usize, usize) {
        (wrap_axis(x, self.width, 'x'), wrap_axis(y, self.height, 'y'))
    }

    /// Linear index of `(x, y)` after wrapping: `x + width * y`.
    ///
    /// # Panics
    ///
    /// Same contract as [`Torus::wrap`].
    pub fn index(&self, x: isize, y: isize) -> usize {
        let (x, y) = self.wrap(x, y);
        x + self.width * y
    }

    /// Inverse of [`Torus::index`] for in-range indices
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }
}

fn wrap_axis(value: isize, bound: usize, axis: char) -> usize {
    let bound = bound as isize;
    assert!(
        (-1..=bound).contains(&value),
        "{axis} = {value} is more than one cell outside 0..{bound}"
    );

    if value < 0 {
        (bound - 1) as usize
    } else if value >= bound {
        0
    } else {
        value as usize
    }
}
