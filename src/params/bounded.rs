//! Scalar values paired with their allowed range.

/// A value that must stay within `[min, max]`.
///
/// Bounds belong to the program. The settings file only stores values, which
/// are clamped on load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounded<T> {
    value: T,
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Bounded<T> {
    /// Create a bounded value, clamping `value` into range.
    pub fn new(value: T, min: T, max: T) -> Self {
        let mut bounded = Self {
            value: min,
            min,
            max,
        };
        bounded.set(value);
        bounded
    }

    pub fn get(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    /// Store `value`, clamped into `[min, max]`.
    pub fn set(&mut self, value: T) {
        self.value = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
    }

    /// Mutable access for widgets that edit in place. Call [`Bounded::clamp`] afterwards.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Re-apply the bounds after an in-place edit.
    pub fn clamp(&mut self) {
        let value = self.value;
        self.set(value);
    }

    pub fn range(&self) -> std::ops::RangeInclusive<T> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_initial_value() {
        assert_eq!(Bounded::new(10.0_f32, 0.0, 5.0).get(), 5.0);
        assert_eq!(Bounded::new(-1_i32, 3, 100).get(), 3);
        assert_eq!(Bounded::new(20_u32, 3, 100).get(), 20);
    }

    #[test]
    fn test_set_and_in_place_edit() {
        let mut magnitude = Bounded::new(0.3_f32, 0.0, 5.0);
        magnitude.set(-2.0);
        assert_eq!(magnitude.get(), 0.0);

        *magnitude.value_mut() = 7.5;
        magnitude.clamp();
        assert_eq!(magnitude.get(), 5.0);
        assert_eq!(magnitude.range(), 0.0..=5.0);
    }
}
