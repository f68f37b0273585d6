/// Health pool of a unit.
///
/// `current` is clamped into `[0, max]` by every mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    current: f32,
    max: f32,
}

impl Health {
    /// A full pool of `max` points.
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current health as a fraction of the maximum (0.0 when `max` is zero).
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Removes `amount` points and returns what is left.
    pub fn apply_damage(&mut self, amount: f32) -> f32 {
        self.current = (self.current - amount.max(0.0)).max(0.0);
        self.current
    }

    /// Restores up to `amount` points without exceeding the maximum.
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount.max(0.0)).min(self.max);
    }
}
