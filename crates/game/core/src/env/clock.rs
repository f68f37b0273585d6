/// Monotonic simulation clock owned by the host.
///
/// The decision layer never reads wall time; it receives `elapsed_secs` and
/// the frame delta from this value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Frames simulated so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
    /// Duration of the last frame in seconds.
    pub delta_secs: f32,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock frozen at `elapsed_secs`, handy for single-frame queries.
    pub fn at(elapsed_secs: f32) -> Self {
        Self {
            tick: 0,
            elapsed_secs,
            delta_secs: 0.0,
        }
    }

    pub fn now(&self) -> f32 {
        self.elapsed_secs
    }

    /// Advances by one frame of `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.tick += 1;
        self.elapsed_secs += dt;
        self.delta_secs = dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_never_goes_backwards() {
        let mut clock = SimClock::new();
        clock.advance(0.25);
        clock.advance(-1.0);
        assert_eq!(clock.tick, 2);
        assert_eq!(clock.now(), 0.25);
        assert_eq!(clock.delta_secs, 0.0);
    }
}
