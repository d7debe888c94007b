/// Source of uniform values in `[0, 1)` used for AI jitter and collision tie-breaks.
pub trait RandomSource: Send {
    fn next_f32(&mut self) -> f32;
}

/// Thread-local generator from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f32(&mut self) -> f32 {
        rand::random::<f32>()
    }
}

/// Replays a fixed list of values, cycling when exhausted. Used for deterministic runs.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f32>) -> Self {
        SequenceRandom { values, cursor: 0 }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();

        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
