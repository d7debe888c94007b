use nalgebra::Vector2;

/// Normalized slots of the 1-4-4-2, from the goalkeeper forwards, read as
/// if the team attacks to the right.
const FOUR_FOUR_TWO: [(f32, f32); 11] = [
    (0.04, 0.5),
    (0.18, 0.2),
    (0.18, 0.4),
    (0.18, 0.6),
    (0.18, 0.8),
    (0.38, 0.15),
    (0.34, 0.35),
    (0.34, 0.65),
    (0.38, 0.85),
    (0.5, 0.35),
    (0.5, 0.65),
];

/// The last slots of a formation are the attackers.
const ATTACKING_SLOTS: usize = 4;

#[derive(Debug, Clone)]
pub struct Formation {
    slots: Vec<Vector2<f32>>,
    attackers: usize,
}

impl Default for Formation {
    fn default() -> Self {
        Self::four_four_two()
    }
}

impl Formation {
    pub fn four_four_two() -> Self {
        Formation {
            slots: FOUR_FOUR_TWO
                .iter()
                .map(|(x, y)| Vector2::new(*x, *y))
                .collect(),
            attackers: ATTACKING_SLOTS,
        }
    }

    pub fn slots(&self) -> &[Vector2<f32>] {
        &self.slots
    }

    pub fn attacking_slots(&self) -> impl Iterator<Item = usize> {
        let start = self.slots.len().saturating_sub(self.attackers);

        start..self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_four_two() {
        let formation = Formation::four_four_two();

        assert_eq!(formation.slots().len(), 11);
        assert_eq!(formation.slots()[0], Vector2::new(0.04, 0.5));
        assert_eq!(formation.attacking_slots().collect::<Vec<_>>(), vec![7, 8, 9, 10]);
    }

    #[test]
    fn test_slots_are_normalized() {
        let formation = Formation::default();

        assert!(formation
            .slots()
            .iter()
            .all(|slot| (0.0..=1.0).contains(&slot.x) && (0.0..=1.0).contains(&slot.y)));
    }
}
