use rand::Rng;

/// One rolled six-sided die. The face is fixed at roll time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    face: u8,
}

impl Die {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let face = rng.random_range(1..=6);
        Self { face }
    }

    pub fn face(&self) -> u8 {
        self.face
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn rolled_faces_stay_in_d6_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let die = Die::roll(&mut rng);
            assert!((1..=6).contains(&die.face()));
        }
    }

    #[test]
    fn rolled_faces_are_roughly_uniform() {
        // Chi-square goodness of fit over 12000 rolls, 2000 expected per
        // face. Critical value for df=5 at the 0.1% level is 20.52.
        let mut rng = StdRng::seed_from_u64(1337);
        let mut counts = [0u32; 6];
        for _ in 0..12_000 {
            counts[(Die::roll(&mut rng).face() - 1) as usize] += 1;
        }

        let expected = 2000.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = f64::from(observed) - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi_square < 20.52,
            "chi-square {chi_square} too high, counts: {counts:?}"
        );
    }
}
