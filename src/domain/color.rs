use rand::Rng;

/// Display color carried by a live cell.
/// The simulation never interprets it, it only copies it from parent to child.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random color with every channel in 0..200, dark enough to read on white
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0..200),
            g: rng.random_range(0..200),
            b: rng.random_range(0..200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_channels_stay_below_200() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = Rgb::random(&mut rng);
            assert!(c.r < 200 && c.g < 200 && c.b < 200);
        }
    }

    #[test]
    fn test_random_is_seed_reproducible() {
        let a = Rgb::random(&mut StdRng::seed_from_u64(42));
        let b = Rgb::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
