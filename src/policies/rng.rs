use rand::{rngs::SmallRng, SeedableRng};

#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    pub seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    /// Independent stream for the `trial`-th run of a batch.
    pub fn for_trial(seed: Option<u64>, trial: u64) -> Self {
        Self::new(seed.map(|seed| seed.wrapping_add(trial)))
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
