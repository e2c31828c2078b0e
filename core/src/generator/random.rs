use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Generation strategy that places hazards uniformly at random.
///
/// Every draw picks among the cells that are still free, so the layout always holds exactly the
/// requested number of hazards.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator<R> {
    rng: R,
}

impl RandomLayoutGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomLayoutGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LayoutGenerator for RandomLayoutGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Result<HazardLayout> {
        config.validate()?;

        let mut hazard_mask: Array2<bool> = Array2::default(config.bounds().to_nd_index());
        let mut free_cells = config.total_cells();

        for _ in 0..config.hazards {
            let place = usize::from(self.rng.random_range(0..free_cells));
            if let Some(cell) = hazard_mask
                .iter_mut()
                .filter(|is_hazard| !**is_hazard)
                .nth(place)
            {
                *cell = true;
            }
            free_cells -= 1;
        }

        log::debug!(
            "Placed {} hazards on a {}x{} board",
            config.hazards,
            config.width,
            config.height
        );
        HazardLayout::from_hazard_mask(hazard_mask)
    }
}
