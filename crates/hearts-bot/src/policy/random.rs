use hearts_core::game::{ActionSummary, Policy, PolicyContext};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Baseline seat: every legal card gets an independent uniform quality.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: SmallRng,
}

impl RandomPolicy {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Policy<()> for RandomPolicy {
    fn evaluate(&mut self, ctx: &PolicyContext<'_>) -> Vec<ActionSummary<()>> {
        ctx.legal
            .iter()
            .map(|&card| ActionSummary::new(card, self.rng.gen_range(0.0..1.0), ()))
            .collect()
    }
}
