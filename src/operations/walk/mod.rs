mod draw;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use crate::error::{Result, WalkError};
use crate::footprint::{Footprint, GridPos, GridStep};

use draw::draw_step;

/// The outcome of a [`RandomWalk`]: the footprint and the moves that built it.
#[derive(Debug, Clone)]
pub struct Walk {
    /// Every visited cell, origin first, with its adjacency.
    pub footprint: Footprint,
    /// Accepted moves in order; `moves[i]` led to the `i + 1`-th cell.
    pub moves: Vec<GridStep>,
}

/// Grows a footprint with a seeded self-avoiding orthogonal random walk.
///
/// Starting at the origin, each draw proposes a unit axis-aligned move. A
/// move onto an occupied cell is rejected and redrawn without counting as a
/// step; the walk never backtracks. The random source is created from the
/// seed on every [`execute`](Self::execute), so results depend only on the
/// parameters.
///
/// Without a retry limit a walk that boxes itself in draws forever. With
/// [`with_retry_limit`](Self::with_retry_limit), more than `limit`
/// consecutive rejections fail with [`WalkError::Exhausted`].
pub struct RandomWalk {
    steps: usize,
    seed: u64,
    retry_limit: Option<usize>,
}

impl RandomWalk {
    /// Creates a walk placing `steps` cells beyond the origin.
    #[must_use]
    pub fn new(steps: usize, seed: u64) -> Self {
        Self {
            steps,
            seed,
            retry_limit: None,
        }
    }

    /// Bounds the number of consecutive rejected draws. `None` retries forever.
    #[must_use]
    pub fn with_retry_limit(mut self, limit: Option<usize>) -> Self {
        self.retry_limit = limit;
        self
    }

    /// Executes the walk.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::Exhausted`] if the retry limit is exceeded.
    pub fn execute(&self) -> Result<Walk> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut footprint = Footprint::new();
        let mut moves = Vec::with_capacity(self.steps);
        let mut pos = GridPos::ORIGIN;
        let mut consecutive = 0usize;
        let mut rejected = 0usize;

        while moves.len() < self.steps {
            let step = draw_step(&mut rng);
            let candidate = pos.step(step);

            if footprint.contains(candidate) {
                consecutive += 1;
                rejected += 1;
                trace!(%candidate, "candidate occupied, redrawing");
                if let Some(limit) = self.retry_limit {
                    if consecutive > limit {
                        warn!(
                            seed = self.seed,
                            placed = moves.len(),
                            limit,
                            "random walk boxed in"
                        );
                        return Err(WalkError::Exhausted {
                            placed: moves.len(),
                            requested: self.steps,
                            attempts: consecutive,
                        }
                        .into());
                    }
                }
                continue;
            }

            footprint.insert(candidate)?;
            moves.push(step);
            pos = candidate;
            consecutive = 0;
        }

        debug!(
            seed = self.seed,
            steps = self.steps,
            rejected,
            "random walk complete"
        );
        Ok(Walk { footprint, moves })
    }
}
