use delahull::Point2;
use rand::distributions::{Distribution as _, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SEED: [u8; 32] = *b"delahull benchmark input points!";

/// Half the side length of the square that uniform points are drawn from.
const RANGE: f32 = 1000.0;

/// Shapes of benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Uniformly distributed in a square
    Uniform,
    /// A random walk with unit steps. Clustered, with long thin gaps.
    RandomWalk,
    /// Evenly spaced on a circle. Every point is on the hull and every quad is cocircular.
    Circle,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [
        Distribution::Uniform,
        Distribution::RandomWalk,
        Distribution::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::RandomWalk => "random walk",
            Distribution::Circle => "circle",
        }
    }

    pub fn sample(self, size: usize) -> Vec<Point2<f32>> {
        let mut rng = StdRng::from_seed(SEED);
        match self {
            Distribution::Uniform => {
                let range = Uniform::new_inclusive(-RANGE, RANGE);
                (0..size)
                    .map(|_| Point2::new(range.sample(&mut rng), range.sample(&mut rng)))
                    .collect()
            }
            Distribution::RandomWalk => {
                let step = Uniform::new_inclusive(-1.0f32, 1.0);
                let mut current = Point2::new(0.0f32, 0.0);
                (0..size)
                    .map(|_| {
                        current.x += step.sample(&mut rng);
                        current.y += step.sample(&mut rng);
                        current
                    })
                    .collect()
            }
            Distribution::Circle => (0..size)
                .map(|i| {
                    let angle = i as f64 * std::f64::consts::TAU / size as f64;
                    let (sin, cos) = angle.sin_cos();
                    Point2::new((RANGE as f64 * cos) as f32, (RANGE as f64 * sin) as f32)
                })
                .collect(),
        }
    }
}
