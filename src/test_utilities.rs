use crate::Point2;
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;

pub const SEED: &[u8; 32] = b"wPYxAkIiHcEmSBAxQFoXFrpYToCe1B71";
pub const SEED2: &[u8; 32] = b"14LzG37Y9EHTcmLW8vBDqWwtYsCeVVyF";

pub fn random_points_in_range(range: f32, size: usize, seed: &[u8; 32]) -> Vec<Point2<f32>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let range = Uniform::new(-range, range);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        let x = range.sample(&mut rng);
        let y = range.sample(&mut rng);
        points.push(Point2::new(x, y));
    }
    points
}

pub fn random_points_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2<f32>> {
    random_points_in_range(1.0, size, seed)
}

/// Points of a random walk with unit step size. Produces clusters and long thin regions.
pub fn random_walk_with_seed(size: usize, seed: &[u8; 32]) -> Vec<Point2<f32>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let step = Uniform::new(-1.0f32, 1.0);
    let mut last = Point2::new(0.0f32, 0.0);
    let mut points = Vec::with_capacity(size);
    for _ in 0..size {
        last = Point2::new(last.x + step.sample(&mut rng), last.y + step.sample(&mut rng));
        points.push(last);
    }
    points
}

/// Points on a regular grid with integral coordinates.
pub fn grid_points(width: usize, height: usize) -> Vec<Point2<f32>> {
    let mut points = Vec::with_capacity(width * height);
    for x in 0..width {
        for y in 0..height {
            points.push(Point2::new(x as f32, y as f32));
        }
    }
    points
}

/// Points on the unit circle, rounded to single precision.
pub fn unit_circle(count: usize) -> Vec<Point2<f32>> {
    concentric_circles(1, count)
}

/// `rings` circles around the origin with radii 1, 2, ... and `per_ring` points each. Every
/// ring is rotated by half a step against the previous one.
pub fn concentric_circles(rings: usize, per_ring: usize) -> Vec<Point2<f32>> {
    let step = std::f64::consts::TAU / per_ring as f64;
    let mut points = Vec::with_capacity(rings * per_ring);
    for ring in 0..rings {
        let radius = (ring + 1) as f64;
        for i in 0..per_ring {
            let angle = (i as f64 + 0.5 * ring as f64) * step;
            points.push(Point2::new(
                (radius * angle.cos()) as f32,
                (radius * angle.sin()) as f32,
            ));
        }
    }
    points
}

/// All points with integral coordinates on the circle around the origin with the given
/// radius. These points are exactly cocircular.
pub fn lattice_circle(radius: i32) -> Vec<Point2<f32>> {
    let mut points = Vec::new();
    for x in -radius..=radius {
        let y_squared = radius * radius - x * x;
        let y = (y_squared as f64).sqrt().round() as i32;
        if y * y != y_squared {
            continue;
        }
        points.push(Point2::new(x as f32, y as f32));
        if y != 0 {
            points.push(Point2::new(x as f32, -y as f32));
        }
    }
    points
}

/// A grid with unit spacing whose points are moved by at most `jitter` in each direction.
pub fn jittered_grid(size: usize, jitter: f32, seed: &[u8; 32]) -> Vec<Point2<f32>> {
    let mut rng = rand::rngs::StdRng::from_seed(*seed);
    let offset = Uniform::new_inclusive(-jitter, jitter);
    grid_points(size, size)
        .into_iter()
        .map(|point| {
            Point2::new(
                point.x + offset.sample(&mut rng),
                point.y + offset.sample(&mut rng),
            )
        })
        .collect()
}
