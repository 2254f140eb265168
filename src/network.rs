//! Point-and-line simulation behind the animated page background.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A line between two points with its stroke opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub alpha: f64,
}

#[derive(Clone, Debug)]
pub struct Network {
    points: Vec<Point>,
    width: f64,
    height: f64,
    count: usize,
    link_distance: f64,
    speed: f64,
}

impl Default for Network {
    fn default() -> Self {
        Self::new(
            config::NETWORK_POINTS,
            config::NETWORK_LINK_DISTANCE,
            config::NETWORK_POINT_SPEED,
        )
    }
}

impl Network {
    pub fn new(count: usize, link_distance: f64, speed: f64) -> Self {
        Self {
            points: Vec::with_capacity(count),
            width: 0.0,
            height: 0.0,
            count,
            link_distance,
            speed,
        }
    }

    /// Throw away all points and scatter a fresh set over a `width` x `height` area.
    /// `rng` must yield values in `[0, 1)`.
    pub fn reseed(&mut self, width: f64, height: f64, mut rng: impl FnMut() -> f64) {
        self.width = width;
        self.height = height;
        self.points.clear();
        for _ in 0..self.count {
            self.points.push(Point {
                x: rng() * width,
                y: rng() * height,
                vx: (rng() - 0.5) * self.speed,
                vy: (rng() - 0.5) * self.speed,
            });
        }
    }

    /// Advance one frame. Velocity flips sign once a point is past an edge.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.points {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > height {
                p.vy = -p.vy;
            }
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Every pair closer than the link distance; opacity fades linearly to zero at the cutoff.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.points.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| {
                let (a, b) = (self.points[i], self.points[j]);
                let dist = (a.x - b.x).hypot(a.y - b.y);
                (dist < self.link_distance).then(|| Link {
                    from: i,
                    to: j,
                    alpha: 0.8 * (1.0 - dist / self.link_distance),
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn reseed_replaces_every_point() {
        let mut net = Network::default();
        net.reseed(800.0, 600.0, seq(&[0.1, 0.9, 0.3, 0.7]));
        assert_eq!(net.points().len(), config::NETWORK_POINTS);
        net.reseed(400.0, 300.0, seq(&[0.5]));
        assert_eq!(net.points().len(), config::NETWORK_POINTS);
        assert_eq!(net.size(), (400.0, 300.0));
        assert!(net
            .points()
            .iter()
            .all(|p| p.x == 200.0 && p.y == 150.0 && p.vx == 0.0 && p.vy == 0.0));
    }

    #[test]
    fn velocities_stay_within_speed() {
        let mut net = Network::default();
        net.reseed(100.0, 100.0, seq(&[0.0, 0.99, 0.0, 0.99]));
        let half = config::NETWORK_POINT_SPEED / 2.0;
        assert!(net
            .points()
            .iter()
            .all(|p| p.vx.abs() <= half && p.vy.abs() <= half));
    }

    #[test]
    fn points_bounce_off_edges() {
        let mut net = Network::new(1, 160.0, 0.5);
        // x = 9.9, y = 5.0, vx = +0.2, vy = -0.2
        net.reseed(10.0, 10.0, seq(&[0.99, 0.5, 0.9, 0.1]));
        net.step();
        let p = net.points()[0];
        assert!(p.x > 10.0);
        assert!(p.vx < 0.0, "vx should have flipped");
        assert!(p.vy < 0.0, "vy untouched inside bounds");
        net.step();
        assert!(net.points()[0].x < p.x);
    }

    #[test]
    fn links_fade_with_distance() {
        let mut net = Network::new(3, 160.0, 0.0);
        // points at x = 0, 80, 320 on one row (speed 0 keeps them still)
        net.reseed(400.0, 100.0, seq(&[0.0, 0.5, 0.5, 0.5, 0.2, 0.5, 0.5, 0.5, 0.8, 0.5, 0.5, 0.5]));
        let links: Vec<Link> = net.links().collect();
        assert_eq!(links.len(), 1);
        let link = links[0];
        assert_eq!((link.from, link.to), (0, 1));
        assert!((link.alpha - 0.4).abs() < 1e-9);
    }

    #[test]
    fn no_links_at_or_beyond_cutoff() {
        let mut net = Network::new(2, 100.0, 0.0);
        net.reseed(100.0, 10.0, seq(&[0.0, 0.0, 0.5, 0.5, 1.0, 0.0, 0.5, 0.5]));
        assert_eq!(net.links().count(), 0);
    }
}
