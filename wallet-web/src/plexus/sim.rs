//! Plexus physics: drifting particles, pointer parallax and repulsion, ripple.
//!
//! Everything here is plain data so the per-frame rules can be tested
//! without a browser. [`super::frame`] turns the state into sprites and
//! [`super::render`] paints them.

use super::layer::LayerConfig;

/// Parallax drift per unit of pointer offset from the canvas center
pub const PARALLAX_GAIN: f64 = 0.03;
/// Particles closer than this to the pointer are pushed away
pub const REPEL_RADIUS: f64 = 80.0;
/// Distance a repelled particle moves per frame
pub const REPEL_STEP: f64 = 2.0;
/// Length of the color shift cycle, in frames
pub const COLOR_CYCLE: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }
}

/// Expanding circle started by a pointer press
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub active: bool,
}

impl Ripple {
    pub const GROWTH: f64 = 8.0;
    pub const MAX_RADIUS: f64 = 180.0;

    pub fn idle() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            active: false,
        }
    }

    /// Restart from `(x, y)` with zero radius
    pub fn trigger(&mut self, x: f64, y: f64) {
        *self = Self {
            x,
            y,
            radius: 0.0,
            active: true,
        };
    }

    /// Grow by [`Ripple::GROWTH`]; switch off once past [`Ripple::MAX_RADIUS`]
    pub fn advance(&mut self) {
        if self.active {
            self.radius += Self::GROWTH;
            if self.radius > Self::MAX_RADIUS {
                self.active = false;
            }
        }
    }

    /// Distance from the ripple origin when `(x, y)` is strictly inside an active ripple
    pub fn reach(&self, x: f64, y: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let d = (x - self.x).hypot(y - self.y);
        (d < self.radius).then_some(d)
    }
}

/// A layer's configuration together with its particles
#[derive(Clone, Debug)]
pub struct Layer {
    pub config: LayerConfig,
    pub particles: Vec<Particle>,
}

/// Owned animation context: the whole mutable state of the background
#[derive(Clone, Debug)]
pub struct Plexus {
    width: f64,
    height: f64,
    layers: Vec<Layer>,
    pointer: Option<(f64, f64)>,
    ripple: Ripple,
    color_shift: u32,
}

impl Plexus {
    /// Scatter every layer's particles over a `width` x `height` surface.
    ///
    /// `random` yields uniform samples in `[0, 1)`.
    pub fn new(width: f64, height: f64, configs: &[LayerConfig], mut random: impl FnMut() -> f64) -> Self {
        let layers = configs
            .iter()
            .map(|config| Layer {
                config: *config,
                particles: (0..config.count)
                    .map(|_| Particle {
                        x: wrap(random() * width, width),
                        y: wrap(random() * height, height),
                        vx: (random() - 0.5) * config.speed,
                        vy: (random() - 0.5) * config.speed,
                    })
                    .collect(),
            })
            .collect();

        Self {
            width,
            height,
            layers,
            pointer: None,
            ripple: Ripple::idle(),
            color_shift: 0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    pub fn color_shift(&self) -> u32 {
        self.color_shift
    }

    /// New surface size; particles are folded back inside immediately
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for particle in self.layers.iter_mut().flat_map(|layer| layer.particles.iter_mut()) {
            particle.x = wrap(particle.x, width);
            particle.y = wrap(particle.y, height);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        self.ripple.trigger(x, y);
    }

    /// Advance one frame
    pub fn step(&mut self) {
        self.color_shift = (self.color_shift + 1) % COLOR_CYCLE;
        self.ripple.advance();

        let (width, height) = (self.width, self.height);
        let pointer = self.pointer;

        for layer in &mut self.layers {
            let (drift_x, drift_y) = match pointer {
                Some((px, py)) => (
                    (px - width / 2.0) * layer.config.parallax * PARALLAX_GAIN,
                    (py - height / 2.0) * layer.config.parallax * PARALLAX_GAIN,
                ),
                None => (0.0, 0.0),
            };

            for particle in &mut layer.particles {
                particle.x += particle.vx + drift_x;
                particle.y += particle.vy + drift_y;

                if let Some((px, py)) = pointer {
                    let dx = particle.x - px;
                    let dy = particle.y - py;
                    let d = dx.hypot(dy);
                    // d == 0 has no direction to push along
                    if d > 0.0 && d < REPEL_RADIUS {
                        particle.x += dx / d * REPEL_STEP;
                        particle.y += dy / d * REPEL_STEP;
                    }
                }

                particle.x = wrap(particle.x, width);
                particle.y = wrap(particle.y, height);
            }
        }
    }
}

/// Fold `value` into `[0, extent)`; a degenerate extent collapses to 0.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
