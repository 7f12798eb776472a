//! Layer configuration for the plexus background

use std::fmt;

/// An RGBA color with a fractional alpha, as CSS writes it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Static parameters shared by every particle of a layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub count: usize,
    /// Base particle radius
    pub size: f64,
    /// Velocity components are drawn from `[-speed/2, speed/2)`
    pub speed: f64,
    pub color: Rgba,
    pub line_color: Rgba,
    /// Node and link color near the pointer
    pub glow_color: Rgba,
    /// Pairs closer than this are linked
    pub connection_dist: f64,
    /// Scale of the pointer-driven drift
    pub parallax: f64,
}

const CYAN: (u8, u8, u8) = (0, 194, 255);
const GREEN: (u8, u8, u8) = (16, 185, 129);

const fn cyan(a: f64) -> Rgba {
    Rgba::new(CYAN.0, CYAN.1, CYAN.2, a)
}

const fn green(a: f64) -> Rgba {
    Rgba::new(GREEN.0, GREEN.1, GREEN.2, a)
}

/// Front to back: large and fast, medium, small and slow
pub const LAYERS: [LayerConfig; 3] = [
    LayerConfig {
        count: 30,
        size: 4.0,
        speed: 0.7,
        color: cyan(0.8),
        line_color: cyan(0.25),
        glow_color: green(0.8),
        connection_dist: 180.0,
        parallax: 1.0,
    },
    LayerConfig {
        count: 40,
        size: 2.5,
        speed: 0.35,
        color: cyan(0.4),
        line_color: cyan(0.12),
        glow_color: green(0.5),
        connection_dist: 120.0,
        parallax: 0.6,
    },
    LayerConfig {
        count: 50,
        size: 1.5,
        speed: 0.18,
        color: cyan(0.18),
        line_color: cyan(0.07),
        glow_color: green(0.2),
        connection_dist: 80.0,
        parallax: 0.3,
    },
];
