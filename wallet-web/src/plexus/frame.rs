//! Per-frame drawing instructions derived from the plexus state

use super::layer::Rgba;
use super::sim::{Particle, Plexus, Ripple};

/// Within this distance of the pointer nodes glow and links pulse
pub const POINTER_GLOW_RADIUS: f64 = 100.0;
pub const LINK_WIDTH: f64 = 1.2;
const BASE_LINK_OPACITY: f64 = 0.25;
const POINTER_LINK_OPACITY: f64 = 0.7;
const RIPPLE_LINK_OPACITY: f64 = 0.9;
const RIPPLE_SHADOW: Rgba = Rgba::new(0, 255, 180, 0.8);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeSprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgba,
    pub shadow: Option<Shadow>,
}

/// Line between particles `a` and `b` of the same layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkSprite {
    pub a: usize,
    pub b: usize,
    pub from: (f64, f64),
    pub to: (f64, f64),
    /// Alpha carries the link opacity
    pub color: Rgba,
}

/// Everything drawn for one layer: nodes first, then links
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerSprites {
    pub nodes: Vec<NodeSprite>,
    pub links: Vec<LinkSprite>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub layers: Vec<LayerSprites>,
}

/// Cycling ripple tint, `rgba(shift, 194 - shift, 255, a)`
fn ripple_color(color_shift: u32, alpha: f64) -> Rgba {
    let shift = color_shift.min(194) as u8;
    Rgba::new(shift, 194 - shift, 255, alpha)
}

fn pointer_distance(particle: &Particle, pointer: Option<(f64, f64)>) -> f64 {
    pointer
        .map(|(x, y)| particle.distance_to(x, y))
        .unwrap_or(f64::INFINITY)
}

impl Plexus {
    /// Sprites for the current state, layer by layer
    pub fn frame(&self) -> Frame {
        let pointer = self.pointer();
        let ripple = self.ripple();
        let shift = self.color_shift();

        let layers = self
            .layers()
            .iter()
            .map(|layer| {
                let config = &layer.config;
                let particles = &layer.particles;
                let distances: Vec<f64> = particles
                    .iter()
                    .map(|p| pointer_distance(p, pointer))
                    .collect();

                let nodes = particles
                    .iter()
                    .zip(&distances)
                    .map(|(p, &d)| node_sprite(p, d, config.size, config.color, config.glow_color, ripple, shift))
                    .collect();

                let mut links = Vec::new();
                for a in 0..particles.len() {
                    for b in a + 1..particles.len() {
                        let (pa, pb) = (&particles[a], &particles[b]);
                        let dist = pa.distance_to(pb.x, pb.y);
                        if dist >= config.connection_dist {
                            continue;
                        }

                        let mut color = config
                            .line_color
                            .with_alpha(BASE_LINK_OPACITY * (1.0 - dist / config.connection_dist));

                        let nearest = distances[a].min(distances[b]);
                        if nearest < POINTER_GLOW_RADIUS {
                            color = config
                                .glow_color
                                .with_alpha(POINTER_LINK_OPACITY * (1.0 - nearest / POINTER_GLOW_RADIUS));
                        }
                        if ripple.reach(pa.x, pa.y).is_some() || ripple.reach(pb.x, pb.y).is_some() {
                            color = ripple_color(shift, RIPPLE_LINK_OPACITY);
                        }

                        links.push(LinkSprite {
                            a,
                            b,
                            from: (pa.x, pa.y),
                            to: (pb.x, pb.y),
                            color,
                        });
                    }
                }

                LayerSprites { nodes, links }
            })
            .collect();

        Frame { layers }
    }
}

fn node_sprite(
    particle: &Particle,
    pointer_distance: f64,
    size: f64,
    color: Rgba,
    glow: Rgba,
    ripple: &Ripple,
    shift: u32,
) -> NodeSprite {
    let mut sprite = NodeSprite {
        x: particle.x,
        y: particle.y,
        radius: size,
        color,
        shadow: None,
    };

    if pointer_distance < POINTER_GLOW_RADIUS {
        let closeness = 1.0 - pointer_distance / POINTER_GLOW_RADIUS;
        sprite.radius += 2.0 * closeness;
        sprite.color = glow;
        sprite.shadow = Some(Shadow {
            color: glow,
            blur: 16.0 * closeness,
        });
    }

    if let Some(d) = ripple.reach(particle.x, particle.y) {
        sprite.radius += 3.0 * (1.0 - d / ripple.radius);
        sprite.color = ripple_color(shift, 0.9);
        sprite.shadow = Some(Shadow {
            color: RIPPLE_SHADOW,
            blur: 24.0,
        });
    }

    sprite
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plexus::layer::{LayerConfig, LAYERS};
    use crate::plexus::sim::tests::seeded;

    fn still(count: usize) -> LayerConfig {
        LayerConfig {
            count,
            speed: 0.0,
            parallax: 0.0,
            ..LAYERS[0]
        }
    }

    #[test]
    fn test_links_stay_within_layers() {
        let mut plexus = Plexus::new(500.0, 400.0, &LAYERS, seeded(11));
        plexus.pointer_moved(250.0, 200.0);
        for _ in 0..30 {
            plexus.step();
        }

        let frame = plexus.frame();
        assert_eq!(frame.layers.len(), LAYERS.len());
        let mut linked = 0;
        for (sprites, layer) in frame.layers.iter().zip(plexus.layers()) {
            assert_eq!(sprites.nodes.len(), layer.particles.len());
            for link in &sprites.links {
                assert!(link.a < link.b && link.b < layer.particles.len());
                let (pa, pb) = (layer.particles[link.a], layer.particles[link.b]);
                assert_eq!(link.from, (pa.x, pa.y));
                assert_eq!(link.to, (pb.x, pb.y));
                assert!(pa.distance_to(pb.x, pb.y) < layer.config.connection_dist);
                linked += 1;
            }
        }
        assert!(linked > 0, "a 500x400 canvas with 120 particles should produce links");
    }

    #[test]
    fn test_link_opacity_decays_with_distance() {
        // Two particles 90 apart on the x axis, pointer absent
        let mut samples = [0.5, 0.5, 0.5, 0.5, 0.59, 0.5, 0.5, 0.5].into_iter();
        let plexus = Plexus::new(1000.0, 1000.0, &[still(2)], || samples.next().unwrap_or(0.5));

        let frame = plexus.frame();
        let links = &frame.layers[0].links;
        assert_eq!(links.len(), 1);
        let expected = 0.25 * (1.0 - 90.0 / 180.0);
        assert!((links[0].color.a - expected).abs() < 1e-9);
        assert_eq!((links[0].color.r, links[0].color.g, links[0].color.b), (0, 194, 255));
    }

    #[test]
    fn test_pointer_glow() {
        let mut plexus = Plexus::new(1000.0, 1000.0, &[still(1)], || 0.5);
        let idle = plexus.frame().layers[0].nodes[0];
        assert_eq!(idle.radius, 4.0);
        assert_eq!(idle.shadow, None);

        plexus.pointer_moved(500.0, 550.0);
        let lit = plexus.frame().layers[0].nodes[0];
        assert!((lit.radius - 5.0).abs() < 1e-9);
        assert_eq!(lit.color, LAYERS[0].glow_color);
        assert_eq!(
            lit.shadow,
            Some(Shadow {
                color: LAYERS[0].glow_color,
                blur: 8.0
            })
        );
    }

    #[test]
    fn test_ripple_highlight() {
        let mut plexus = Plexus::new(1000.0, 1000.0, &[still(2)], || 0.5);
        plexus.pointer_pressed(500.0, 500.0);
        plexus.step();
        plexus.step();

        let frame = plexus.frame();
        let node = frame.layers[0].nodes[0];
        assert_eq!(node.color, Rgba::new(2, 192, 255, 0.9));
        assert_eq!(node.radius, 7.0);
        assert_eq!(node.shadow.map(|s| s.blur), Some(24.0));

        // Coincident particles are linked, distance 0 is under the threshold
        let link = frame.layers[0].links[0];
        assert_eq!(link.color, Rgba::new(2, 192, 255, 0.9));
    }
}
