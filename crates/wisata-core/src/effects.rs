// crates/wisata-core/src/effects.rs

//! Cosmetic effects: header parallax, particles, ripple, pointer glow and
//! scroll feedback.
//!
//! Everything here is per-frame arithmetic with no state. Hosts feed in
//! pointer positions and element rectangles and apply the returned styles.

use crate::config::{ParallaxConfig, ParticleConfig};
use rand::Rng;

/// Resting position of the pointer-tracking card background, in percent.
pub const GLOW_REST: (f64, f64) = (50.0, 20.0);

/// Keyframes injected once so ripples can animate.
pub const RIPPLE_KEYFRAMES: &str =
    "@keyframes ripple{to{transform:scale(4);opacity:0}} .card-ripple{transform-origin:center}";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// `pointer` relative to the top-left corner.
    pub fn local(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.left, pointer.y - self.top)
    }
}

// -----------------------------------------------------------------------------
// Header parallax
// -----------------------------------------------------------------------------

/// Offset of the header video for a pointer inside `rect`.
pub fn parallax_offset(pointer: Point, rect: Rect, factor: f64) -> Point {
    let p = rect.local(pointer);
    Point::new(
        (p.x - rect.width / 2.0) * factor,
        (p.y - rect.height / 2.0) * factor,
    )
}

/// CSS transform for the header video; `None` is the resting transform.
pub fn parallax_transform(config: &ParallaxConfig, offset: Option<Point>) -> String {
    match offset {
        Some(o) => format!("scale({}) translate({}px, {}px)", config.scale, o.x, o.y),
        None => format!("scale({})", config.scale),
    }
}

/// `background-position` for the header at scroll offset `scroll_y`.
pub fn scroll_background_position(scroll_y: f64, factor: f64) -> String {
    format!("center {}px", scroll_y * factor)
}

// -----------------------------------------------------------------------------
// Particles
// -----------------------------------------------------------------------------

/// One floating header particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub left_pct: f64,
    pub bottom_px: f64,
    pub delay_secs: f64,
    pub duration_secs: f64,
    /// When the host removes the node again.
    pub lifetime_ms: u32,
}

impl ParticleSpec {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Self {
        Self {
            size_px: config.size_px.sample(rng),
            left_pct: rng.gen_range(0.0..100.0),
            bottom_px: config.bottom_px,
            delay_secs: config.delay_secs.sample(rng),
            duration_secs: config.duration_secs.sample(rng),
            lifetime_ms: (config.lifetime_secs.sample(rng) * 1000.0).round() as u32,
        }
    }

    /// Inline style declarations for the particle node.
    pub fn style(&self) -> [(&'static str, String); 6] {
        [
            ("width", format!("{}px", self.size_px)),
            ("height", format!("{}px", self.size_px)),
            ("left", format!("{}%", self.left_pct)),
            ("bottom", format!("{}px", self.bottom_px)),
            ("animation-delay", format!("{}s", self.delay_secs)),
            ("animation-duration", format!("{}s", self.duration_secs)),
        ]
    }
}

/// A full batch of particles as spawned every respawn interval.
pub fn particle_batch<R: Rng + ?Sized>(rng: &mut R, config: &ParticleConfig) -> Vec<ParticleSpec> {
    (0..config.batch)
        .map(|_| ParticleSpec::sample(rng, config))
        .collect()
}

// -----------------------------------------------------------------------------
// Card feedback
// -----------------------------------------------------------------------------

/// Top-left corner (card-local, px) of a ripple dot of `size` centred on
/// the click.
pub fn ripple_origin(pointer: Point, rect: Rect, size: f64) -> Point {
    let p = rect.local(pointer);
    Point::new(p.x - size / 2.0, p.y - size / 2.0)
}

/// Pointer position inside `rect` as percentages, for `--mx` / `--my`.
///
/// A degenerate (zero-sized) rect yields the resting position.
pub fn pointer_glow(pointer: Point, rect: Rect) -> (f64, f64) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return GLOW_REST;
    }
    let p = rect.local(pointer);
    (p.x / rect.width * 100.0, p.y / rect.height * 100.0)
}

/// Index of the card whose top edge is closest to the viewport's vertical
/// centre. Ties go to the earlier card.
pub fn closest_to_center<I>(tops: I, viewport_height: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let centre = viewport_height / 2.0;
    let mut best: Option<(usize, f64)> = None;
    for (i, top) in tops.into_iter().enumerate() {
        let dist = (top - centre).abs();
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((i, dist)),
        }
    }
    best.map(|(i, _)| i)
}
