use super::constants::{
    PARTICLE_COUNT, PARTICLE_DELAY_SEC, PARTICLE_DURATION_SEC, PARTICLE_HEIGHT_PX,
    PARTICLE_LEFT_PCT,
};
use rand::Rng;

/// Layout of one decorative hero particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub height_px: f64,
    pub delay_sec: f64,
    pub duration_sec: f64,
}

#[inline]
fn spread<R: Rng>(rng: &mut R, (min, span): (f64, f64)) -> f64 {
    min + rng.gen::<f64>() * span
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_pct: spread(rng, PARTICLE_LEFT_PCT),
            height_px: spread(rng, PARTICLE_HEIGHT_PX),
            delay_sec: spread(rng, PARTICLE_DELAY_SEC),
            duration_sec: spread(rng, PARTICLE_DURATION_SEC),
        }
    }

    /// Inline CSS for the particle element.
    pub fn css_text(&self) -> String {
        format!(
            "left: {:.2}%; height: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.height_px, self.delay_sec, self.duration_sec
        )
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect()
}
