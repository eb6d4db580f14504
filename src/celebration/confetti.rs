//! Confetti particle field.
//!
//! Particles are spread with the R2 additive recurrence so the burst covers
//! the area evenly and looks the same on every run.

use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::celebration::error::CelebrationError;
use crate::config::CelebrationConfig;
use crate::ui::theme::CONFETTI_PALETTE;

const GLYPHS: [char; 6] = ['*', '+', 'o', '~', '•', '✦'];

// 1/p and 1/p^2 for the plastic number p.
const R2_A1: f32 = 0.754_877_7;
const R2_A2: f32 = 0.569_840_3;
const GOLDEN_CONJUGATE: f32 = 0.618_034;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the area width, in `[0, 1)`.
    pub column: f32,
    /// Start delay as a fraction of the area height, in `[0, 1)`.
    pub delay: f32,
    /// Fall speed in rows per tick, in `[0.5, 1.5)`.
    pub speed: f32,
    pub glyph: char,
    pub color: Color,
}

impl Particle {
    fn nth(index: usize) -> Self {
        let i = index as f32;
        Self {
            column: (0.5 + i * R2_A1).fract(),
            delay: (0.5 + i * R2_A2).fract(),
            speed: 0.5 + (i * GOLDEN_CONJUGATE).fract(),
            glyph: GLYPHS[index % GLYPHS.len()],
            color: CONFETTI_PALETTE[index % CONFETTI_PALETTE.len()],
        }
    }

    /// Cell occupied at `frame`, or `None` while above or below `area`.
    pub fn position(&self, frame: u16, area: Rect) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let height = f32::from(area.height);
        let travel = f32::from(frame) * self.speed - self.delay * height;
        if travel < 0.0 || travel >= height {
            return None;
        }
        let x = ((self.column * f32::from(area.width)) as u16).min(area.width - 1);
        let y = (travel as u16).min(area.height - 1);
        Some((area.x + x, area.y + y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiEffect {
    particles: Vec<Particle>,
    duration_ticks: u16,
}

impl ConfettiEffect {
    pub fn load(settings: &CelebrationConfig) -> Result<Self, CelebrationError> {
        if settings.particles == 0 || settings.duration_ticks == 0 {
            return Err(CelebrationError::EmptyEffect);
        }
        let particles = (0..usize::from(settings.particles))
            .map(Particle::nth)
            .collect();
        Ok(Self {
            particles,
            duration_ticks: settings.duration_ticks,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn duration_ticks(&self) -> u16 {
        self.duration_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(particles: u16) -> CelebrationConfig {
        CelebrationConfig {
            enabled: true,
            particles,
            duration_ticks: 20,
        }
    }

    #[test]
    fn load_builds_requested_particles() {
        let effect = ConfettiEffect::load(&settings(12)).unwrap();
        assert_eq!(effect.particles().len(), 12);
        assert_eq!(effect.duration_ticks(), 20);
    }

    #[test]
    fn load_rejects_empty_effect() {
        assert_eq!(
            ConfettiEffect::load(&settings(0)),
            Err(CelebrationError::EmptyEffect)
        );
    }

    #[test]
    fn particles_stay_in_unit_ranges() {
        let effect = ConfettiEffect::load(&settings(200)).unwrap();
        for p in effect.particles() {
            assert!((0.0..1.0).contains(&p.column));
            assert!((0.0..1.0).contains(&p.delay));
            assert!((0.5..1.5).contains(&p.speed));
        }
    }

    #[test]
    fn positions_never_leave_the_area() {
        let area = Rect::new(3, 2, 17, 9);
        let effect = ConfettiEffect::load(&settings(64)).unwrap();
        for frame in 0..40 {
            for p in effect.particles() {
                if let Some((x, y)) = p.position(frame, area) {
                    assert!(x >= area.x && x < area.x + area.width);
                    assert!(y >= area.y && y < area.y + area.height);
                }
            }
        }
    }

    #[test]
    fn some_particles_are_visible_mid_animation() {
        let area = Rect::new(0, 0, 40, 10);
        let effect = ConfettiEffect::load(&settings(48)).unwrap();
        let visible = effect
            .particles()
            .iter()
            .filter(|p| p.position(8, area).is_some())
            .count();
        assert!(visible > 0);
    }

    #[test]
    fn empty_area_hides_everything() {
        let effect = ConfettiEffect::load(&settings(4)).unwrap();
        assert!(effect.particles()[0].position(5, Rect::default()).is_none());
    }
}
