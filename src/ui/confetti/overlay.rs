use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::celebration::ConfettiEffect;

/// Draws the particles of one animation frame over whatever is below.
pub struct ConfettiOverlay<'a> {
    effect: &'a ConfettiEffect,
    frame: u16,
}

impl<'a> ConfettiOverlay<'a> {
    pub fn new(effect: &'a ConfettiEffect, frame: u16) -> Self {
        Self { effect, frame }
    }
}

impl Widget for ConfettiOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for particle in self.effect.particles() {
            let Some(position) = particle.position(self.frame, area) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(particle.glyph).set_fg(particle.color);
            }
        }
    }
}
