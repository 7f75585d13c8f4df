use crate::simulation::session::Session;
use macroquad::prelude::*;

trait ToColor {
    fn to_color(&self) -> Color;
}

impl ToColor for [u8; 3] {
    fn to_color(&self) -> Color {
        Color::from_rgba(self[0], self[1], self[2], 255)
    }
}

/// Draws one frame: background fill, then the block at the session position.
pub fn draw_frame(session: &Session) {
    let params = session.params();
    clear_background(params.background_color.to_color());

    let pos = session.position();
    draw_rectangle(
        pos.x,
        pos.y,
        params.block_size,
        params.block_size,
        params.block_color.to_color(),
    );
}
