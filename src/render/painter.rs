use super::target::{Color, RenderTarget};
use crate::game::{Position, World};

/// Converts world state into primitive draw calls
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    cell_size: i32,
}

impl Painter {
    pub fn new(cell_size: i32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Top-left screen corner of a tile
    pub fn to_screen(&self, pos: Position) -> (i32, i32) {
        (pos.x * self.cell_size, -pos.y * self.cell_size)
    }

    /// Draw a full frame: fence, apple, tail, head, then the score
    pub fn draw(&self, world: &World, target: &mut dyn RenderTarget) {
        target.clear();

        for pos in world.cage().border_cells() {
            self.draw_tile(pos, Color::Fence, target);
        }

        if let Some(apple) = world.apple() {
            let (x, y) = self.to_screen(apple);
            let half = self.cell_size / 2;
            target.fill_circle(x + half, y - half, half, Color::Apple);
        }

        for &segment in world.tail() {
            self.draw_tile(segment, Color::Tail, target);
        }
        self.draw_tile(world.head(), Color::Head, target);

        target.write_text(10, -10, &format!("Score: {}", world.score()));
        target.present();
    }

    /// Draw a centred message block, one line per entry
    pub fn draw_message(&self, lines: &[String], target: &mut dyn RenderTarget) {
        target.clear();
        for (row, line) in lines.iter().enumerate() {
            target.write_text(10, -10 - row as i32 * self.cell_size, line);
        }
        target.present();
    }

    fn draw_tile(&self, pos: Position, color: Color, target: &mut dyn RenderTarget) {
        let (x, y) = self.to_screen(pos);
        target.fill_square(x, y, self.cell_size, color);
    }
}
