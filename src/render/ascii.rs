use super::target::{Color, RenderTarget};

/// Text target with one character per tile.
///
/// Draw calls are mapped back to tiles by inverting the painter transform,
/// so the canvas must share the painter's cell size.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cell_size: i32,
    cells: Vec<char>,
    text: Vec<String>,
    frame: String,
    frames_presented: usize,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: vec![' '; width * height],
            text: Vec::new(),
            frame: String::new(),
            frames_presented: 0,
        }
    }

    /// The last presented frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::Fence => '#',
            Color::Apple => '@',
            Color::Tail => 'o',
            Color::Head => 'O',
        }
    }

    /// Tile under a screen-space top-left corner, if it is on the canvas
    fn tile_index(&self, x: i32, y: i32) -> Option<usize> {
        let col = x.div_euclid(self.cell_size);
        let row = (-y).div_euclid(self.cell_size);
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (col < self.width && row < self.height).then(|| row * self.width + col)
    }

    fn paint(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.tile_index(x, y) {
            self.cells[index] = Self::glyph(color);
        }
    }
}

impl RenderTarget for AsciiCanvas {
    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = ' ');
        self.text.clear();
    }

    fn fill_square(&mut self, x: i32, y: i32, _size: i32, color: Color) {
        self.paint(x, y, color);
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        self.paint(cx - radius, cy + radius, color);
    }

    fn write_text(&mut self, _x: i32, _y: i32, text: &str) {
        self.text.push(text.to_string());
    }

    fn present(&mut self) {
        let mut frame = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width.max(1)) {
            frame.extend(row.iter());
            frame.push('\n');
        }
        for line in &self.text {
            frame.push_str(line);
            frame.push('\n');
        }
        self.frame = frame;
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, World, WorldConfig};
    use crate::render::Painter;

    #[test]
    fn test_renders_small_world() {
        let config = WorldConfig {
            width: 5,
            height: 4,
            start: Position::new(1, 1),
            cell_size: 10,
            ..Default::default()
        };
        let mut world = World::with_seed(&config, 2).unwrap();
        world.place_apple(Position::new(2, 1)).unwrap();
        world.advance();
        world.place_apple(Position::new(1, 2)).unwrap();

        let mut canvas = AsciiCanvas::new(5, 4, 10);
        Painter::new(10).draw(&world, &mut canvas);

        let expected = "#####\n#oO #\n#@  #\n#####\nScore: 10\n";
        assert_eq!(canvas.frame(), expected);
        assert_eq!(canvas.frames_presented(), 1);
        assert_eq!(world.direction(), Direction::East);
    }

    #[test]
    fn test_clear_wipes_text() {
        let mut canvas = AsciiCanvas::new(2, 1, 10);
        canvas.write_text(0, 0, "hello");
        canvas.clear();
        canvas.fill_square(10, 0, 10, Color::Head);
        canvas.present();

        assert_eq!(canvas.frame(), " O\n");
    }

    #[test]
    fn test_keeps_every_text_line() {
        let mut canvas = AsciiCanvas::new(1, 1, 10);
        canvas.write_text(0, 0, "GAME OVER");
        canvas.write_text(0, -10, "Final Score: 20");
        canvas.present();

        assert_eq!(canvas.frame(), " \nGAME OVER\nFinal Score: 20\n");
    }

    #[test]
    fn test_ignores_off_canvas_tiles() {
        let mut canvas = AsciiCanvas::new(2, 2, 10);
        canvas.fill_square(-10, 0, 10, Color::Fence);
        canvas.fill_square(0, 10, 10, Color::Fence);
        canvas.fill_square(20, 0, 10, Color::Fence);
        canvas.present();

        assert_eq!(canvas.frame(), "  \n  \n");
    }
}
