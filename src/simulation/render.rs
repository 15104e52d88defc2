//! Renderer boundary
//!
//! The simulation describes each frame as a list of draw calls. A renderer
//! only has to execute them in order; the Bevy front end and the terminal
//! map are both consumers of the same list.

use anyhow::Result;

use super::types::{Color, Point, Rect};

/// What a filled rectangle represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Block,
    Sidewalk,
    Vehicle,
}

impl Layer {
    fn glyph(self) -> char {
        match self {
            Layer::Block => '#',
            Layer::Sidewalk => '.',
            Layer::Vehicle => 'T',
        }
    }
}

/// One draw call, in map coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect { rect: Rect, color: Color, layer: Layer },
    FillCircle { center: Point, radius: i32, color: Color },
    Line { from: Point, to: Point, color: Color, width: i32 },
}

/// Anything that can present a frame
pub trait Renderer {
    fn present(&mut self, frame: &[DrawCommand]) -> Result<()>;
}

/// Renderer that discards every frame
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: usize,
}

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &[DrawCommand]) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

/// Prints a coarse ASCII picture of the map every `every` frames
pub struct TerminalRenderer {
    map_width: i32,
    map_height: i32,
    /// Map pixels per character cell
    cell: i32,
    every: usize,
    frames: usize,
}

impl TerminalRenderer {
    pub fn new(map_width: i32, map_height: i32, cell: i32, every: usize) -> Self {
        Self {
            map_width,
            map_height,
            cell: cell.max(1),
            every,
            frames: 0,
        }
    }

    /// Rasterise a frame into text rows
    pub fn rasterize(&self, frame: &[DrawCommand]) -> Vec<String> {
        let cols = (self.map_width / self.cell).max(1) as usize;
        let rows = (self.map_height / self.cell).max(1) as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        // Cell centres decide coverage
        let cell_center = |row: usize, col: usize| {
            Point::new(
                col as i32 * self.cell + self.cell / 2,
                row as i32 * self.cell + self.cell / 2,
            )
        };

        let paint_rect = |grid: &mut [Vec<char>], rect: &Rect, layer: Layer| {
            for (row, line) in grid.iter_mut().enumerate() {
                for (col, c) in line.iter_mut().enumerate() {
                    let center = cell_center(row, col);
                    let cell_rect = Rect::new(
                        center.x - self.cell / 2,
                        center.y - self.cell / 2,
                        self.cell,
                        self.cell,
                    );
                    // Sidewalks and the taxi are thinner than a cell
                    let covered = match layer {
                        Layer::Block => rect.contains_point(center),
                        Layer::Sidewalk | Layer::Vehicle => rect.intersects(&cell_rect),
                    };
                    if covered {
                        *c = layer.glyph();
                    }
                }
            }
        };

        let to_cell = |p: Point| {
            let col = (p.x / self.cell).clamp(0, cols as i32 - 1) as usize;
            let row = (p.y / self.cell).clamp(0, rows as i32 - 1) as usize;
            (row, col)
        };

        for command in frame {
            match command {
                DrawCommand::Clear(_) => {
                    for line in grid.iter_mut() {
                        line.fill(' ');
                    }
                }
                DrawCommand::FillRect { rect, layer, .. } => {
                    paint_rect(grid.as_mut_slice(), rect, *layer);
                }
                DrawCommand::FillCircle { center, .. } => {
                    let (row, col) = to_cell(*center);
                    grid[row][col] = 'o';
                }
                DrawCommand::Line { from, to, .. } => {
                    let (r0, c0) = to_cell(*from);
                    let (r1, c1) = to_cell(*to);
                    for row in r0.min(r1)..=r0.max(r1) {
                        for col in c0.min(c1)..=c0.max(c1) {
                            if grid[row][col] == ' ' {
                                grid[row][col] = if r0 == r1 { '-' } else { '|' };
                            }
                        }
                    }
                }
            }
        }

        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

impl Renderer for TerminalRenderer {
    fn present(&mut self, frame: &[DrawCommand]) -> Result<()> {
        self.frames += 1;
        if self.every == 0 || self.frames % self.every != 0 {
            return Ok(());
        }

        println!("\n=== Frame {} ===", self.frames);
        println!("Legend: #=Block, .=Sidewalk, o=Customer, -|=Road line, T=Taxi");
        for line in self.rasterize(frame) {
            println!("{}", line);
        }
        Ok(())
    }
}
