use lifegrid::config::VisualConfig;
use lifegrid::{Grid, RenderPort};
use macroquad::prelude::*;

fn rgb(c: [u8; 3]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Colors used to paint the surface
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
    pub border: Color,
    pub background: Color,
}

impl Palette {
    pub fn from_config(visual: &VisualConfig) -> Self {
        Palette {
            alive: rgb(visual.alive_color),
            dead: rgb(visual.dead_color),
            border: rgb(visual.border_color),
            background: rgb(visual.background_color),
        }
    }
}

/// Fixed-size drawing surface at the top-left of the window.
///
/// macroquad redraws every frame, so `draw` retains the latest frame and
/// `present` paints it.
pub struct MacroquadSurface {
    width: f32,
    height: f32,
    palette: Palette,
    frame: Option<(Grid, u32)>,
}

impl MacroquadSurface {
    pub fn new(width: u32, height: u32, palette: Palette) -> Self {
        MacroquadSurface {
            width: width as f32,
            height: height as f32,
            palette,
            frame: None,
        }
    }

    /// Paint the retained frame
    pub fn present(&self) {
        draw_rectangle(0.0, 0.0, self.width, self.height, self.palette.background);

        let Some((grid, cell_size)) = &self.frame else {
            return;
        };
        let size = *cell_size as f32;

        for row in 0..grid.rows {
            for col in 0..grid.cols {
                let px = col as f32 * size;
                let py = row as f32 * size;
                let color = if grid.is_alive(row, col) {
                    self.palette.alive
                } else {
                    self.palette.dead
                };

                draw_rectangle(px, py, size, size, color);
                draw_rectangle_lines(px, py, size, size, 1.0, self.palette.border);
            }
        }
    }
}

impl RenderPort for MacroquadSurface {
    fn draw(&mut self, grid: &Grid, cell_size: u32) {
        self.frame = Some((grid.clone(), cell_size));
    }
}
