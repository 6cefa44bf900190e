use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use tessera_core::World;

/// Terminal columns used per board cell.
pub const CELL_WIDTH: u16 = 3;

const ALIVE: Color = Color::Red;
const DEAD: Color = Color::White;

/// Draws the authoritative board. Only build one between steps.
pub struct BoardWidget<'a> {
    world: &'a World,
    step_ms: Option<f64>,
}

impl<'a> BoardWidget<'a> {
    pub fn new(world: &'a World) -> Self {
        Self {
            world,
            step_ms: None,
        }
    }

    /// Adds the average step time to the title.
    pub fn with_step_ms(mut self, step_ms: f64) -> Self {
        self.step_ms = Some(step_ms);
        self
    }

    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn color_for(alive: bool) -> Color {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }

    fn title(&self) -> String {
        let (rows, cols) = self.world.dimensions();
        let p = self.world.tiles_per_side();
        let mut title = format!(
            " {rows}x{cols} | {p}x{p} tiles | gen {} | alive {} ",
            self.world.generation(),
            self.world.population()
        );
        if let Some(ms) = self.step_ms {
            title.push_str(&format!("| {ms:.3} ms/it "));
        }
        title
    }
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::inner_area(area);
        let (rows, cols) = self.world.dimensions();
        let visible_rows = (inner.height as usize).min(rows);
        let visible_cols = (inner.width / CELL_WIDTH) as usize;

        for row in 0..visible_rows {
            let y = inner.y + row as u16;
            for col in 0..visible_cols.min(cols) {
                let color = Self::color_for(self.world.query(row, col));
                let x0 = inner.x + col as u16 * CELL_WIDTH;
                for x in x0..x0 + CELL_WIDTH {
                    buf[(x, y)].set_symbol(" ").set_bg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::{BoardSpec, RuleSet};

    fn world() -> World {
        let board = BoardSpec::new(4, 4).with_alive([(0, 0), (2, 3)]);
        World::load(&board, 2, RuleSet::default()).unwrap()
    }

    #[test]
    fn test_cells_are_three_columns_wide() {
        let world = world();
        let area = Rect::new(0, 0, 4 * CELL_WIDTH + 2, 6);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&world).render(area, &mut buf);

        for x in 1..=3 {
            assert_eq!(buf[(x, 1)].bg, ALIVE);
        }
        assert_eq!(buf[(4, 1)].bg, DEAD);
        assert_eq!(buf[(1 + 3 * CELL_WIDTH, 3)].bg, ALIVE);
    }

    #[test]
    fn test_render_clips_to_small_area() {
        let world = world();
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&world).render(area, &mut buf);
        assert_eq!(buf[(1, 1)].bg, ALIVE);
    }

    #[test]
    fn test_title_reports_generation() {
        let world = world();
        let title = BoardWidget::new(&world).with_step_ms(1.5).title();
        assert!(title.contains("gen 0"));
        assert!(title.contains("alive 2"));
        assert!(title.contains("1.500 ms/it"));
    }
}
