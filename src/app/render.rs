use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::state::App;
use tessera_tui::BoardWidget;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        f.render_widget(
            BoardWidget::new(&self.world).with_step_ms(self.metrics.average_ms()),
            chunks[0],
        );

        let status = format!(
            " {}/{} generations | q, Esc or Ctrl-C to quit",
            self.world.generation(),
            self.config.run.iterations
        );
        f.render_widget(
            Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}
