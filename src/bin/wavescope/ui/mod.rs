//! TUI module for wavescope
//!
//! Lays out the readout bar, the upscaled canvas and the help line.

mod canvas;
mod readout;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wavescope::{
    render::Raster,
    viewport::{Size, Viewport},
    Scene,
};

use canvas::RasterView;
use readout::render_readout;

/// Render the whole UI
pub fn render(frame: &mut Frame, scene: &Scene, raster: &Raster, viewport: &Viewport, cell: Size) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Readout bar
            Constraint::Min(1),    // Canvas
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_readout(frame, chunks[0], scene, viewport);
    render_canvas(frame, chunks[1], raster, viewport, cell);

    let help = if scene.variant().accepts_clicks() {
        " [Q] Quit  [Click] Reverse time  [Shift+Click] 4x speed"
    } else {
        " [Q] Quit"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn render_canvas(frame: &mut Frame, area: Rect, raster: &Raster, viewport: &Viewport, cell: Size) {
    if viewport.is_collapsed() {
        let logical = viewport.logical;
        let notice = Paragraph::new(format!(
            " Terminal too small for a {}x{} canvas",
            logical.width, logical.height
        ))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, area);
        return;
    }

    let displayed = viewport.displayed();
    let columns = (displayed.width / cell.width.max(1)).clamp(1, u32::from(u16::MAX));
    let rows = (displayed.height / cell.height.max(1)).clamp(1, u32::from(u16::MAX));

    frame.render_widget(
        RasterView::new(raster, columns as u16, rows as u16),
        area,
    );
}
