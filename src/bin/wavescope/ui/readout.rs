//! Readout bar widget - shows simulation time, variant and time controls

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use wavescope::{
    scene::{TimeDirection, TimeSpeed},
    viewport::Viewport,
    Scene,
};

/// Render the readout bar
pub fn render_readout(frame: &mut Frame, area: Rect, scene: &Scene, viewport: &Viewport) {
    let block = Block::default().title(" wavescope ").borders(Borders::ALL);
    let state = scene.state();

    let mut spans = vec![
        Span::styled(
            format!(" t = {}  ", state.time_readout()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{}  ", scene.variant().name()),
            Style::default().fg(Color::White),
        ),
    ];

    // Direction and speed only move time in the clickable variant
    if scene.variant().accepts_clicks() {
        let (symbol, label, color) = match state.direction {
            TimeDirection::Forward => ("▶", "Forward", Color::Green),
            TimeDirection::Reverse => ("◀", "Reverse", Color::Yellow),
        };
        spans.push(Span::styled(
            format!("{symbol} {label}  "),
            Style::default().fg(color),
        ));
        if state.speed == TimeSpeed::Fast {
            spans.push(Span::styled(
                format!("x{:.0}  ", state.speed.factor()),
                Style::default().fg(Color::Magenta),
            ));
        }
    }

    spans.push(Span::styled(
        format!("scale {}x", viewport.scale),
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
