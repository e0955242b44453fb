use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size centered horizontally, `top_margin` rows below
/// the top of `frame_area`. Size is clamped to the frame.
pub fn top_centered(frame_area: Rect, width: u16, height: u16, top_margin: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height.saturating_sub(top_margin));

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2,
        y: frame_area.y + top_margin.min(frame_area.height),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
