use glassboard::{Color, ScrollMode, ScrollOutcome, Session, Tool};

fn session(color: Color, mode: ScrollMode) -> Session {
    Session::new(Tool::Pen, color, 3, 24, mode)
}

#[test]
fn hue_wraps_past_the_top() {
    let mut s = session(Color::new(357, 255, 255, 255), ScrollMode::Hue);
    assert_eq!(s.scroll(1), Some(ScrollOutcome::ColorChanged));
    assert_eq!(s.color().hue(), 2);
}

#[test]
fn hue_wraps_past_the_bottom() {
    let mut s = session(Color::new(2, 255, 255, 255), ScrollMode::Hue);
    s.scroll(-1);
    assert_eq!(s.color().hue(), 357);
}

#[test]
fn saturation_clamps_instead_of_overflowing() {
    let mut s = session(Color::new(0, 253, 255, 255), ScrollMode::Saturation);
    s.scroll(1);
    s.scroll(1);
    assert_eq!(s.color().saturation(), 255);
}

#[test]
fn opacity_clamps_at_zero() {
    let mut s = session(Color::new(0, 0, 255, 3), ScrollMode::Opacity);
    s.scroll(-1);
    assert_eq!(s.color().alpha(), 0);
    s.scroll(-1);
    assert_eq!(s.color().alpha(), 0);
}

#[test]
fn tool_cycle_wraps_from_the_last_tool_to_the_first() {
    let mut s = session(Color::WHITE, ScrollMode::ToolSwitch);
    s.set_tool(Tool::Circle);
    assert_eq!(s.scroll(1), Some(ScrollOutcome::ToolChanged(Tool::Pen)));

    s.set_tool(Tool::Pen);
    assert_eq!(s.scroll(-1), Some(ScrollOutcome::ToolChanged(Tool::Circle)));
}

#[test]
fn history_mode_reports_undo_and_redo_directions() {
    let mut s = session(Color::WHITE, ScrollMode::History);
    assert_eq!(s.scroll(-1), Some(ScrollOutcome::Undo));
    assert_eq!(s.scroll(1), Some(ScrollOutcome::Redo));
    // History never mutates the session itself.
    assert_eq!(s.color(), Color::WHITE);
    assert_eq!(s.tool(), Tool::Pen);
}

#[test]
fn size_mode_follows_the_active_tool() {
    let mut s = session(Color::WHITE, ScrollMode::BrushSize);
    assert_eq!(s.scroll(1), Some(ScrollOutcome::WidthChanged(4)));

    s.set_tool(Tool::Text);
    assert_eq!(s.scroll(1), Some(ScrollOutcome::TextSizeChanged(25)));
    // The brush width is untouched while the text tool is active.
    assert_eq!(s.width(), 4);
}

#[test]
fn mode_cycling_visits_every_mode_and_wraps() {
    let mut s = session(Color::WHITE, ScrollMode::History);
    let mut seen = vec![s.mode()];
    for _ in 0..ScrollMode::ALL.len() {
        seen.push(s.cycle_mode(1));
    }
    assert_eq!(seen.first(), seen.last());
    assert_eq!(seen.len(), ScrollMode::ALL.len() + 1);

    assert_eq!(s.cycle_mode(-1), ScrollMode::ToolSwitch);
}
