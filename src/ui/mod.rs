// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;

mod layout;
pub mod palette;
pub mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::analysis_view::render_analysis_view(frame, app, layout.report);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    if let Some(notice) = &app.notice {
        widgets::notice_popup::render_notice_popup(frame, notice, frame.area());
    }
}
