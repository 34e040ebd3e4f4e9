use ratatui::{style::Style, widgets::Block, Frame};

use crate::ui;
use crate::ui::{App, View};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    // Fill entire frame with app background
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    match app.view {
        View::ChatList => ui::views::render_chat_list(f, app, f.area()),
        View::ChatDetail => {
            if app.open_detail().is_none() {
                // Nothing to show; fall back to the list
                app.close_detail();
                ui::views::render_chat_list(f, app, f.area());
            } else {
                ui::views::render_chat_detail(f, app, f.area());
            }
        }
    }
}
