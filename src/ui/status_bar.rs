//! Bottom status bar
//!
//! One line: working directory, entry count, selection state, theme name.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic::grid::Selection;
use crate::model::Model;
use crate::ui::theme::Theme;

pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let base = Style::default().fg(theme.status_fg).bg(theme.status_bg);

    let cwd = if model.navigation.at_root() {
        "/".to_string()
    } else {
        format!("/{}", model.navigation.cwd)
    };

    let selection_text = match &model.navigation.selection {
        Selection::Inactive => "browse".to_string(),
        Selection::Active(keys) => format!("{} selected · Esc clears", keys.len()),
    };

    let loading = if model.listing.loading { " ⋯" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", cwd), base.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("· {} entries{} ", model.listing.len(), loading),
            base,
        ),
        Span::styled(format!("· {} ", selection_text), base),
        Span::styled(format!("· theme:{} ", theme.name), base),
    ]);

    let bar = Paragraph::new(line).style(base);
    f.render_widget(bar, area);
}
