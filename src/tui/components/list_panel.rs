//! List panels for the history and food list regions
//!
//! Both regions are plain line items. When there are more items than rows,
//! the newest stay visible.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Index of the first item to show so the last `viewport` items are visible
pub fn tail_start(total: usize, viewport: usize) -> usize {
    total.saturating_sub(viewport)
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    color: Color,
    theme: &Theme,
) {
    // Two rows for the borders
    let viewport = area.height.saturating_sub(2) as usize;
    let start = tail_start(items.len(), viewport);

    let list_items: Vec<ListItem> = items[start..]
        .iter()
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(color)))
        .collect();

    let title = if start > 0 {
        format!(" {} ({} more above) ", title, start)
    } else {
        format!(" {} ", title)
    };

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(title),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_start() {
        assert_eq!(tail_start(3, 10), 0);
        assert_eq!(tail_start(10, 10), 0);
        assert_eq!(tail_start(12, 10), 2);
        assert_eq!(tail_start(5, 0), 5);
    }
}
