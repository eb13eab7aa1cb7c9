//! Screen layout for the transaction view.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The screen regions of the main view.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub execution: Rect,
    pub tx_info: Rect,
    pub messages: Rect,
    pub footer: Rect,
}

/// Split the terminal area into the main view regions.
///
/// Header and footer take fixed heights; the info row sits above the
/// message list, which receives all remaining space.
#[must_use]
pub fn split_screen(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let info_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        execution: info_columns[0],
        tx_info: info_columns[1],
        messages: rows[2],
        footer: rows[3],
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_screen_covers_height() {
        let areas = split_screen(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(
            areas.header.height + areas.execution.height + areas.messages.height
                + areas.footer.height,
            40
        );
    }

    #[test]
    fn test_info_columns_share_row() {
        let areas = split_screen(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.execution.y, areas.tx_info.y);
        assert_eq!(areas.execution.width + areas.tx_info.width, 100);
    }
}
