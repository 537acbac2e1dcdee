use std::fmt::Write as _;

use super::state::{NotificationKind, ShellState};
use crate::item::ShoppingItem;
use crate::utils::format_date;

/// One list line: `[x] 3  milk - semi-skimmed (due 2024-03-01)`.
#[must_use]
pub fn render_item(item: &ShoppingItem) -> String {
    let mark = if item.completed { "x" } else { " " };
    let mut line = format!("[{mark}] {:<3} {}", item.id, item.text);
    if !item.description.is_empty() {
        let _ = write!(line, " - {}", item.description);
    }
    if let Some(due) = item.due_date {
        let _ = write!(line, " (due {})", format_date(due));
    }
    line
}

/// Text view of the whole shell state.
#[must_use]
pub fn render_list(state: &ShellState) -> String {
    if state.loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::from("Shopping List\n");
    if state.items.is_empty() {
        out.push_str("  (no items)\n");
    }
    for item in &state.items {
        out.push_str("  ");
        out.push_str(&render_item(item));
        out.push('\n');
    }
    if state.is_busy() {
        out.push_str("  ...\n");
    }
    if let Some(note) = &state.notification {
        let prefix = match note.kind {
            NotificationKind::Info => "",
            NotificationKind::Error => "error: ",
        };
        let _ = writeln!(out, "{prefix}{}", note.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_item_pending() {
        let item = ShoppingItem::new(0, "milk".to_string(), String::new(), None, 1);
        assert_eq!(render_item(&item), "[ ] 0   milk");
    }

    #[test]
    fn test_render_item_completed_with_details() {
        let mut item = ShoppingItem::new(
            12,
            "cake".to_string(),
            "chocolate".to_string(),
            Some(1_709_251_200_000_000_000),
            1,
        );
        item.completed = true;
        assert_eq!(render_item(&item), "[x] 12  cake - chocolate (due 2024-03-01)");
    }

    #[test]
    fn test_render_loading() {
        assert_eq!(render_list(&ShellState::new()), "Loading...\n");
    }

    #[test]
    fn test_render_empty_list_with_error() {
        let mut state = ShellState::new();
        state.apply_listing(Vec::new());
        state.notify(NotificationKind::Error, "boom".to_string());
        assert_eq!(render_list(&state), "Shopping List\n  (no items)\nerror: boom\n");
    }

    #[test]
    fn test_render_busy_marker() {
        let mut state = ShellState::new();
        state.apply_listing(vec![ShoppingItem::new(1, "tea".to_string(), String::new(), None, 1)]);
        let _token = state.begin().unwrap();
        let out = render_list(&state);
        assert!(out.contains("[ ] 1   tea"));
        assert!(out.contains("  ...\n"));
    }
}
