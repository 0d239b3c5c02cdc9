//! Render notifications sent to the host after each change.

use watchlist_core::WatchEntry;

/// Receives the full current views. The store never draws anything itself.
pub trait WatchlistRenderer {
    /// The displayed active list changed; `items` is everything now on screen.
    fn on_active_list_changed(&mut self, items: &[String]);

    /// A watch count changed or a title was seen for the first time.
    fn on_history_changed(&mut self, entries: &[WatchEntry]);
}

impl<R: WatchlistRenderer + ?Sized> WatchlistRenderer for &mut R {
    fn on_active_list_changed(&mut self, items: &[String]) {
        (**self).on_active_list_changed(items);
    }

    fn on_history_changed(&mut self, entries: &[WatchEntry]) {
        (**self).on_history_changed(entries);
    }
}

impl<R: WatchlistRenderer + ?Sized> WatchlistRenderer for Box<R> {
    fn on_active_list_changed(&mut self, items: &[String]) {
        (**self).on_active_list_changed(items);
    }

    fn on_history_changed(&mut self, entries: &[WatchEntry]) {
        (**self).on_history_changed(entries);
    }
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl WatchlistRenderer for NoopRenderer {
    fn on_active_list_changed(&mut self, _items: &[String]) {}

    fn on_history_changed(&mut self, _entries: &[WatchEntry]) {}
}

/// Adapts a pair of closures, one per view.
pub struct CallbackRenderer<A, H> {
    on_active: A,
    on_history: H,
}

impl<A, H> CallbackRenderer<A, H>
where
    A: FnMut(&[String]),
    H: FnMut(&[WatchEntry]),
{
    pub fn new(on_active: A, on_history: H) -> Self {
        Self { on_active, on_history }
    }
}

impl<A, H> WatchlistRenderer for CallbackRenderer<A, H>
where
    A: FnMut(&[String]),
    H: FnMut(&[WatchEntry]),
{
    fn on_active_list_changed(&mut self, items: &[String]) {
        (self.on_active)(items);
    }

    fn on_history_changed(&mut self, entries: &[WatchEntry]) {
        (self.on_history)(entries);
    }
}

/// Keeps the most recent view of each kind, for hosts that draw once at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestView {
    pub active: Vec<String>,
    pub history: Vec<WatchEntry>,
    pub active_renders: usize,
    pub history_renders: usize,
}

impl WatchlistRenderer for LatestView {
    fn on_active_list_changed(&mut self, items: &[String]) {
        self.active = items.to_vec();
        self.active_renders += 1;
    }

    fn on_history_changed(&mut self, entries: &[WatchEntry]) {
        self.history = entries.to_vec();
        self.history_renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn show_one<R: WatchlistRenderer>(mut renderer: R, title: &str) -> R {
        renderer.on_active_list_changed(&[title.to_owned()]);
        renderer
    }

    #[test]
    fn test_callback_renderer_routes_each_view() {
        let active_calls = RefCell::new(Vec::new());
        let history_calls = RefCell::new(Vec::new());
        let mut renderer = CallbackRenderer::new(
            |items: &[String]| active_calls.borrow_mut().push(items.to_vec()),
            |entries: &[WatchEntry]| history_calls.borrow_mut().push(entries.len()),
        );

        renderer.on_active_list_changed(&["dune".to_owned()]);
        renderer.on_history_changed(&[WatchEntry::first_watch("dune")]);
        drop(renderer);

        assert_eq!(active_calls.into_inner(), vec![vec!["dune".to_owned()]]);
        assert_eq!(history_calls.into_inner(), vec![1]);
    }

    #[test]
    fn test_latest_view_keeps_last_and_counts() {
        let mut view = LatestView::default();
        view.on_active_list_changed(&["a".to_owned()]);
        view.on_active_list_changed(&[]);
        assert!(view.active.is_empty());
        assert_eq!(view.active_renders, 2);
        assert_eq!(view.history_renders, 0);
    }

    #[test]
    fn test_boxed_and_borrowed_renderers_forward() {
        let boxed = show_one(Box::new(LatestView::default()), "heat");
        assert_eq!(boxed.active, vec!["heat".to_owned()]);

        let mut view = LatestView::default();
        show_one(&mut view, "alien");
        assert_eq!(view.active, vec!["alien".to_owned()]);
    }
}
