//! Mode button: a row of mutually exclusive segments.
//!
//! A [`ModeButton`] shows any number of segment widgets side by side inside a
//! single sunken frame. At most one segment is selected; pointer motion
//! highlights the segment under the cursor and a press selects it.
//!
//! Indices are `i32` with `-1` meaning "none", matching the values carried by
//! the [`added`](ModeButton::added) and [`changed`](ModeButton::changed)
//! signals.
//!
//! # Example
//!
//! ```
//! use modebutton::widget::widgets::{Label, ModeButton};
//!
//! let mut modes = ModeButton::new();
//! modes.append(Label::new("Left"));
//! modes.append(Label::new("Right"));
//!
//! modes.changed.connect(|&index| println!("mode {index}"));
//! modes.set_selected(1).unwrap();
//! assert_eq!(modes.selected(), 1);
//! ```
//!
//! # Removal and selection
//!
//! Removing a segment shifts the indices after it. The selection follows its
//! segment (or clears if that segment was removed) without emitting
//! `changed`; callers interested in the new value re-query
//! [`selected`](ModeButton::selected) from their `removed` slot.

use modebutton_core::logging::targets;
use modebutton_core::{Object, ObjectId, PerfSpan, Signal};
use modebutton_render::Rect;

use super::{PushButton, SegmentBox};
use crate::config::ModeButtonConfig;
use crate::error::{ModeButtonError, Result};
use crate::layout::{self, LayoutKind};
use crate::style::{paint_box, paint_vline, VisualState};
use crate::widget::{CrossingMode, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

type SelectFilter = Box<dyn Fn(i32) -> bool + Send + Sync>;

/// A segmented control with at most one selected segment.
///
/// # Signals
///
/// - `added(index)`: a segment was appended at `index`
/// - `removed(id)`: the segment widget with object ID `id` was removed
/// - `changed(index)`: the selection changed to `index` (`-1` for none)
pub struct ModeButton {
    base: WidgetBase,
    segments: SegmentBox,
    selected: i32,
    hovered: i32,
    select_filter: Option<SelectFilter>,

    /// Emitted with the new segment's index after an append.
    pub added: Signal<i32>,
    /// Emitted with the removed widget's ID after a removal.
    pub removed: Signal<ObjectId>,
    /// Emitted with the new selection after it changes.
    pub changed: Signal<i32>,
}

impl ModeButton {
    /// Create an empty mode button with default metrics.
    pub fn new() -> Self {
        Self::with_config(&ModeButtonConfig::default())
    }

    /// Create an empty mode button using the container metrics in `config`.
    pub fn with_config(config: &ModeButtonConfig) -> Self {
        let base = WidgetBase::new::<Self>();
        let segments = SegmentBox::new(config.spacing, config.border_width, config.padding);
        if let Err(err) = segments.widget_base().set_parent(Some(base.object_id())) {
            tracing::warn!(target: targets::MODE_BUTTON, %err, "failed to parent segment box");
        }

        Self {
            base,
            segments,
            selected: -1,
            hovered: -1,
            select_filter: None,
            added: Signal::new(),
            removed: Signal::new(),
            changed: Signal::new(),
        }
    }

    /// Apply new container metrics.
    pub fn apply_config(&mut self, config: &ModeButtonConfig) {
        self.segments
            .set_metrics(config.spacing, config.border_width, config.padding);
        self.base.update();
    }

    // =========================================================================
    // Segments
    // =========================================================================

    /// Number of segments.
    pub fn count(&self) -> i32 {
        i32::try_from(self.segments.len()).unwrap_or(i32::MAX)
    }

    /// The segment widget at `index`.
    pub fn segment(&self, index: i32) -> Option<&dyn Widget> {
        usize::try_from(index).ok().and_then(|i| self.segments.get(i))
    }

    fn segment_mut(&mut self, index: i32) -> Option<&mut (dyn Widget + 'static)> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.segments.get_mut(i))
    }

    /// Append `widget` as the last segment and return its index.
    pub fn append(&mut self, widget: impl Widget + 'static) -> i32 {
        self.append_boxed(Box::new(widget))
    }

    /// Append an already boxed widget as the last segment.
    pub fn append_boxed(&mut self, mut widget: Box<dyn Widget>) -> i32 {
        widget.set_visual_state(VisualState::Normal);
        self.segments.push(widget);
        let index = self.count() - 1;

        tracing::debug!(target: targets::MODE_BUTTON, index, "segment appended");
        self.base.update();
        self.added.emit(index);
        index
    }

    /// Append the content of `button` as a new segment.
    ///
    /// The button itself is dropped. Returns -1 and appends nothing if the
    /// button has no content.
    pub fn append_button(&mut self, mut button: PushButton) -> i32 {
        match button.take_content() {
            Some(content) => self.append_boxed(content),
            None => {
                tracing::debug!(target: targets::MODE_BUTTON, "button without content not appended");
                -1
            }
        }
    }

    /// Remove the segment at `index` and hand it back to the caller.
    ///
    /// The returned widget is detached and back in the `Normal` state.
    pub fn remove(&mut self, index: i32) -> Result<Box<dyn Widget>> {
        let count = self.count();
        let Some(mut widget) = usize::try_from(index)
            .ok()
            .and_then(|i| self.segments.remove(i))
        else {
            tracing::warn!(target: targets::MODE_BUTTON, index, count, "remove with invalid index");
            return Err(ModeButtonError::InvalidIndex { index, count });
        };
        widget.set_visual_state(VisualState::Normal);

        if self.selected == index {
            self.selected = -1;
        } else if self.selected > index {
            self.selected -= 1;
        }
        if self.hovered >= index {
            self.hovered -= 1;
        }

        let id = widget.object_id();
        tracing::debug!(
            target: targets::MODE_BUTTON,
            index,
            selected = self.selected,
            hovered = self.hovered,
            "segment removed"
        );
        self.base.update();
        self.removed.emit(id);
        Ok(widget)
    }

    // =========================================================================
    // Selection and hover
    // =========================================================================

    /// The selected index, or -1.
    pub fn selected(&self) -> i32 {
        self.selected
    }

    /// Select the segment at `index`, or clear the selection with -1.
    ///
    /// Selecting the current value does nothing. The select filter, if set,
    /// may refuse the change, in which case nothing happens either.
    pub fn set_selected(&mut self, index: i32) -> Result<()> {
        self.check_index(index)?;
        if index == self.selected {
            return Ok(());
        }
        if let Some(filter) = &self.select_filter
            && !filter(index)
        {
            tracing::debug!(target: targets::MODE_BUTTON, index, "selection refused by filter");
            return Ok(());
        }

        let previous = self.selected;
        if let Some(segment) = self.segment_mut(previous) {
            segment.set_visual_state(VisualState::Normal);
        }
        self.selected = index;
        if let Some(segment) = self.segment_mut(index) {
            segment.set_visual_state(VisualState::Selected);
        }

        tracing::debug!(target: targets::MODE_BUTTON, previous, index, "selection changed");
        self.base.update();
        self.changed.emit(index);
        Ok(())
    }

    /// The hovered index, or -1.
    pub fn hovered(&self) -> i32 {
        self.hovered
    }

    /// Highlight the segment at `index`, or clear the highlight with -1.
    pub fn set_hovered(&mut self, index: i32) -> Result<()> {
        self.check_index(index)?;
        if index == self.hovered {
            return Ok(());
        }
        self.hovered = index;
        self.base.update();
        Ok(())
    }

    /// Install a predicate consulted before every selection change.
    ///
    /// Returning `false` refuses the change.
    pub fn set_select_filter<F>(&mut self, filter: F)
    where
        F: Fn(i32) -> bool + Send + Sync + 'static,
    {
        self.select_filter = Some(Box::new(filter));
    }

    /// Remove the select filter so every selection is accepted.
    pub fn clear_select_filter(&mut self) {
        self.select_filter = None;
    }

    fn check_index(&self, index: i32) -> Result<()> {
        let count = self.count();
        if index < -1 || index >= count {
            tracing::warn!(target: targets::MODE_BUTTON, index, count, "invalid segment index");
            return Err(ModeButtonError::InvalidIndex { index, count });
        }
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_motion(&mut self, x: f32) {
        let Some(candidate) = layout::hit_test(self.segments.len(), self.base.width(), x) else {
            return;
        };
        if let Err(err) = self.set_hovered(candidate) {
            tracing::warn!(target: targets::MODE_BUTTON, %err, "hit-test produced an invalid index");
        }
    }

    fn handle_press(&mut self) -> bool {
        if self.hovered < 0 || self.hovered == self.selected {
            return false;
        }
        let before = self.selected;
        if let Err(err) = self.set_selected(self.hovered) {
            tracing::warn!(target: targets::MODE_BUTTON, %err, "press on an invalid segment");
            return false;
        }
        self.selected != before
    }

    fn handle_leave(&mut self, mode: CrossingMode) {
        if mode != CrossingMode::Normal {
            return;
        }
        // Always redraw, even if nothing was hovered.
        self.hovered = -1;
        self.base.update();
    }
}

impl Default for ModeButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for ModeButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ModeButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        self.segments.size_hint()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let _span = PerfSpan::new("mode_button.paint");

        let style = ctx.style();
        let inner_border = style.metrics().inner_border;
        let (width, height) = (ctx.width(), ctx.height());
        let full = Rect::new(0.0, 0.0, width, height);

        let items = layout::compute_layout(
            self.segments.len(),
            width,
            height,
            self.selected,
            self.hovered,
        );

        for item in &items {
            match item.kind {
                LayoutKind::Frame => {
                    paint_box(ctx.renderer(), &style.box_style(item.state), item.shadow, full, None);
                }
                LayoutKind::Selection | LayoutKind::Hover => {
                    paint_box(
                        ctx.renderer(),
                        &style.box_style(item.state),
                        item.shadow,
                        full,
                        Some(item.rect),
                    );
                }
                LayoutKind::Separator => {
                    let (y1, y2) = layout::separator_span(height, inner_border);
                    paint_vline(ctx.renderer(), &style.line_style(item.state), y1, y2, item.rect.left());
                }
            }
        }

        tracing::trace!(target: targets::PAINT, items = items.len(), "mode button painted");
        ctx.paint_child(&self.segments);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Resize(_) => {
                let rect = self.base.rect();
                self.segments.set_geometry(rect);
            }
            WidgetEvent::MouseMove(e) => self.handle_motion(e.local_pos.x),
            WidgetEvent::MousePress(_) => {
                if self.handle_press() {
                    event.accept();
                }
            }
            WidgetEvent::Leave(e) => self.handle_leave(e.mode),
            WidgetEvent::MouseRelease(_) | WidgetEvent::Enter(_) => {}
        }
        event.is_accepted()
    }
}

static_assertions::assert_impl_all!(ModeButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::widgets::Label;
    use crate::widget::{LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent};
    use modebutton_render::Point;
    use std::sync::{Arc, Mutex};

    /// Collects every value a signal emits.
    #[derive(Clone, Default)]
    struct Recorder<T>(Arc<Mutex<Vec<T>>>);

    impl<T: Clone> Recorder<T> {
        fn push(&self, value: T) {
            self.0.lock().unwrap().push(value);
        }

        fn values(&self) -> Vec<T> {
            self.0.lock().unwrap().clone()
        }
    }

    fn setup(labels: &[&str]) -> ModeButton {
        let mut modes = ModeButton::new();
        for text in labels {
            modes.append(Label::new(*text));
        }
        modes.set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        modes
    }

    fn record_changed(modes: &ModeButton) -> Recorder<i32> {
        let recorder = Recorder::default();
        let clone = recorder.clone();
        modes.changed.connect(move |&i| clone.push(i));
        recorder
    }

    fn move_to(modes: &mut ModeButton, x: f32) {
        modes.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(Point::new(x, 10.0))));
    }

    fn press(modes: &mut ModeButton) -> bool {
        modes.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(0.0, 10.0),
        )))
    }

    fn states(modes: &ModeButton) -> Vec<VisualState> {
        (0..modes.count())
            .map(|i| modes.segment(i).unwrap().visual_state())
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let modes = ModeButton::new();
        assert_eq!(modes.count(), 0);
        assert_eq!(modes.selected(), -1);
        assert_eq!(modes.hovered(), -1);
    }

    #[test]
    fn test_append_emits_added_and_returns_index() {
        let mut modes = ModeButton::new();
        let added = Recorder::default();
        let clone = added.clone();
        modes.added.connect(move |&i| clone.push(i));

        assert_eq!(modes.append(Label::new("Left")), 0);
        assert_eq!(modes.append(Label::new("Right")), 1);
        assert_eq!(added.values(), vec![0, 1]);
        assert_eq!(modes.count(), 2);
    }

    #[test]
    fn test_select_marks_exactly_one_segment() {
        let mut modes = setup(&["Left", "Right"]);
        let changed = record_changed(&modes);

        modes.set_selected(1).unwrap();
        assert_eq!(modes.selected(), 1);
        assert_eq!(changed.values(), vec![1]);
        assert_eq!(states(&modes), vec![VisualState::Normal, VisualState::Selected]);

        modes.set_selected(0).unwrap();
        assert_eq!(states(&modes), vec![VisualState::Selected, VisualState::Normal]);

        modes.set_selected(-1).unwrap();
        assert_eq!(states(&modes), vec![VisualState::Normal, VisualState::Normal]);
        assert_eq!(changed.values(), vec![1, 0, -1]);
    }

    #[test]
    fn test_reselect_is_a_no_op() {
        let mut modes = setup(&["A", "B", "C"]);
        modes.set_selected(2).unwrap();
        let changed = record_changed(&modes);
        let before = modes.widget_base().repaint_requests();

        modes.set_selected(2).unwrap();
        assert_eq!(modes.widget_base().repaint_requests(), before);
        assert!(changed.values().is_empty());

        modes.set_selected(-1).unwrap();
        let before = modes.widget_base().repaint_requests();
        modes.set_selected(-1).unwrap();
        assert_eq!(modes.widget_base().repaint_requests(), before);
    }

    #[test]
    fn test_invalid_indices_are_rejected() {
        let mut modes = setup(&["A", "B"]);
        modes.set_selected(1).unwrap();

        assert_eq!(
            modes.set_selected(2),
            Err(ModeButtonError::InvalidIndex { index: 2, count: 2 })
        );
        assert_eq!(
            modes.set_hovered(-2),
            Err(ModeButtonError::InvalidIndex { index: -2, count: 2 })
        );
        assert!(matches!(
            modes.remove(-1),
            Err(ModeButtonError::InvalidIndex { index: -1, count: 2 })
        ));
        assert_eq!(modes.selected(), 1);
        assert_eq!(modes.count(), 2);
    }

    #[test]
    fn test_remove_shifts_selection() {
        // selected == k clears
        let mut modes = setup(&["A", "B", "C"]);
        modes.set_selected(1).unwrap();
        modes.remove(1).unwrap();
        assert_eq!(modes.selected(), -1);

        // selected > k decrements
        let mut modes = setup(&["A", "B", "C"]);
        modes.set_selected(2).unwrap();
        modes.remove(0).unwrap();
        assert_eq!(modes.selected(), 1);
        assert_eq!(modes.segment(1).unwrap().visual_state(), VisualState::Selected);

        // selected < k stays
        let mut modes = setup(&["A", "B", "C"]);
        modes.set_selected(0).unwrap();
        modes.remove(2).unwrap();
        assert_eq!(modes.selected(), 0);
    }

    #[test]
    fn test_remove_does_not_emit_changed() {
        let mut modes = setup(&["A", "B"]);
        modes.set_selected(0).unwrap();
        let changed = record_changed(&modes);
        let removed = Recorder::default();
        let clone = removed.clone();
        modes.removed.connect(move |&id| clone.push(id));

        let id = modes.segment(0).unwrap().object_id();
        let widget = modes.remove(0).unwrap();

        assert_eq!(widget.object_id(), id);
        assert_eq!(widget.visual_state(), VisualState::Normal);
        assert_eq!(widget.widget_base().parent_id(), None);
        assert_eq!(removed.values(), vec![id]);
        assert!(changed.values().is_empty());
    }

    #[test]
    fn test_remove_past_the_end_changes_nothing() {
        let mut modes = setup(&["A", "B"]);
        modes.set_selected(1).unwrap();
        modes.set_hovered(0).unwrap();
        let removed = Recorder::default();
        let clone = removed.clone();
        modes.removed.connect(move |&id| clone.push(id));

        for index in [2, i32::MAX] {
            assert!(matches!(
                modes.remove(index),
                Err(ModeButtonError::InvalidIndex { count: 2, .. })
            ));
        }
        assert_eq!(modes.count(), 2);
        assert_eq!(modes.selected(), 1);
        assert_eq!(modes.hovered(), 0);
        assert!(removed.values().is_empty());
    }

    #[test]
    fn test_remove_shifts_hover() {
        let mut modes = setup(&["A", "B", "C"]);
        modes.set_hovered(2).unwrap();
        modes.remove(1).unwrap();
        assert_eq!(modes.hovered(), 1);

        modes.set_hovered(0).unwrap();
        modes.remove(0).unwrap();
        assert_eq!(modes.hovered(), -1);
    }

    #[test]
    fn test_drain_from_front() {
        let mut modes = setup(&["A", "B", "C", "D"]);
        modes.set_selected(3).unwrap();
        for _ in 0..4 {
            modes.remove(0).unwrap();
        }
        assert_eq!(modes.count(), 0);
        assert_eq!(modes.selected(), -1);
        assert_eq!(modes.hovered(), -1);
    }

    #[test]
    fn test_motion_hit_test() {
        let mut modes = setup(&["A", "B", "C"]);
        move_to(&mut modes, 50.0);
        assert_eq!(modes.hovered(), 0);
        move_to(&mut modes, 150.0);
        assert_eq!(modes.hovered(), 1);
        move_to(&mut modes, 299.0);
        assert_eq!(modes.hovered(), 2);

        // outside the slices leaves hover alone
        move_to(&mut modes, 400.0);
        assert_eq!(modes.hovered(), 2);
    }

    #[test]
    fn test_motion_without_segments() {
        let mut modes = ModeButton::new();
        modes.set_geometry(Rect::new(0.0, 0.0, 300.0, 30.0));
        move_to(&mut modes, 50.0);
        assert_eq!(modes.hovered(), -1);
    }

    #[test]
    fn test_motion_over_collapsed_button() {
        let mut modes = setup(&["A", "B"]);
        modes.set_geometry(Rect::new(0.0, 0.0, 0.0, 30.0));
        move_to(&mut modes, 0.0);
        assert_eq!(modes.hovered(), -1);
    }

    #[test]
    fn test_event_result_mirrors_accepted_flag() {
        let mut modes = setup(&["A", "B", "C"]);

        let mut motion = WidgetEvent::MouseMove(MouseMoveEvent::new(Point::new(150.0, 10.0)));
        assert!(!modes.event(&mut motion));
        assert!(!motion.is_accepted());

        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(150.0, 10.0),
        ));
        assert!(modes.event(&mut press));
        assert!(press.is_accepted());

        // pressing the already selected segment is left for the host
        let mut again = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            Point::new(150.0, 10.0),
        ));
        assert!(!modes.event(&mut again));
        assert!(!again.is_accepted());
    }

    #[test]
    fn test_press_selects_hovered() {
        let mut modes = setup(&["A", "B", "C"]);
        let changed = record_changed(&modes);

        assert!(!press(&mut modes));

        move_to(&mut modes, 150.0);
        assert!(press(&mut modes));
        assert_eq!(modes.selected(), 1);

        assert!(!press(&mut modes));
        assert_eq!(changed.values(), vec![1]);
    }

    #[test]
    fn test_leave_clears_hover_for_normal_crossing_only() {
        let mut modes = setup(&["A", "B"]);
        move_to(&mut modes, 10.0);
        assert_eq!(modes.hovered(), 0);

        modes.event(&mut WidgetEvent::Leave(LeaveEvent::with_mode(CrossingMode::Grab)));
        assert_eq!(modes.hovered(), 0);

        modes.event(&mut WidgetEvent::Leave(LeaveEvent::new()));
        assert_eq!(modes.hovered(), -1);

        // still requests a redraw when nothing was hovered
        let before = modes.widget_base().repaint_requests();
        modes.event(&mut WidgetEvent::Leave(LeaveEvent::new()));
        assert_eq!(modes.widget_base().repaint_requests(), before + 1);
    }

    #[test]
    fn test_select_filter_can_veto() {
        let mut modes = setup(&["A", "B", "C"]);
        let changed = record_changed(&modes);
        modes.set_select_filter(|index| index != 2);

        modes.set_selected(2).unwrap();
        assert_eq!(modes.selected(), -1);

        modes.set_selected(1).unwrap();
        assert_eq!(modes.selected(), 1);

        modes.clear_select_filter();
        modes.set_selected(2).unwrap();
        assert_eq!(changed.values(), vec![1, 2]);
    }

    #[test]
    fn test_append_button_takes_content() {
        let mut modes = ModeButton::new();
        let button = PushButton::new("Week");
        let content_id = button.content().unwrap().object_id();

        assert_eq!(modes.append_button(button), 0);
        assert_eq!(modes.segment(0).unwrap().object_id(), content_id);
        assert_eq!(modes.append_button(PushButton::empty()), -1);
        assert_eq!(modes.count(), 1);
    }

    #[test]
    fn test_appended_widget_resets_visual_state() {
        let mut modes = ModeButton::new();
        let mut label = Label::new("A");
        label.set_visual_state(VisualState::Selected);
        modes.append(label);
        assert_eq!(modes.segment(0).unwrap().visual_state(), VisualState::Normal);
    }
}
