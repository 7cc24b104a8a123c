//! Segment geometry for the mode button.
//!
//! Everything here is a pure function of the segment count, the control size
//! and the selected/hovered indices, so the paint pass and the hit-test agree
//! on where each segment lies without sharing mutable state.
//!
//! The control is split into `segment_count` equal slices of
//! `floor(width / segment_count)` whole pixels. Any remainder is left to the
//! rightmost slice's neighborhood; it is never redistributed.

use modebutton_core::logging::targets;
use modebutton_render::Rect;

use crate::style::{ShadowType, VisualState};

/// What a [`LayoutItem`] paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// The sunken box behind every segment.
    Frame,
    /// Highlight behind the selected segment.
    Selection,
    /// Highlight behind the hovered segment.
    Hover,
    /// A vertical line between two segments. Its rect has zero width.
    Separator,
}

/// One region to paint, in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutItem {
    pub kind: LayoutKind,
    pub rect: Rect,
    pub state: VisualState,
    pub shadow: ShadowType,
}

/// Whole-pixel width of one segment slice, or 0 when there are no segments.
pub fn slice_width(segment_count: usize, width: f32) -> i32 {
    if segment_count == 0 || width <= 0.0 {
        return 0;
    }
    let count = i32::try_from(segment_count).unwrap_or(i32::MAX);
    (width.floor() as i32) / count
}

/// Map a pointer x coordinate to a segment index.
///
/// Returns `None` when there are no segments, when a slice would be narrower
/// than one pixel, or when `x` falls outside `[0, segment_count)` slices.
/// Negative coordinates round toward negative infinity, so `x = -1` is never
/// treated as segment 0.
pub fn hit_test(segment_count: usize, width: f32, x: f32) -> Option<i32> {
    let slice = slice_width(segment_count, width);
    if slice <= 0 {
        return None;
    }
    let candidate = (x / slice as f32).floor();
    if candidate >= 0.0 && (candidate as usize) < segment_count {
        Some(candidate as i32)
    } else {
        None
    }
}

/// Rectangle covering segment `index`.
///
/// With a single segment the whole control is covered. The hover highlight
/// for segment 0 starts at x = 0 while every other highlight starts one pixel
/// into its slice; `hover` selects that variant.
pub fn segment_rect(segment_count: usize, width: f32, height: f32, index: i32, hover: bool) -> Rect {
    if segment_count <= 1 {
        return Rect::new(0.0, 0.0, width, height);
    }
    let slice = slice_width(segment_count, width);
    let x = if hover && index == 0 { 0 } else { slice * index + 1 };
    Rect::new(x as f32, 0.0, slice as f32, height)
}

/// X coordinate of the separator before segment `boundary` (1-based).
pub fn separator_x(segment_count: usize, width: f32, boundary: i32) -> f32 {
    (slice_width(segment_count, width) * boundary + 1) as f32
}

/// Vertical extent `(y1, y2)` of a separator inside a control of `height`.
pub fn separator_span(height: f32, inner_border: i32) -> (f32, f32) {
    let y1 = inner_border + 1;
    let y2 = height as i32 - 2 * inner_border - 1;
    (y1 as f32, y2 as f32)
}

/// Everything the mode button paints behind its segments, in paint order.
///
/// The frame always comes first. The selection follows when `selected >= 0`,
/// then the hover highlight when `hovered >= 0` and differs from `selected`,
/// then one separator per inner boundary.
pub fn compute_layout(
    segment_count: usize,
    width: f32,
    height: f32,
    selected: i32,
    hovered: i32,
) -> Vec<LayoutItem> {
    let mut items = Vec::with_capacity(segment_count + 2);

    items.push(LayoutItem {
        kind: LayoutKind::Frame,
        rect: Rect::new(0.0, 0.0, width, height),
        state: VisualState::Normal,
        shadow: ShadowType::In,
    });

    if selected >= 0 {
        items.push(LayoutItem {
            kind: LayoutKind::Selection,
            rect: segment_rect(segment_count, width, height, selected, false),
            state: VisualState::Selected,
            shadow: ShadowType::EtchedOut,
        });
    }

    if hovered >= 0 && hovered != selected {
        items.push(LayoutItem {
            kind: LayoutKind::Hover,
            rect: segment_rect(segment_count, width, height, hovered, true),
            state: VisualState::Prelight,
            shadow: ShadowType::In,
        });
    }

    let count = i32::try_from(segment_count).unwrap_or(i32::MAX);
    for boundary in 1..count {
        items.push(LayoutItem {
            kind: LayoutKind::Separator,
            rect: Rect::new(separator_x(segment_count, width, boundary), 0.0, 0.0, height),
            state: VisualState::Normal,
            shadow: ShadowType::None,
        });
    }

    tracing::trace!(
        target: targets::LAYOUT,
        segment_count,
        width,
        selected,
        hovered,
        items = items.len(),
        "computed layout"
    );

    items
}
