// Gallery track: pointer-drag panning and indicator dot synchronisation.

use super::constants::{GALLERY_CARD_GAP_PX, GALLERY_DRAG_FACTOR};

/// Geometry and feel of one gallery track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryMetrics {
    pub gap_px: f64,
    pub drag_factor: f64,
}

impl Default for GalleryMetrics {
    fn default() -> Self {
        Self {
            gap_px: GALLERY_CARD_GAP_PX,
            drag_factor: GALLERY_DRAG_FACTOR,
        }
    }
}

impl GalleryMetrics {
    /// Distance between the left edges of neighbouring cards.
    #[inline]
    pub fn pitch(&self, card_width: f64) -> f64 {
        card_width.max(0.0) + self.gap_px
    }

    /// Index of the card nearest to `scroll_offset`, halves rounding up.
    /// A track without a measurable card always maps to 0.
    pub fn index_for_offset(&self, scroll_offset: f64, card_width: f64) -> usize {
        if card_width <= 0.0 || !scroll_offset.is_finite() {
            return 0;
        }
        let raw = scroll_offset.max(0.0) / self.pitch(card_width);
        (raw + 0.5).floor() as usize
    }

    /// Scroll offset that brings card `index` to the start of the track.
    #[inline]
    pub fn offset_for_index(&self, index: usize, card_width: f64) -> f64 {
        index as f64 * self.pitch(card_width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub scroll_offset: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragAnchor),
}

/// Exactly one active indicator out of `count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorSet {
    count: usize,
    active: usize,
}

impl IndicatorSet {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Mark `index` active, clamped into range. Returns true on change.
    pub fn set_active(&mut self, index: usize) -> bool {
        let clamped = index.min(self.count.saturating_sub(1));
        let changed = clamped != self.active;
        self.active = clamped;
        changed
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && index == self.active
    }
}

/// Per-gallery state shared by that gallery's pointer, scroll and dot
/// listeners.
#[derive(Clone, Debug)]
pub struct GalleryScrollSync {
    pub metrics: GalleryMetrics,
    drag: DragState,
    indicators: IndicatorSet,
}

impl GalleryScrollSync {
    pub fn new(indicator_count: usize, metrics: GalleryMetrics) -> Self {
        Self {
            metrics,
            drag: DragState::Idle,
            indicators: IndicatorSet::new(indicator_count),
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// Pointer pressed inside the track.
    pub fn press(&mut self, pointer_x: f64, scroll_offset: f64) {
        self.drag = DragState::Dragging(DragAnchor {
            pointer_x,
            scroll_offset,
        });
    }

    /// Pointer moved; returns the scroll offset to apply while dragging.
    /// The result may be negative or past the end; the host clamps it.
    pub fn drag_to(&self, pointer_x: f64) -> Option<f64> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(anchor) => {
                let walk = (pointer_x - anchor.pointer_x) * self.metrics.drag_factor;
                Some(anchor.scroll_offset - walk)
            }
        }
    }

    /// Pointer released or left the track.
    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Re-derive the active indicator after a scroll. Returns the active
    /// index and whether it changed.
    pub fn sync_scroll(&mut self, scroll_offset: f64, card_width: f64) -> (usize, bool) {
        let index = self.metrics.index_for_offset(scroll_offset, card_width);
        let changed = self.indicators.set_active(index);
        (self.indicators.active(), changed)
    }

    /// Target offset for a click on indicator `index`.
    pub fn indicator_target(&self, index: usize, card_width: f64) -> f64 {
        self.metrics.offset_for_index(index, card_width)
    }
}
