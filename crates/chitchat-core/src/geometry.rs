//! Corner geometry for stacked conversation cards.
//!
//! Cards in a section form one rounded run: outer corners use the default
//! radius, the seams between cards use the inner radius. The active card
//! (pressed, else selected) detaches from its neighbours, whose facing corners
//! round off to meet it. A hovered card is rounded all around.

use serde::{Deserialize, Serialize};

use crate::config::ListGeometryConfig;
use crate::constants::SHARP_CORNER_RADIUS;

/// Radius of each corner of one rectangular card
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_start: f32,
    pub top_end: f32,
    pub bottom_start: f32,
    pub bottom_end: f32,
}

impl CornerRadii {
    pub const fn new(top_start: f32, top_end: f32, bottom_start: f32, bottom_end: f32) -> Self {
        Self {
            top_start,
            top_end,
            bottom_start,
            bottom_end,
        }
    }

    /// Top corners `top`, bottom corners `bottom`
    pub const fn split(top: f32, bottom: f32) -> Self {
        Self::new(top, top, bottom, bottom)
    }

    pub const fn all(radius: f32) -> Self {
        Self::split(radius, radius)
    }

    pub const fn top_rounded(radius: f32) -> Self {
        Self::split(radius, SHARP_CORNER_RADIUS)
    }

    pub const fn bottom_rounded(radius: f32) -> Self {
        Self::split(SHARP_CORNER_RADIUS, radius)
    }

    pub const fn sharp() -> Self {
        Self::all(SHARP_CORNER_RADIUS)
    }
}

/// Interaction state for one list of cards.
///
/// Owns the selected, hovered and pressed indices independently. A manager
/// serves a list of fixed length; build a new one when the length changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatListStateManager {
    item_count: usize,
    default_radius: f32,
    inner_radius: f32,
    hover_radius: f32,
    selected: Option<usize>,
    hovered: Option<usize>,
    pressed: Option<usize>,
}

impl ChatListStateManager {
    pub fn new(item_count: usize, config: &ListGeometryConfig) -> Self {
        let config = config.sanitized();
        Self {
            item_count,
            default_radius: config.default_radius,
            inner_radius: config.inner_radius,
            hover_radius: config.hover_radius,
            selected: None,
            hovered: None,
            pressed: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn select(&mut self, index: usize) {
        tracing::trace!(index, "select card");
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_hovered(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn set_pressed(&mut self, index: usize) {
        tracing::trace!(index, "press card");
        self.pressed = Some(index);
    }

    pub fn clear_pressed(&mut self) {
        self.pressed = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    pub fn pressed_index(&self) -> Option<usize> {
        self.pressed
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }

    /// Any pressed index wins over selected. An out-of-range winner leaves
    /// no card active.
    fn active_index(&self) -> Option<usize> {
        self.pressed
            .or(self.selected)
            .filter(|&i| i < self.item_count)
    }

    /// Corner radii for the card at `index`.
    pub fn corner_radius_for(
        &self,
        index: usize,
        is_first: bool,
        is_last: bool,
        is_hovered: bool,
    ) -> CornerRadii {
        if is_hovered {
            return CornerRadii::all(self.hover_radius);
        }

        let Some(active) = self.active_index() else {
            return self.idle_radii(is_first, is_last);
        };

        if index == active {
            self.active_radii(is_first, is_last)
        } else if Some(index) == active.checked_sub(1) {
            self.above_active_radii(is_first, is_last)
        } else if index == active + 1 {
            self.below_active_radii(is_first, is_last)
        } else {
            self.idle_radii(is_first, is_last)
        }
    }

    fn idle_radii(&self, is_first: bool, is_last: bool) -> CornerRadii {
        match (is_first, is_last) {
            (true, true) => CornerRadii::all(self.default_radius),
            (true, false) => CornerRadii::split(self.default_radius, self.inner_radius),
            (false, true) => CornerRadii::split(self.inner_radius, self.default_radius),
            (false, false) => CornerRadii::all(self.inner_radius),
        }
    }

    fn active_radii(&self, is_first: bool, is_last: bool) -> CornerRadii {
        if is_first {
            CornerRadii::top_rounded(self.default_radius)
        } else if is_last {
            CornerRadii::bottom_rounded(self.default_radius)
        } else {
            CornerRadii::sharp()
        }
    }

    /// Bottom corners round off toward the active card below.
    fn above_active_radii(&self, is_first: bool, is_last: bool) -> CornerRadii {
        let top = self.idle_radii(is_first, is_last).top_start;
        CornerRadii::split(top, self.default_radius)
    }

    /// Top corners round off toward the active card above.
    fn below_active_radii(&self, is_first: bool, is_last: bool) -> CornerRadii {
        let bottom = self.idle_radii(is_first, is_last).bottom_start;
        CornerRadii::split(self.default_radius, bottom)
    }
}
