//! Edge scrolling while an item hovers near a surface's scrollable edges.
//!
//! The check runs on a timer rather than on pointer samples, so a held
//! pointer keeps scrolling. Hot zones are strips of `hot_zone` width just
//! outside the leading and trailing edges of the viewport along the scroll
//! axis; the leading edge wins when both are hit.

use crate::config::DragConfig;
use crate::geometry::{Point, Rect, Size};
use crate::types::Orientation;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeScroll {
    pub hot_zone: f32,
    pub step_fraction: f32,
    pub vertical: bool,
}

impl From<&DragConfig> for EdgeScroll {
    fn from(config: &DragConfig) -> Self {
        Self {
            hot_zone: config.hot_zone_width,
            step_fraction: config.scroll_step_fraction,
            vertical: config.vertical_edge_scroll,
        }
    }
}

impl Default for EdgeScroll {
    fn default() -> Self {
        Self::from(&DragConfig::default())
    }
}

impl EdgeScroll {
    /// Offset after one tick, or `None` when the offset would not change.
    ///
    /// `rect` is in viewport space (content coordinates minus the offset).
    pub fn next_offset(
        &self,
        rect: &Rect,
        orientation: Orientation,
        viewport: Size,
        content: Size,
        offset: Point,
    ) -> Option<Point> {
        let mut next = offset;

        match orientation {
            Orientation::Horizontal => {
                let leading = Rect::new(-self.hot_zone, 0.0, self.hot_zone, viewport.height);
                let trailing = Rect::new(viewport.width, 0.0, self.hot_zone, viewport.height);
                let step = viewport.width * self.step_fraction;
                let max = (content.width - viewport.width).max(0.0);

                if rect.intersects(&leading) {
                    next.x = (offset.x - step).max(0.0);
                } else if rect.intersects(&trailing) {
                    next.x = (offset.x + step).min(max);
                }
            }
            Orientation::Vertical => {
                if !self.vertical {
                    return None;
                }
                let leading = Rect::new(0.0, -self.hot_zone, viewport.width, self.hot_zone);
                let trailing = Rect::new(0.0, viewport.height, viewport.width, self.hot_zone);
                let step = viewport.height * self.step_fraction;
                let max = (content.height - viewport.height).max(0.0);

                if rect.intersects(&leading) {
                    next.y = (offset.y - step).max(0.0);
                } else if rect.intersects(&trailing) {
                    next.y = (offset.y + step).min(max);
                }
            }
        }

        (next != offset).then_some(next)
    }
}
