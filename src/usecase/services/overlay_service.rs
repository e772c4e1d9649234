use tracing::trace;

use crate::config::TooltipConfig;
use crate::domain::entities::overlay::{OverlayCoords, OverlayPlacement, Rect, Side, Viewport};

pub struct OverlayPositioner {
    offset: f64,
    margin: f64,
}

impl OverlayPositioner {
    pub fn new(config: &TooltipConfig) -> Self {
        Self {
            offset: config.offset,
            margin: config.margin,
        }
    }

    pub fn base_position(&self, trigger: &Rect, overlay: &Rect, side: Side) -> OverlayCoords {
        match side {
            Side::Top => OverlayCoords {
                x: trigger.center_x() - overlay.width / 2.0,
                y: trigger.top - overlay.height - self.offset,
            },
            Side::Bottom => OverlayCoords {
                x: trigger.center_x() - overlay.width / 2.0,
                y: trigger.bottom + self.offset,
            },
            Side::Left => OverlayCoords {
                x: trigger.left - overlay.width - self.offset,
                y: trigger.center_y() - overlay.height / 2.0,
            },
            Side::Right => OverlayCoords {
                x: trigger.right + self.offset,
                y: trigger.center_y() - overlay.height / 2.0,
            },
        }
    }

    /// Translates only; the requested side is kept even when the opposite
    /// side would fit better.
    pub fn clamp_to_viewport(
        &self,
        coords: OverlayCoords,
        overlay: &Rect,
        viewport: &Viewport,
    ) -> OverlayCoords {
        OverlayCoords {
            x: clamp_axis(coords.x, overlay.width, viewport.width, self.margin),
            y: clamp_axis(coords.y, overlay.height, viewport.height, self.margin),
        }
    }

    pub fn position(
        &self,
        trigger: &Rect,
        overlay: &Rect,
        side: Side,
        viewport: &Viewport,
    ) -> OverlayPlacement {
        let base = self.base_position(trigger, overlay, side);
        let coords = self.clamp_to_viewport(base, overlay, viewport);
        trace!(
            "overlay {}: base ({}, {}) -> ({}, {}) in {}x{}",
            side.as_str(),
            base.x,
            base.y,
            coords.x,
            coords.y,
            viewport.width,
            viewport.height
        );
        OverlayPlacement {
            coords,
            side,
            arrow: arrow_edge(side),
        }
    }
}

/// Far edge first, then near edge, so an overlay that cannot fit ends up
/// flush with the leading margin.
fn clamp_axis(start: f64, size: f64, extent: f64, margin: f64) -> f64 {
    let far_limit = extent - size - margin;
    start.min(far_limit).max(margin)
}

/// The overlay edge facing the trigger.
pub fn arrow_edge(side: Side) -> Side {
    side.opposite()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positioner() -> OverlayPositioner {
        OverlayPositioner::new(&TooltipConfig::default())
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn base_positions_respect_offset_per_side() {
        let trigger = Rect::new(300.0, 300.0, 40.0, 20.0);
        let overlay = Rect::new(0.0, 0.0, 100.0, 30.0);
        let p = positioner();

        let top = p.base_position(&trigger, &overlay, Side::Top);
        assert_eq!(top, OverlayCoords { x: 270.0, y: 262.0 });

        let bottom = p.base_position(&trigger, &overlay, Side::Bottom);
        assert_eq!(bottom, OverlayCoords { x: 270.0, y: 328.0 });

        let left = p.base_position(&trigger, &overlay, Side::Left);
        assert_eq!(left, OverlayCoords { x: 192.0, y: 295.0 });

        let right = p.base_position(&trigger, &overlay, Side::Right);
        assert_eq!(right, OverlayCoords { x: 348.0, y: 295.0 });
    }

    #[test]
    fn clamp_pulls_far_edge_inside_margin() {
        let trigger = Rect::new(780.0, 580.0, 10.0, 10.0);
        let overlay = Rect::new(0.0, 0.0, 100.0, 40.0);
        let placement = positioner().position(&trigger, &overlay, Side::Bottom, &viewport());
        assert_eq!(placement.coords.x, 800.0 - 100.0 - 8.0);
        assert_eq!(placement.coords.y, 600.0 - 40.0 - 8.0);
    }

    #[test]
    fn oversized_overlay_pins_to_leading_margin() {
        let trigger = Rect::new(100.0, 100.0, 10.0, 10.0);
        let overlay = Rect::new(0.0, 0.0, 900.0, 700.0);
        let placement = positioner().position(&trigger, &overlay, Side::Right, &viewport());
        assert_eq!(placement.coords, OverlayCoords { x: 8.0, y: 8.0 });
    }

    #[test]
    fn arrow_follows_requested_side_even_when_clamped() {
        let trigger = Rect::new(0.0, 0.0, 10.0, 10.0);
        let overlay = Rect::new(0.0, 0.0, 100.0, 40.0);
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let placement = positioner().position(&trigger, &overlay, side, &viewport());
            assert_eq!(placement.side, side);
            assert_eq!(placement.arrow, side.opposite());
        }
    }

    #[test]
    fn clamped_coordinates_stay_on_screen_across_a_grid() {
        let overlay = Rect::new(0.0, 0.0, 120.0, 50.0);
        let p = positioner();
        let vp = viewport();
        for left in (-50..=850).step_by(75) {
            for top in (-50..=650).step_by(75) {
                let trigger = Rect::new(left as f64, top as f64, 30.0, 30.0);
                for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
                    let c = p.position(&trigger, &overlay, side, &vp).coords;
                    assert!(c.x >= 8.0 && c.y >= 8.0, "{side:?} at ({left}, {top})");
                    assert!(c.x + overlay.width <= vp.width - 8.0);
                    assert!(c.y + overlay.height <= vp.height - 8.0);
                }
            }
        }
    }
}
