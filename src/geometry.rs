/// Element box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether the whole box sits inside a viewport of the given size.
    pub fn fits_viewport(&self, viewport_width: f64, viewport_height: f64) -> bool {
        self.top >= 0.0
            && self.left >= 0.0
            && self.bottom() <= viewport_height
            && self.right() <= viewport_width
    }
}

/// Circle overlay spawned on a button click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// Sized to the larger side of `rect` and centered on the click point.
    pub fn centered(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    pub fn css_text(&self, duration_ms: u32) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             transform: scale(0); animation: ripple {duration_ms}ms linear; \
             width: {size}px; height: {size}px; left: {left}px; top: {top}px; pointer-events: none;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// 3-D rotation following the pointer across a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(rect: Rect, client_x: f64, client_y: f64, divisor: f64) -> Self {
        let x = client_x - rect.left;
        let y = client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;

        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 120.0,
    };

    #[test]
    fn viewport_containment_requires_every_edge_inside() {
        assert!(CARD.fits_viewport(1280.0, 720.0));
        assert!(!CARD.fits_viewport(399.0, 720.0));
        assert!(!Rect { top: -1.0, ..CARD }.fits_viewport(1280.0, 720.0));
        assert!(Rect { left: 0.0, top: 0.0, width: 1280.0, height: 720.0 }.fits_viewport(1280.0, 720.0));
    }

    #[test]
    fn ripple_uses_the_larger_side_and_centers_on_the_click() {
        let ripple = Ripple::centered(CARD, 250.0, 260.0);

        assert_eq!(ripple.size, 300.0);
        assert_eq!(ripple.left, 0.0);
        assert_eq!(ripple.top, -90.0);
        assert!(ripple.css_text(600).contains("animation: ripple 600ms linear"));
    }

    #[test]
    fn tilt_is_neutral_at_the_center_and_signed_off_center() {
        let centered = Tilt::from_pointer(CARD, 250.0, 260.0, 10.0);
        assert_eq!(centered.rotate_x, 0.0);
        assert_eq!(centered.rotate_y, 0.0);

        let corner = Tilt::from_pointer(CARD, 100.0, 200.0, 10.0);
        assert_eq!(corner.rotate_x, -6.0);
        assert_eq!(corner.rotate_y, 15.0);
        assert_eq!(
            corner.transform(),
            "perspective(1000px) rotateX(-6deg) rotateY(15deg) translateY(-8px)"
        );
    }
}
