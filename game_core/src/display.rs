//! Presentation scaling of the logical arena onto its container

/// On-screen size of the arena for a given container width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    pub factor: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayScale {
    /// Fit a `logical_width` x `logical_height` surface into `container_width`.
    ///
    /// The surface is never enlarged past its logical size. A container with
    /// no usable width yields a zero scale.
    pub fn fit(container_width: f32, logical_width: f32, logical_height: f32) -> Self {
        let factor = if container_width > 0.0 && logical_width > 0.0 {
            (container_width / logical_width).min(1.0)
        } else {
            0.0
        };
        Self {
            factor,
            width: logical_width * factor,
            height: logical_height * factor,
        }
    }

    /// CSS length for the displayed width
    pub fn css_width(&self) -> String {
        format!("{}px", self.width)
    }

    /// CSS length for the displayed height
    pub fn css_height(&self) -> String {
        format!("{}px", self.height)
    }
}

/// Convert a coordinate measured on the displayed surface into logical units.
///
/// Falls back to the raw value when the displayed extent is unknown.
pub fn to_logical(displayed: f32, displayed_extent: f32, logical_extent: f32) -> f32 {
    if displayed_extent > 0.0 {
        displayed * logical_extent / displayed_extent
    } else {
        displayed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_container_keeps_logical_size() {
        let scale = DisplayScale::fit(1200.0, 600.0, 200.0);
        assert_eq!(scale.factor, 1.0);
        assert_eq!(scale.width, 600.0);
        assert_eq!(scale.height, 200.0);
    }

    #[test]
    fn test_narrow_container_shrinks_with_aspect() {
        let scale = DisplayScale::fit(300.0, 600.0, 200.0);
        assert_eq!(scale.factor, 0.5);
        assert_eq!(scale.width, 300.0);
        assert_eq!(scale.height, 100.0);
    }

    #[test]
    fn test_zero_width_container_is_degenerate_not_fatal() {
        let scale = DisplayScale::fit(0.0, 600.0, 200.0);
        assert_eq!(scale.factor, 0.0);
        assert_eq!(scale.width, 0.0);
        assert_eq!(scale.height, 0.0);
    }

    #[test]
    fn test_css_lengths() {
        let scale = DisplayScale::fit(450.0, 600.0, 200.0);
        assert_eq!(scale.css_width(), "450px");
        assert_eq!(scale.css_height(), "150px");
    }

    #[test]
    fn test_to_logical() {
        assert_eq!(to_logical(50.0, 100.0, 200.0), 100.0);
        assert_eq!(to_logical(80.0, 200.0, 200.0), 80.0);
        assert_eq!(to_logical(80.0, 0.0, 200.0), 80.0);
    }
}
