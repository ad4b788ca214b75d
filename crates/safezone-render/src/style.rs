/// Stroke and fill of a circle on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AreaStyle {
    pub color: &'static str,
    pub fill_color: &'static str,
}

const SAFE: AreaStyle = AreaStyle {
    color: "green",
    fill_color: "green",
};

const UNSAFE: AreaStyle = AreaStyle {
    color: "red",
    fill_color: "red",
};

/// Radius of the circle drawn around each reported incident.
pub const REPORT_MARKER_RADIUS_M: f64 = 50.0;

/// The safe-area circle has exactly two looks.
pub fn area_style(safe: bool) -> AreaStyle {
    if safe { SAFE } else { UNSAFE }
}

pub fn report_marker_style() -> AreaStyle {
    UNSAFE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_is_green_and_unsafe_is_red() {
        assert_eq!(area_style(true).color, "green");
        assert_eq!(area_style(true).fill_color, "green");
        assert_eq!(area_style(false).color, "red");
        assert_eq!(area_style(false).fill_color, "red");
    }
}
