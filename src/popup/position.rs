use crate::config::AppConfig;

/// Viewport-relative box in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Below,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSettings {
    pub margin: f32,
    pub offset: f32,
    pub max_width: f32,
    pub max_height: f32,
}

impl PlacementSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            margin: config.viewport_margin,
            offset: config.popup_offset,
            max_width: config.popup_max_width as f32,
            max_height: config.popup_max_height as f32,
        }
    }
}

/// Center the popup horizontally on `target`, clamped to the viewport
/// margins. Place it below unless it does not fit there and there is more
/// room above.
pub fn place_popup(
    target: Rect,
    popup: Size,
    viewport: Viewport,
    settings: &PlacementSettings,
) -> Placement {
    let margin = settings.margin;
    let width = popup
        .width
        .min(settings.max_width)
        .min(viewport.width - 2.0 * margin)
        .max(0.0);
    let height = popup.height.min(settings.max_height).max(0.0);

    let max_left = (viewport.width - margin - width).max(margin);
    let left = (target.center_x() - width / 2.0).clamp(margin, max_left);

    let space_below = viewport.height - target.bottom() - settings.offset - margin;
    let space_above = target.top - settings.offset - margin;
    let (top, side) = if height > space_below && space_above > space_below {
        let top = (target.top - settings.offset - height).max(margin);
        (top, Side::Above)
    } else {
        (target.bottom() + settings.offset, Side::Below)
    };

    Placement {
        left,
        top,
        width,
        height,
        side,
    }
}
