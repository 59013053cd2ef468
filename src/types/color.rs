//! Color representation for CAD entities
//!
//! Layer colors in DXF are AutoCAD Color Index (ACI) values.  The
//! [`ACI_PALETTE`] table maps every index to its RGB triple so consumers
//! (viewers) can render entities through their resolved layer.

use std::fmt;

/// Represents a color in AutoCAD
///
/// Colors can be represented in multiple ways:
/// - By index (1-255): AutoCAD Color Index (ACI)
/// - By layer: use the layer's color (index 256)
/// - By block: use the block's color (index 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from an AutoCAD Color Index
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ if index < 0 => Color::Index((-index).min(255) as u8), // Negative means layer is off
            _ => Color::Index(7), // Default to white
        }
    }

    /// Get the color index (if applicable)
    pub fn index(&self) -> Option<u16> {
        match self {
            Color::ByBlock => Some(0),
            Color::Index(i) => Some(*i as u16),
            Color::ByLayer => Some(256),
        }
    }

    /// Resolve to an RGB triple through the ACI palette.
    ///
    /// `ByLayer` has no RGB of its own (the consumer must resolve the
    /// layer first) and returns `None`.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::ByLayer => None,
            Color::ByBlock => Some(ACI_PALETTE[0]),
            Color::Index(i) => Some(ACI_PALETTE[*i as usize]),
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

/// RGB values for every AutoCAD Color Index.
pub const ACI_PALETTE: [(u8, u8, u8); 256] = [
    (0x00, 0x00, 0x00), (0xff, 0x00, 0x00), (0xff, 0xff, 0x00), (0x00, 0xff, 0x00),
    (0x00, 0xff, 0xff), (0x00, 0x00, 0xff), (0xff, 0x00, 0xff), (0xff, 0xff, 0xff),
    (0x41, 0x41, 0x41), (0x80, 0x80, 0x80), (0xff, 0x00, 0x00), (0xff, 0xaa, 0xaa),
    (0xbd, 0x00, 0x00), (0xbd, 0x7e, 0x7e), (0x81, 0x00, 0x00), (0x81, 0x56, 0x56),
    (0x68, 0x00, 0x00), (0x68, 0x45, 0x45), (0x4f, 0x00, 0x00), (0x4f, 0x35, 0x35),
    (0xff, 0x3f, 0x00), (0xff, 0xbf, 0xaa), (0xbd, 0x2e, 0x00), (0xbd, 0x8d, 0x7e),
    (0x81, 0x1f, 0x00), (0x81, 0x60, 0x56), (0x68, 0x19, 0x00), (0x68, 0x4e, 0x45),
    (0x4f, 0x13, 0x00), (0x4f, 0x3b, 0x35), (0xff, 0x7f, 0x00), (0xff, 0xd4, 0xaa),
    (0xbd, 0x5e, 0x00), (0xbd, 0x9d, 0x7e), (0x81, 0x40, 0x00), (0x81, 0x6b, 0x56),
    (0x68, 0x34, 0x00), (0x68, 0x56, 0x45), (0x4f, 0x27, 0x00), (0x4f, 0x42, 0x35),
    (0xff, 0xbf, 0x00), (0xff, 0xea, 0xaa), (0xbd, 0x8d, 0x00), (0xbd, 0xad, 0x7e),
    (0x81, 0x60, 0x00), (0x81, 0x76, 0x56), (0x68, 0x4e, 0x00), (0x68, 0x5f, 0x45),
    (0x4f, 0x3b, 0x00), (0x4f, 0x49, 0x35), (0xff, 0xff, 0x00), (0xff, 0xff, 0xaa),
    (0xbd, 0xbd, 0x00), (0xbd, 0xbd, 0x7e), (0x81, 0x81, 0x00), (0x81, 0x81, 0x56),
    (0x68, 0x68, 0x00), (0x68, 0x68, 0x45), (0x4f, 0x4f, 0x00), (0x4f, 0x4f, 0x35),
    (0xbf, 0xff, 0x00), (0xea, 0xff, 0xaa), (0x8d, 0xbd, 0x00), (0xad, 0xbd, 0x7e),
    (0x60, 0x81, 0x00), (0x76, 0x81, 0x56), (0x4e, 0x68, 0x00), (0x5f, 0x68, 0x45),
    (0x3b, 0x4f, 0x00), (0x49, 0x4f, 0x35), (0x7f, 0xff, 0x00), (0xd4, 0xff, 0xaa),
    (0x5e, 0xbd, 0x00), (0x9d, 0xbd, 0x7e), (0x40, 0x81, 0x00), (0x6b, 0x81, 0x56),
    (0x34, 0x68, 0x00), (0x56, 0x68, 0x45), (0x27, 0x4f, 0x00), (0x42, 0x4f, 0x35),
    (0x3f, 0xff, 0x00), (0xbf, 0xff, 0xaa), (0x2e, 0xbd, 0x00), (0x8d, 0xbd, 0x7e),
    (0x1f, 0x81, 0x00), (0x60, 0x81, 0x56), (0x19, 0x68, 0x00), (0x4e, 0x68, 0x45),
    (0x13, 0x4f, 0x00), (0x3b, 0x4f, 0x35), (0x00, 0xff, 0x00), (0xaa, 0xff, 0xaa),
    (0x00, 0xbd, 0x00), (0x7e, 0xbd, 0x7e), (0x00, 0x81, 0x00), (0x56, 0x81, 0x56),
    (0x00, 0x68, 0x00), (0x45, 0x68, 0x45), (0x00, 0x4f, 0x00), (0x35, 0x4f, 0x35),
    (0x00, 0xff, 0x3f), (0xaa, 0xff, 0xbf), (0x00, 0xbd, 0x2e), (0x7e, 0xbd, 0x8d),
    (0x00, 0x81, 0x1f), (0x56, 0x81, 0x60), (0x00, 0x68, 0x19), (0x45, 0x68, 0x4e),
    (0x00, 0x4f, 0x13), (0x35, 0x4f, 0x3b), (0x00, 0xff, 0x7f), (0xaa, 0xff, 0xd4),
    (0x00, 0xbd, 0x5e), (0x7e, 0xbd, 0x9d), (0x00, 0x81, 0x40), (0x56, 0x81, 0x6b),
    (0x00, 0x68, 0x34), (0x45, 0x68, 0x56), (0x00, 0x4f, 0x27), (0x35, 0x4f, 0x42),
    (0x00, 0xff, 0xbf), (0xaa, 0xff, 0xea), (0x00, 0xbd, 0x8d), (0x7e, 0xbd, 0xad),
    (0x00, 0x81, 0x60), (0x56, 0x81, 0x76), (0x00, 0x68, 0x4e), (0x45, 0x68, 0x5f),
    (0x00, 0x4f, 0x3b), (0x35, 0x4f, 0x49), (0x00, 0xff, 0xff), (0xaa, 0xff, 0xff),
    (0x00, 0xbd, 0xbd), (0x7e, 0xbd, 0xbd), (0x00, 0x81, 0x81), (0x56, 0x81, 0x81),
    (0x00, 0x68, 0x68), (0x45, 0x68, 0x68), (0x00, 0x4f, 0x4f), (0x35, 0x4f, 0x4f),
    (0x00, 0xbf, 0xff), (0xaa, 0xea, 0xff), (0x00, 0x8d, 0xbd), (0x7e, 0xad, 0xbd),
    (0x00, 0x60, 0x81), (0x56, 0x76, 0x81), (0x00, 0x4e, 0x68), (0x45, 0x5f, 0x68),
    (0x00, 0x3b, 0x4f), (0x35, 0x49, 0x4f), (0x00, 0x7f, 0xff), (0xaa, 0xd4, 0xff),
    (0x00, 0x5e, 0xbd), (0x7e, 0x9d, 0xbd), (0x00, 0x40, 0x81), (0x56, 0x6b, 0x81),
    (0x00, 0x34, 0x68), (0x45, 0x56, 0x68), (0x00, 0x27, 0x4f), (0x35, 0x42, 0x4f),
    (0x00, 0x3f, 0xff), (0xaa, 0xbf, 0xff), (0x00, 0x2e, 0xbd), (0x7e, 0x8d, 0xbd),
    (0x00, 0x1f, 0x81), (0x56, 0x60, 0x81), (0x00, 0x19, 0x68), (0x45, 0x4e, 0x68),
    (0x00, 0x13, 0x4f), (0x35, 0x3b, 0x4f), (0x00, 0x00, 0xff), (0xaa, 0xaa, 0xff),
    (0x00, 0x00, 0xbd), (0x7e, 0x7e, 0xbd), (0x00, 0x00, 0x81), (0x56, 0x56, 0x81),
    (0x00, 0x00, 0x68), (0x45, 0x45, 0x68), (0x00, 0x00, 0x4f), (0x35, 0x35, 0x4f),
    (0x3f, 0x00, 0xff), (0xbf, 0xaa, 0xff), (0x2e, 0x00, 0xbd), (0x8d, 0x7e, 0xbd),
    (0x1f, 0x00, 0x81), (0x60, 0x56, 0x81), (0x19, 0x00, 0x68), (0x4e, 0x45, 0x68),
    (0x13, 0x00, 0x4f), (0x3b, 0x35, 0x4f), (0x7f, 0x00, 0xff), (0xd4, 0xaa, 0xff),
    (0x5e, 0x00, 0xbd), (0x9d, 0x7e, 0xbd), (0x40, 0x00, 0x81), (0x6b, 0x56, 0x81),
    (0x34, 0x00, 0x68), (0x56, 0x45, 0x68), (0x27, 0x00, 0x4f), (0x42, 0x35, 0x4f),
    (0xbf, 0x00, 0xff), (0xea, 0xaa, 0xff), (0x8d, 0x00, 0xbd), (0xad, 0x7e, 0xbd),
    (0x60, 0x00, 0x81), (0x76, 0x56, 0x81), (0x4e, 0x00, 0x68), (0x5f, 0x45, 0x68),
    (0x3b, 0x00, 0x4f), (0x49, 0x35, 0x4f), (0xff, 0x00, 0xff), (0xff, 0xaa, 0xff),
    (0xbd, 0x00, 0xbd), (0xbd, 0x7e, 0xbd), (0x81, 0x00, 0x81), (0x81, 0x56, 0x81),
    (0x68, 0x00, 0x68), (0x68, 0x45, 0x68), (0x4f, 0x00, 0x4f), (0x4f, 0x35, 0x4f),
    (0xff, 0x00, 0xbf), (0xff, 0xaa, 0xea), (0xbd, 0x00, 0x8d), (0xbd, 0x7e, 0xad),
    (0x81, 0x00, 0x60), (0x81, 0x56, 0x76), (0x68, 0x00, 0x4e), (0x68, 0x45, 0x5f),
    (0x4f, 0x00, 0x3b), (0x4f, 0x35, 0x49), (0xff, 0x00, 0x7f), (0xff, 0xaa, 0xd4),
    (0xbd, 0x00, 0x5e), (0xbd, 0x7e, 0x9d), (0x81, 0x00, 0x40), (0x81, 0x56, 0x6b),
    (0x68, 0x00, 0x34), (0x68, 0x45, 0x56), (0x4f, 0x00, 0x27), (0x4f, 0x35, 0x42),
    (0xff, 0x00, 0x3f), (0xff, 0xaa, 0xbf), (0xbd, 0x00, 0x2e), (0xbd, 0x7e, 0x8d),
    (0x81, 0x00, 0x1f), (0x81, 0x56, 0x60), (0x68, 0x00, 0x19), (0x68, 0x45, 0x4e),
    (0x4f, 0x00, 0x13), (0x4f, 0x35, 0x3b), (0x33, 0x33, 0x33), (0x50, 0x50, 0x50),
    (0x69, 0x69, 0x69), (0x82, 0x82, 0x82), (0xbe, 0xbe, 0xbe), (0xff, 0xff, 0xff),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(Color::from_index(0), Color::ByBlock);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(7), Color::Index(7));
        assert_eq!(Color::from_index(-3), Color::Index(3));
    }

    #[test]
    fn test_rgb_lookup() {
        assert_eq!(Color::RED.rgb(), Some((0xff, 0x00, 0x00)));
        assert_eq!(Color::WHITE.rgb(), Some((0xff, 0xff, 0xff)));
        assert_eq!(Color::ByBlock.rgb(), Some((0x00, 0x00, 0x00)));
        assert_eq!(Color::ByLayer.rgb(), None);
    }

    #[test]
    fn test_palette_endpoints() {
        assert_eq!(ACI_PALETTE[9], (0x80, 0x80, 0x80));
        assert_eq!(ACI_PALETTE[250], (0x33, 0x33, 0x33));
        assert_eq!(ACI_PALETTE[255], (0xff, 0xff, 0xff));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Color::Index(62)), "Index(62)");
        assert_eq!(format!("{}", Color::ByLayer), "ByLayer");
    }
}
