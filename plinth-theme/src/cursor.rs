/// The pointer cursor a control asks the windowing collaborator to show.
///
/// Controls derive their cursor from interaction state (hover cursor while
/// hovered, normal cursor otherwise) and emit it edge-triggered, so the
/// collaborator only sees actual changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// The regular arrow pointer.
    #[default]
    Arrow,
    /// A pointing hand, used for clickable controls.
    Hand,
    /// A crosshair, used for precise targeting.
    Crosshair,
    /// An I-beam for text.
    Text,
    /// An open grabbing hand, used for draggable controls.
    Grab,
}

impl CursorStyle {
    /// Parse a cursor style from its style-sheet name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "arrow" | "default" => Some(CursorStyle::Arrow),
            "hand" | "pointer" => Some(CursorStyle::Hand),
            "crosshair" => Some(CursorStyle::Crosshair),
            "text" => Some(CursorStyle::Text),
            "grab" => Some(CursorStyle::Grab),
            _ => None,
        }
    }

    /// The canonical style-sheet name of this cursor style.
    pub fn name(&self) -> &'static str {
        match self {
            CursorStyle::Arrow => "arrow",
            CursorStyle::Hand => "hand",
            CursorStyle::Crosshair => "crosshair",
            CursorStyle::Text => "text",
            CursorStyle::Grab => "grab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trip() {
        for cursor in [
            CursorStyle::Arrow,
            CursorStyle::Hand,
            CursorStyle::Crosshair,
            CursorStyle::Text,
            CursorStyle::Grab,
        ] {
            assert_eq!(CursorStyle::from_name(cursor.name()), Some(cursor));
        }
        assert_eq!(CursorStyle::from_name("spinner"), None);
    }
}
