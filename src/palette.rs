//! Color and icon tags for steps and cards.
//!
//! Every tag resolves to a fixed [`StyleDescriptor`] at compile time, so a
//! view can never ask for a color class that does not exist in the
//! stylesheet.

/// Accent color attached to a step or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Teal,
    Yellow,
    Pink,
    Indigo,
    Gray,
}

/// CSS classes and the raw accent value for one [`ColorTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Class for the filled badge / active card background.
    pub accent: &'static str,
    /// Class for the pale card surface used when a step is muted.
    pub surface: &'static str,
    /// Class for the card border.
    pub border: &'static str,
    /// Class for text drawn on the surface.
    pub text: &'static str,
    /// Accent as a hex color, for SVG strokes and terminal output.
    pub hex: &'static str,
}

impl ColorTag {
    pub const ALL: [ColorTag; 10] = [
        ColorTag::Blue,
        ColorTag::Green,
        ColorTag::Purple,
        ColorTag::Orange,
        ColorTag::Red,
        ColorTag::Teal,
        ColorTag::Yellow,
        ColorTag::Pink,
        ColorTag::Indigo,
        ColorTag::Gray,
    ];

    pub const fn style(self) -> StyleDescriptor {
        match self {
            ColorTag::Blue => StyleDescriptor {
                accent: "accent-blue",
                surface: "surface-blue",
                border: "border-blue",
                text: "text-blue",
                hex: "#3b82f6",
            },
            ColorTag::Green => StyleDescriptor {
                accent: "accent-green",
                surface: "surface-green",
                border: "border-green",
                text: "text-green",
                hex: "#22c55e",
            },
            ColorTag::Purple => StyleDescriptor {
                accent: "accent-purple",
                surface: "surface-purple",
                border: "border-purple",
                text: "text-purple",
                hex: "#a855f7",
            },
            ColorTag::Orange => StyleDescriptor {
                accent: "accent-orange",
                surface: "surface-orange",
                border: "border-orange",
                text: "text-orange",
                hex: "#f97316",
            },
            ColorTag::Red => StyleDescriptor {
                accent: "accent-red",
                surface: "surface-red",
                border: "border-red",
                text: "text-red",
                hex: "#ef4444",
            },
            ColorTag::Teal => StyleDescriptor {
                accent: "accent-teal",
                surface: "surface-teal",
                border: "border-teal",
                text: "text-teal",
                hex: "#14b8a6",
            },
            ColorTag::Yellow => StyleDescriptor {
                accent: "accent-yellow",
                surface: "surface-yellow",
                border: "border-yellow",
                text: "text-yellow",
                hex: "#eab308",
            },
            ColorTag::Pink => StyleDescriptor {
                accent: "accent-pink",
                surface: "surface-pink",
                border: "border-pink",
                text: "text-pink",
                hex: "#ec4899",
            },
            ColorTag::Indigo => StyleDescriptor {
                accent: "accent-indigo",
                surface: "surface-indigo",
                border: "border-indigo",
                text: "text-indigo",
                hex: "#6366f1",
            },
            ColorTag::Gray => StyleDescriptor {
                accent: "accent-gray",
                surface: "surface-gray",
                border: "border-gray",
                text: "text-gray",
                hex: "#6b7280",
            },
        }
    }
}

/// Pictogram shown on a step card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Phone,
    Link,
    Data,
    Unlink,
    Envelope,
    Packet,
    Router,
    Switch,
    Hub,
    Server,
    Computer,
    Globe,
    Collision,
    Lock,
    Handshake,
    Book,
    Layers,
    Search,
    Clock,
    Check,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Phone => "\u{1F4DE}",
            Icon::Link => "\u{1F517}",
            Icon::Data => "\u{1F4CA}",
            Icon::Unlink => "\u{2702}",
            Icon::Envelope => "\u{2709}",
            Icon::Packet => "\u{1F4E6}",
            Icon::Router => "\u{1F4E1}",
            Icon::Switch => "\u{1F500}",
            Icon::Hub => "\u{1F4A0}",
            Icon::Server => "\u{1F5A5}",
            Icon::Computer => "\u{1F4BB}",
            Icon::Globe => "\u{1F310}",
            Icon::Collision => "\u{1F4A5}",
            Icon::Lock => "\u{1F512}",
            Icon::Handshake => "\u{1F91D}",
            Icon::Book => "\u{1F4D6}",
            Icon::Layers => "\u{1F4DA}",
            Icon::Search => "\u{1F50D}",
            Icon::Clock => "\u{23F1}",
            Icon::Check => "\u{2705}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_color_has_distinct_classes() {
        let accents: HashSet<_> = ColorTag::ALL.iter().map(|c| c.style().accent).collect();
        assert_eq!(accents.len(), ColorTag::ALL.len());
    }

    #[test]
    fn test_class_names_follow_tag() {
        let style = ColorTag::Teal.style();
        assert_eq!(style.accent, "accent-teal");
        assert_eq!(style.surface, "surface-teal");
        assert!(style.hex.starts_with('#'));
        assert_eq!(style.hex.len(), 7);
    }
}
