// Rendered view model: what ends up inside the results region.

// Chip presentation for a single hashtag.
const CHIP_PADDING: &str = "6px 10px";
const CHIP_MARGIN: &str = "5px";
const CHIP_BACKGROUND: &str = "#e5e7eb";
const CHIP_BORDER_RADIUS: &str = "20px";

const ERROR_COLOR: &str = "red";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    // Block of text, used for error messages.
    Paragraph,
    // Inline rounded tag.
    Chip,
}

// Inline style properties; unset properties are left out of the CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub color: Option<&'static str>,
    pub padding: Option<&'static str>,
    pub margin: Option<&'static str>,
    pub background: Option<&'static str>,
    pub border_radius: Option<&'static str>,
}

impl InlineStyle {
    pub fn chip() -> Self {
        Self {
            padding: Some(CHIP_PADDING),
            margin: Some(CHIP_MARGIN),
            background: Some(CHIP_BACKGROUND),
            border_radius: Some(CHIP_BORDER_RADIUS),
            ..Self::default()
        }
    }

    pub fn error() -> Self {
        Self {
            color: Some(ERROR_COLOR),
            ..Self::default()
        }
    }

    // Serialize as a `style` attribute value, e.g. `color:red`.
    pub fn to_css(&self) -> String {
        [
            ("color", self.color),
            ("padding", self.padding),
            ("margin", self.margin),
            ("background", self.background),
            ("border-radius", self.border_radius),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| format!("{name}:{value}")))
        .collect::<Vec<_>>()
        .join(";")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub style: InlineStyle,
}

impl Element {
    pub fn chip(tag: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Chip,
            text: tag.into(),
            style: InlineStyle::chip(),
        }
    }

    pub fn error_text(message: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Paragraph,
            text: message.into(),
            style: InlineStyle::error(),
        }
    }

    pub fn is_chip(&self) -> bool {
        self.kind == ElementKind::Chip
    }

    pub fn is_error(&self) -> bool {
        self.kind == ElementKind::Paragraph && self.style.color == Some(ERROR_COLOR)
    }
}
