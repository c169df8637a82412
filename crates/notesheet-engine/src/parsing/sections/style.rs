use serde::Serialize;

use super::types::SectionKind;

/// Typeface family hint for the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// The user's chosen handwriting face.
    Hand,
    /// Fixed-width face for code and tables.
    Mono,
}

/// Declarative presentation hints for a section.
///
/// Determined solely by the section kind; renderers apply their own pen
/// font and color on top and let these override size, weight and family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionStyle {
    pub font_size: u16,
    pub bold: bool,
    /// Color override (`#rrggbb`); `None` keeps the pen color.
    pub color: Option<&'static str>,
    pub family: FontFamily,
    pub margin_top: u16,
    pub margin_bottom: u16,
}

impl SectionStyle {
    pub const BASE_FONT_SIZE: u16 = 20;
    pub const LINE_HEIGHT: u16 = 24;

    const BODY: SectionStyle = SectionStyle {
        font_size: Self::BASE_FONT_SIZE,
        bold: false,
        color: None,
        family: FontFamily::Hand,
        margin_top: 0,
        margin_bottom: 0,
    };
}

impl SectionKind {
    pub fn style(&self) -> SectionStyle {
        let body = SectionStyle::BODY;
        match self {
            SectionKind::Heading1 => SectionStyle {
                font_size: 28,
                bold: true,
                margin_top: 8,
                margin_bottom: 4,
                ..body
            },
            SectionKind::Heading2 => SectionStyle {
                font_size: 24,
                bold: true,
                margin_top: 8,
                margin_bottom: 4,
                ..body
            },
            SectionKind::Course => SectionStyle {
                font_size: 30,
                bold: true,
                margin_bottom: 8,
                ..body
            },
            SectionKind::Question => SectionStyle {
                bold: true,
                color: Some("#000000"),
                ..body
            },
            SectionKind::Code { .. } | SectionKind::Table { .. } => SectionStyle {
                font_size: 16,
                family: FontFamily::Mono,
                ..body
            },
            SectionKind::ListItem | SectionKind::Text => body,
        }
    }
}
