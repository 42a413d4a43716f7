use std::fmt::Write as FmtWrite;

use crate::common::Result;
use crate::layout::Canvas;

/// Header and footer distance from the page edge, in twips (0.5 inch).
const HEADER_FOOTER_DISTANCE: i64 = 720;

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageOrientation {
    Portrait,
    Landscape,
}

impl PageOrientation {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Page setup of one section, in twips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionProperties {
    pub page_width: i64,
    pub page_height: i64,
    pub orientation: PageOrientation,
    pub margin_top: i64,
    pub margin_right: i64,
    pub margin_bottom: i64,
    pub margin_left: i64,
}

impl From<&Canvas> for SectionProperties {
    /// Page size is at least one twip, so a canvas smaller than a twip still
    /// yields a page Word accepts.
    fn from(canvas: &Canvas) -> Self {
        let page_width = canvas.width().twips().max(1);
        let page_height = canvas.height().twips().max(1);
        let margins = canvas.margins();
        Self {
            page_width,
            page_height,
            orientation: if page_width > page_height {
                PageOrientation::Landscape
            } else {
                PageOrientation::Portrait
            },
            margin_top: margins.top.twips(),
            margin_right: margins.right.twips(),
            margin_bottom: margins.bottom.twips(),
            margin_left: margins.left.twips(),
        }
    }
}

impl SectionProperties {
    /// Write `w:sectPr`. Every section starts on a new page.
    pub(crate) fn write(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:sectPr>");
        xml.push_str(r#"<w:type w:val="nextPage"/>"#);
        write!(
            xml,
            r#"<w:pgSz w:w="{}" w:h="{}" w:orient="{}"/>"#,
            self.page_width,
            self.page_height,
            self.orientation.as_str()
        )?;
        write!(
            xml,
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            self.margin_top,
            self.margin_right,
            self.margin_bottom,
            self.margin_left,
            HEADER_FOOTER_DISTANCE,
            HEADER_FOOTER_DISTANCE
        )?;
        xml.push_str(r#"<w:cols w:space="720"/>"#);
        xml.push_str(r#"<w:docGrid w:linePitch="360"/>"#);
        xml.push_str("</w:sectPr>");
        Ok(())
    }
}
