//! Render entry points.
//!
//! [`render`] turns a validated [`Document`] into the bytes of one OPC
//! package; [`save`] picks the format from the file extension and writes the
//! package to disk in one call. The whole package is assembled in memory
//! before the file is created, so a failing document never leaves a partial
//! file behind.

use std::path::Path;

use crate::common::{Error, Result};
use crate::layout::Document;
use crate::ooxml::docx::DocumentWriter;
use crate::ooxml::opc::{OpcPackage, PackageWriter};
use crate::ooxml::pptx::PresentationWriter;

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PowerPoint presentation (OOXML format, .pptx)
    Presentation,
    /// Word document (OOXML format, .docx)
    WordProcessing,
}

impl Format {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Presentation => "pptx",
            Format::WordProcessing => "docx",
        }
    }

    /// Pick the format from a path's extension, ignoring case.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pptx") => Ok(Format::Presentation),
            Some("docx") => Ok(Format::WordProcessing),
            _ => Err(Error::Unsupported(format!(
                "cannot choose an output format for '{}'; expected a .pptx or .docx extension",
                path.display()
            ))),
        }
    }

    fn backend(&self) -> &'static dyn Backend {
        match self {
            Format::Presentation => &PresentationWriter,
            Format::WordProcessing => &DocumentWriter,
        }
    }
}

/// Serializer from the layout model to one package format.
///
/// Backends may assume the document has passed [`Document::validate`]; they
/// only report what their format cannot express.
pub trait Backend {
    fn build_package(&self, document: &Document) -> Result<OpcPackage>;
}

/// Validate `document` and serialize it to package bytes.
pub fn render(document: &Document, format: Format) -> Result<Vec<u8>> {
    PackageWriter::to_bytes(&build_package(document, format)?)
}

/// Render `document` in the format named by `path`'s extension and write it.
pub fn save<P: AsRef<Path>>(document: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    let package = build_package(document, Format::from_path(path)?)?;
    PackageWriter::write(path, &package)?;
    log::info!("saved {} ({} parts)", path.display(), package.part_count());
    Ok(())
}

fn build_package(document: &Document, format: Format) -> Result<OpcPackage> {
    document.validate()?;
    let package = format.backend().build_package(document)?;
    log::debug!(
        "built {} package with {} parts",
        format.extension(),
        package.part_count()
    );
    Ok(package)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use proptest::prelude::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    use super::*;
    use crate::common::{Length, RGBColor};
    use crate::layout::{Alignment, Canvas, Paragraph, Rect, RunStyle, Shape, Table, TextBox};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    /// Text of every `{prefix}:t` element, with `{prefix}:br` as a line feed.
    fn visible_text(xml: &str, prefix: &str) -> String {
        let t = format!("{prefix}:t");
        let br = format!("{prefix}:br");
        let mut reader = Reader::from_str(xml);
        let mut in_text = false;
        let mut text = String::new();
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) if e.name().as_ref() == t.as_bytes() => in_text = true,
                Event::End(e) if e.name().as_ref() == t.as_bytes() => in_text = false,
                Event::Start(e) | Event::Empty(e) if e.name().as_ref() == br.as_bytes() => {
                    text.push('\n')
                },
                Event::Text(e) if in_text => text.push_str(&e.decode().unwrap()),
                Event::GeneralRef(e) if in_text => text.push(match e.decode().unwrap().as_ref() {
                    "amp" => '&',
                    "lt" => '<',
                    "gt" => '>',
                    "quot" => '"',
                    "apos" => '\'',
                    "#xD" => '\r',
                    other => panic!("unexpected entity {other}"),
                }),
                Event::Eof => break,
                _ => {},
            }
        }
        text
    }

    fn well_formed(xml: &str) {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{e}: {xml}"),
            }
        }
    }

    fn single_slide(build: impl FnOnce(&mut crate::layout::Page)) -> Document {
        let mut document = Document::new();
        build(document.add_page(Canvas::widescreen()));
        document
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("deck.pptx").unwrap(), Format::Presentation);
        assert_eq!(Format::from_path("a/b/Sheet.DOCX").unwrap(), Format::WordProcessing);
        assert!(matches!(Format::from_path("notes.txt"), Err(Error::Unsupported(_))));
        assert!(matches!(Format::from_path("no_extension"), Err(Error::Unsupported(_))));
        assert_eq!(Format::WordProcessing.extension(), "docx");
    }

    #[test]
    fn test_every_part_is_well_formed() {
        let mut document = single_slide(|page| {
            page.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 1.0, 1.0)).fill(RGBColor::BLACK))
                .add_text_box(TextBox::with_text(
                    Rect::from_inches(1.0, 1.0, 4.0, 1.0),
                    "a < b & c",
                    RunStyle::default(),
                    Alignment::Center,
                ))
                .add_table(Table::new(2, 2).with_frame(Rect::from_inches(1.0, 3.0, 4.0, 2.0)));
        });

        for format in [Format::Presentation, Format::WordProcessing] {
            let bytes = render(&document, format).unwrap();
            let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
            for i in 0..archive.len() {
                let mut entry = archive.by_index(i).unwrap();
                let mut xml = String::new();
                entry.read_to_string(&mut xml).unwrap();
                well_formed(&xml);
            }
        }

        // Word pages may also hold flowing content.
        document.add_page(Canvas::letter()).add_paragraph(Paragraph::with_run(
            "flow",
            RunStyle::default(),
        ));
        let bytes = render(&document, Format::WordProcessing).unwrap();
        well_formed(&read_part(&bytes, "word/document.xml"));
    }

    #[test]
    fn test_black_box_in_top_left() {
        let document = single_slide(|page| {
            page.add_shape(
                Shape::rect(Rect::new(
                    Length::ZERO,
                    Length::ZERO,
                    Length::from_emus(10),
                    Length::from_emus(5),
                ))
                .fill(RGBColor::new(0, 0, 0)),
            );
        });
        let bytes = render(&document, Format::Presentation).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains(concat!(
            r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="10" cy="5"/></a:xfrm>"#,
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#,
            r#"<a:solidFill><a:srgbClr val="000000"/></a:solidFill>"#
        )));
    }

    #[test]
    fn test_table_backgrounds_land_in_their_cells() {
        let mut table = Table::new(2, 2).with_frame(Rect::from_inches(1.0, 1.0, 4.0, 2.0));
        table.cell_mut(0, 0).unwrap().set_background(RGBColor::new(255, 255, 255));
        table.cell_mut(1, 1).unwrap().set_background(RGBColor::new(0, 0, 0));
        let document = single_slide(|page| {
            page.add_table(table);
        });

        let bytes = render(&document, Format::Presentation).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        let cells: Vec<&str> = slide.split("<a:tc>").skip(1).collect();
        assert_eq!(cells.len(), 4);
        assert!(cells[0].contains(r#"<a:srgbClr val="FFFFFF"/></a:solidFill></a:tcPr>"#));
        assert!(cells[1].contains("<a:noFill/></a:tcPr>"));
        assert!(cells[2].contains("<a:noFill/></a:tcPr>"));
        assert!(cells[3].contains(r#"<a:srgbClr val="000000"/></a:solidFill></a:tcPr>"#));

        let bytes = render(&document, Format::WordProcessing).unwrap();
        let body = read_part(&bytes, "word/document.xml");
        let cells: Vec<&str> = body.split("<w:tc>").skip(1).collect();
        assert!(cells[0].contains(r#"w:fill="FFFFFF""#));
        assert!(!cells[1].contains("w:shd") && !cells[2].contains("w:shd"));
        assert!(cells[3].contains(r#"w:fill="000000""#));
    }

    #[test]
    fn test_line_feed_renders_two_lines() {
        let document = single_slide(|page| {
            page.add_text_box(TextBox::with_text(
                Rect::from_inches(0.0, 0.0, 4.0, 1.0),
                "Line 1\nLine 2",
                RunStyle::default(),
                Alignment::Left,
            ));
        });

        let bytes = render(&document, Format::Presentation).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert_eq!(slide.matches("<a:br>").count(), 1);
        assert!(!slide.contains("\\n"));
        assert_eq!(visible_text(&slide, "a"), "Line 1\nLine 2");

        let bytes = render(&document, Format::WordProcessing).unwrap();
        let body = read_part(&bytes, "word/document.xml");
        assert_eq!(body.matches("<w:br/>").count(), 1);
        assert_eq!(visible_text(&body, "w"), "Line 1\nLine 2");
    }

    #[test]
    fn test_tiny_canvas_renders() {
        let mut document = Document::new();
        document
            .add_page(Canvas::new(Length::from_emus(1), Length::from_emus(1)).unwrap())
            .add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 1.0, 1.0)).fill(RGBColor::BLACK));

        let deck = render(&document, Format::Presentation).unwrap();
        assert!(read_part(&deck, "ppt/presentation.xml").contains(r#"<p:sldSz cx="1" cy="1"/>"#));
        let sheet = render(&document, Format::WordProcessing).unwrap();
        assert!(read_part(&sheet, "word/document.xml").contains(r#"<w:pgSz w:w="1" w:h="1""#));
    }

    #[test]
    fn test_invalid_document_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.pptx");

        let document = single_slide(|page| {
            page.add_text_box(TextBox::with_text(
                Rect::from_inches(0.0, 0.0, 1.0, 1.0),
                "x",
                RunStyle::new(0.0, RGBColor::BLACK),
                Alignment::Left,
            ));
        });
        assert!(matches!(save(&document, &path), Err(Error::InvalidFontSize { .. })));
        assert!(!path.exists());

        let flowing = single_slide(|page| {
            page.add_paragraph(Paragraph::with_run("flow", RunStyle::default()));
        });
        assert!(matches!(save(&flowing, &path), Err(Error::Unsupported(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let document = single_slide(|page| {
            page.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, 1.0, 1.0)));
        });

        for name in ["out.pptx", "out.docx"] {
            let path = dir.path().join(name);
            save(&document, &path).unwrap();
            let bytes = std::fs::read(&path).unwrap();
            assert!(bytes.starts_with(b"PK"));
        }
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("deck.pptx");
        let document = single_slide(|_| {});
        assert!(matches!(save(&document, &path), Err(Error::Io(_))));
    }

    #[test]
    fn test_carriage_return_survives_both_formats() {
        let document = single_slide(|page| {
            page.add_text_box(TextBox::with_text(
                Rect::from_inches(0.0, 0.0, 4.0, 1.0),
                "a\rb end\r",
                RunStyle::default(),
                Alignment::Left,
            ));
        });

        let bytes = render(&document, Format::Presentation).unwrap();
        let slide = read_part(&bytes, "ppt/slides/slide1.xml");
        assert!(slide.contains("<a:t>a&#xD;b end&#xD;</a:t>"));
        assert!(!slide.contains('\r'));
        assert_eq!(visible_text(&slide, "a"), "a\rb end\r");

        let bytes = render(&document, Format::WordProcessing).unwrap();
        let body = read_part(&bytes, "word/document.xml");
        assert!(!body.contains('\r'));
        assert_eq!(visible_text(&body, "w"), "a\rb end\r");
    }

    #[test]
    fn test_non_finite_frame_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let document = single_slide(|page| {
            page.add_shape(Shape::rect(Rect::from_inches(0.0, 0.0, f64::NAN, f64::INFINITY)));
        });

        for name in ["nan.pptx", "nan.docx"] {
            let path = dir.path().join(name);
            let err = save(&document, &path).unwrap_err();
            assert!(matches!(err, Error::InvalidDimension { .. }));
            assert!(err.to_string().contains("page 0 element 0 (shape) width"));
            assert!(!path.exists());
        }
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            render(&Document::new(), Format::Presentation),
            Err(Error::EmptyDocument)
        ));
    }

    proptest! {
        #[test]
        fn prop_text_is_preserved(
            text in "[A-Za-z0-9 &<>\"'.,:=?\r-]{0,20}(\r?\n[A-Za-z0-9 &<>.,\r]{0,20}){0,3}",
        ) {
            let document = single_slide(|page| {
                page.add_text_box(TextBox::with_text(
                    Rect::from_inches(0.0, 0.0, 4.0, 1.0),
                    text.clone(),
                    RunStyle::default(),
                    Alignment::Left,
                ));
            });
            let deck = render(&document, Format::Presentation).unwrap();
            prop_assert_eq!(visible_text(&read_part(&deck, "ppt/slides/slide1.xml"), "a"), text.clone());

            let mut sheet = Document::new();
            sheet
                .add_page(Canvas::letter())
                .add_paragraph(Paragraph::with_run(text.clone(), RunStyle::default()));
            let bytes = render(&sheet, Format::WordProcessing).unwrap();
            prop_assert_eq!(visible_text(&read_part(&bytes, "word/document.xml"), "w"), text);
        }

        #[test]
        fn prop_rendering_is_deterministic(
            boxes in proptest::collection::vec((0i64..10_000_000, 0i64..10_000_000, any::<[u8; 3]>()), 0..8),
            docx in any::<bool>(),
        ) {
            let document = single_slide(|page| {
                for (x, y, [r, g, b]) in &boxes {
                    page.add_shape(
                        Shape::rect(Rect::new(
                            Length::from_emus(*x),
                            Length::from_emus(*y),
                            Length::from_emus(914_400),
                            Length::from_emus(457_200),
                        ))
                        .fill(RGBColor::new(*r, *g, *b)),
                    );
                }
            });
            let format = if docx { Format::WordProcessing } else { Format::Presentation };
            prop_assert_eq!(render(&document, format).unwrap(), render(&document, format).unwrap());
        }

        #[test]
        fn prop_boxes_keep_position_and_fill(
            boxes in proptest::collection::vec((-1_000_000i64..10_000_000, -1_000_000i64..10_000_000, any::<[u8; 3]>()), 1..8),
        ) {
            let document = single_slide(|page| {
                for (x, y, [r, g, b]) in &boxes {
                    page.add_shape(
                        Shape::rect(Rect::new(
                            Length::from_emus(*x),
                            Length::from_emus(*y),
                            Length::from_emus(914_400),
                            Length::from_emus(457_200),
                        ))
                        .fill(RGBColor::new(*r, *g, *b)),
                    );
                }
            });

            let deck = render(&document, Format::Presentation).unwrap();
            let slide = read_part(&deck, "ppt/slides/slide1.xml");
            let shapes: Vec<&str> = slide.split("<p:sp>").skip(1).collect();
            prop_assert_eq!(shapes.len(), boxes.len());
            for (shape, (x, y, [r, g, b])) in shapes.iter().zip(&boxes) {
                let xfrm = format!(r#"<a:off x="{x}" y="{y}"/><a:ext cx="914400" cy="457200"/>"#);
                let fill = format!(r#"<a:srgbClr val="{r:02X}{g:02X}{b:02X}"/>"#);
                prop_assert!(shape.contains(&xfrm));
                prop_assert!(shape.contains(&fill));
            }

            let sheet = render(&document, Format::WordProcessing).unwrap();
            let body = read_part(&sheet, "word/document.xml");
            let anchors: Vec<&str> = body.split("<wp:anchor ").skip(1).collect();
            prop_assert_eq!(anchors.len(), boxes.len());
            for (anchor, (x, y, [r, g, b])) in anchors.iter().zip(&boxes) {
                let h = format!(r#"<wp:positionH relativeFrom="page"><wp:posOffset>{x}</wp:posOffset>"#);
                let v = format!(r#"<wp:positionV relativeFrom="page"><wp:posOffset>{y}</wp:posOffset>"#);
                let fill = format!(r#"<a:srgbClr val="{r:02X}{g:02X}{b:02X}"/>"#);
                prop_assert!(anchor.contains(&h));
                prop_assert!(anchor.contains(&v));
                prop_assert!(anchor.contains(r#"<wp:extent cx="914400" cy="457200"/>"#));
                prop_assert!(anchor.contains(&fill));
            }
        }

        #[test]
        fn prop_cell_styles_are_independent(
            rows in 1usize..4,
            cols in 1usize..4,
            target in any::<(usize, usize)>(),
            [r, g, b] in any::<[u8; 3]>(),
        ) {
            let (row, col) = (target.0 % rows, target.1 % cols);
            let mut table = Table::new(rows, cols).with_frame(Rect::from_inches(0.0, 0.0, 6.0, 3.0));
            table.cell_mut(row, col).unwrap().set_background(RGBColor::new(r, g, b));
            let document = single_slide(|page| {
                page.add_table(table);
            });

            let bytes = render(&document, Format::Presentation).unwrap();
            let slide = read_part(&bytes, "ppt/slides/slide1.xml");
            let fill = format!(r#"<a:srgbClr val="{:02X}{:02X}{:02X}"/></a:solidFill></a:tcPr>"#, r, g, b);
            for (i, cell) in slide.split("<a:tc>").skip(1).enumerate() {
                if i == row * cols + col {
                    prop_assert!(cell.contains(&fill));
                } else {
                    prop_assert!(cell.contains("<a:noFill/></a:tcPr>"));
                }
            }
        }
    }
}
