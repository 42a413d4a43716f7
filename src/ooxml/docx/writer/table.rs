/// Table writer for DOCX documents.
use std::fmt::Write as FmtWrite;

use crate::common::unit::emu_to_eighth_pt;
use crate::common::xml::push_int_attr;
use crate::common::{Length, Result};
use crate::layout::{Alignment, Border, Cell, Table};
use crate::ooxml::docx::writer::paragraph::write_paragraph;

/// Write a `w:tbl`.
///
/// Column widths come from the table, or split `content_width` evenly. A
/// framed table floats at its frame's offset from the page corner.
pub(crate) fn write_table(xml: &mut String, table: &Table, content_width: Length) -> Result<()> {
    let total = table.frame.map(|frame| frame.width).unwrap_or(content_width);
    let widths = table.resolved_column_widths(total);
    let table_width: i64 = widths.iter().map(Length::twips).sum();

    xml.push_str("<w:tbl><w:tblPr>");
    if let Some(frame) = &table.frame {
        write!(
            xml,
            r#"<w:tblpPr w:leftFromText="0" w:rightFromText="0" w:vertAnchor="page" w:horzAnchor="page" w:tblpX="{}" w:tblpY="{}"/>"#,
            frame.x.twips(),
            frame.y.twips()
        )?;
    }
    write!(xml, r#"<w:tblW w:w="{}" w:type="dxa"/>"#, table_width)?;
    write!(xml, r#"<w:jc w:val="{}"/>"#, table_jc(table.alignment))?;
    xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);
    xml.push_str(r#"<w:tblLook w:val="0000" w:firstRow="0" w:lastRow="0" w:firstColumn="0" w:lastColumn="0" w:noHBand="1" w:noVBand="1"/>"#);
    xml.push_str("</w:tblPr>");

    xml.push_str("<w:tblGrid>");
    for width in &widths {
        xml.push_str("<w:gridCol");
        push_int_attr(xml, "w:w", width.twips());
        xml.push_str("/>");
    }
    xml.push_str("</w:tblGrid>");

    for row in table.rows() {
        xml.push_str("<w:tr>");
        for (cell, width) in row.iter().zip(&widths) {
            write_cell(xml, cell, cell.width.unwrap_or(*width))?;
        }
        xml.push_str("</w:tr>");
    }

    xml.push_str("</w:tbl>");
    Ok(())
}

/// `w:jc` of a table; tables cannot be justified.
fn table_jc(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left | Alignment::Justify => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
    }
}

fn write_cell(xml: &mut String, cell: &Cell, width: Length) -> Result<()> {
    xml.push_str("<w:tc><w:tcPr>");
    write!(xml, r#"<w:tcW w:w="{}" w:type="dxa"/>"#, width.twips())?;

    if !cell.borders.is_empty() {
        xml.push_str("<w:tcBorders>");
        for (side, border) in cell.borders.sides() {
            if let Some(border) = border {
                write_border(xml, side, border)?;
            }
        }
        xml.push_str("</w:tcBorders>");
    }

    if let Some(color) = cell.background {
        write!(
            xml,
            r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
            color.to_hex()
        )?;
    }
    xml.push_str("</w:tcPr>");

    // A cell must end with a paragraph.
    if cell.paragraphs.is_empty() {
        xml.push_str("<w:p/>");
    }
    for paragraph in &cell.paragraphs {
        write_paragraph(xml, paragraph);
    }

    xml.push_str("</w:tc>");
    Ok(())
}

fn write_border(xml: &mut String, name: &str, border: &Border) -> Result<()> {
    write!(
        xml,
        r#"<w:{} w:val="{}" w:sz="{}" w:space="0" w:color="{}"/>"#,
        name,
        border.style.wordprocessingml(),
        emu_to_eighth_pt(border.width.emus()),
        border.color.to_hex()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::layout::{BorderStyle, CellBorders, Rect, RunStyle};

    #[test]
    fn test_even_split_of_content_width() {
        let mut xml = String::new();
        write_table(&mut xml, &Table::new(1, 2), Length::from_inches(6.5)).unwrap();

        assert!(xml.contains(r#"<w:tblW w:w="9360" w:type="dxa"/>"#), "{xml}");
        assert_eq!(xml.matches(r#"<w:gridCol w:w="4680"/>"#).count(), 2);
        assert_eq!(xml.matches(r#"<w:tcW w:w="4680" w:type="dxa"/>"#).count(), 2);
        assert_eq!(xml.matches("<w:p/>").count(), 2);
    }

    #[test]
    fn test_cell_properties_in_schema_order() {
        let mut table = Table::new(1, 1).with_column_widths(vec![Length::from_inches(2.0)]);
        table
            .cell_mut(0, 0)
            .unwrap()
            .set_background(RGBColor::new(0xF2, 0xF2, 0xF2))
            .set_borders(CellBorders {
                left: Some(Border::new(BorderStyle::Single, Length::from_pt(3.0), RGBColor::new(0x00, 0x97, 0x9C))),
                top: Some(Border::thin()),
                ..CellBorders::default()
            })
            .add_run("Step", RunStyle::default());

        let mut xml = String::new();
        write_table(&mut xml, &table, Length::from_inches(6.5)).unwrap();

        assert!(xml.contains(concat!(
            r#"<w:tcPr><w:tcW w:w="2880" w:type="dxa"/>"#,
            r#"<w:tcBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="000000"/>"#,
            r#"<w:left w:val="single" w:sz="24" w:space="0" w:color="00979C"/></w:tcBorders>"#,
            r#"<w:shd w:val="clear" w:color="auto" w:fill="F2F2F2"/></w:tcPr>"#
        )), "{xml}");
    }

    #[test]
    fn test_framed_table_floats() {
        let table = Table::new(1, 1).with_frame(Rect::from_inches(1.0, 2.0, 3.0, 1.0));
        let mut xml = String::new();
        write_table(&mut xml, &table, Length::from_inches(6.5)).unwrap();

        let tblp = xml.find(r#"w:tblpX="1440" w:tblpY="2880"/>"#).unwrap();
        let tbl_w = xml.find(r#"<w:tblW w:w="4320""#).unwrap();
        let jc = xml.find(r#"<w:jc w:val="left"/>"#).unwrap();
        assert!(tblp < tbl_w && tbl_w < jc);
    }

    #[test]
    fn test_table_alignment() {
        for (alignment, jc) in [
            (Alignment::Center, "center"),
            (Alignment::Right, "right"),
            (Alignment::Justify, "left"),
        ] {
            let mut xml = String::new();
            write_table(&mut xml, &Table::new(1, 1).with_alignment(alignment), Length::from_inches(6.5))
                .unwrap();
            assert!(xml.contains(&format!(r#"<w:jc w:val="{jc}"/>"#)), "{xml}");
        }
    }

    #[test]
    fn test_cells_are_independent() {
        let mut table = Table::new(2, 2);
        table.cell_mut(0, 0).unwrap().set_background(RGBColor::WHITE);
        table.cell_mut(1, 1).unwrap().set_background(RGBColor::BLACK);

        let mut xml = String::new();
        write_table(&mut xml, &table, Length::from_inches(4.0)).unwrap();

        let cells: Vec<&str> = xml.split("<w:tc>").skip(1).collect();
        assert_eq!(cells.len(), 4);
        assert!(cells[0].contains(r#"w:fill="FFFFFF""#));
        assert!(!cells[1].contains("w:shd") && !cells[1].contains("w:tcBorders"));
        assert!(!cells[2].contains("w:shd"));
        assert!(cells[3].contains(r#"w:fill="000000""#));
    }
}
