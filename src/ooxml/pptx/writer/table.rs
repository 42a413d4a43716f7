/// Tables on a slide, written as `p:graphicFrame` elements holding `a:tbl`.
use std::fmt::Write as FmtWrite;

use crate::common::{Error, Length, Result};
use crate::common::xml::push_int_attr;
use crate::layout::{Cell, Paragraph, Rect, Table};
use crate::ooxml::drawings::{write_cell_border, write_fill, write_paragraph, write_xfrm};
use crate::ooxml::opc::constants::namespace;

/// Write a framed table. Slides have no document flow, so a table without a
/// frame cannot be placed.
pub(crate) fn write_table(xml: &mut String, shape_id: u32, table: &Table, what: &str) -> Result<()> {
    let frame = table.frame.ok_or_else(|| {
        Error::Unsupported(format!("{what} has no frame; tables on slides need one"))
    })?;

    xml.push_str("<p:graphicFrame><p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Table {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
    xml.push_str("<p:nvPr/></p:nvGraphicFramePr>");
    write_xfrm(xml, "p:xfrm", &frame);

    xml.push_str(r#"<a:graphic><a:graphicData uri=""#);
    xml.push_str(namespace::DML_TABLE);
    xml.push_str(r#""><a:tbl><a:tblPr firstRow="0" bandRow="0"/><a:tblGrid>"#);
    for width in table.resolved_column_widths(frame.width) {
        xml.push_str("<a:gridCol");
        push_int_attr(xml, "w", width.emus());
        xml.push_str("/>");
    }
    xml.push_str("</a:tblGrid>");

    for (row, height) in table.rows().iter().zip(row_heights(&frame, table.row_count())) {
        xml.push_str("<a:tr");
        push_int_attr(xml, "h", height.emus());
        xml.push('>');
        for cell in row {
            write_cell(xml, cell);
        }
        xml.push_str("</a:tr>");
    }

    xml.push_str("</a:tbl></a:graphicData></a:graphic></p:graphicFrame>");
    Ok(())
}

/// The frame height split evenly over the rows; the last row takes the
/// remainder.
fn row_heights(frame: &Rect, rows: usize) -> Vec<Length> {
    let count = rows.max(1) as i64;
    let each = frame.height.emus() / count;
    let mut heights = vec![Length::from_emus(each); rows];
    if let Some(last) = heights.last_mut() {
        *last = Length::from_emus(frame.height.emus() - each * (count - 1));
    }
    heights
}

fn write_cell(xml: &mut String, cell: &Cell) {
    xml.push_str("<a:tc><a:txBody><a:bodyPr/><a:lstStyle/>");
    if cell.paragraphs.is_empty() {
        write_paragraph(xml, &Paragraph::new());
    }
    for paragraph in &cell.paragraphs {
        write_paragraph(xml, paragraph);
    }
    xml.push_str("</a:txBody><a:tcPr>");

    let borders = &cell.borders;
    write_cell_border(xml, "a:lnL", borders.left.as_ref());
    write_cell_border(xml, "a:lnR", borders.right.as_ref());
    write_cell_border(xml, "a:lnT", borders.top.as_ref());
    write_cell_border(xml, "a:lnB", borders.bottom.as_ref());
    write_fill(xml, cell.background);

    xml.push_str("</a:tcPr></a:tc>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::layout::{Border, CellBorders, RunStyle};

    fn framed(rows: usize, cols: usize) -> Table {
        Table::new(rows, cols).with_frame(Rect::from_inches(1.0, 1.0, 4.0, 2.0))
    }

    #[test]
    fn test_unframed_table_is_rejected() {
        let mut xml = String::new();
        let err = write_table(&mut xml, 2, &Table::new(1, 1), "page 0 element 3 (table)")
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
        assert!(err.to_string().contains("page 0 element 3 (table)"));
    }

    #[test]
    fn test_grid_and_rows() {
        let mut xml = String::new();
        write_table(&mut xml, 2, &framed(2, 2), "t").unwrap();

        assert!(xml.contains(r#"<p:xfrm><a:off x="914400" y="914400"/><a:ext cx="3657600" cy="1828800"/></p:xfrm>"#));
        assert_eq!(xml.matches(r#"<a:gridCol w="1828800"/>"#).count(), 2);
        assert_eq!(xml.matches(r#"<a:tr h="914400">"#).count(), 2);
        assert_eq!(xml.matches("<a:tc>").count(), 4);
    }

    #[test]
    fn test_explicit_column_widths() {
        let mut xml = String::new();
        let table = framed(1, 2).with_column_widths(vec![Length::from_inches(1.0), Length::from_inches(3.0)]);
        write_table(&mut xml, 2, &table, "t").unwrap();
        let first = xml.find(r#"<a:gridCol w="914400"/>"#).unwrap();
        let second = xml.find(r#"<a:gridCol w="2743200"/>"#).unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_cell_properties_order() {
        let mut table = framed(1, 1);
        table
            .cell_mut(0, 0)
            .unwrap()
            .set_background(RGBColor::new(0xF2, 0xF2, 0xF2))
            .set_borders(CellBorders {
                top: Some(Border::thin()),
                ..CellBorders::default()
            })
            .add_run("Cell", RunStyle::default());

        let mut xml = String::new();
        write_table(&mut xml, 2, &table, "t").unwrap();

        let tc_pr = &xml[xml.find("<a:tcPr>").unwrap()..xml.find("</a:tcPr>").unwrap()];
        let l = tc_pr.find("<a:lnL><a:noFill/></a:lnL>").unwrap();
        let r = tc_pr.find("<a:lnR>").unwrap();
        let t = tc_pr.find(r#"<a:lnT w="6350""#).unwrap();
        let b = tc_pr.find("<a:lnB>").unwrap();
        let fill = tc_pr.find(r#"<a:solidFill><a:srgbClr val="F2F2F2"/>"#).unwrap();
        assert!(l < r && r < t && t < b && b < fill);
        assert!(xml.contains("<a:t>Cell</a:t>"));
    }

    #[test]
    fn test_row_heights_absorb_remainder() {
        let frame = Rect::new(Length::ZERO, Length::ZERO, Length::ZERO, Length::from_emus(10));
        let heights: Vec<i64> = row_heights(&frame, 3).iter().map(Length::emus).collect();
        assert_eq!(heights, [3, 3, 4]);
    }
}
