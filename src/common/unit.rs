//! Unit conversion utilities.
//!
//! DrawingML positions are EMUs, WordprocessingML lengths are twips, font
//! sizes are hundredths of a point (DrawingML) or half-points
//! (WordprocessingML), and table borders are eighths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_TWIP: i64 = 635;

/// Largest magnitude of a DrawingML coordinate (`ST_Coordinate`).
pub const MAX_COORDINATE: i64 = 27_273_042_316_900;

#[inline]
pub fn emu_to_twip_i64(emu: i64) -> i64 {
    (emu as f64 / EMUS_PER_TWIP as f64).round() as i64
}

/// Points to hundredths of a point (`a:rPr/@sz`, `a:spcPts/@val`).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> i64 {
    (pt * 100.0).round() as i64
}

/// Points to half-points (`w:sz/@w:val`).
#[inline]
pub fn pt_to_half_points(pt: f64) -> i64 {
    (pt * 2.0).round() as i64
}

/// Points to twips (`w:spacing/@w:before`).
#[inline]
pub fn pt_to_twips(pt: f64) -> i64 {
    (pt * 20.0).round() as i64
}

/// EMUs to eighths of a point (`w:tcBorders/*/@w:sz`).
#[inline]
pub fn emu_to_eighth_pt(emu: i64) -> i64 {
    (emu as f64 * 8.0 / EMUS_PER_PT as f64).round() as i64
}
