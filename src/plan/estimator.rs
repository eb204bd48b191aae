//! Page-count law.
//!
//! One photo per page, covers included: the page count is the photo count
//! floored at 4 and rounded up to the next even number so the piece can be
//! printed as spreads. The requested page count from the brief is advisory
//! and never feeds into this.

/// Compute the printable page count for a photo count
pub fn estimate(photo_count: usize) -> u32 {
    if photo_count == 0 {
        return 4;
    }

    let mut total = photo_count.max(4) as u32;

    if total % 2 != 0 {
        total += 1;
    }

    total
}
