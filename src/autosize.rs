//! Fit column widths to a target total width.
//!
//! Widths grow or shrink in proportion to their natural size. Shrinking is
//! a single forward pass: small columns and columns that would drop below
//! their label are pinned as they are met, and the ratio for the columns
//! still to come is recomputed after every pin. Earlier decisions are not
//! revisited, so the result is a good fit rather than an optimal one, and
//! when the labels alone exceed the target the table overflows it.

use tracing::{debug, warn};

use crate::{style::Style, width::display_width};

/// Scaling factor kept as an exact fraction so flooring never loses a column
/// to rounding error.
#[derive(Debug, Clone, Copy)]
struct Ratio {
    num: usize,
    den: usize,
}

impl Ratio {
    fn scale(self, width: usize) -> usize { width.saturating_mul(self.num) / self.den }
}

/// Redistribute `natural` widths so the rendered table spans `target`
/// columns, borders and padding of `style` included.
///
/// No column ends up narrower than its header label.
#[must_use]
pub fn fit_widths(natural: &[usize], header: &[String], style: &Style, target: usize) -> Vec<usize> {
    let floors: Vec<usize> = (0..natural.len())
        .map(|i| header.get(i).map_or(0, |h| display_width(h)))
        .collect();
    fit_with_floors(natural, &floors, style, target)
}

/// Like [`fit_widths`], with the minimum width of every column given
/// directly.
///
/// A floor above a column's natural width raises the natural width too, so
/// the column takes part in the fit at the width it will need.
#[must_use]
pub fn fit_with_floors(natural: &[usize], floors: &[usize], style: &Style, target: usize) -> Vec<usize> {
    let columns = natural.len();
    if columns == 0 {
        return Vec::new();
    }
    let floors: Vec<usize> = (0..columns)
        .map(|i| floors.get(i).copied().unwrap_or(0))
        .collect();
    let natural: Vec<usize> = natural.iter().zip(&floors).map(|(&n, &f)| n.max(f)).collect();
    let usable = target.saturating_sub(style.layout_overhead(columns));
    let total: usize = natural.iter().sum();

    let widths = if total == 0 {
        natural.clone()
    } else if total <= usable {
        let ratio = Ratio {
            num: usable,
            den: total,
        };
        natural.iter().map(|&w| ratio.scale(w)).collect()
    } else {
        let mut ratio = Ratio {
            num: usable,
            den: total,
        };
        let mut pinned_width = 0;
        let mut pinned_natural = 0;
        let mut widths = natural.clone();
        let mut shrinkable = vec![false; columns];
        for i in 0..columns {
            // below the average of usable / columns
            if natural[i] * columns < usable {
                pinned_width += natural[i];
            } else if ratio.scale(natural[i]) < floors[i] {
                widths[i] = floors[i];
                pinned_width += floors[i];
            } else {
                shrinkable[i] = true;
                continue;
            }
            pinned_natural += natural[i];
            let remaining = total - pinned_natural;
            if remaining > 0 {
                ratio = Ratio {
                    num: usable.saturating_sub(pinned_width),
                    den: remaining,
                };
            }
        }
        for i in (0..columns).filter(|&i| shrinkable[i]) {
            widths[i] = ratio.scale(natural[i]).max(floors[i]);
        }
        widths
    };

    let used: usize = widths.iter().sum();
    if used > usable {
        warn!(target, usable, used, "columns overflow the target width");
    }
    debug!(?natural, ?widths, usable, "autosized column widths");
    widths
}
