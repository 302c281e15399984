//! Geometry for the summary charts, kept separate from the markup so the
//! proportions are testable. The components feed the results straight into
//! plain SVG elements.

use crate::api::{CategoryTotal, PeriodTotal};

pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AA00FF"];

#[derive(Clone, PartialEq, Debug)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub path: String,
    pub color: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct BarRect {
    pub name: String,
    pub total: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

fn wedge_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, start + sweep);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!("M{cx:.2} {cy:.2} L{x0:.2} {y0:.2} A{r:.2} {r:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z")
}

/// Proportional wedges starting at twelve o'clock, palette cycling per
/// slice. Zero-valued entries are skipped; a lone slice covering the whole
/// pie is capped just short of a full turn so the arc endpoints stay apart.
pub fn pie_slices(data: &[CategoryTotal], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -90.0;
    data.iter()
        .filter(|d| d.value > 0.0)
        .enumerate()
        .map(|(i, d)| {
            let sweep = (d.value / total * 360.0).min(359.99);
            let slice = PieSlice {
                name: d.name.clone(),
                value: d.value,
                path: wedge_path(cx, cy, r, start, sweep),
                color: PALETTE[i % PALETTE.len()],
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Bottom-aligned bars on a linear scale where the largest total spans the
/// full chart height.
pub fn bar_layout(data: &[PeriodTotal], width: f64, height: f64) -> Vec<BarRect> {
    let max = data.iter().map(|d| d.total).fold(0.0_f64, f64::max);
    if data.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let slot = width / data.len() as f64;
    let bar_width = slot * 0.6;
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let bar_height = (d.total.max(0.0) / max) * height;
            BarRect {
                name: d.name.clone(),
                total: d.total,
                x: i as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, value: f64) -> CategoryTotal {
        CategoryTotal {
            name: name.to_string(),
            value,
        }
    }

    fn period(name: &str, total: f64) -> PeriodTotal {
        PeriodTotal {
            name: name.to_string(),
            total,
        }
    }

    #[test]
    fn empty_or_zero_data_draws_nothing() {
        assert!(pie_slices(&[], 150.0, 150.0, 100.0).is_empty());
        assert!(pie_slices(&[category("Food", 0.0)], 150.0, 150.0, 100.0).is_empty());
        assert!(bar_layout(&[], 500.0, 200.0).is_empty());
        assert!(bar_layout(&[period("W1", 0.0)], 500.0, 200.0).is_empty());
    }

    #[test]
    fn slices_cycle_the_palette_and_skip_zero_entries() {
        let data: Vec<CategoryTotal> = (0..7)
            .map(|i| category(&format!("c{i}"), if i == 3 { 0.0 } else { 1.0 }))
            .collect();
        let slices = pie_slices(&data, 150.0, 150.0, 100.0);
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[5].color, PALETTE[0]);
        assert!(slices.iter().all(|s| !s.path.is_empty()));
    }

    #[test]
    fn a_single_slice_still_has_distinct_arc_endpoints() {
        let slices = pie_slices(&[category("Food", 9.0)], 150.0, 150.0, 100.0);
        assert_eq!(slices.len(), 1);
        // Start point of the arc appears after the move-to; a degenerate
        // full-circle arc would repeat it exactly at the end.
        let path = &slices[0].path;
        let line_to = path.split('L').nth(1).unwrap().split('A').next().unwrap();
        assert!(!path.ends_with(&format!("{} Z", line_to.trim())));
    }

    #[test]
    fn bar_heights_scale_linearly_to_the_maximum() {
        let bars = bar_layout(&[period("W1", 50.0), period("W2", 100.0)], 500.0, 200.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].height, 100.0);
        assert_eq!(bars[1].height, 200.0);
        assert_eq!(bars[1].y, 0.0);
    }

    #[test]
    fn bars_are_bottom_aligned_and_stay_in_their_slots() {
        let data = vec![period("Jan", 10.0), period("Feb", 30.0), period("Mar", 20.0)];
        let bars = bar_layout(&data, 300.0, 150.0);
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.y + bar.height, 150.0);
            let slot_start = i as f64 * 100.0;
            assert!(bar.x >= slot_start);
            assert!(bar.x + bar.width <= slot_start + 100.0);
        }
    }
}
