//! Axis scaling
//!
//! Pixel geometry for the line chart: a zero-based linear value axis and an
//! evenly spaced category axis.

/// Space reserved around the plot for legend, ticks and axis titles
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Rectangle the series is drawn into
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let left = MARGIN_LEFT.min(width / 2.0);
        let top = MARGIN_TOP.min(height / 2.0);
        Self {
            left,
            top,
            right: (width - MARGIN_RIGHT).max(left),
            bottom: (height - MARGIN_BOTTOM).max(top),
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Linear value axis that always includes zero
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueAxis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueAxis {
    /// Fit `values` into roughly `max_ticks` intervals of a 1-2-5 step.
    ///
    /// Non-finite values are ignored. The axis starts at zero unless the data
    /// dips below it.
    pub fn zero_based(values: &[f64], max_ticks: usize) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let data_min = finite.clone().fold(0.0_f64, f64::min);
        let data_max = finite.fold(0.0_f64, f64::max);

        let mut span = data_max - data_min;
        if span <= 0.0 {
            span = 1.0;
        }

        let step = nice_step(span / max_ticks.max(1) as f64);
        let min = (data_min / step).floor() * step;
        let mut max = (data_max / step).ceil() * step;
        if max <= min {
            max = min + step * max_ticks.max(1) as f64;
        }

        Self { min, max, step }
    }

    /// Tick values from `min` to `max` inclusive
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|i| self.min + i as f64 * self.step)
            .collect()
    }

    /// Pixel row for `value` inside `area`
    pub fn to_pixel(&self, value: f64, area: &PlotArea) -> f64 {
        let ratio = (value - self.min) / (self.max - self.min);
        area.bottom - ratio * area.height()
    }

    /// Tick label with just enough decimals for the step
    pub fn format_tick(&self, value: f64) -> String {
        if self.step.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            let decimals = (-self.step.log10()).ceil().max(0.0) as usize;
            format!("{:.*}", decimals, value)
        }
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Pixel column of category `index` out of `count`
pub fn category_x(index: usize, count: usize, area: &PlotArea) -> f64 {
    if count <= 1 {
        return area.left + area.width() / 2.0;
    }
    area.left + index as f64 * area.width() / (count - 1) as f64
}

/// Draw every n-th category label so labels of `label_width` do not overlap
pub fn label_stride(count: usize, available_width: f64, label_width: f64) -> usize {
    if count == 0 || label_width <= 0.0 {
        return 1;
    }
    let fits = (available_width / label_width).floor().max(1.0) as usize;
    count.div_ceil(fits).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_starts_at_zero() {
        let axis = ValueAxis::zero_based(&[12.0, 30.0, 18.0], 5);

        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.step, 10.0);
        assert_eq!(axis.max, 30.0);
        assert_eq!(axis.ticks(), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_axis_rounds_max_up() {
        let axis = ValueAxis::zero_based(&[5.0, 3.0], 5);

        assert_eq!(axis.min, 0.0);
        assert!(axis.max >= 5.0);
        assert_eq!(axis.ticks().first(), Some(&0.0));
        assert_eq!(axis.ticks().last(), Some(&axis.max));
    }

    #[test]
    fn test_empty_axis() {
        let axis = ValueAxis::zero_based(&[], 5);

        assert_eq!(axis.min, 0.0);
        assert!(axis.max > 0.0);
        assert_eq!(axis.format_tick(0.2), "0.2");
    }

    #[test]
    fn test_all_zero_values() {
        let axis = ValueAxis::zero_based(&[0.0, 0.0], 5);
        assert_eq!(axis.min, 0.0);
        assert!(axis.max > axis.min);
    }

    #[test]
    fn test_ignores_non_finite() {
        let axis = ValueAxis::zero_based(&[f64::NAN, 40.0, f64::INFINITY], 4);
        assert_eq!(axis.max, 40.0);
    }

    #[test]
    fn test_to_pixel() {
        let area = PlotArea {
            left: 0.0,
            top: 0.0,
            right: 100.0,
            bottom: 200.0,
        };
        let axis = ValueAxis {
            min: 0.0,
            max: 50.0,
            step: 10.0,
        };

        assert_eq!(axis.to_pixel(0.0, &area), 200.0);
        assert_eq!(axis.to_pixel(50.0, &area), 0.0);
        assert_eq!(axis.to_pixel(25.0, &area), 100.0);
    }

    #[test]
    fn test_category_positions() {
        let area = PlotArea {
            left: 10.0,
            top: 0.0,
            right: 110.0,
            bottom: 50.0,
        };

        assert_eq!(category_x(0, 1, &area), 60.0);
        assert_eq!(category_x(0, 3, &area), 10.0);
        assert_eq!(category_x(1, 3, &area), 60.0);
        assert_eq!(category_x(2, 3, &area), 110.0);
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(12, 600.0, 60.0), 2);
        assert_eq!(label_stride(60, 600.0, 60.0), 6);
        assert_eq!(label_stride(5, 600.0, 60.0), 1);
        assert_eq!(label_stride(0, 600.0, 60.0), 1);
        assert_eq!(label_stride(10, 20.0, 60.0), 10);
    }

    #[test]
    fn test_plot_area_for_small_canvas() {
        let area = PlotArea::for_canvas(60.0, 40.0);
        assert!(area.width() >= 0.0);
        assert!(area.height() >= 0.0);
    }
}
