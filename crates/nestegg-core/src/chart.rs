//! Chart rendering behind a pluggable trait
//!
//! The wizard treats chart generation as an injected capability: handlers
//! hold a `dyn ChartRenderer` and tests swap in [`StubChartRenderer`] so the
//! image stack stays out of the handler test suite.

use std::io::Cursor;

use plotters::prelude::*;
use tracing::debug;

use crate::categorize::CategorizedTotals;
use crate::error::{Error, Result};

/// The four values plotted on the results chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSeries {
    pub income: f64,
    pub needs: f64,
    pub wants: f64,
    /// needs + wants
    pub total: f64,
}

impl ChartSeries {
    pub fn new(income: f64, categorized: &CategorizedTotals) -> Self {
        Self {
            income,
            needs: categorized.needs,
            wants: categorized.wants,
            total: categorized.total(),
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.income, self.needs, self.wants, self.total]
    }
}

/// Renders a chart image from the budget series.
///
/// Synchronous and in-process; input is bounded by the handful of values a
/// visitor can enter, so no timeout applies. Failures propagate as
/// [`Error::Chart`] and abort the request.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, series: &ChartSeries) -> Result<Vec<u8>>;
}

/// Default renderer: a four-bar PNG (income, needs, wants, total)
pub struct BarChartRenderer {
    width: u32,
    height: u32,
}

impl BarChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::new(800, 500)
    }
}

impl ChartRenderer for BarChartRenderer {
    fn render(&self, series: &ChartSeries) -> Result<Vec<u8>> {
        let values = series.values();
        let max_value = values.iter().cloned().fold(0.0f64, f64::max);
        // 15% headroom above the tallest bar; an all-zero series still gets
        // a non-degenerate axis
        let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

        let mut raw = vec![0u8; (self.width * self.height * 3) as usize];
        {
            let root =
                BitMapBackend::with_buffer(&mut raw, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(chart_err)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .build_cartesian_2d(0f64..4f64, 0f64..y_max)
                .map_err(chart_err)?;

            let colors: [RGBColor; 4] = [GREEN, RGBColor(255, 165, 0), RED, BLUE];
            chart
                .draw_series(values.iter().zip(colors.iter()).enumerate().map(
                    |(i, (value, color))| {
                        let left = i as f64 + 0.15;
                        let right = i as f64 + 0.85;
                        Rectangle::new([(left, 0.0), (right, *value)], color.filled())
                    },
                ))
                .map_err(chart_err)?;

            root.present().map_err(chart_err)?;
        }

        let img = image::RgbImage::from_raw(self.width, self.height, raw)
            .ok_or_else(|| Error::Chart("pixel buffer size mismatch".to_string()))?;
        let mut png = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut png, image::ImageFormat::Png)
            .map_err(|e| Error::Chart(e.to_string()))?;

        let bytes = png.into_inner();
        debug!(bytes = bytes.len(), "Rendered budget chart");
        Ok(bytes)
    }
}

/// Test renderer that returns a fixed marker instead of an image
pub struct StubChartRenderer;

impl ChartRenderer for StubChartRenderer {
    fn render(&self, _series: &ChartSeries) -> Result<Vec<u8>> {
        Ok(b"stub-chart".to_vec())
    }
}

fn chart_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Chart(err.to_string())
}
