//! Canvas renderer
//!
//! Draws a `ChartConfig` onto an HTML5 canvas and keeps it sized to the
//! canvas's layout width while attached.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scale::{category_x, label_stride, PlotArea, ValueAxis};
use super::{ChartConfig, ChartInstance, LegendPosition};
use crate::error::ChartError;

/// Width:height ratio used when the canvas follows its layout width
const ASPECT_RATIO: f64 = 2.0;
/// Delay before redrawing after the window stops resizing
const RESIZE_DEBOUNCE_MS: u32 = 100;
const MAX_Y_TICKS: usize = 6;
const POINT_RADIUS: f64 = 3.0;

const TEXT_COLOR: &str = "#666666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const FONT: &str = "12px sans-serif";
const TITLE_FONT: &str = "bold 12px sans-serif";
/// Rough width of one x label, used for auto-skip
const APPROX_LABEL_WIDTH: f64 = 80.0;

/// A line chart attached to a canvas
pub struct CanvasLineChart {
    canvas: HtmlCanvasElement,
    config: Rc<ChartConfig>,
    on_resize: Option<Closure<dyn FnMut()>>,
    pending_redraw: Rc<RefCell<Option<Timeout>>>,
}

impl CanvasLineChart {
    /// Size the canvas, draw `config` and start following window resizes
    pub fn new(canvas: HtmlCanvasElement, config: ChartConfig) -> Result<Self, ChartError> {
        let config = Rc::new(config);

        fit_to_layout(&canvas);
        draw(&canvas, &config)?;

        let mut chart = Self {
            canvas,
            config,
            on_resize: None,
            pending_redraw: Rc::new(RefCell::new(None)),
        };
        if chart.config.options.responsive {
            chart.listen_for_resize()?;
        }

        Ok(chart)
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Whether the window resize listener is registered
    pub fn is_listening(&self) -> bool {
        self.on_resize.is_some()
    }

    fn listen_for_resize(&mut self) -> Result<(), ChartError> {
        let Some(window) = web_sys::window() else {
            return Ok(());
        };

        let canvas = self.canvas.clone();
        let config = self.config.clone();
        let pending = self.pending_redraw.clone();

        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let canvas = canvas.clone();
            let config = config.clone();
            // Replacing the timeout cancels the previous one
            *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                fit_to_layout(&canvas);
                if let Err(e) = draw(&canvas, &config) {
                    log::error!("Chart redraw failed: {}", e);
                }
            }));
        });

        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        self.on_resize = Some(on_resize);
        Ok(())
    }
}

impl ChartInstance for CanvasLineChart {
    fn destroy(&mut self) {
        if let Some(on_resize) = self.on_resize.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
        }
        self.pending_redraw.borrow_mut().take();

        if let Ok(ctx) = context_2d(&self.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, ChartError> {
    canvas
        .get_context("2d")?
        .ok_or(ChartError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| ChartError::ContextUnavailable)
}

/// Match the drawing buffer to the canvas's layout width
fn fit_to_layout(canvas: &HtmlCanvasElement) {
    let width = canvas.client_width();
    if width > 0 {
        canvas.set_width(width as u32);
        canvas.set_height((width as f64 / ASPECT_RATIO).round() as u32);
    }
}

/// Draw the whole chart
fn draw(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<(), ChartError> {
    let ctx = context_2d(canvas)?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::for_canvas(width, height);

    let (values, border_color, background_color, border_width, fill) = match config.dataset() {
        Some(d) => (
            d.data.as_slice(),
            d.border_color.as_str(),
            d.background_color.as_str(),
            d.border_width,
            d.fill,
        ),
        None => (&[][..], "#000000", "transparent", 1.0, false),
    };
    let axis = ValueAxis::zero_based(values, MAX_Y_TICKS);

    ctx.clear_rect(0.0, 0.0, width, height);

    draw_y_axis(&ctx, &axis, &area, config)?;
    draw_x_axis(&ctx, &area, config)?;

    if !values.is_empty() {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (category_x(i, values.len(), &area), axis.to_pixel(*v, &area)))
            .collect();

        if fill {
            let baseline = axis.to_pixel(0.0_f64.clamp(axis.min, axis.max), &area);
            ctx.set_fill_style_str(background_color);
            ctx.begin_path();
            ctx.move_to(points[0].0, baseline);
            for (x, y) in &points {
                ctx.line_to(*x, *y);
            }
            ctx.line_to(points[points.len() - 1].0, baseline);
            ctx.close_path();
            ctx.fill();
        }

        ctx.set_stroke_style_str(border_color);
        ctx.set_line_width(border_width);
        ctx.begin_path();
        for (i, (x, y)) in points.iter().enumerate() {
            if i == 0 {
                ctx.move_to(*x, *y);
            } else {
                ctx.line_to(*x, *y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style_str(background_color);
        for (x, y) in &points {
            ctx.begin_path();
            ctx.arc(*x, *y, POINT_RADIUS, 0.0, std::f64::consts::PI * 2.0)?;
            ctx.fill();
            ctx.stroke();
        }
    } else {
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        ctx.fill_text(
            "No data",
            area.left + area.width() / 2.0,
            area.top + area.height() / 2.0,
        )?;
    }

    if config.options.plugins.legend.display {
        draw_legend(&ctx, config, width, height, border_color, background_color)?;
    }

    Ok(())
}

/// Grid lines, tick labels and the rotated title
fn draw_y_axis(
    ctx: &CanvasRenderingContext2d,
    axis: &ValueAxis,
    area: &PlotArea,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font(FONT);
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");

    for tick in axis.ticks() {
        let y = axis.to_pixel(tick, area);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.right, y);
        ctx.stroke();
        ctx.fill_text(&axis.format_tick(tick), area.left - 8.0, y)?;
    }

    let title = &config.options.scales.y.title;
    if title.display {
        ctx.save();
        ctx.translate(16.0, area.top + area.height() / 2.0)?;
        ctx.rotate(-std::f64::consts::FRAC_PI_2)?;
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("center");
        ctx.fill_text(&title.text, 0.0, 0.0)?;
        ctx.restore();
    }

    Ok(())
}

/// Category labels along the bottom and the axis title
fn draw_x_axis(
    ctx: &CanvasRenderingContext2d,
    area: &PlotArea,
    config: &ChartConfig,
) -> Result<(), ChartError> {
    let labels = &config.data.labels;

    ctx.set_stroke_style_str(GRID_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(area.left, area.bottom);
    ctx.line_to(area.right, area.bottom);
    ctx.stroke();

    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font(FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");

    let stride = label_stride(labels.len(), area.width(), APPROX_LABEL_WIDTH);
    for (i, label) in labels.iter().enumerate().step_by(stride) {
        let x = category_x(i, labels.len(), area);
        ctx.fill_text(label, x, area.bottom + 8.0)?;
    }

    let title = &config.options.scales.x.title;
    if title.display {
        ctx.set_font(TITLE_FONT);
        ctx.fill_text(&title.text, area.left + area.width() / 2.0, area.bottom + 32.0)?;
    }

    Ok(())
}

/// Color box plus dataset label, centered
fn draw_legend(
    ctx: &CanvasRenderingContext2d,
    config: &ChartConfig,
    width: f64,
    height: f64,
    border_color: &str,
    background_color: &str,
) -> Result<(), ChartError> {
    let Some(dataset) = config.dataset() else {
        return Ok(());
    };

    let y = match config.options.plugins.legend.position {
        LegendPosition::Top => 18.0,
        LegendPosition::Bottom => height - 12.0,
    };
    let box_width = 40.0;
    let box_height = 12.0;
    let text_width = dataset.label.len() as f64 * 7.0;
    let start = (width - box_width - 8.0 - text_width) / 2.0;

    ctx.set_fill_style_str(background_color);
    ctx.fill_rect(start, y - box_height / 2.0, box_width, box_height);
    ctx.set_stroke_style_str(border_color);
    ctx.set_line_width(dataset.border_width);
    ctx.stroke_rect(start, y - box_height / 2.0, box_width, box_height);

    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_font(FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.fill_text(&dataset.label, start + box_width + 8.0, y)?;

    Ok(())
}
