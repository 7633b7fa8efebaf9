//! egui implementation of the chart `Surface`, plus the hoverable chart widget.

use eframe::egui::{
    Align2, Area, Color32, Context, FontId, Frame, Id, Mesh, Order, Painter, Pos2, Rect,
    RichText, Sense, Shape, Stroke, Ui, pos2, vec2,
};

use crate::chart::pointer::{Tooltip, TooltipState};
use crate::chart::render::{ChartTheme, Px, Surface, TextAnchor, render_chart};
use crate::config::{MARKET, PLOT_CONFIG};
use crate::domain::CandlePoint;
use crate::ui::config::UI_TEXT;

/// Buffers shapes for one frame and hands them to the painter in `finish`.
pub struct EguiSurface {
    painter: Painter,
    rect: Rect,
    shapes: Vec<Shape>,
}

impl EguiSurface {
    pub fn new(painter: Painter, rect: Rect) -> Self {
        Self {
            painter,
            rect,
            shapes: Vec::new(),
        }
    }

    fn to_screen(&self, (x, y): Px) -> Pos2 {
        pos2(self.rect.min.x + x as f32, self.rect.min.y + y as f32)
    }

    pub fn finish(self) {
        self.painter.extend(self.shapes);
    }
}

impl Surface for EguiSurface {
    fn size(&self) -> (f64, f64) {
        (self.rect.width() as f64, self.rect.height() as f64)
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn fill_gradient_area(
        &mut self,
        top: &[Px],
        baseline: f64,
        color: Color32,
        top_opacity: f32,
        bottom_opacity: f32,
    ) {
        if top.len() < 2 {
            return;
        }
        let highest = top.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let depth = (baseline - highest).max(f64::EPSILON);
        let tint = |y: f64| {
            let t = ((y - highest) / depth).clamp(0.0, 1.0) as f32;
            let opacity = top_opacity + (bottom_opacity - top_opacity) * t;
            Color32::from_rgba_unmultiplied(
                color.r(),
                color.g(),
                color.b(),
                (opacity * 255.0).round() as u8,
            )
        };

        let mut mesh = Mesh::default();
        let bottom_color = tint(baseline);
        for &(x, y) in top {
            mesh.colored_vertex(self.to_screen((x, y)), tint(y));
            mesh.colored_vertex(self.to_screen((x, baseline)), bottom_color);
        }
        for i in 0..(top.len() as u32 - 1) {
            let (a, b, c, d) = (2 * i, 2 * i + 1, 2 * i + 2, 2 * i + 3);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
        self.shapes.push(Shape::mesh(mesh));
    }

    fn stroke_polyline(&mut self, points: &[Px], color: Color32, width: f32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.shapes
            .push(Shape::line(points, Stroke::new(width, color)));
    }

    fn line(&mut self, from: Px, to: Px, color: Color32, width: f32) {
        self.shapes.push(Shape::line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, color),
        ));
    }

    fn text(&mut self, at: Px, text: &str, anchor: TextAnchor, color: Color32) {
        let galley = self.painter.layout_no_wrap(
            text.to_string(),
            FontId::proportional(PLOT_CONFIG.label_font_size),
            color,
        );
        // `at` is the text baseline, like SVG.
        let align = match anchor {
            TextAnchor::Start => Align2::LEFT_BOTTOM,
            TextAnchor::Middle => Align2::CENTER_BOTTOM,
            TextAnchor::End => Align2::RIGHT_BOTTOM,
        };
        let rect = align.anchor_size(self.to_screen(at), galley.size());
        self.shapes.push(Shape::galley(rect.min, galley, color));
    }
}

/// The chart card body: draws the series at full width and shows the hover tooltip.
#[derive(Default)]
pub struct ChartView {
    tooltip: TooltipState,
}

impl ChartView {
    pub fn show(&mut self, ui: &mut Ui, series: &[CandlePoint]) {
        let size = vec2(ui.available_width(), PLOT_CONFIG.chart_height);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;
        let theme = ChartTheme::for_dark_mode(ui.visuals().dark_mode);

        let mut surface = EguiSurface::new(painter.clone(), rect);
        let rendered = render_chart(&mut surface, series, &theme);
        surface.finish();

        let Some((layout, scale)) = rendered else {
            self.tooltip.hide();
            return;
        };

        let pointer = response
            .hover_pos()
            .map(|p| ((p.x - rect.min.x) as f64, (p.y - rect.min.y) as f64));
        let tooltip = self.tooltip.update(
            pointer,
            |x| layout.to_plot_x(x),
            series,
            &scale,
            MARKET.offset(),
        );

        if let Some(tip) = tooltip {
            let (px, py) = layout.to_surface(scale.project(&tip.point));
            painter.circle_filled(
                pos2(rect.min.x + px as f32, rect.min.y + py as f32),
                4.0,
                theme.line,
            );
            show_tooltip(ui.ctx(), rect.min + vec2(tip.anchor.0 as f32, tip.anchor.1 as f32), tip);
        }
    }
}

fn show_tooltip(ctx: &Context, pos: Pos2, tip: &Tooltip) {
    Area::new(Id::new("chart_tooltip"))
        .order(Order::Tooltip)
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(RichText::new(&tip.date).strong());
                ui.label(format!("{}: {}", UI_TEXT.tooltip_price_label, tip.price));
                ui.label(RichText::new(&tip.time).small().weak());
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn series() -> Vec<CandlePoint> {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        (0..5)
            .map(|i| {
                CandlePoint::new(
                    msk.with_ymd_and_hms(2024, 3, 1 + i, 10, 0, 0).unwrap(),
                    100.0 + i as f64,
                )
            })
            .collect()
    }

    fn surface(ctx: &Context) -> EguiSurface {
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(800.0, 400.0));
        let painter = Painter::new(ctx.clone(), eframe::egui::LayerId::background(), rect);
        EguiSurface::new(painter, rect)
    }

    #[test]
    fn size_is_the_allocated_rect() {
        let ctx = Context::default();
        assert_eq!(surface(&ctx).size(), (800.0, 400.0));
    }

    #[test]
    fn render_buffers_shapes_and_clear_drops_them() {
        let ctx = Context::default();
        let _ = ctx.run(Default::default(), |ctx| {
            let mut s = surface(ctx);
            render_chart(&mut s, &series(), &ChartTheme::LIGHT);
            assert!(matches!(s.shapes[0], Shape::Mesh(_)));
            assert!(s.shapes.len() > 2);

            s.clear();
            assert!(s.shapes.is_empty());
        });
    }

    #[test]
    fn gradient_fades_to_baseline() {
        let ctx = Context::default();
        let mut s = surface(&ctx);
        s.fill_gradient_area(
            &[(0.0, 10.0), (50.0, 30.0)],
            100.0,
            PLOT_CONFIG.line_color,
            0.2,
            0.0,
        );
        let Shape::Mesh(mesh) = &s.shapes[0] else {
            panic!("expected a mesh");
        };
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].color.a(), 51);
        assert_eq!(mesh.vertices[1].color.a(), 0);
    }
}
