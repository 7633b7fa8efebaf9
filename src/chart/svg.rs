//! String-built SVG surface for headless export.

use std::fmt::Write as _;

use eframe::egui::Color32;

use crate::chart::render::{Px, Surface, TextAnchor};
use crate::config::PLOT_CONFIG;

const GRADIENT_ID: &str = "area-gradient";

/// Accumulates SVG elements for one render pass. `clear` drops everything,
/// so each render produces a complete document on its own.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    defs: String,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            defs: String::new(),
            body: String::new(),
        }
    }

    pub fn document(&self) -> String {
        let mut doc = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = write!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="{fs}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height),
            fs = PLOT_CONFIG.label_font_size,
        );
        if !self.defs.is_empty() {
            doc.push_str("<defs>");
            doc.push_str(&self.defs);
            doc.push_str("</defs>");
        }
        doc.push_str(&self.body);
        doc.push_str("</svg>");
        doc
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.defs.clear();
        self.body.clear();
    }

    fn fill_gradient_area(
        &mut self,
        top: &[Px],
        baseline: f64,
        color: Color32,
        top_opacity: f32,
        bottom_opacity: f32,
    ) {
        let (Some(first), Some(last)) = (top.first(), top.last()) else {
            return;
        };
        let _ = write!(
            self.defs,
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="0" y2="1"><stop offset="0%" stop-color="{c}" stop-opacity="{o0}"/><stop offset="100%" stop-color="{c}" stop-opacity="{o1}"/></linearGradient>"#,
            id = GRADIENT_ID,
            c = hex(color),
            o0 = top_opacity,
            o1 = bottom_opacity,
        );

        let mut d = format!("M{},{}", fmt_num(first.0), fmt_num(baseline));
        for (x, y) in top {
            let _ = write!(d, " L{},{}", fmt_num(*x), fmt_num(*y));
        }
        let _ = write!(d, " L{},{} Z", fmt_num(last.0), fmt_num(baseline));
        let _ = write!(
            self.body,
            r#"<path d="{}" fill="url(#{})" stroke="none"/>"#,
            d, GRADIENT_ID
        );
    }

    fn stroke_polyline(&mut self, points: &[Px], color: Color32, width: f32) {
        if points.is_empty() {
            return;
        }
        let coords = points
            .iter()
            .map(|(x, y)| format!("{},{}", fmt_num(*x), fmt_num(*y)))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            coords,
            hex(color),
            width
        );
    }

    fn line(&mut self, from: Px, to: Px, color: Color32, width: f32) {
        let _ = write!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            fmt_num(from.0),
            fmt_num(from.1),
            fmt_num(to.0),
            fmt_num(to.1),
            hex(color),
            width
        );
    }

    fn text(&mut self, at: Px, text: &str, anchor: TextAnchor, color: Color32) {
        let anchor = match anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            self.body,
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}">{}</text>"#,
            fmt_num(at.0),
            fmt_num(at.1),
            anchor,
            hex(color),
            escape(text)
        );
    }
}

fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Two decimals, trailing zeros trimmed.
fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render::{ChartTheme, render_chart};
    use crate::domain::CandlePoint;
    use chrono::{FixedOffset, TimeZone};

    fn series() -> Vec<CandlePoint> {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        vec![
            CandlePoint::new(msk.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap(), 100.0),
            CandlePoint::new(msk.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap(), 110.0),
            CandlePoint::new(msk.with_ymd_and_hms(2024, 3, 3, 10, 0, 0).unwrap(), 90.0),
        ]
    }

    #[test]
    fn document_contains_gradient_line_and_labels() {
        let mut svg = SvgSurface::new(800.0, 400.0);
        render_chart(&mut svg, &series(), &ChartTheme::LIGHT);
        let doc = svg.document();

        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>"));
        assert!(doc.contains(r#"<linearGradient id="area-gradient""#));
        assert!(doc.contains(r#"stop-opacity="0.2""#));
        assert!(doc.contains(r#"fill="url(#area-gradient)""#));
        assert!(doc.contains(r##"fill="none" stroke="#1976d2" stroke-width="2""##));
        assert!(doc.contains(">02.03</text>"));
        assert!(doc.contains(" ₽</text>"));
    }

    #[test]
    fn rerender_does_not_accumulate_elements() {
        let mut svg = SvgSurface::new(800.0, 400.0);
        render_chart(&mut svg, &series(), &ChartTheme::LIGHT);
        let first = svg.document();
        render_chart(&mut svg, &series(), &ChartTheme::LIGHT);
        assert_eq!(svg.document(), first);
        assert_eq!(first.matches("<polyline").count(), 1);
    }

    #[test]
    fn empty_series_leaves_empty_document() {
        let mut svg = SvgSurface::new(800.0, 400.0);
        render_chart(&mut svg, &series(), &ChartTheme::LIGHT);
        render_chart(&mut svg, &[], &ChartTheme::LIGHT);
        assert!(!svg.document().contains("<polyline"));
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgSurface::new(10.0, 10.0);
        svg.text((0.0, 0.0), "A&B <x>", TextAnchor::Start, Color32::BLACK);
        assert!(svg.document().contains("A&amp;B &lt;x&gt;"));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(150.0), "150");
        assert_eq!(fmt_num(12.346), "12.35");
        assert_eq!(fmt_num(-0.001), "0");
    }
}
