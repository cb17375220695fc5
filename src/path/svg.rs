//! SVG loading into cubic contours.
//!
//! Documents are parsed with `usvg`, which resolves shapes, arcs, smooth
//! curves, styles and nested transforms into plain path outlines. Every path
//! node is mapped through its absolute transform, then lines and quadratics
//! are raised to cubics so each contour is a pure cubic Bézier chain.

use glam::Vec2;
use log::debug;
use std::borrow::Cow;
use usvg::tiny_skia_path::{self, PathSegment};
use usvg::{Group, Node, Options, Transform, Tree};

use super::{BezierSegment, Contour};
use crate::error::{Error, Result};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Parse bare path data (the value of a `d` attribute)
pub fn parse_path_data(data: &str) -> Result<Vec<Contour>> {
    let document = format!(
        r#"<svg xmlns="{}"><path d="{}"/></svg>"#,
        SVG_NAMESPACE,
        escape_attribute(data)
    );
    parse_document(&document)
}

/// Parse an SVG document, a loose SVG fragment, or bare path data
///
/// Documents contribute every rendered path in document order, with
/// transforms applied.
pub fn parse_svg(text: &str) -> Result<Vec<Contour>> {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('<') {
        return parse_path_data(trimmed);
    }
    parse_document(&with_svg_root(trimmed))
}

fn parse_document(document: &str) -> Result<Vec<Contour>> {
    let tree = Tree::from_str(document, &Options::default())?;

    let mut contours = Vec::new();
    collect_group(tree.root(), &mut contours)?;
    if contours.is_empty() {
        return Err(Error::PathData("no drawable path in input".to_string()));
    }

    debug!("Loaded {} contours", contours.len());
    Ok(contours)
}

/// Wrap root-less fragments and add the SVG namespace where it is missing
fn with_svg_root(text: &str) -> Cow<'_, str> {
    if !text.contains("<svg") {
        return Cow::Owned(format!(r#"<svg xmlns="{}">{}</svg>"#, SVG_NAMESPACE, text));
    }
    if !text.contains(SVG_NAMESPACE) {
        let namespaced = format!(r#"<svg xmlns="{}""#, SVG_NAMESPACE);
        return Cow::Owned(text.replacen("<svg", &namespaced, 1));
    }
    Cow::Borrowed(text)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

fn collect_group(group: &Group, contours: &mut Vec<Contour>) -> Result<()> {
    for node in group.children() {
        match node {
            Node::Group(group) => collect_group(group, contours)?,
            Node::Path(path) => {
                contours.extend(path_contours(path.data(), path.abs_transform())?);
            }
            _ => {}
        }
    }
    Ok(())
}

/// Convert one outline into contours, one per subpath
fn path_contours(data: &tiny_skia_path::Path, transform: Transform) -> Result<Vec<Contour>> {
    let mut contours = Vec::new();
    let mut current: Option<ContourBuilder> = None;
    let mut cursor = Vec2::ZERO;

    for segment in data.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                finish(current.take(), false, &mut contours);
                cursor = map_point(transform, p)?;
                current = Some(ContourBuilder::new(cursor));
            }
            PathSegment::LineTo(p) => {
                let end = map_point(transform, p)?;
                open_at(&mut current, cursor).line_to(end);
                cursor = end;
            }
            PathSegment::QuadTo(control, p) => {
                let control = map_point(transform, control)?;
                let end = map_point(transform, p)?;
                open_at(&mut current, cursor).quad_to(control, end);
                cursor = end;
            }
            PathSegment::CubicTo(c1, c2, p) => {
                let c1 = map_point(transform, c1)?;
                let c2 = map_point(transform, c2)?;
                let end = map_point(transform, p)?;
                open_at(&mut current, cursor).cubic_to(c1, c2, end);
                cursor = end;
            }
            PathSegment::Close => {
                if let Some(mut builder) = current.take() {
                    builder.close();
                    cursor = builder.start;
                    finish(Some(builder), true, &mut contours);
                }
            }
        }
    }

    finish(current, false, &mut contours);
    Ok(contours)
}

fn open_at(current: &mut Option<ContourBuilder>, cursor: Vec2) -> &mut ContourBuilder {
    current.get_or_insert_with(|| ContourBuilder::new(cursor))
}

fn finish(builder: Option<ContourBuilder>, closed: bool, contours: &mut Vec<Contour>) {
    if let Some(builder) = builder {
        let contour = builder.finish(closed);
        if contour.curve_count() > 0 {
            contours.push(contour);
        }
    }
}

fn map_point(transform: Transform, point: tiny_skia_path::Point) -> Result<Vec2> {
    let mapped = Vec2::new(
        transform.sx * point.x + transform.kx * point.y + transform.tx,
        transform.ky * point.x + transform.sy * point.y + transform.ty,
    );
    if !mapped.is_finite() {
        return Err(Error::PathData(format!(
            "coordinate ({}, {}) is not finite",
            mapped.x, mapped.y
        )));
    }
    Ok(mapped)
}

/// Subpath under construction
struct ContourBuilder {
    start: Vec2,
    segments: Vec<BezierSegment>,
}

impl ContourBuilder {
    fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: vec![BezierSegment::anchor(start)],
        }
    }

    fn cursor(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.p0)
    }

    fn line_to(&mut self, end: Vec2) {
        let start = self.cursor();
        self.cubic_to(start.lerp(end, 1.0 / 3.0), start.lerp(end, 2.0 / 3.0), end);
    }

    fn quad_to(&mut self, control: Vec2, end: Vec2) {
        let start = self.cursor();
        let c1 = start + (control - start) * (2.0 / 3.0);
        let c2 = end + (control - end) * (2.0 / 3.0);
        self.cubic_to(c1, c2, end);
    }

    fn cubic_to(&mut self, c1: Vec2, c2: Vec2, end: Vec2) {
        if let Some(last) = self.segments.last_mut() {
            last.p1 = c1;
            last.p2 = c2;
        }
        self.segments.push(BezierSegment::anchor(end));
    }

    /// Add the closing line back to the start when the outline stops short
    fn close(&mut self) {
        if self.cursor() != self.start {
            self.line_to(self.start);
        }
    }

    fn finish(self, closed: bool) -> Contour {
        Contour {
            segments: self.segments,
            closed,
        }
    }
}
