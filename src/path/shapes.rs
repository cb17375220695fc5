//! Built-in outlines, sized to fit a 250 px box.

use std::f32::consts::{FRAC_PI_2, PI};

use super::svg::parse_path_data;
use super::Contour;
use crate::error::Result;

const HEART: &str = "M 125 225 \
    C 20 150 0 90 30 50 \
    C 60 10 110 20 125 60 \
    C 140 20 190 10 220 50 \
    C 250 90 230 150 125 225 Z";

const SQUARE: &str = "M 25 25 L 225 25 L 225 225 L 25 225 Z";

// Four quarter arcs, control distance 0.5523 * r
const CIRCLE: &str = "M 225 125 \
    C 225 180.23 180.23 225 125 225 \
    C 69.77 225 25 180.23 25 125 \
    C 25 69.77 69.77 25 125 25 \
    C 180.23 25 225 69.77 225 125 Z";

/// Built-in outline selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Heart,
    Star,
    Square,
    Circle,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Heart, Shape::Star, Shape::Square, Shape::Circle];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "heart" => Some(Shape::Heart),
            "star" => Some(Shape::Star),
            "square" => Some(Shape::Square),
            "circle" => Some(Shape::Circle),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Shape::Heart => "heart",
            Shape::Star => "star",
            Shape::Square => "square",
            Shape::Circle => "circle",
        }
    }

    /// Outline as SVG path data
    pub fn path_data(self) -> String {
        match self {
            Shape::Heart => HEART.to_string(),
            Shape::Star => star_path(5, 110.0, 45.0),
            Shape::Square => SQUARE.to_string(),
            Shape::Circle => CIRCLE.to_string(),
        }
    }

    pub fn contours(self) -> Result<Vec<Contour>> {
        parse_path_data(&self.path_data())
    }
}

/// Star polygon centered in the 250 px box, first point straight up
fn star_path(points: usize, outer: f32, inner: f32) -> String {
    let center = 125.0;
    let corners = points * 2;
    let mut data = String::new();

    for i in 0..corners {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + PI * i as f32 / points as f32;
        let x = center + radius * angle.cos();
        let y = center + radius * angle.sin();
        let command = if i == 0 { "M" } else { "L" };
        data.push_str(&format!("{} {:.2} {:.2} ", command, x, y));
    }

    data.push('Z');
    data
}
