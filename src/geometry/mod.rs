mod bezier;
mod circle;
mod ellipse;
mod polygon;
mod rect;
mod segment;
mod shape;

pub use bezier::{CubicBezier, QuadraticBezier};
pub use circle::{Circle, CircularArc};
pub use ellipse::Ellipse;
pub use polygon::{Polygon, PolygonSet};
pub use rect::Rect;
pub use segment::Segment;
pub use shape::Shape;
