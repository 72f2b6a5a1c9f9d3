mod polygon_clip;

pub use polygon_clip::PolygonClip;
