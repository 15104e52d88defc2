//! Sidewalk regions along block edges
//!
//! A sidewalk is a thin strip inside one edge of a block. The same rectangle
//! is drawn on screen and used as the sampling domain for customers.

use log::warn;
use rand::Rng;

use super::block::{find_block, Block};
use super::types::{BlockId, Color, Edge, Point, Rect};

/// Explicit geometry replacing the computed strip, for irregular map shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidewalkOverride {
    /// Falls back to the band width when absent
    pub width: Option<i32>,
    /// Falls back to the band width when absent
    pub height: Option<i32>,
    /// Absolute origin; falls back to the computed strip's origin when absent
    pub origin: Option<Point>,
}

/// Manifest entry describing how to derive one sidewalk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidewalkSpec {
    pub block: BlockId,
    /// Edge name as written in the manifest ("top", "bottom", "left", "right")
    pub edge: String,
    pub band_width: i32,
    pub override_rect: Option<SidewalkOverride>,
}

impl SidewalkSpec {
    pub fn new(block: usize, edge: &str, band_width: i32) -> Self {
        Self {
            block: BlockId(block),
            edge: edge.to_string(),
            band_width,
            override_rect: None,
        }
    }

    pub fn with_override(mut self, override_rect: SidewalkOverride) -> Self {
        self.override_rect = Some(override_rect);
        self
    }
}

/// A resolved sidewalk ready for drawing and sampling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidewalkRegion {
    pub block: BlockId,
    /// `None` when the manifest named an unknown edge
    pub edge: Option<Edge>,
    pub rect: Rect,
    pub color: Color,
}

impl SidewalkRegion {
    /// Resolve a manifest entry against the block registry.
    ///
    /// A configuration defect (unknown edge, missing block) degrades to a
    /// zero-area region at the origin instead of failing the session.
    pub fn resolve(spec: &SidewalkSpec, blocks: &[Block], color: Color) -> Self {
        let edge = match spec.edge.parse::<Edge>() {
            Ok(edge) => edge,
            Err(e) => {
                warn!("Sidewalk on block {:?} ignored: {}", spec.block.0, e);
                return Self::degenerate(spec.block, None, color);
            }
        };

        let Some(block) = find_block(blocks, spec.block) else {
            warn!(
                "Sidewalk references unknown block {:?}, using empty region",
                spec.block.0
            );
            return Self::degenerate(spec.block, Some(edge), color);
        };

        let rect = derive_region(
            &block.rect,
            edge,
            spec.band_width,
            spec.override_rect.as_ref(),
        );

        Self {
            block: spec.block,
            edge: Some(edge),
            rect,
            color,
        }
    }

    fn degenerate(block: BlockId, edge: Option<Edge>, color: Color) -> Self {
        Self {
            block,
            edge,
            rect: Rect::default(),
            color,
        }
    }

    /// Whether customers can be placed here
    pub fn is_usable(&self) -> bool {
        self.rect.area() > 0
    }
}

/// Compute the sidewalk rectangle for `edge` of `block`
pub fn derive_region(
    block: &Rect,
    edge: Edge,
    band_width: i32,
    override_rect: Option<&SidewalkOverride>,
) -> Rect {
    let strip = match edge {
        Edge::Top => Rect::new(block.left(), block.top(), block.width, band_width),
        Edge::Bottom => Rect::new(
            block.left(),
            block.bottom() - band_width,
            block.width,
            band_width,
        ),
        Edge::Left => Rect::new(block.left(), block.top(), band_width, block.height),
        Edge::Right => Rect::new(
            block.right() - band_width,
            block.top(),
            band_width,
            block.height,
        ),
    };

    match override_rect {
        None => strip,
        Some(o) => {
            let origin = o.origin.unwrap_or(strip.origin());
            Rect::new(
                origin.x,
                origin.y,
                o.width.unwrap_or(band_width),
                o.height.unwrap_or(band_width),
            )
        }
    }
}

/// Pick a point uniformly inside `[left, right) x [top, bottom)` of `region`.
///
/// Degenerate regions yield their origin.
pub fn sample_point<R: Rng + ?Sized>(region: &Rect, rng: &mut R) -> Point {
    if region.area() == 0 {
        return region.origin();
    }
    let x = rng.random_range(region.left()..region.right());
    let y = rng.random_range(region.top()..region.bottom());
    Point::new(x, y)
}
