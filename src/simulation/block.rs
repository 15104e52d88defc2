//! Static obstacles on the map
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::{BlockId, Color, Rect};

/// A rectangular obstacle the taxi cannot drive through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub rect: Rect,
    pub color: Color,
}

impl Block {
    pub fn new(id: BlockId, rect: Rect, color: Color) -> Self {
        Self { id, rect, color }
    }
}

/// Find the first block overlapping `rect`, if any
pub fn any_collision(rect: &Rect, blocks: &[Block]) -> Option<BlockId> {
    blocks
        .iter()
        .find(|block| rect.intersects(&block.rect))
        .map(|block| block.id)
}

/// Look up a block by id
pub fn find_block(blocks: &[Block], id: BlockId) -> Option<&Block> {
    blocks.iter().find(|block| block.id == id)
}
