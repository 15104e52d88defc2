//! Customer placement on sidewalks

use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::ops::RangeInclusive;

use super::sidewalk::{sample_point, SidewalkRegion};
use super::types::{Color, Point};

/// A waiting customer, drawn as a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub center: Point,
    pub radius: i32,
    pub color: Color,
}

/// Place a random number of customers on randomly chosen sidewalks.
///
/// The count is drawn uniformly from `count_range`. Each customer picks one of
/// the regions uniformly and samples a point inside it; a degenerate region
/// places its customers at the region origin. Duplicates are allowed.
pub fn spawn_customers<R: Rng + ?Sized>(
    rng: &mut R,
    count_range: RangeInclusive<usize>,
    regions: &[SidewalkRegion],
    radius: i32,
    color: Color,
) -> Vec<Customer> {
    if count_range.is_empty() {
        warn!("Empty customer range {:?}, no customers spawned", count_range);
        return Vec::new();
    }

    if regions.is_empty() {
        warn!("No sidewalks defined, no customers spawned");
        return Vec::new();
    }
    if !regions.iter().any(|r| r.is_usable()) {
        warn!("No usable sidewalks, customers fall back to region origins");
    }

    let count = rng.random_range(count_range);
    let mut customers = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(region) = regions.choose(rng) else {
            break;
        };
        let center = sample_point(&region.rect, rng);
        debug!(
            "Customer at ({}, {}) on block {:?} {:?}",
            center.x, center.y, region.block.0, region.edge
        );
        customers.push(Customer {
            center,
            radius,
            color,
        });
    }

    customers
}
