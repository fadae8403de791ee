//! The scaled, rotated part collection

use log::info;

use crate::engine::scale::UnitScale;
use crate::geometry::{OrientedRect, Point};

use super::record::{PartGeometry, PartRecord};

/// An ordered collection of oriented parts in pixel space
///
/// Built once from decoded records: every center and dimension is scaled
/// by the same factor, then each part is rotated by its record's angle.
/// The set is read-only for the duration of a tiling run; sweeps that
/// prune contained parts work on their own index mask, never on the set.
#[derive(Debug, Clone)]
pub struct PartSet {
    parts: Vec<OrientedRect>,
}

impl PartSet {
    /// Build a part set from decoded records
    ///
    /// # Arguments
    /// * `records` - Decoded (center, angle) records in physical units
    /// * `geometry` - Height and width shared by every part
    /// * `scale` - Physical-to-pixel conversion applied to all coordinates
    pub fn build(records: &[PartRecord], geometry: PartGeometry, scale: UnitScale) -> Self {
        let height = scale.to_pixels(geometry.height);
        let width = scale.to_pixels(geometry.width);

        let parts = records
            .iter()
            .map(|record| {
                let center = scale.point_to_pixels(Point::new(record.x, record.y));
                let mut part = OrientedRect::new(center, height, width);
                part.rotate(record.angle);
                part
            })
            .collect::<Vec<_>>();

        info!(
            "Built part set: {} parts of {}x{} px at {} px/unit",
            parts.len(), width, height, scale.factor()
        );

        PartSet { parts }
    }

    /// Number of parts in the set
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the set holds no parts
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Access a part by index
    pub fn get(&self, index: usize) -> &OrientedRect {
        &self.parts[index]
    }

    /// Iterate the parts in input order
    pub fn iter(&self) -> impl Iterator<Item = &OrientedRect> {
        self.parts.iter()
    }
}
