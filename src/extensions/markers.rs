use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{PlotArea, ValueScale, YearScale};
use crate::data::{Attribute, WorldCupRecord};

/// One circular marker, carrying the record it was placed for.
///
/// Holding the record itself means a hit on the marker resolves to its data
/// directly, with no index into any other collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMarker {
    /// 0-based position in filtered-set order, stable for one render pass.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub record: WorldCupRecord,
}

/// Places one marker per filtered record at its projected position.
///
/// The marker count always equals the filtered record count; a record whose
/// attribute value failed coercion still gets a marker, at a NaN position no
/// pointer can hit.
#[must_use]
pub fn place_markers(
    filtered: &[WorldCupRecord],
    attribute: Attribute,
    year_scale: YearScale,
    value_scale: ValueScale,
    plot: PlotArea,
    radius: f64,
) -> Vec<ChartMarker> {
    filtered
        .iter()
        .enumerate()
        .map(|(index, record)| ChartMarker {
            index,
            x: year_scale.year_to_pixel(record.year, plot.width()),
            y: value_scale.value_to_pixel(record.value_of(attribute), plot.height()),
            radius,
            record: record.clone(),
        })
        .collect()
}

/// Resolves the marker under a pointer position, nearest center winning when
/// markers overlap.
#[must_use]
pub fn marker_at_point(markers: &[ChartMarker], x: f64, y: f64) -> Option<&ChartMarker> {
    let mut candidates: SmallVec<[(usize, f64); 4]> = SmallVec::new();
    for (slot, marker) in markers.iter().enumerate() {
        let dx = marker.x - x;
        let dy = marker.y - y;
        let distance_squared = dx * dx + dy * dy;
        if distance_squared <= marker.radius * marker.radius {
            candidates.push((slot, distance_squared));
        }
    }

    candidates
        .into_iter()
        .min_by_key(|&(_, distance_squared)| OrderedFloat(distance_squared))
        .map(|(slot, _)| &markers[slot])
}
