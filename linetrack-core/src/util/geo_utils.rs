use geo::{
    line_measures::LengthMeasurable, Distance, Euclidean, Haversine, LineLocatePoint, LineString,
    Point,
};
use itertools::Itertools;

use crate::model::{Coordinate, Stop};

/// builds the traced path between two consecutive stops.
///
/// # Arguments
///
/// * `from` - stop at the beginning of the segment, carrying the traced path
/// * `to`   - stop at the end of the segment
///
/// # Returns
///
/// * a linestring starting at `from`, passing through its traced path points and ending at `to`
pub fn segment_linestring(from: &Stop, to: &Stop) -> LineString<f64> {
    let coords = std::iter::once(from.coordinate())
        .chain(from.path_next.iter().copied())
        .chain(std::iter::once(to.coordinate()))
        .map(geo::Coord::from)
        .collect_vec();
    LineString::new(coords)
}

/// haversine length of a sequence of stops, following traced paths, in meters
pub fn route_length_meters(stops: &[Stop]) -> f64 {
    stops
        .iter()
        .tuple_windows()
        .map(|(a, b)| segment_linestring(a, b).length(&Haversine))
        .sum()
}

/// the closest match of a point onto a linestring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// planar distance (in degrees) from the query point to the linestring
    pub distance: f64,
    /// position of the projected point along the linestring by haversine length, in [0, 1]
    pub ratio: f64,
    pub projected: Coordinate,
}

/// projects a point onto a linestring, choosing the nearest of its lines.
///
/// distances for choosing the nearest line are planar in degrees, which is
/// acceptable for the short segments between stops. the returned ratio is
/// measured along the linestring's haversine length.
///
/// # Returns
///
/// * the projection, or None for an empty linestring
pub fn project_onto_linestring(linestring: &LineString<f64>, point: &Point<f64>) -> Option<Projection> {
    let line_lengths = linestring
        .lines()
        .map(|line| Haversine.distance(Point::from(line.start), Point::from(line.end)))
        .collect_vec();
    let total_length: f64 = line_lengths.iter().sum();

    let mut best: Option<Projection> = None;
    let mut length_before = 0.0;
    for (line, line_length) in linestring.lines().zip(line_lengths.iter()) {
        // degenerate lines have no locatable point, treat them as their start
        let line_ratio = line.line_locate_point(point).unwrap_or(0.0);
        let projected = line.start + line.delta() * line_ratio;
        let distance = Euclidean.distance(Point::from(projected), *point);
        if best.map(|b| distance < b.distance).unwrap_or(true) {
            let ratio = if total_length > 0.0 {
                (length_before + line_length * line_ratio) / total_length
            } else {
                0.0
            };
            best = Some(Projection {
                distance,
                ratio,
                projected: Coordinate::from(projected),
            });
        }
        length_before += line_length;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn stop(name: &str, lat: f64, lng: f64, path_next: Vec<Coordinate>) -> Stop {
        Stop {
            name: name.to_string(),
            lat,
            lng,
            time: NaiveTime::MIN,
            path_next,
        }
    }

    #[test]
    fn test_route_length_follows_traced_path() {
        let straight = vec![stop("A", 0.0, 0.0, vec![]), stop("B", 0.0, 1.0, vec![])];
        let detour = vec![
            stop("A", 0.0, 0.0, vec![Coordinate::new(1.0, 0.5)]),
            stop("B", 0.0, 1.0, vec![]),
        ];
        let straight_m = route_length_meters(&straight);
        // one degree of longitude on the equator is roughly 111km
        assert!((straight_m / 1000.0 - 111.2).abs() < 0.5, "{straight_m}");
        assert!(route_length_meters(&detour) > straight_m);
    }

    #[test]
    fn test_project_onto_linestring_midpoint() {
        let line = segment_linestring(&stop("A", 0.0, 0.0, vec![]), &stop("B", 0.0, 1.0, vec![]));
        let projection = project_onto_linestring(&line, &Point::new(0.5, 0.1))
            .expect("projection should exist");
        assert!((projection.ratio - 0.5).abs() < 1e-9);
        assert!((projection.distance - 0.1).abs() < 1e-9);
        assert!((projection.projected.lng - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_beyond_the_end() {
        let line = segment_linestring(&stop("A", 0.0, 0.0, vec![]), &stop("B", 0.0, 1.0, vec![]));
        let projection = project_onto_linestring(&line, &Point::new(2.0, 0.0))
            .expect("projection should exist");
        assert!((projection.ratio - 1.0).abs() < 1e-9);
    }
}
