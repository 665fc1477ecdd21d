// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wall end adjustment at junctions
//!
//! Walls built with [`EndCapPolicy::NeighborAdjusted`](super::EndCapPolicy) end
//! exactly on their centerline endpoints. Where two walls share an endpoint,
//! the end of each is moved along its run axis by half the thickness of the
//! wall it meets, so the two boxes butt against each other instead of leaving
//! a notch at the corner.
//!
//! Matching always reads the original input points, never adjusted vertex
//! positions, and the whole pass is planned before anything is moved. The
//! result is therefore independent of wall order.

use super::Cuboid;
use nalgebra::Point3;
use tracing::debug;

/// Another wall touching a wall at one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Index of the touching wall in the wall list.
    pub index: usize,
    /// The touching wall's endpoint at the junction.
    pub their_point: Point3<f64>,
    /// This wall's endpoint at the junction.
    pub my_point: Point3<f64>,
    /// This wall's opposite endpoint.
    pub my_other_point: Point3<f64>,
}

/// Planned run-axis move of a set of vertices of one wall.
#[derive(Debug, Clone, PartialEq)]
pub struct EndShift {
    pub wall: usize,
    pub vertices: Vec<usize>,
    pub delta: f64,
}

fn same_xy(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    a.x == b.x && a.y == b.y
}

/// Every other wall sharing an exact endpoint (x and y) with wall `current`.
///
/// A wall contributes at most one neighbour record; endpoint pairs are tried
/// start/start, start/end, end/start, end/end and the first match wins.
pub fn find_neighbours(cuboids: &[Cuboid], current: usize) -> Vec<Neighbour> {
    let (my_start, my_end) = cuboids[current].endpoints();
    let mut neighbours = Vec::new();

    for (index, other) in cuboids.iter().enumerate() {
        if index == current {
            continue;
        }
        let (their_start, their_end) = other.endpoints();
        let pairs = [
            (my_start, their_start, my_end),
            (my_start, their_end, my_end),
            (my_end, their_start, my_start),
            (my_end, their_end, my_start),
        ];
        if let Some(&(my_point, their_point, my_other_point)) =
            pairs.iter().find(|(mine, theirs, _)| same_xy(mine, theirs))
        {
            neighbours.push(Neighbour {
                index,
                their_point,
                my_point,
                my_other_point,
            });
        }
    }

    neighbours
}

/// Neighbours that wall `current` is actually adjusted against.
///
/// A single neighbour is always used. With several, a neighbour is kept only
/// if it is the sole wall at its junction point and runs perpendicular to
/// `current`. Junctions of three or more walls are left alone.
pub fn junction_neighbours(cuboids: &[Cuboid], current: usize) -> Vec<Neighbour> {
    let neighbours = find_neighbours(cuboids, current);
    if neighbours.len() <= 1 {
        return neighbours;
    }

    let axis_is_y = cuboids[current].axis_is_y();
    neighbours
        .iter()
        .filter(|neighbour| {
            let sharing = neighbours
                .iter()
                .filter(|other| same_xy(&other.my_point, &neighbour.my_point))
                .count();
            sharing == 1 && cuboids[neighbour.index].axis_is_y() != axis_is_y
        })
        .copied()
        .collect()
}

/// Compute every end shift from unadjusted walls.
pub fn plan_adjustments(cuboids: &[Cuboid]) -> Vec<EndShift> {
    let mut shifts = Vec::new();

    for (wall, cuboid) in cuboids.iter().enumerate() {
        for neighbour in junction_neighbours(cuboids, wall) {
            let half = cuboids[neighbour.index].thickness() / 2.0;
            let axis = if cuboid.axis_is_y() { 1 } else { 0 };
            let at = neighbour.my_point[axis];
            let delta = if at > neighbour.my_other_point[axis] {
                half
            } else {
                -half
            };

            let vertices: Vec<usize> = cuboid
                .vertices()
                .iter()
                .enumerate()
                .filter(|(_, v)| v.position[axis] == at)
                .map(|(i, _)| i)
                .collect();

            debug!(
                wall,
                neighbour = neighbour.index,
                delta,
                moved = vertices.len(),
                "wall end adjusted"
            );
            shifts.push(EndShift {
                wall,
                vertices,
                delta,
            });
        }
    }

    shifts
}

/// Apply planned shifts along each wall's run axis.
pub fn apply_adjustments(cuboids: &mut [Cuboid], shifts: &[EndShift]) {
    for shift in shifts {
        let cuboid = &mut cuboids[shift.wall];
        let axis = if cuboid.axis_is_y() { 1 } else { 0 };
        let vertices = &mut cuboid.mesh_mut().vertices;
        for &index in &shift.vertices {
            vertices[index].position[axis] += shift.delta;
        }
    }
}

/// Plan and apply junction adjustment over all walls of a floor.
pub fn adjust_wall_ends(cuboids: &mut [Cuboid]) {
    let shifts = plan_adjustments(cuboids);
    apply_adjustments(cuboids, &shifts);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EndCapPolicy;

    fn wall(from: (f64, f64), to: (f64, f64), thickness: f64) -> Cuboid {
        let points = [
            Point3::new(from.0, from.1, 0.0),
            Point3::new(to.0, to.1, 0.0),
            Point3::new(from.0, from.1, 3.0),
            Point3::new(to.0, to.1, 3.0),
        ];
        Cuboid::from_points(&points, thickness, EndCapPolicy::NeighborAdjusted).unwrap()
    }

    fn run_extent(cuboid: &Cuboid) -> (f64, f64) {
        let axis = if cuboid.axis_is_y() { 1 } else { 0 };
        cuboid.vertices().iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v.position[axis]), hi.max(v.position[axis])),
        )
    }

    #[test]
    fn test_isolated_wall_untouched() {
        let mut walls = vec![wall((0.0, 0.0), (4.0, 0.0), 2.0)];
        let before = walls.clone();
        adjust_wall_ends(&mut walls);
        assert_eq!(walls, before);
    }

    #[test]
    fn test_corner_uses_other_wall_thickness() {
        let mut walls = vec![
            wall((0.0, 0.0), (4.0, 0.0), 2.0),
            wall((4.0, 0.0), (4.0, 3.0), 1.0),
        ];
        adjust_wall_ends(&mut walls);

        assert_eq!(run_extent(&walls[0]), (0.0, 4.5));
        assert_eq!(run_extent(&walls[1]), (-1.0, 3.0));
    }

    #[test]
    fn test_matching_ignores_height() {
        let mut walls = vec![wall((0.0, 0.0), (4.0, 0.0), 2.0)];
        let points = [
            Point3::new(4.0, 0.0, 1.0),
            Point3::new(4.0, 3.0, 1.0),
            Point3::new(4.0, 0.0, 3.0),
            Point3::new(4.0, 3.0, 3.0),
        ];
        walls.push(Cuboid::from_points(&points, 1.0, EndCapPolicy::NeighborAdjusted).unwrap());

        assert_eq!(find_neighbours(&walls, 0).len(), 1);
        assert_eq!(find_neighbours(&walls, 1)[0].my_point, points[0]);
    }

    #[test]
    fn test_u_shape_adjusts_both_ends() {
        let mut walls = vec![
            wall((0.0, 0.0), (0.0, 3.0), 1.0),
            wall((0.0, 3.0), (4.0, 3.0), 2.0),
            wall((4.0, 3.0), (4.0, 0.0), 0.5),
        ];
        adjust_wall_ends(&mut walls);

        assert_eq!(run_extent(&walls[1]), (-0.5, 4.25));
        assert_eq!(run_extent(&walls[0]), (0.0, 4.0));
        assert_eq!(run_extent(&walls[2]), (0.0, 4.0));
    }

    #[test]
    fn test_three_way_junction_left_alone() {
        let mut walls = vec![
            wall((0.0, 0.0), (4.0, 0.0), 1.0),
            wall((4.0, 0.0), (4.0, 3.0), 1.0),
            wall((4.0, 0.0), (8.0, 0.0), 1.0),
        ];
        for index in 0..walls.len() {
            assert_eq!(find_neighbours(&walls, index).len(), 2);
            assert!(junction_neighbours(&walls, index).is_empty());
        }

        let before = walls.clone();
        adjust_wall_ends(&mut walls);
        assert_eq!(walls, before);
    }

    #[test]
    fn test_single_collinear_neighbour_still_adjusts() {
        let mut walls = vec![
            wall((0.0, 0.0), (4.0, 0.0), 1.0),
            wall((4.0, 0.0), (8.0, 0.0), 3.0),
        ];
        adjust_wall_ends(&mut walls);

        assert_eq!(run_extent(&walls[0]), (0.0, 5.5));
        assert_eq!(run_extent(&walls[1]), (3.5, 8.0));
    }

    #[test]
    fn test_parallel_neighbour_dropped_among_several() {
        // A meets collinear B at x=4 and perpendicular C at x=0
        let mut walls = vec![
            wall((0.0, 0.0), (4.0, 0.0), 2.0),
            wall((4.0, 0.0), (8.0, 0.0), 2.0),
            wall((0.0, 0.0), (0.0, 3.0), 1.0),
        ];
        assert_eq!(junction_neighbours(&walls, 0).len(), 1);
        assert_eq!(junction_neighbours(&walls, 0)[0].index, 2);

        adjust_wall_ends(&mut walls);

        assert_eq!(run_extent(&walls[0]), (-0.5, 4.0));
        assert_eq!(run_extent(&walls[1]), (3.0, 8.0));
        assert_eq!(run_extent(&walls[2]), (-1.0, 3.0));
    }

    #[test]
    fn test_only_one_record_per_neighbour() {
        // Both endpoints coincide with the other wall's endpoints.
        let walls = vec![
            wall((0.0, 0.0), (4.0, 0.0), 1.0),
            wall((4.0, 0.0), (0.0, 0.0), 1.0),
        ];
        let neighbours = find_neighbours(&walls, 0);
        assert_eq!(neighbours.len(), 1);
        assert_eq!(neighbours[0].my_point, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(neighbours[0].their_point, Point3::new(0.0, 0.0, 3.0));
    }
}
