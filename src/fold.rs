//! Joining the face edges that the flat drawing leaves open, either by
//! folding the net into a cube or by wrapping around the drawing.

use itertools::Itertools;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::grid::Map;
use crate::net::{FaceId, Net, Seam, FACES};

/// Number of edges on a cube.
pub const CUBE_EDGES: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    /// Leaving a face continues on the next face along the same row or column.
    Flat,
    /// The net is folded into a cube.
    Cube,
}

#[derive(Debug, Clone, Copy)]
enum Rotation {
    Clockwise,
    Anticlockwise,
}

impl Rotation {
    fn apply(self, d: Direction) -> Direction {
        match self {
            Rotation::Clockwise => d.next(),
            Rotation::Anticlockwise => d.prev(),
        }
    }
}

/// Closes every open face edge of `net` and returns how many seams were added.
pub fn wrap(net: &mut Net, wrap: Wrap) -> Result<usize> {
    let joined = match wrap {
        Wrap::Flat => wrap_flat(net)?,
        Wrap::Cube => fold_cube(net)?,
    };
    net.check_closed()?;
    Ok(joined)
}

/// Looks for an L-shaped corner: `face` touches `mid` on the side one
/// rotation step from `side`, and `mid` touches some `fold` one more step
/// round. Three faces of a cube meet at that corner, so the open `side` of
/// `face` must join `fold`.
fn corner_partner(
    net: &Net,
    face: FaceId,
    side: Direction,
    rotation: Rotation,
) -> Option<(FaceId, Direction)> {
    let mid = net.face(face).neighbour(rotation.apply(side))?;
    let into_mid = net.entry_side(mid, face)?;
    let fold = net.face(mid).neighbour(rotation.apply(into_mid))?;

    if fold == face || net.entry_side(face, fold).is_some() {
        return None;
    }

    let fold_side = rotation.apply(net.entry_side(fold, mid)?);
    if net.face(fold).neighbours[fold_side].is_some() {
        return None;
    }
    Some((fold, fold_side))
}

/// Infers the seams that only exist once the net is folded, for any of the
/// eleven cube nets.
///
/// Each pass over the faces closes every corner it can; a pass that closes
/// nothing means the layout is not a cube net.
pub fn fold_cube(net: &mut Net) -> Result<usize> {
    let flat = net.edge_count();
    if flat != FACES - 1 {
        return Err(Error::Folding(format!(
            "net has {} flat seams, a cube net has {}",
            flat,
            FACES - 1
        )));
    }

    let mut unresolved = CUBE_EDGES - flat;
    let mut passes = 0;

    while unresolved > 0 {
        passes += 1;
        let before = unresolved;

        for face in 0..net.faces().len() {
            for side in Direction::all() {
                if net.face(face).neighbours[side].is_some() {
                    continue;
                }
                let partner = corner_partner(net, face, side, Rotation::Clockwise)
                    .or_else(|| corner_partner(net, face, side, Rotation::Anticlockwise));
                if let Some((fold, fold_side)) = partner {
                    net.connect_sides(face, fold, side, fold_side, Seam::Folded)?;
                    unresolved -= 1;
                }
            }
        }

        if unresolved == before || passes > CUBE_EDGES {
            return Err(Error::Folding(format!(
                "{} edges still open after {} passes",
                unresolved, passes
            )));
        }
    }

    for face in net.faces() {
        let others: Vec<FaceId> = Direction::all()
            .into_iter()
            .filter_map(|d| face.neighbour(d))
            .unique()
            .collect();
        if others.len() != 4 || others.contains(&face.id) {
            return Err(Error::Folding(format!(
                "face {} ends up touching faces {:?}",
                face.id, others
            )));
        }
    }

    Ok(CUBE_EDGES - flat)
}

fn next_face_along(
    layout: &Map<Option<FaceId>>,
    block: (i32, i32),
    direction: Direction,
) -> FaceId {
    let (mut i, mut j) = block;
    loop {
        i = (i + direction.dx()).rem_euclid(layout.number_of_columns);
        j = (j + direction.dy()).rem_euclid(layout.number_of_rows);
        if let Some(Some(id)) = layout.at((i, j)) {
            return *id;
        }
    }
}

/// Joins each open edge to the nearest face further along the same row or
/// column, cycling round the drawing. A face alone in its row or column
/// wraps onto itself.
pub fn wrap_flat(net: &mut Net) -> Result<usize> {
    let mut joined = 0;

    for face in 0..net.faces().len() {
        for side in Direction::all() {
            if net.face(face).neighbours[side].is_some() {
                continue;
            }
            let target = next_face_along(net.layout(), net.face(face).block, side);
            net.connect_sides(face, target, side, side.flipped(), Seam::Wrapped)?;
            joined += 1;
        }
    }

    Ok(joined)
}
