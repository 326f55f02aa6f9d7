//! Splitting a character grid into square faces and wiring their cells.
//!
//! Faces and cells live in flat arenas owned by [`Net`] and refer to each
//! other by index, so the neighbour graph can contain cycles.

use itertools::{iproduct, Itertools};

use crate::direction::{Direction, PerSide};
use crate::error::{Error, Result};
use crate::grid::Map;

pub type FaceId = usize;
pub type CellId = usize;

/// Number of faces on a cube.
pub const FACES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// How two face edges came to be joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seam {
    /// The faces sit side by side in the drawing.
    Flat,
    /// Inferred by folding the net into a cube.
    Folded,
    /// Flat wrap-around to the next face along the same row or column.
    Wrapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub face: FaceId,
    /// Side of `face` that this seam arrives on.
    pub side: Direction,
    pub seam: Seam,
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub face: FaceId,
    /// Row in the full grid, zero-based.
    pub row: i32,
    /// Column in the full grid, zero-based.
    pub col: i32,
    pub tile: Tile,
    pub neighbours: PerSide<Option<CellId>>,
}

#[derive(Debug, Clone)]
pub struct Face {
    pub id: FaceId,
    pub origin_row: i32,
    pub origin_col: i32,
    /// `(col, row)` of this face in the block grid.
    pub block: (i32, i32),
    cells: Vec<Vec<CellId>>,
    pub neighbours: PerSide<Option<Neighbour>>,
}

impl Face {
    /// Cell at local `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> CellId {
        self.cells[row][col]
    }

    pub fn neighbour(&self, side: Direction) -> Option<FaceId> {
        self.neighbours[side].map(|n| n.face)
    }

    /// The side of this face whose neighbour is `source`. Only meaningful
    /// when the two faces share a single seam, as on a cube.
    pub fn entry_side(&self, source: FaceId) -> Option<Direction> {
        self.neighbours
            .iter()
            .find(|(_, n)| n.map(|n| n.face) == Some(source))
            .map(|(d, _)| d)
    }

    /// Cells along `side`, in the order met when walking the face border
    /// clockwise.
    pub fn side_clockwise(&self, side: Direction) -> Vec<CellId> {
        let last = self.cells.len() - 1;
        (0..=last)
            .map(|i| match side {
                Direction::Right => self.cells[i][last],
                Direction::Down => self.cells[last][last - i],
                Direction::Left => self.cells[last - i][0],
                Direction::Up => self.cells[0][i],
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Net {
    side_length: usize,
    faces: Vec<Face>,
    cells: Vec<Cell>,
    layout: Map<Option<FaceId>>,
}

fn malformed(s: impl Into<String>) -> Error {
    Error::MalformedNet(s.into())
}

fn side_length_for(cell_count: usize) -> Result<usize> {
    if cell_count == 0 || cell_count % FACES != 0 {
        return Err(malformed(format!(
            "{} cells cannot form {} equal faces",
            cell_count, FACES
        )));
    }
    let area = cell_count / FACES;
    match (1..=area).find(|n| n * n >= area) {
        Some(n) if n * n == area => Ok(n),
        _ => Err(malformed(format!("face area {} is not a square", area))),
    }
}

impl Net {
    /// Partitions `map` into faces and wires every seam visible in the
    /// flat drawing. Face ids follow row-major discovery order.
    pub fn build(map: &Map<char>) -> Result<Net> {
        let values = map.values();
        if let Some(ch) = values.iter().find(|c| !matches!(**c, ' ' | '.' | '#')) {
            return Err(malformed(format!("unexpected character {:?}", ch)));
        }

        let cell_count = values.iter().filter(|c| **c != ' ').count();
        let side_length = side_length_for(cell_count)?;
        let n = side_length as i32;

        if map.number_of_rows % n != 0 || map.number_of_columns % n != 0 {
            return Err(malformed(format!(
                "{}x{} grid is not made of {}x{} blocks",
                map.number_of_columns, map.number_of_rows, n, n
            )));
        }

        let faces_wide = map.number_of_columns / n;
        let faces_tall = map.number_of_rows / n;

        let mut net = Net {
            side_length,
            faces: Vec::new(),
            cells: Vec::new(),
            layout: Map::new(faces_wide, faces_tall, &None),
        };

        for (j, i) in iproduct!(0..faces_tall, 0..faces_wide) {
            let origin = (i * n, j * n);
            let block = map.submap_values(origin, (n, n));
            let blanks = block.iter().filter(|c| **c == ' ').count();
            if blanks == block.len() {
                continue;
            }
            if blanks != 0 {
                return Err(malformed(format!(
                    "block at row {} col {} is partially blank",
                    origin.1, origin.0
                )));
            }
            let id = net.add_face(origin, (i, j), &block);
            if let Some(slot) = net.layout.at_mut((i, j)) {
                *slot = Some(id);
            }
        }

        if net.faces.len() != FACES {
            return Err(malformed(format!("found {} faces", net.faces.len())));
        }

        net.wire_faces();
        net.connect_flat_seams()?;

        Ok(net)
    }

    fn add_face(&mut self, origin: (i32, i32), block: (i32, i32), tiles: &[char]) -> FaceId {
        let id = self.faces.len();
        let n = self.side_length;
        let mut cells = Vec::with_capacity(n);

        for r in 0..n {
            let mut row = Vec::with_capacity(n);
            for c in 0..n {
                row.push(self.cells.len());
                self.cells.push(Cell {
                    face: id,
                    row: origin.1 + r as i32,
                    col: origin.0 + c as i32,
                    tile: if tiles[r * n + c] == '#' {
                        Tile::Wall
                    } else {
                        Tile::Open
                    },
                    neighbours: PerSide::default(),
                });
            }
            cells.push(row);
        }

        self.faces.push(Face {
            id,
            origin_row: origin.1,
            origin_col: origin.0,
            block,
            cells,
            neighbours: PerSide::default(),
        });
        id
    }

    fn link_cells(&mut self, a: CellId, side_a: Direction, b: CellId, side_b: Direction) {
        self.cells[a].neighbours[side_a] = Some(b);
        self.cells[b].neighbours[side_b] = Some(a);
    }

    fn wire_faces(&mut self) {
        let n = self.side_length;
        let mut links = Vec::new();

        for face in &self.faces {
            for (r, c) in iproduct!(0..n, 0..n) {
                if c + 1 < n {
                    links.push((face.cells[r][c], Direction::Right, face.cells[r][c + 1]));
                }
                if r + 1 < n {
                    links.push((face.cells[r][c], Direction::Down, face.cells[r + 1][c]));
                }
            }
        }

        for (a, d, b) in links {
            self.link_cells(a, d, b, d.flipped());
        }
    }

    fn connect_flat_seams(&mut self) -> Result<()> {
        let mut seams = Vec::new();

        self.layout.indexed_for_each(|p, v| {
            if let Some(a) = v {
                for d in [Direction::Right, Direction::Down] {
                    if let Some(Some(b)) = self.layout.at(d.step(p)) {
                        seams.push((*a, *b, d));
                    }
                }
            }
        });

        for (a, b, d) in seams {
            self.connect_sides(a, b, d, d.flipped(), Seam::Flat)?;
        }
        Ok(())
    }

    /// Joins `side_a` of face `a` to `side_b` of face `b`.
    ///
    /// Both borders are read clockwise, so the same physical edge runs in
    /// opposite directions on the two faces and cells pair up as `i` with
    /// `N - 1 - i`. Across a flat seam this is the same scan order on both
    /// sides of the line; across a fold it is the mirrored order.
    pub fn connect_sides(
        &mut self,
        a: FaceId,
        b: FaceId,
        side_a: Direction,
        side_b: Direction,
        seam: Seam,
    ) -> Result<()> {
        if self.faces[a].neighbours[side_a].is_some() || self.faces[b].neighbours[side_b].is_some()
        {
            return Err(Error::Folding(format!(
                "seam between face {} {:?} and face {} {:?} is already taken",
                a, side_a, b, side_b
            )));
        }

        let edge_a = self.faces[a].side_clockwise(side_a);
        let edge_b = self.faces[b].side_clockwise(side_b);
        for (&cell_a, &cell_b) in edge_a.iter().zip(edge_b.iter().rev()) {
            self.link_cells(cell_a, side_a, cell_b, side_b);
        }

        self.faces[a].neighbours[side_a] = Some(Neighbour {
            face: b,
            side: side_b,
            seam,
        });
        self.faces[b].neighbours[side_b] = Some(Neighbour {
            face: a,
            side: side_a,
            seam,
        });
        Ok(())
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id]
    }

    /// Face id per block of the flat drawing.
    pub fn layout(&self) -> &Map<Option<FaceId>> {
        &self.layout
    }

    pub fn entry_side(&self, face: FaceId, source: FaceId) -> Option<Direction> {
        self.faces[face].entry_side(source)
    }

    /// Number of joined face edges, counting each seam once.
    pub fn edge_count(&self) -> usize {
        let slots: usize = self
            .faces
            .iter()
            .map(|f| f.neighbours.iter().filter(|(_, n)| n.is_some()).count())
            .sum();
        slots / 2
    }

    /// Fails unless every face and every cell has all four neighbours.
    pub fn check_closed(&self) -> Result<()> {
        for face in &self.faces {
            for (d, n) in face.neighbours.iter() {
                if n.is_none() {
                    return Err(Error::Folding(format!(
                        "face {} has no neighbour to the {:?}",
                        face.id, d
                    )));
                }
            }
        }
        if let Some(cell) = self
            .cells
            .iter()
            .find(|c| c.neighbours.iter().any(|(_, n)| n.is_none()))
        {
            return Err(Error::Folding(format!(
                "cell at row {} col {} is not fully wired",
                cell.row, cell.col
            )));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.faces
            .iter()
            .map(|f| {
                let sides = f
                    .neighbours
                    .iter()
                    .map(|(d, n)| match n {
                        Some(Neighbour { face, seam, .. }) => {
                            format!("{:?}={}/{:?}", d, face, seam)
                        }
                        None => format!("{:?}=-", d),
                    })
                    .join(" ");
                format!(
                    "face {} at row {} col {}: {}",
                    f.id, f.origin_row, f.origin_col, sides
                )
            })
            .join("\n")
    }
}
