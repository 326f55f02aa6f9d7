use crate::direction::{Direction, Turn};
use crate::error::{Error, Result};
use crate::instructions::Instruction;
use crate::net::{CellId, FaceId, Neighbour, Net, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// The next cell is a wall; the rest of the current move is dropped.
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub cell: CellId,
    pub heading: Direction,
}

/// Heading after leaving face `from` through its `heading` side: straight
/// away from the side the seam arrives on.
fn arrival_heading(net: &Net, from: FaceId, heading: Direction) -> Direction {
    match net.face(from).neighbours[heading] {
        Some(Neighbour { side, .. }) => side.flipped(),
        None => heading,
    }
}

impl Walker {
    pub fn new(cell: CellId, heading: Direction) -> Walker {
        Walker { cell, heading }
    }

    /// Leftmost open cell on the top row of the first face, facing right.
    pub fn start(net: &Net) -> Result<Walker> {
        let face = net
            .faces()
            .first()
            .ok_or_else(|| Error::MalformedNet("net has no faces".to_string()))?;

        (0..net.side_length())
            .map(|col| face.cell(0, col))
            .find(|&cell| net.cell(cell).tile == Tile::Open)
            .map(|cell| Walker::new(cell, Direction::Right))
            .ok_or_else(|| {
                Error::MalformedNet("no open cell on the top row of the first face".to_string())
            })
    }

    pub fn advance(&mut self, net: &Net) -> Step {
        let here = net.cell(self.cell);
        let Some(next) = here.neighbours[self.heading] else {
            return Step::Blocked;
        };
        let there = net.cell(next);

        if there.tile == Tile::Wall {
            return Step::Blocked;
        }
        if there.face != here.face {
            self.heading = arrival_heading(net, here.face, self.heading);
        }
        self.cell = next;
        Step::Moved
    }

    pub fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turn(turn);
    }

    pub fn follow(&mut self, net: &Net, instructions: &[Instruction]) {
        for ins in instructions {
            match *ins {
                Instruction::StepForward(n) => {
                    for _ in 0..n {
                        if self.advance(net) == Step::Blocked {
                            break;
                        }
                    }
                }
                Instruction::Turn(turn) => self.turn(turn),
            }
        }
    }

    pub fn password(&self, net: &Net) -> i32 {
        let cell = net.cell(self.cell);
        1000 * (cell.row + 1) + 4 * (cell.col + 1) + self.heading.to_i32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::{self, Wrap};
    use crate::grid::Map;
    use crate::Scenario;

    const SAMPLE: &str = include_str!("../tests/data/sample.txt");

    fn sample(wrap: Wrap) -> (Net, Vec<Instruction>) {
        let scenario = Scenario::parse(SAMPLE).unwrap();
        let mut net = Net::build(&scenario.map).unwrap();
        fold::wrap(&mut net, wrap).unwrap();
        (net, scenario.instructions)
    }

    fn at(net: &Net, walker: &Walker) -> (i32, i32) {
        let cell = net.cell(walker.cell);
        (cell.row, cell.col)
    }

    #[test]
    fn starts_top_left_facing_right() {
        let (net, _) = sample(Wrap::Cube);
        let walker = Walker::start(&net).unwrap();
        assert_eq!(at(&net, &walker), (0, 8));
        assert_eq!(walker.heading, Direction::Right);
    }

    #[test]
    fn stops_in_front_of_wall() {
        let (net, _) = sample(Wrap::Cube);
        let mut walker = Walker::start(&net).unwrap();
        walker.follow(&net, &[Instruction::StepForward(10)]);
        assert_eq!(at(&net, &walker), (0, 10));
        assert_eq!(walker.advance(&net), Step::Blocked);
        assert_eq!(at(&net, &walker), (0, 10));
    }

    #[test]
    fn crossing_fold_turns_heading() {
        let (net, _) = sample(Wrap::Cube);
        let mut walker = Walker::new(net.face(3).cell(1, 3), Direction::Right);
        assert_eq!(walker.advance(&net), Step::Moved);
        assert_eq!(at(&net, &walker), (8, 14));
        assert_eq!(walker.heading, Direction::Down);
    }

    #[test]
    fn crossing_flat_seam_keeps_heading() {
        let (net, _) = sample(Wrap::Cube);
        let mut walker = Walker::new(net.face(0).cell(3, 0), Direction::Down);
        assert_eq!(walker.advance(&net), Step::Moved);
        assert_eq!(at(&net, &walker), (4, 8));
        assert_eq!(walker.heading, Direction::Down);
    }

    #[test]
    fn crossing_wrapped_seam_keeps_heading() {
        let (net, _) = sample(Wrap::Flat);
        let mut walker = Walker::new(net.face(0).cell(1, 3), Direction::Right);
        assert_eq!(walker.advance(&net), Step::Moved);
        assert_eq!(at(&net, &walker), (1, 8));
        assert_eq!(walker.heading, Direction::Right);
    }

    #[test]
    fn flat_seam_beside_wrapped_seam_keeps_heading() {
        // Faces 4 and 5 touch twice when wrapping flat: side by side and
        // around the row.
        let (net, _) = sample(Wrap::Flat);
        assert_eq!(net.face(4).neighbour(Direction::Right), Some(5));
        assert_eq!(net.face(4).neighbour(Direction::Left), Some(5));

        let mut walker = Walker::new(net.face(4).cell(1, 3), Direction::Right);
        assert_eq!(walker.advance(&net), Step::Moved);
        assert_eq!(at(&net, &walker), (9, 12));
        assert_eq!(walker.heading, Direction::Right);

        walker.turn(Turn::Right);
        walker.turn(Turn::Right);
        assert_eq!(walker.advance(&net), Step::Moved);
        assert_eq!(at(&net, &walker), (9, 11));
        assert_eq!(walker.heading, Direction::Left);
    }

    #[test]
    fn turning() {
        let mut walker = Walker::new(0, Direction::Up);
        walker.turn(Turn::Right);
        assert_eq!(walker.heading, Direction::Right);
        walker.turn(Turn::Left);
        walker.turn(Turn::Left);
        assert_eq!(walker.heading, Direction::Up);
    }

    #[test]
    fn sample_passwords() {
        let (net, instructions) = sample(Wrap::Cube);
        let mut walker = Walker::start(&net).unwrap();
        walker.follow(&net, &instructions);
        assert_eq!(at(&net, &walker), (4, 6));
        assert_eq!(walker.heading, Direction::Up);
        assert_eq!(walker.password(&net), 5031);

        let (net, instructions) = sample(Wrap::Flat);
        let mut walker = Walker::start(&net).unwrap();
        walker.follow(&net, &instructions);
        assert_eq!(walker.password(&net), 6032);
    }

    #[test]
    fn walled_top_row_has_no_start() {
        let mut net = Net::build(&Map::from_ragged("#\n....\n.").unwrap()).unwrap();
        fold::wrap(&mut net, Wrap::Cube).unwrap();
        assert!(matches!(Walker::start(&net), Err(Error::MalformedNet(_))));
    }
}
