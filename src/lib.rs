//! Walking the surface of a cube given as a flat net of six square faces.
//!
//! The net is split into faces ([`net`]), the edges that only meet once the
//! net is folded are inferred ([`fold`]), and a [`walker::Walker`] follows a
//! path of step counts and turns across the seams.

pub mod direction;
pub mod error;
pub mod fold;
pub mod grid;
pub mod instructions;
pub mod net;
pub mod walker;

pub use error::{Error, Result};
pub use fold::Wrap;

use grid::Map;
use instructions::{parse_path, Instruction};
use net::Net;
use walker::Walker;

/// Puzzle input: the drawing of the net and the path to follow.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub map: Map<char>,
    pub instructions: Vec<Instruction>,
}

impl Scenario {
    /// Splits the input at the first blank line into net and path.
    pub fn parse(s: &str) -> Result<Scenario> {
        let s = s.replace("\r\n", "\n");
        let (net, path) = s
            .trim_start_matches('\n')
            .split_once("\n\n")
            .ok_or_else(|| {
                Error::InstructionSyntax("no blank line between net and path".to_string())
            })?;

        Ok(Scenario {
            map: Map::from_ragged(net)?,
            instructions: parse_path(path)?,
        })
    }

    /// Builds the net and closes it according to `wrap`.
    pub fn surface(&self, wrap: Wrap) -> Result<Net> {
        let mut net = Net::build(&self.map)?;
        fold::wrap(&mut net, wrap)?;
        Ok(net)
    }

    /// Walks the path across an already closed `net` from its start cell and
    /// returns the final password.
    pub fn walk(&self, net: &Net) -> Result<i32> {
        let mut walker = Walker::start(net)?;
        walker.follow(net, &self.instructions);
        Ok(walker.password(net))
    }

    pub fn password(&self, wrap: Wrap) -> Result<i32> {
        self.walk(&self.surface(wrap)?)
    }
}

pub fn solve(input: &str, wrap: Wrap) -> Result<i32> {
    Scenario::parse(input)?.password(wrap)
}
