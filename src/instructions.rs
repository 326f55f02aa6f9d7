use once_cell::sync::Lazy;
use regex::Regex;

use crate::direction::Turn;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    StepForward(usize),
    Turn(Turn),
}

static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)(?P<count>[0-9]+)|(?P<turn>[LR])|(?P<other>.)")
        .expect("token pattern compiles")
});

fn syntax_error(s: impl Into<String>) -> Error {
    Error::InstructionSyntax(s.into())
}

/// Tokenizes a path such as `10R5L5R10L4R5L5`.
///
/// The path must open with a step count; counts and turns then alternate,
/// and a trailing turn with no count after it is allowed.
pub fn parse_path(s: &str) -> Result<Vec<Instruction>> {
    let path = s.trim();
    if path.is_empty() {
        return Err(syntax_error("empty instruction list"));
    }

    let mut instructions = Vec::new();
    let mut want_count = true;

    for caps in TOKEN.captures_iter(path) {
        if let Some(count) = caps.name("count") {
            let n = count.as_str().parse().map_err(|e| {
                syntax_error(format!("step count {}: {}", count.as_str(), e))
            })?;
            instructions.push(Instruction::StepForward(n));
            want_count = false;
        } else if let Some(turn) = caps.name("turn") {
            if want_count {
                return Err(syntax_error(format!(
                    "turn at offset {} has no step count before it",
                    turn.start()
                )));
            }
            instructions.push(Instruction::Turn(if turn.as_str() == "L" {
                Turn::Left
            } else {
                Turn::Right
            }));
            want_count = true;
        } else if let Some(other) = caps.name("other") {
            return Err(syntax_error(format!(
                "unexpected character {:?} at offset {}",
                other.as_str(),
                other.start()
            )));
        }
    }

    Ok(instructions)
}
