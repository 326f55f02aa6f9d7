use crate::error::{Error, Result};

/// A rectangular grid addressed by `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map<T> {
    pub number_of_rows: i32,
    pub number_of_columns: i32,
    row_data: Vec<Vec<T>>,
}

fn pad(s: &str, n: usize) -> String {
    let mut rv = s.to_string();
    while rv.chars().count() < n {
        rv += " ";
    }
    rv
}

impl Map<char> {
    /// Loads a character grid, padding ragged rows on the right with blanks.
    pub fn from_ragged(s: &str) -> Result<Map<char>> {
        let lines: Vec<&str> = s.lines().map(|x| x.trim_end_matches('\r')).collect();
        let max_line_len = lines.iter().map(|x| x.chars().count()).max().unwrap_or(0);

        if max_line_len == 0 {
            return Err(Error::MalformedNet("net is empty".to_string()));
        }

        let padded: String = itertools::intersperse(
            lines.iter().map(|x| pad(x, max_line_len)),
            "\n".to_string(),
        )
        .collect();

        Map::from_string(&padded)
    }

    fn from_string(s: &str) -> Result<Map<char>> {
        let rows: Vec<&str> = s.split('\n').collect();
        let number_of_rows = rows.len();
        let number_of_cols = rows[0].chars().count();

        if !(rows.iter().all(|s| s.chars().count() == number_of_cols)) {
            return Err(Error::MalformedNet(
                "rows are not all the same length".to_string(),
            ));
        }

        let row_data = rows.iter().map(|row| row.chars().collect()).collect();

        Ok(Map {
            number_of_rows: to_i32(number_of_rows)?,
            number_of_columns: to_i32(number_of_cols)?,
            row_data,
        })
    }
}

fn to_i32(n: usize) -> Result<i32> {
    n.try_into()
        .map_err(|_| Error::MalformedNet(format!("dimension {} is too large", n)))
}

impl<T> Map<T>
where
    T: Clone,
{
    pub fn new(number_of_columns: i32, number_of_rows: i32, starting_value: &T) -> Map<T> {
        let row_data = (0..number_of_rows)
            .map(|_| {
                (0..number_of_columns)
                    .map(|_| starting_value.clone())
                    .collect()
            })
            .collect();
        Map {
            number_of_rows,
            number_of_columns,
            row_data,
        }
    }

    pub fn at(&self, (col, row): (i32, i32)) -> Option<&T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&self.row_data[row as usize][col as usize])
    }

    pub fn at_mut(&mut self, (col, row): (i32, i32)) -> Option<&mut T> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(&mut self.row_data[row as usize][col as usize])
    }

    pub fn in_bounds(&self, (col, row): (i32, i32)) -> bool {
        !(row < 0 || row >= self.number_of_rows || col < 0 || col >= self.number_of_columns)
    }

    /// Copies out the `size` block whose top-left corner is `top_left`.
    /// Cells outside the grid are skipped.
    pub fn submap_values(&self, top_left: (i32, i32), size: (i32, i32)) -> Vec<T> {
        let (x0, y0) = top_left;
        let mut rv = Vec::new();
        for y in y0..y0 + size.1 {
            for x in x0..x0 + size.0 {
                if let Some(v) = self.at((x, y)) {
                    rv.push(v.clone());
                }
            }
        }
        rv
    }

    pub fn values(&self) -> Vec<T> {
        self.row_data.iter().flatten().cloned().collect()
    }

    pub fn indexed_for_each<F>(&self, mut f: F)
    where
        F: FnMut((i32, i32), &T),
    {
        for (y, row) in self.row_data.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                f((x as i32, y as i32), value);
            }
        }
    }

    pub fn show<F>(&self, format_cell: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut rv: Vec<String> = Vec::new();

        for row in &self.row_data {
            for col in row {
                rv.push(format_cell(col));
            }
            rv.push("\n".to_string());
        }

        rv.join("")
    }
}
