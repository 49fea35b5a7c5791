// Loading of routing instances from delimited text files

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::models::{Location, Node};

/// Loads nodes from a delimited text file with the columns
/// `ID, X, Y, Demanda` (comma, semicolon or whitespace separated).
/// The first line is skipped when it is a header. Node 0 must be the
/// depot; validation of demands happens in `Instance::new`.
pub fn load_nodes<P: AsRef<Path>>(path: P) -> io::Result<Vec<Node>> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut nodes = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() < 4 {
            return Err(malformed(line_no, "expected 4 columns: ID, X, Y, Demanda"));
        }

        // A non-numeric first field on the first line is the header
        let id = match fields[0].parse::<usize>() {
            Ok(id) => id,
            Err(_) if line_no == 0 => continue,
            Err(_) => return Err(malformed(line_no, "node id is not an integer")),
        };

        let x = parse_number(fields[1], line_no, "X")?;
        let y = parse_number(fields[2], line_no, "Y")?;
        let demand = parse_number(fields[3], line_no, "Demanda")?;

        nodes.push(Node::new(id, Location::new(x, y), demand));
    }

    if nodes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "instance file contains no node rows",
        ));
    }

    Ok(nodes)
}

fn parse_number(field: &str, line_no: usize, column: &str) -> io::Result<f64> {
    field
        .parse::<f64>()
        .map_err(|_| malformed(line_no, &format!("column {} is not a number", column)))
}

fn malformed(line_no: usize, message: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("line {}: {}", line_no + 1, message),
    )
}
