use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use crate::graph::{GraphEdgeEditing, GraphNew, WeightedEdge};

pub type Result<T> = std::io::Result<T>;

/// Reads a graph from a line-oriented, comma-separated edge list. Each line
/// is `point1,point2,weight` (all integers, weight non-negative) and inserts
/// the undirected edge in both directions; a duplicate pair overwrites the
/// earlier weight (last write wins). Blank lines and lines starting with `#`
/// are skipped.
pub trait GraphEdgeListReader: Sized {
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<G> GraphEdgeListReader for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph = Self::new();
        for edge in EdgeListReader::new(reader) {
            let WeightedEdge(u, v, w) = edge?;
            graph.insert_edge(u, v, w);
        }
        Ok(graph)
    }

    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = File::open(path)?;
        let buf_reader = BufReader::new(reader);
        Self::try_read_edge_list(buf_reader)
    }
}

pub struct EdgeListReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<WeightedEdge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().trim().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

impl<R: BufRead> EdgeListReader<R> {
    fn next_content_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() || line.starts_with('#') => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<WeightedEdge>> {
        let line = self.next_content_line()?;
        if let Some(line) = line {
            let mut parts = line.split(',');

            let from = parse_next_value!(parts, "First town");
            let dest = parse_next_value!(parts, "Second town");
            let weight = parse_next_value!(parts, "Edge weight");

            raise_error_unless!(
                parts.next().is_none(),
                ErrorKind::InvalidData,
                "Trailing fields after edge weight; expected end of line"
            );

            Ok(Some(WeightedEdge(from, dest, weight)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::*;
    use itertools::Itertools;
    use std::io::Write;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "# TEST\n1,2,5\n\n3,4,6\n1,5,7";
        let buf_reader = std::io::BufReader::new(DEMO_FILE.as_bytes());

        let edges: Vec<_> = EdgeListReader::new(buf_reader).try_collect().unwrap();
        assert_eq!(
            edges,
            vec![
                WeightedEdge(1, 2, 5),
                WeightedEdge(3, 4, 6),
                WeightedEdge(1, 5, 7)
            ]
        );
    }

    #[test]
    fn inserts_both_directions() {
        let graph =
            AdjMap::try_read_edge_list(std::io::BufReader::new("1,2,5\n3,4,6\n1,5,7".as_bytes()))
                .unwrap();

        assert_eq!(graph.number_of_towns(), 5);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.weight_between(2, 1), Some(5));
        assert_eq!(graph.weight_between(5, 1), Some(7));
        assert_eq!(graph.weight_between(4, 3), Some(6));
    }

    #[test]
    fn duplicate_lines_last_write_wins() {
        let graph =
            AdjMap::try_read_edge_list(std::io::BufReader::new("1,2,5\n2,1,8".as_bytes())).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_between(1, 2), Some(8));
        assert_eq!(graph.weight_between(2, 1), Some(8));
    }

    #[test]
    fn rejects_missing_field() {
        let result = AdjMap::try_read_edge_list(std::io::BufReader::new("1,2".as_bytes()));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_trailing_field() {
        let result = AdjMap::try_read_edge_list(std::io::BufReader::new("1,2,5,9".as_bytes()));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_non_integer_value() {
        let result = AdjMap::try_read_edge_list(std::io::BufReader::new("1,two,5".as_bytes()));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_negative_weight() {
        let result = AdjMap::try_read_edge_list(std::io::BufReader::new("1,2,-5".as_bytes()));
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1,2,5\n3,4,6\n1,5,7").unwrap();

        let graph = AdjMap::try_read_edge_list_file(file.path()).unwrap();
        assert_eq!(graph.sorted_towns(), vec![1, 2, 3, 4, 5]);
        assert_eq!(graph.weight_between(1, 5), Some(7));
    }
}
