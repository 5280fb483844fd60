//! Grid map: a fixed occupancy grid plus the world size of one cell.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ConfigError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' | '1' => Some(Cell::Wall),
            ' ' | '.' | '0' => Some(Cell::Open),
            _ => None,
        }
    }
}

/// The dungeon used when no map file is given.
pub const REFERENCE_MAP: &str = "\
#########
#.......#
#.#.#...#
#.#.#...#
#.......#
#########";

/// Row-major, immutable once built.
#[derive(Debug, Clone)]
pub struct GridMap {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    tile_size: f32,
}

impl GridMap {
    pub fn new(rows: Vec<Vec<Cell>>, tile_size: f32) -> Result<Self, ConfigError> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(ConfigError::NotPositive { field: "tile_size", value: tile_size });
        }
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(ConfigError::EmptyMap);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(ConfigError::RaggedRow { row, expected: width, found: r.len() });
            }
            cells.extend(r);
        }
        Ok(Self { cells, width, height, tile_size })
    }

    /// Parses `#`/`1` as walls and space, `.` or `0` as open floor.
    pub fn parse(src: &str, tile_size: f32) -> Result<Self, ConfigError> {
        let mut rows = Vec::new();
        for (row, line) in src.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let mut r = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(ConfigError::UnknownGlyph { glyph, row, col })?;
                r.push(cell);
            }
            rows.push(r);
        }
        Self::new(rows, tile_size)
    }

    pub fn reference(tile_size: f32) -> Result<Self, ConfigError> {
        Self::parse(REFERENCE_MAP, tile_size)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Cell by grid coordinates, `None` outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Cell under a world position. `None` means out of bounds, which callers
    /// treat as solid.
    pub fn cell_at(&self, wx: f32, wy: f32) -> Option<Cell> {
        let i = (wx / self.tile_size).floor();
        let j = (wy / self.tile_size).floor();
        if i < 0.0 || j < 0.0 || !i.is_finite() || !j.is_finite() {
            return None;
        }
        self.cell(i as usize, j as usize)
    }

    #[inline]
    pub fn is_walkable(&self, wx: f32, wy: f32) -> bool {
        self.cell_at(wx, wy) == Some(Cell::Open)
    }

    /// World coordinates of a cell's centre.
    pub fn cell_center(&self, col: usize, row: usize) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        )
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

/// Reads a map file (same glyphs as [`GridMap::parse`]).
pub fn load_maze(path: impl AsRef<Path>, tile_size: f32) -> Result<GridMap, ConfigError> {
    let path = path.as_ref();
    let io_err = |source| ConfigError::Io { path: path.to_path_buf(), source };
    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let mut src = String::new();
    for line in reader.lines() {
        let line = line.map_err(io_err)?;
        src.push_str(line.trim_end_matches('\r'));
        src.push('\n');
    }
    let map = GridMap::parse(&src, tile_size)?;
    log::info!("loaded {}x{} map from {}", map.width(), map.height(), path.display());
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> GridMap {
        GridMap::reference(64.0).unwrap()
    }

    #[test]
    fn reference_map_dimensions() {
        let map = reference();
        assert_eq!(map.width(), 9);
        assert_eq!(map.height(), 6);
        assert_eq!(map.cell(0, 0), Some(Cell::Wall));
        assert_eq!(map.cell(1, 1), Some(Cell::Open));
        assert_eq!(map.cell(2, 2), Some(Cell::Wall));
    }

    #[test]
    fn cell_at_floors_world_coordinates() {
        let map = reference();
        assert_eq!(map.cell_at(96.0, 96.0), Some(Cell::Open));
        assert_eq!(map.cell_at(63.9, 96.0), Some(Cell::Wall));
        assert_eq!(map.cell_at(64.0, 64.0), Some(Cell::Open));
        assert_eq!(map.cell_at(128.0, 128.0), Some(Cell::Wall));
    }

    #[test]
    fn out_of_bounds_is_never_open() {
        let map = reference();
        assert_eq!(map.cell_at(-0.1, 10.0), None);
        assert_eq!(map.cell_at(10.0, -30.0), None);
        assert_eq!(map.cell_at(9.0 * 64.0, 10.0), None);
        assert_eq!(map.cell_at(10.0, 6.0 * 64.0), None);
        assert!(!map.is_walkable(-32.0, 96.0));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = GridMap::parse("###\n#.\n###", 64.0).unwrap_err();
        assert!(matches!(err, ConfigError::RaggedRow { row: 1, expected: 3, found: 2 }));
    }

    #[test]
    fn empty_and_bad_glyph_rejected() {
        assert!(matches!(GridMap::parse("", 64.0), Err(ConfigError::EmptyMap)));
        assert!(matches!(
            GridMap::parse("#x#", 64.0),
            Err(ConfigError::UnknownGlyph { glyph: 'x', .. })
        ));
    }

    #[test]
    fn non_positive_tile_size_rejected() {
        assert!(GridMap::reference(0.0).is_err());
        assert!(GridMap::reference(f32::NAN).is_err());
    }

    #[test]
    fn numeric_glyphs_match_hash_glyphs() {
        let a = GridMap::parse("111\n101\n111", 64.0).unwrap();
        let b = GridMap::parse("###\n#.#\n###", 64.0).unwrap();
        assert!(a.rows().eq(b.rows()));
    }

    #[test]
    fn cell_center_is_mid_tile() {
        assert_eq!(reference().cell_center(1, 1), (96.0, 96.0));
        assert_eq!(reference().cell_center(2, 1), (160.0, 96.0));
    }

    #[test]
    fn load_maze_reads_crlf_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"#####\r\n#...#\r\n#####\r\n").unwrap();
        let map = load_maze(file.path(), 64.0).unwrap();
        assert_eq!((map.width(), map.height()), (5, 3));
        assert_eq!(map.cell(1, 1), Some(Cell::Open));
        assert_eq!(map.cell(4, 1), Some(Cell::Wall));
    }

    #[test]
    fn load_maze_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match load_maze(&path, 64.0) {
            Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
