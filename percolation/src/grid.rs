use std::fmt::Display;

use crate::{Error, Result, UnionFind};

////////////////////////////////////////////////////////////////////////////////

/// A `(row, col)` pair, both counted from 1.
type Site = (usize, usize);

const VIRTUAL_TOP: usize = 0;

const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// An `n`-by-`n` grid of sites, each either open or blocked.
///
/// Connectivity is tracked by two disjoint-set forests over the same site
/// indices. `percolation` carries a virtual top and a virtual bottom node and
/// answers [`percolates`](Self::percolates). `fullness` has no virtual bottom,
/// so a bottom-row site never becomes full through another bottom-row site
/// once the grid percolates.
#[derive(Debug)]
pub struct Percolation {
    n: usize,
    open: Vec<Vec<bool>>,
    open_count: usize,
    percolation: UnionFind,
    fullness: UnionFind,
}

impl Percolation {
    /// Creates a grid with all sites blocked.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGridSize`] if `n` is 0 or `n * n + 2` overflows
    /// `usize`.
    pub fn new(n: usize) -> Result<Self> {
        let sites = n
            .checked_mul(n)
            .filter(|sites| *sites > 0 && sites.checked_add(2).is_some())
            .ok_or(Error::InvalidGridSize(n))?;

        Ok(Self {
            n,
            open: vec![vec![false; n]; n],
            open_count: 0,
            percolation: UnionFind::new(sites + 2),
            fullness: UnionFind::new(sites + 1),
        })
    }

    /// Returns the side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of sites, `n * n`.
    pub fn sites(&self) -> usize {
        self.n * self.n
    }

    /// Opens the site at (`row`, `col`) if it is not open already, and joins
    /// it with every open neighbour.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] unless both `row` and `col` are in `1..=n`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        if self.open[row - 1][col - 1] {
            return Ok(());
        }

        self.open[row - 1][col - 1] = true;
        self.open_count += 1;

        let site = self.index(row, col);
        if row == 1 {
            self.percolation.union(site, VIRTUAL_TOP);
            self.fullness.union(site, VIRTUAL_TOP);
        }
        if row == self.n {
            let bottom = self.virtual_bottom();
            self.percolation.union(site, bottom);
        }

        let open_neighbours = NEIGHBOUR_OFFSETS.map(|(dr, dc)| {
            self.neighbour(row, col, dr, dc)
                .filter(|&(r, c)| self.open[r - 1][c - 1])
                .map(|(r, c)| self.index(r, c))
        });
        for other in open_neighbours.into_iter().flatten() {
            self.percolation.union(site, other);
            self.fullness.union(site, other);
        }

        Ok(())
    }

    /// # Errors
    ///
    /// [`Error::OutOfBounds`] unless both `row` and `col` are in `1..=n`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_bounds(row, col)?;
        Ok(self.open[row - 1][col - 1])
    }

    /// Returns `true` if the site is open and joined to the top row through
    /// a chain of open neighbouring sites.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] unless both `row` and `col` are in `1..=n`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        if !self.is_open(row, col)? {
            return Ok(false);
        }
        Ok(self.fullness.connected(self.index(row, col), VIRTUAL_TOP))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if some open path leads from the top row to the bottom
    /// row.
    pub fn percolates(&self) -> bool {
        self.percolation.connected(VIRTUAL_TOP, self.virtual_bottom())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.n + col
    }

    fn virtual_bottom(&self) -> usize {
        self.sites() + 1
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { row, col, n: self.n })
        }
    }

    fn neighbour(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Site> {
        let row = row as isize + dr;
        let col = col as isize + dc;
        let n = self.n as isize;

        if row >= 1 && row <= n && col >= 1 && col <= n {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }
}

impl Display for Percolation {
    /// Draws blocked sites as `#`, full sites as `*` and the remaining open
    /// sites as `.`, one row per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.n {
            for col in 1..=self.n {
                let cell = if !self.open[row - 1][col - 1] {
                    '#'
                } else if self.fullness.connected(self.index(row, col), VIRTUAL_TOP) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
