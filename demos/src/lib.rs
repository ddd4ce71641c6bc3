//! Shared pieces for the pathgrid demos: random obstacle fields and
//! endpoint parsing.

use pathgrid_core::{Grid, GridError, Pos, Role};
use rand::{Rng, RngExt};

/// Turn each non-endpoint cell into a wall with probability `density`.
///
/// Cells listed in `keep` are never walled. Returns the number of walls
/// placed. Neighbor sets are left stale for the caller to recompute.
pub fn scatter_walls<R: Rng>(
    grid: &mut Grid,
    density: f64,
    keep: &[Pos],
    rng: &mut R,
) -> Result<usize, GridError> {
    let density = density.clamp(0.0, 1.0);
    let mut placed = 0;
    let side = grid.side();
    for row in 0..side {
        for col in 0..side {
            let p = Pos::new(row, col);
            if keep.contains(&p) || grid.cell_at(p)?.role().is_endpoint() {
                continue;
            }
            if rng.random_bool(density) {
                grid.set_role(p, Role::Wall)?;
                placed += 1;
            }
        }
    }
    Ok(placed)
}

/// Parse `"row,col"` into a position.
pub fn parse_pos(s: &str) -> Result<Pos, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row in {s:?}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column in {s:?}: {e}"))?;
    Ok(Pos::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_spares_endpoints_and_kept_cells() {
        let mut g = Grid::new(6).unwrap();
        g.place(Pos::new(0, 0)).unwrap();
        g.place(Pos::new(5, 5)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let keep = [Pos::new(2, 2)];
        let placed = scatter_walls(&mut g, 1.0, &keep, &mut rng).unwrap();
        assert_eq!(placed, 36 - 3);
        assert_eq!(g.count(Role::Wall), 33);
        assert!(g.cell_at(Pos::new(2, 2)).unwrap().is_empty());
        assert_eq!(g.endpoints(), Some((Pos::new(0, 0), Pos::new(5, 5))));
        assert!(g.neighbors_stale());
    }

    #[test]
    fn zero_density_places_nothing() {
        let mut g = Grid::new(4).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(scatter_walls(&mut g, 0.0, &[], &mut rng).unwrap(), 0);
        assert!(!g.neighbors_stale());
    }

    #[test]
    fn parse_pos_accepts_row_col() {
        assert_eq!(parse_pos("3,4"), Ok(Pos::new(3, 4)));
        assert_eq!(parse_pos(" 0 , 12 "), Ok(Pos::new(0, 12)));
        assert!(parse_pos("3").is_err());
        assert!(parse_pos("a,1").is_err());
    }
}
