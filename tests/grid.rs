// tests/grid.rs
#![cfg(feature = "system-grid_search")]
use idle_sim::systems::grid_search::{
    Grid, SIDE, Zone, commercial_effect, evaluate, industrial_effect, random_search,
    residential_effect,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(1.0)
}

/* ──────────────────────────────────────────────────────────────────────────
1) Decoding and neighbourhoods
────────────────────────────────────────────────────────────────────────── */

#[test]
fn decode_is_base_three_x_outer() {
    assert_eq!(Grid::decode(0), Grid::filled(Zone::Commercial));

    let g = Grid::decode(1);
    assert_eq!(g.get(0, 0), Zone::Residential);
    assert_eq!(g.get(0, 1), Zone::Commercial);

    let g = Grid::decode(2 * 3);
    assert_eq!(g.get(0, 1), Zone::Industrial);
    assert_eq!(g.get(0, 0), Zone::Commercial);

    let g = Grid::decode(3u64.pow(SIDE as u32));
    assert_eq!(g.get(1, 0), Zone::Residential);
}

#[test]
fn neighbour_counts_at_corner_edge_and_center() {
    let g = Grid::filled(Zone::Commercial);
    assert_eq!((g.plus_neighbors(0, 0).len(), g.x_neighbors(0, 0).len()), (2, 1));
    assert_eq!((g.plus_neighbors(0, 2).len(), g.x_neighbors(0, 2).len()), (3, 2));
    assert_eq!((g.plus_neighbors(2, 2).len(), g.x_neighbors(2, 2).len()), (4, 4));
}

#[test]
fn display_prints_one_tab_separated_row_per_x() {
    let text = Grid::filled(Zone::Industrial).to_string();
    assert_eq!(text.lines().count(), SIDE);
    assert!(text.lines().all(|l| l == "\t3\t3\t3\t3\t3"));
}

/* ──────────────────────────────────────────────────────────────────────────
2) Zone effects on uniform grids
────────────────────────────────────────────────────────────────────────── */

#[test]
fn commercial_effects() {
    let g = Grid::filled(Zone::Commercial);
    // Corner: two plus-neighbours at 2.52; the diagonal is the third.
    assert!(approx(commercial_effect(&g, 0, 0), 1.1 * 2.52 * 2.52));
    // Center: 2.52, 2.52, 0.83, 0.83; diagonals past the cap.
    assert!(approx(commercial_effect(&g, 2, 2), 1.1 * 2.52 * 2.52 * 0.83 * 0.83));
}

#[test]
fn residential_effects() {
    let g = Grid::filled(Zone::Residential);
    assert!(approx(residential_effect(&g, 0, 0), 1.1 * 2.4 * 2.4 * 1.4));
    assert!(approx(
        residential_effect(&g, 2, 2),
        1.1 * 2.4 * 2.4 * 2.4 * 1.6 * 1.4f64.powi(4)
    ));
}

#[test]
fn industrial_effects_and_penalties() {
    let g = Grid::filled(Zone::Industrial);
    assert!(approx(industrial_effect(&g, 0, 0), 1.1 * 1.3f64.powi(3)));
    assert!(approx(industrial_effect(&g, 2, 2), 1.1 * 1.3f64.powi(8)));

    // A residential cell surrounded by industry is halved four times.
    let mut g = Grid::filled(Zone::Industrial);
    g.set(2, 2, Zone::Residential);
    assert!(approx(residential_effect(&g, 2, 2), 1.1 / 16.0));
}

#[test]
fn evaluate_sums_per_zone_from_one() {
    let g = Grid::filled(Zone::Commercial);
    let v = evaluate(&g);
    let mut expected = 1.0;
    for x in 0..SIDE {
        for y in 0..SIDE {
            expected += commercial_effect(&g, x, y);
        }
    }
    assert!(approx(v[Zone::Commercial.slot()], expected));
    assert_eq!(v[Zone::Residential.slot()], 1.0);
    assert_eq!(v[Zone::Industrial.slot()], 1.0);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Random search
────────────────────────────────────────────────────────────────────────── */

#[test]
fn seeded_search_is_deterministic() {
    let a = random_search(2_000, 7);
    let b = random_search(2_000, 7);
    assert_eq!(a, b);
    assert_eq!(a.samples, 2_000);
    for zone in Zone::ALL {
        let (value, grid) = a.best_for(zone).unwrap();
        assert!(approx(*value, evaluate(grid)[zone.slot()]));
    }
}

#[test]
fn empty_search_has_no_best() {
    let out = random_search(0, 1);
    assert_eq!(out.samples, 0);
    assert!(Zone::ALL.iter().all(|&z| out.best_for(z).is_none()));
}
