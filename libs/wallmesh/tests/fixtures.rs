//! Wall detection on the reference level fixtures.
//!
//! Matrices use `1` for walkable and `0` for blocked cells. Island
//! boundaries run clockwise in XY, so hole loops list their corners in the
//! opposite order to outer loops.

use wallmesh::{trace_walls, OccupancyGrid, ScanOrder, WallPerimeter};

struct Fixture {
    name: &'static str,
    matrix: &'static [&'static [u8]],
    walls: &'static [&'static [(i32, i32)]],
}

const FIXTURES: &[Fixture] = &[
    Fixture {
        name: "empty1x1",
        matrix: &[&[1]],
        walls: &[],
    },
    Fixture {
        name: "empty3x3",
        matrix: &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]],
        walls: &[],
    },
    Fixture {
        name: "full1x1",
        matrix: &[&[0]],
        walls: &[&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)]],
    },
    Fixture {
        name: "full2x2",
        matrix: &[&[0, 0], &[0, 0]],
        walls: &[&[(0, 0), (2, 0), (2, 2), (0, 2), (0, 0)]],
    },
    Fixture {
        name: "full3x3",
        matrix: &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]],
        walls: &[&[(0, 0), (3, 0), (3, 3), (0, 3), (0, 0)]],
    },
    Fixture {
        name: "square1x1",
        matrix: &[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]],
        walls: &[&[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)]],
    },
    Fixture {
        name: "rect2x1",
        matrix: &[&[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 1, 1, 1]],
        walls: &[&[(1, 1), (3, 1), (3, 2), (1, 2), (1, 1)]],
    },
    Fixture {
        name: "rect1x2",
        matrix: &[&[1, 0, 1, 1], &[1, 0, 1, 1], &[1, 1, 1, 1]],
        walls: &[&[(1, 0), (2, 0), (2, 2), (1, 2), (1, 0)]],
    },
    Fixture {
        name: "L1x1",
        matrix: &[&[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 0, 1, 1]],
        walls: &[&[(1, 1), (3, 1), (3, 2), (2, 2), (2, 3), (1, 3), (1, 1)]],
    },
    Fixture {
        name: "square2x2",
        matrix: &[&[1, 1, 1, 1], &[1, 0, 0, 1], &[1, 0, 0, 1], &[1, 1, 1, 1]],
        walls: &[&[(1, 1), (3, 1), (3, 3), (1, 3), (1, 1)]],
    },
    Fixture {
        name: "square3x3",
        matrix: &[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ],
        walls: &[&[(1, 1), (4, 1), (4, 4), (1, 4), (1, 1)]],
    },
    Fixture {
        name: "snake",
        matrix: &[&[0, 1, 1], &[0, 0, 1], &[1, 0, 1]],
        walls: &[&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 3), (1, 3), (1, 2), (0, 2), (0, 0)]],
    },
    Fixture {
        name: "H",
        matrix: &[&[0, 1, 0], &[0, 0, 0], &[0, 1, 0]],
        walls: &[&[
            (0, 0),
            (1, 0),
            (1, 1),
            (2, 1),
            (2, 0),
            (3, 0),
            (3, 3),
            (2, 3),
            (2, 2),
            (1, 2),
            (1, 3),
            (0, 3),
            (0, 0),
        ]],
    },
    Fixture {
        name: "T",
        matrix: &[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 0, 1, 1],
            &[1, 1, 0, 1, 1],
            &[1, 1, 1, 1, 1],
        ],
        walls: &[&[(1, 1), (4, 1), (4, 2), (3, 2), (3, 4), (2, 4), (2, 2), (1, 2), (1, 1)]],
    },
    Fixture {
        name: "4blocks",
        matrix: &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]],
        walls: &[
            &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)],
            &[(2, 0), (3, 0), (3, 1), (2, 1), (2, 0)],
            &[(2, 2), (3, 2), (3, 3), (2, 3), (2, 2)],
            &[(0, 2), (1, 2), (1, 3), (0, 3), (0, 2)],
        ],
    },
    Fixture {
        name: "diagonal_pair",
        matrix: &[&[0, 1], &[1, 0]],
        walls: &[
            &[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)],
            &[(1, 1), (2, 1), (2, 2), (1, 2), (1, 1)],
        ],
    },
    Fixture {
        name: "o_room_1x1",
        matrix: &[
            &[1, 1, 1, 1, 1],
            &[1, 0, 0, 0, 1],
            &[1, 0, 1, 0, 1],
            &[1, 0, 0, 0, 1],
            &[1, 1, 1, 1, 1],
        ],
        walls: &[
            &[(1, 1), (4, 1), (4, 4), (1, 4), (1, 1)],
            &[(2, 2), (2, 3), (3, 3), (3, 2), (2, 2)],
        ],
    },
    Fixture {
        name: "o_room_1x1_bold",
        matrix: &[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ],
        walls: &[
            &[(0, 0), (5, 0), (5, 5), (0, 5), (0, 0)],
            &[(2, 2), (2, 3), (3, 3), (3, 2), (2, 2)],
        ],
    },
    Fixture {
        name: "o_room_2x2",
        matrix: &[&[0, 0, 0, 0], &[0, 1, 1, 0], &[0, 1, 1, 0], &[0, 0, 0, 0]],
        walls: &[
            &[(0, 0), (4, 0), (4, 4), (0, 4), (0, 0)],
            &[(1, 1), (1, 3), (3, 3), (3, 1), (1, 1)],
        ],
    },
];

fn grid(fixture: &Fixture) -> OccupancyGrid {
    let rows: Vec<Vec<bool>> = fixture
        .matrix
        .iter()
        .map(|row| row.iter().map(|&cell| cell == 1).collect())
        .collect();
    OccupancyGrid::from_walkable_rows(&rows).unwrap()
}

fn expected(fixture: &Fixture) -> Vec<WallPerimeter> {
    let mut walls: Vec<WallPerimeter> = fixture
        .walls
        .iter()
        .map(|points| WallPerimeter::from(points.to_vec()))
        .collect();
    walls.sort();
    walls
}

#[test]
fn detects_reference_walls() {
    for fixture in FIXTURES {
        let actual = trace_walls(&grid(fixture), ScanOrder::RowMajor).unwrap();
        assert_eq!(actual, expected(fixture), "fixture {}", fixture.name);
    }
}

#[test]
fn reference_walls_do_not_depend_on_scan_order() {
    for fixture in FIXTURES {
        let g = grid(fixture);
        for order in ScanOrder::ALL {
            let actual = trace_walls(&g, order).unwrap();
            assert_eq!(actual, expected(fixture), "fixture {} with {order:?}", fixture.name);
        }
    }
}

#[test]
fn wall_area_matches_blocked_cells() {
    for fixture in FIXTURES {
        let g = grid(fixture);
        let walls = trace_walls(&g, ScanOrder::RowMajor).unwrap();
        let doubled: i64 = walls.iter().map(WallPerimeter::doubled_signed_area).sum();
        assert_eq!(doubled, 2 * g.blocked_count() as i64, "fixture {}", fixture.name);
    }
}

#[test]
fn o_room_hole_seed_sits_between_walls() {
    let fixture = FIXTURES
        .iter()
        .find(|f| f.name == "o_room_1x1")
        .unwrap();
    let g = grid(fixture);
    let walls = trace_walls(&g, ScanOrder::RowMajor).unwrap();
    assert_eq!(walls.len(), 2);

    let seeds = g.walkable_region_seeds(1.0);
    let inside = |wall: &WallPerimeter, x: f64, y: f64| {
        let pts = wall.points();
        let mut crossing = false;
        for pair in pts.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ay, by) = (f64::from(a.y), f64::from(b.y));
            if (ay > y) != (by > y) {
                let cx = f64::from(a.x) + (y - ay) * f64::from(b.x - a.x) / (by - ay);
                if x < cx {
                    crossing = !crossing;
                }
            }
        }
        crossing
    };

    // Centre seed: inside the outer wall and enclosed by the island wall,
    // which therefore bounds the excluded region. Exterior seed: outside
    // both walls.
    let (outer, inner) = (&walls[0], &walls[1]);
    assert!(outer.doubled_signed_area() > 0);
    assert!(inner.doubled_signed_area() < 0);

    let centre = seeds.iter().find(|s| s.x == 2.5 && s.y == 2.5).unwrap();
    assert!(inside(outer, centre.x, centre.y));
    assert!(inside(inner, centre.x, centre.y));

    let exterior = seeds.iter().find(|s| s.x == 0.5 && s.y == 0.5).unwrap();
    assert!(!inside(outer, exterior.x, exterior.y));
    assert!(!inside(inner, exterior.x, exterior.y));
    assert_eq!(seeds.len(), 2);
}
