//! End-to-end runs of the grid → OBJ pipeline.

use approx::assert_relative_eq;
use wallmesh::{
    build_wall_mesh, Face, FaceStyle, OccupancyGrid, PipelineSettings, WallMeshError,
};

fn grid(rows: &[&str]) -> OccupancyGrid {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|c| c != '#').collect())
        .collect();
    OccupancyGrid::from_walkable_rows(&rows).unwrap()
}

fn is_wall(face: &Face) -> bool {
    face.normal().z == 0.0
}

const LEVEL: &[&str] = &[
    "#######..",
    "#.....#..",
    "#.##..###",
    "#.#...#.#",
    "#.....###",
    "###.###..",
    "..#.#....",
];

#[test]
fn single_block_gives_box_without_floor() {
    let output = build_wall_mesh(&grid(&["#"]), &PipelineSettings::default()).unwrap();
    assert_eq!(output.mesh.faces().iter().filter(|f| is_wall(f)).count(), 4);
    assert_eq!(output.exported.vertex_count(), 8);
    assert_eq!(output.exported.face_count(), 6);

    let obj = output.exported.to_obj_string();
    assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
    assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 6);
    assert!(obj.ends_with('\n'));
}

#[test]
fn wall_normals_point_away_from_blocked_cells() {
    let g = grid(LEVEL);
    let output = build_wall_mesh(&g, &PipelineSettings::default()).unwrap();
    let walls: Vec<&Face> = output.mesh.faces().iter().filter(|f| is_wall(f)).collect();
    assert!(!walls.is_empty());

    for face in walls {
        let centroid = face.centroid();
        let normal = face.normal();
        let outside = centroid + normal * 0.25;
        let inside = centroid - normal * 0.25;
        assert!(
            !g.is_blocked(outside.x.floor() as i64, outside.y.floor() as i64),
            "normal {normal} at {centroid} faces a blocked cell"
        );
        assert!(
            g.is_blocked(inside.x.floor() as i64, inside.y.floor() as i64),
            "normal {normal} at {centroid} backs onto a walkable cell"
        );
    }
}

#[test]
fn wall_area_is_perimeter_times_height() {
    let g = grid(&["###", "#.#", "###"]);
    let settings = PipelineSettings {
        height: 2.0,
        caps: false,
        ..PipelineSettings::default()
    };
    let output = build_wall_mesh(&g, &settings).unwrap();
    assert_eq!(output.mesh.face_count(), 8);
    let area: f64 = output.mesh.faces().iter().map(Face::area).sum();
    // outer perimeter 12 + island perimeter 4
    assert_relative_eq!(area, 16.0 * 2.0);
    assert_eq!(output.exported.vertex_count(), 16);
}

#[test]
fn caps_cover_blocked_cells() {
    let g = grid(LEVEL);
    let settings = PipelineSettings {
        cell_size: 0.5,
        ..PipelineSettings::default()
    };
    let output = build_wall_mesh(&g, &settings).unwrap();
    let caps: Vec<&Face> = output.mesh.faces().iter().filter(|f| !is_wall(f)).collect();
    let area: f64 = caps.iter().map(|f| f.area()).sum();
    assert_relative_eq!(area, g.blocked_count() as f64 * 0.25, epsilon = 1e-9);
    for face in caps {
        assert!(face.normal().z > 0.0);
        assert!(face.corners().iter().all(|c| c.z == settings.height));
    }
}

#[test]
fn caps_can_be_disabled() {
    let settings = PipelineSettings {
        caps: false,
        ..PipelineSettings::default()
    };
    let output = build_wall_mesh(&grid(LEVEL), &settings).unwrap();
    assert!(output.mesh.faces().iter().all(is_wall));
}

#[test]
fn triangle_style_splits_every_wall_quad() {
    let g = grid(LEVEL);
    let quads = PipelineSettings {
        caps: false,
        ..PipelineSettings::default()
    };
    let triangles = PipelineSettings {
        face_style: FaceStyle::Triangles,
        ..quads
    };
    let quad_mesh = build_wall_mesh(&g, &quads).unwrap().mesh;
    let tri_mesh = build_wall_mesh(&g, &triangles).unwrap().mesh;
    assert_eq!(tri_mesh.face_count(), 2 * quad_mesh.face_count());
    assert!(tri_mesh.faces().iter().all(|f| f.corners().len() == 3));
}

#[test]
fn empty_level_writes_empty_file() {
    let output = build_wall_mesh(&grid(&["...", "..."]), &PipelineSettings::default()).unwrap();
    assert!(output.perimeters.is_empty());
    assert_eq!(output.exported.to_obj_string(), "");
}

#[test]
fn settings_file_drives_export() {
    let settings: PipelineSettings = toml::from_str(
        r#"
        height = 1.5
        caps = false

        [export]
        axes = ["+x", "+y", "+z"]
        one_based = false
        "#,
    )
    .unwrap();
    let output = build_wall_mesh(&grid(&["#"]), &settings).unwrap();
    let obj = output.exported.to_obj_string();
    assert!(obj.starts_with("v 0.000000 0.000000 0.000000\nv 0.000000 0.000000 1.500000\n"));
    assert!(obj.lines().any(|l| l.starts_with("f 0 ")));
    assert_eq!(output.exported.face_count(), 4);
}

#[test]
fn invalid_settings_rejected_up_front() {
    let settings = PipelineSettings {
        height: f64::NAN,
        ..PipelineSettings::default()
    };
    let err = build_wall_mesh(&grid(&["#"]), &settings).unwrap_err();
    assert!(matches!(err, WallMeshError::InvalidHeight(_)));
}

#[test]
fn runs_are_deterministic() {
    let g = grid(LEVEL);
    let first = build_wall_mesh(&g, &PipelineSettings::default()).unwrap();
    let second = build_wall_mesh(&g, &PipelineSettings::default()).unwrap();
    assert_eq!(first.exported.to_obj_string(), second.exported.to_obj_string());
}
