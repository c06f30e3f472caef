//! The island itself: the projected coastline extruded into a flat prism.
//!
//! The outline is tessellated in the XY plane and extruded along +Z, then the
//! entity is laid flat with a quarter turn about X so the caps face up and
//! down in the ground plane.

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use lyon_path::math::Point;
use lyon_path::Path;
use lyon_tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

use map::config::ISLAND_DEPTH;
use map::outline;

const EPSILON: f32 = 1e-6;

pub fn spawn_island(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = build_prism_mesh(&outline::outline_path(), ISLAND_DEPTH);
    if mesh.count_vertices() == 0 {
        warn!("coastline outline tessellated to nothing, island not spawned");
        return;
    }
    info!("island mesh: {} vertices", mesh.count_vertices());

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(150, 200, 162),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));
}

/// Interior triangulation of one cap, plus the cleaned boundary ring the side
/// walls are built from.
struct CapTessellation {
    vertices: Vec<Vec2>,
    indices: Vec<u32>,
    ring: Vec<Vec2>,
}

/// Drop consecutive duplicates and an explicit closing point, normalize the
/// ring to counter-clockwise so outward side normals are consistent, and
/// triangulate the interior. Fewer than three distinct points is degenerate.
fn tessellate_cap(polygon: &[Vec2]) -> Option<CapTessellation> {
    let mut ring: Vec<Vec2> = Vec::with_capacity(polygon.len());
    for &point in polygon {
        if ring
            .last()
            .is_some_and(|last| (*last - point).length_squared() < EPSILON * EPSILON)
        {
            continue;
        }
        ring.push(point);
    }
    if ring.len() >= 2 && (ring[0] - ring[ring.len() - 1]).length_squared() < EPSILON * EPSILON {
        ring.pop();
    }
    if ring.len() < 3 {
        return None;
    }
    if signed_area(&ring) < 0.0 {
        ring.reverse();
    }

    let mut path_builder = Path::builder();
    path_builder.begin(Point::new(ring[0].x, ring[0].y));
    for vertex in ring.iter().skip(1) {
        path_builder.line_to(Point::new(vertex.x, vertex.y));
    }
    path_builder.close();
    let path = path_builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                Vec2::new(vertex.position().x, vertex.position().y)
            }),
        )
        .ok()?;
    if buffers.vertices.is_empty() || buffers.indices.is_empty() {
        return None;
    }

    Some(CapTessellation {
        vertices: buffers.vertices,
        indices: buffers.indices,
        ring,
    })
}

/// Build the prism: back cap at z = 0, front cap at z = `depth`, one side
/// quad per ring edge with a flat outward normal. A degenerate outline
/// yields an empty mesh.
pub fn build_prism_mesh(polygon: &[Vec2], depth: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    if let Some(cap) = tessellate_cap(polygon) {
        let (bbox_min, bbox_size) = bounds(&cap.ring);
        let cap_count = cap.vertices.len() as u32;

        // Back cap faces -Z: reverse the tessellation winding.
        for vertex in &cap.vertices {
            positions.push([vertex.x, vertex.y, 0.0]);
            normals.push([0.0, 0.0, -1.0]);
            uvs.push(cap_uv(*vertex, bbox_min, bbox_size));
        }
        for triangle in cap.indices.chunks_exact(3) {
            indices.extend_from_slice(&[triangle[0], triangle[2], triangle[1]]);
        }

        // Front cap faces +Z, tessellation winding as-is.
        for vertex in &cap.vertices {
            positions.push([vertex.x, vertex.y, depth]);
            normals.push([0.0, 0.0, 1.0]);
            uvs.push(cap_uv(*vertex, bbox_min, bbox_size));
        }
        for triangle in cap.indices.chunks_exact(3) {
            indices.extend(triangle.iter().map(|i| cap_count + i));
        }

        // Side walls. For a counter-clockwise ring the outward edge normal
        // is (dy, -dx).
        for (i, &current) in cap.ring.iter().enumerate() {
            let next = cap.ring[(i + 1) % cap.ring.len()];
            let edge = next - current;
            let edge_len = edge.length();
            let normal = if edge_len > EPSILON {
                [edge.y / edge_len, -edge.x / edge_len, 0.0]
            } else {
                [0.0, 0.0, 0.0]
            };

            let base = positions.len() as u32;
            positions.push([current.x, current.y, 0.0]);
            positions.push([next.x, next.y, 0.0]);
            positions.push([current.x, current.y, depth]);
            positions.push([next.x, next.y, depth]);
            normals.extend_from_slice(&[normal; 4]);
            uvs.extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 1, base + 3, base + 2]);
        }
    }

    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        bevy::render::render_asset::RenderAssetUsages::RENDER_WORLD
            | bevy::render::render_asset::RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

fn signed_area(ring: &[Vec2]) -> f32 {
    let mut area = 0.0;
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        area += ring[i].x * ring[j].y - ring[j].x * ring[i].y;
    }
    area * 0.5
}

fn bounds(ring: &[Vec2]) -> (Vec2, Vec2) {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for &point in ring {
        min = min.min(point);
        max = max.max(point);
    }
    (min, max - min)
}

fn cap_uv(point: Vec2, bbox_min: Vec2, bbox_size: Vec2) -> [f32; 2] {
    [
        if bbox_size.x > EPSILON {
            (point.x - bbox_min.x) / bbox_size.x
        } else {
            0.0
        },
        if bbox_size.y > EPSILON {
            (point.y - bbox_min.y) / bbox_size.y
        } else {
            0.0
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    fn mesh_indices(mesh: &Mesh) -> &[u32] {
        match mesh.indices() {
            Some(Indices::U32(indices)) => indices,
            other => panic!("expected u32 indices, got {other:?}"),
        }
    }

    #[test]
    fn test_prism_buffer_counts() {
        let outline = square();
        let cap = tessellate_cap(&outline).unwrap();
        let mesh = build_prism_mesh(&outline, 2.0);

        assert_eq!(
            mesh.count_vertices(),
            cap.vertices.len() * 2 + cap.ring.len() * 4
        );
        assert_eq!(
            mesh_indices(&mesh).len(),
            cap.indices.len() * 2 + cap.ring.len() * 6
        );
    }

    #[test]
    fn test_caps_sit_at_zero_and_depth() {
        let outline = square();
        let cap = tessellate_cap(&outline).unwrap();
        let mesh = build_prism_mesh(&outline, 2.0);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .unwrap()
            .as_float3()
            .unwrap();

        let cap_count = cap.vertices.len();
        for position in &positions[..cap_count] {
            assert_eq!(position[2], 0.0);
        }
        for position in &positions[cap_count..cap_count * 2] {
            assert_eq!(position[2], 2.0);
        }
    }

    #[test]
    fn test_side_normals_are_unit_and_in_plane() {
        let outline = square();
        let cap = tessellate_cap(&outline).unwrap();
        let mesh = build_prism_mesh(&outline, 2.0);
        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .unwrap()
            .as_float3()
            .unwrap();

        let side_start = cap.vertices.len() * 2;
        assert!(normals.len() > side_start);
        for normal in &normals[side_start..] {
            let n = Vec3::from_array(*normal);
            assert!((n.length() - 1.0).abs() < 1e-4);
            assert!(n.z.abs() < 1e-6);
        }
    }

    #[test]
    fn test_clockwise_input_is_normalized() {
        let mut outline = square();
        outline.reverse();
        let cap = tessellate_cap(&outline).unwrap();
        assert!(signed_area(&cap.ring) > 0.0);
    }

    #[test]
    fn test_explicit_closing_point_is_dropped() {
        let mut outline = square();
        outline.push(outline[0]);
        let cap = tessellate_cap(&outline).unwrap();
        assert_eq!(cap.ring.len(), 4);
    }

    #[test]
    fn test_degenerate_outline_yields_empty_mesh() {
        let mesh = build_prism_mesh(&[Vec2::ZERO, Vec2::ZERO, Vec2::new(1.0, 1.0)], 2.0);
        assert_eq!(mesh.count_vertices(), 0);
        assert!(mesh_indices(&mesh).is_empty());

        let empty = build_prism_mesh(&[], 2.0);
        assert_eq!(empty.count_vertices(), 0);
    }

    #[test]
    fn test_coastline_outline_builds() {
        let mesh = build_prism_mesh(&outline::outline_path(), ISLAND_DEPTH);
        assert!(mesh.count_vertices() > 0);
    }
}
