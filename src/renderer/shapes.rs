//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::{DrawCommand, DrawList, Shape};
use super::vertex::Vertex;

/// Segments used for circles and rings
const CIRCLE_SEGMENTS: u32 = 16;

/// Triangulate a whole frame (triangle list, shake offset applied)
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);
    for cmd in &list.commands {
        let mut shifted = *cmd;
        shifted.pos += list.offset;
        vertices.extend(command(&shifted));
    }
    vertices
}

/// Triangulate a single command
pub fn command(cmd: &DrawCommand) -> Vec<Vertex> {
    let color = cmd.final_color();
    match cmd.shape {
        Shape::Rect => rect(cmd.pos, cmd.size, cmd.rotation, color),
        Shape::RectOutline { stroke } => rect_outline(cmd.pos, cmd.size, cmd.rotation, stroke, color),
        Shape::Circle => circle(cmd.pos, cmd.size.x * 0.5, color, CIRCLE_SEGMENTS),
        Shape::Ring { stroke } => {
            let outer = cmd.size.x * 0.5;
            ring(cmd.pos, (outer - stroke).max(0.0), outer, color, CIRCLE_SEGMENTS)
        }
        Shape::Ship { notch } => ship(cmd.pos, cmd.size, notch, color),
    }
}

/// Rotate `p` around `center`
fn rotate_about(p: Vec2, center: Vec2, rotation: f32) -> Vec2 {
    if rotation == 0.0 {
        return p;
    }
    center + Vec2::from_angle(rotation).rotate(p - center)
}

fn quad(corners: [Vec2; 4], color: [f32; 4], out: &mut Vec<Vertex>) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, c, d, a] {
        out.push(Vertex::new(p.x, p.y, color));
    }
}

/// Generate vertices for a filled, optionally rotated box
pub fn rect(center: Vec2, size: Vec2, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|c| rotate_about(center + c, center, rotation));

    let mut vertices = Vec::with_capacity(6);
    quad(corners, color, &mut vertices);
    vertices
}

/// Generate vertices for a box outline (four thin boxes)
pub fn rect_outline(center: Vec2, size: Vec2, rotation: f32, stroke: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let edges = [
        (Vec2::new(0.0, -half.y + stroke * 0.5), Vec2::new(size.x, stroke)),
        (Vec2::new(0.0, half.y - stroke * 0.5), Vec2::new(size.x, stroke)),
        (Vec2::new(-half.x + stroke * 0.5, 0.0), Vec2::new(stroke, size.y)),
        (Vec2::new(half.x - stroke * 0.5, 0.0), Vec2::new(stroke, size.y)),
    ];

    let mut vertices = Vec::with_capacity(24);
    for (offset, edge_size) in edges {
        let edge_half = edge_size * 0.5;
        let edge_center = center + offset;
        let corners = [
            Vec2::new(-edge_half.x, -edge_half.y),
            Vec2::new(edge_half.x, -edge_half.y),
            Vec2::new(edge_half.x, edge_half.y),
            Vec2::new(-edge_half.x, edge_half.y),
        ]
        .map(|c| rotate_about(edge_center + c, center, rotation));
        quad(corners, color, &mut vertices);
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());
        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        quad([inner1, outer1, outer2, inner2], color, &mut vertices);
    }

    vertices
}

/// Generate vertices for the player craft
///
/// Nose at top centre, wings at the bottom corners, tail notched `notch`
/// pixels up from the bottom edge.
pub fn ship(center: Vec2, size: Vec2, notch: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size * 0.5;
    let nose = center + Vec2::new(0.0, -half.y);
    let left = center + Vec2::new(-half.x, half.y);
    let tail = center + Vec2::new(0.0, half.y - notch);
    let right = center + Vec2::new(half.x, half.y);

    [nose, left, tail, nose, tail, right]
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0), 0.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [8.0, 9.0]);
        assert_eq!(v[2].position, [12.0, 11.0]);
    }

    #[test]
    fn test_rotated_rect_keeps_center() {
        let center = Vec2::new(5.0, 5.0);
        let v = rect(center, Vec2::new(4.0, 4.0), PI / 4.0, [1.0; 4]);
        // Corners of the two triangles: a, b, c, c, d, a
        let a = Vec2::from(v[0].position);
        let c = Vec2::from(v[2].position);
        let mid = (a + c) * 0.5;
        assert!((mid - center).length() < 1e-4);
    }

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::ZERO, 5.0, [1.0; 4], 8);
        assert_eq!(v.len(), 24);
    }

    #[test]
    fn test_tessellate_applies_offset_and_alpha() {
        let mut list = DrawList::new();
        list.offset = Vec2::new(3.0, -2.0);
        list.push(
            DrawCommand::new(Shape::Rect, Vec2::ZERO, Vec2::new(2.0, 2.0), [1.0, 0.0, 0.0, 1.0])
                .faded(0.5),
        );
        let v = tessellate(&list);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [2.0, -3.0]);
        assert_eq!(v[0].color[3], 0.5);
    }

    #[test]
    fn test_ship_is_two_triangles() {
        let v = ship(Vec2::new(18.0, 18.0), Vec2::new(36.0, 36.0), 8.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [18.0, 0.0]);
        assert_eq!(v[2].position, [18.0, 28.0]);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let v = rect(Vec2::ZERO, Vec2::ONE, 0.0, [1.0; 4]);
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), v.len() * Vertex::STRIDE);
    }
}
