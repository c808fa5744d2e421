//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::rotate_offset;
use crate::sim::{EntityTag, RenderEntity, RenderFrame, Tier};

/// Segments used for filled circles (bullets)
const CIRCLE_SEGMENTS: u32 = 8;

/// Tessellated frame, split by primitive topology
#[derive(Debug, Clone)]
pub struct FrameGeometry {
    /// Color to clear the target with before drawing
    pub clear_color: [f32; 4],
    /// Line list (pairs of vertices)
    pub lines: Vec<Vertex>,
    /// Triangle list
    pub triangles: Vec<Vertex>,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            lines: Vec::new(),
            triangles: Vec::new(),
        }
    }
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

/// Closed polygon outline as a line list, rotated about `center` by `angle_deg`
pub fn polygon_outline(center: Vec2, outline: &[Vec2], angle_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    let points: Vec<Vec2> = outline
        .iter()
        .map(|p| center + rotate_offset(*p - center, angle_deg))
        .collect();

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }
    vertices
}

fn entity_color(entity: &RenderEntity) -> [f32; 4] {
    match (entity.kind, entity.texture) {
        (EntityTag::Ship, _) => colors::SHIP,
        (EntityTag::Bullet, _) => colors::BULLET,
        (EntityTag::Asteroid, Some(Tier::Large)) => colors::ASTEROID_LARGE,
        (EntityTag::Asteroid, Some(Tier::Medium)) => colors::ASTEROID_MEDIUM,
        (EntityTag::Asteroid, _) => colors::ASTEROID_SMALL,
    }
}

/// Tessellate every entity in the frame.
/// Single-vertex outlines become filled circles; the rest become line loops.
pub fn frame_geometry(frame: &RenderFrame) -> FrameGeometry {
    let mut geometry = FrameGeometry::default();

    for entity in &frame.entities {
        let color = entity_color(entity);
        match entity.outline.len() {
            0 => {}
            1 => geometry
                .triangles
                .extend(circle(entity.position, entity.radius, color, CIRCLE_SEGMENTS)),
            _ => geometry.lines.extend(polygon_outline(
                entity.position,
                &entity.outline,
                entity.angle,
                color,
            )),
        }
    }

    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Command, GameState, Playfield};

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 2.0, colors::BULLET, 8).len(), 24);
    }

    #[test]
    fn test_polygon_outline_rotates_about_center() {
        let center = Vec2::new(100.0, 100.0);
        let outline = [center + Vec2::new(10.0, 0.0), center + Vec2::new(-5.0, 0.0)];
        let lines = polygon_outline(center, &outline, 90.0, colors::SHIP);

        assert_eq!(lines.len(), 4);
        // The +x point swings to straight up the screen
        assert!((lines[0].position[0] - 100.0).abs() < 1e-3);
        assert!((lines[0].position[1] - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_frame_geometry_splits_bullets_and_polygons() {
        let mut state = GameState::new(3, Playfield::default());
        state.handle_command(Command::Confirm);
        if let Some(ship) = state.registry.ship_id() {
            crate::sim::ship::fire(&mut state, ship);
        }

        let geometry = frame_geometry(&RenderFrame::capture(&state));
        assert_eq!(geometry.clear_color, colors::BACKGROUND);
        // One bullet circle
        assert_eq!(geometry.triangles.len(), (CIRCLE_SEGMENTS * 3) as usize);
        // Ship triangle (3 edges) + one asteroid outline
        let asteroid_edges = crate::consts::ASTEROID_OUTLINE_SLICES;
        assert_eq!(geometry.lines.len(), (3 + asteroid_edges) * 2);
    }
}
