use std::f32::consts::TAU;

use crate::render::geometry::Geometry;

/// A cone is a cylinder with `radius_top == 0`.
pub struct CylinderOptions {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius_top: 0.5,
            radius_bottom: 0.5,
            height: 1.0,
            radial_segments: 32,
        }
    }
}

#[must_use]
pub fn create_cylinder(options: &CylinderOptions) -> Geometry {
    let segments = options.radial_segments.max(3);
    let half_height = options.height / 2.0;
    let slope = (options.radius_bottom - options.radius_top) / options.height;

    let mut geo = Geometry::new("Cylinder");

    // Side wall: a bottom and a top ring, seam vertex duplicated for UVs
    for (ring, (y, radius)) in [(-half_height, options.radius_bottom), (half_height, options.radius_top)]
        .into_iter()
        .enumerate()
    {
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            geo.positions.push([radius * sin, y, radius * cos]);
            let n = glam::Vec3::new(sin, slope, cos).normalize();
            geo.normals.push(n.to_array());
            geo.uvs.push([u, ring as f32]);
        }
    }

    let row = segments + 1;
    for s in 0..segments {
        let (a, b) = (s, s + 1);
        let (c, d) = (s + row, s + 1 + row);
        geo.indices.extend_from_slice(&[a, b, d, a, d, c]);
    }

    add_cap(&mut geo, segments, -half_height, options.radius_bottom, -1.0);
    if options.radius_top > 0.0 {
        add_cap(&mut geo, segments, half_height, options.radius_top, 1.0);
    }

    geo
}

fn add_cap(geo: &mut Geometry, segments: u32, y: f32, radius: f32, facing: f32) {
    let center = geo.positions.len() as u32;
    geo.positions.push([0.0, y, 0.0]);
    geo.normals.push([0.0, facing, 0.0]);
    geo.uvs.push([0.5, 0.5]);

    for s in 0..=segments {
        let (sin, cos) = (s as f32 / segments as f32 * TAU).sin_cos();
        geo.positions.push([radius * sin, y, radius * cos]);
        geo.normals.push([0.0, facing, 0.0]);
        geo.uvs.push([sin * 0.5 + 0.5, cos * 0.5 + 0.5]);
    }

    for s in 0..segments {
        let (a, b) = (center + 1 + s, center + 2 + s);
        if facing > 0.0 {
            geo.indices.extend_from_slice(&[center, a, b]);
        } else {
            geo.indices.extend_from_slice(&[center, b, a]);
        }
    }
}
