use crate::render::geometry::Geometry;

pub struct PlaneOptions {
    pub width: f32,
    pub height: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            width_segments: 1,
            height_segments: 1,
        }
    }
}

/// XY plane facing +Z, centred on the origin.
#[must_use]
pub fn create_plane(options: &PlaneOptions) -> Geometry {
    let grid_x = options.width_segments.max(1);
    let grid_y = options.height_segments.max(1);
    let row = grid_x + 1;

    let segment_width = options.width / grid_x as f32;
    let segment_height = options.height / grid_y as f32;

    let mut geo = Geometry::new("Plane");

    for iy in 0..=grid_y {
        // -y so that v runs top to bottom
        let y = iy as f32 * segment_height - options.height / 2.0;
        for ix in 0..=grid_x {
            let x = ix as f32 * segment_width - options.width / 2.0;
            geo.positions.push([x, -y, 0.0]);
            geo.normals.push([0.0, 0.0, 1.0]);
            geo.uvs.push([ix as f32 / grid_x as f32, 1.0 - iy as f32 / grid_y as f32]);
        }
    }

    for iy in 0..grid_y {
        for ix in 0..grid_x {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = b + 1;
            let d = a + 1;
            geo.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    geo
}
