use crate::render::geometry::Geometry;

/// Per-face basis: (normal, u axis, v axis).
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
];

#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let half = [width / 2.0, height / 2.0, depth / 2.0];

    let mut geo = Geometry::new("Box");
    geo.positions.reserve(24);

    // 4 vertices per face so each face gets flat normals and its own UVs
    for (face, (n, u, v)) in FACES.iter().enumerate() {
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p: [f32; 3] = std::array::from_fn(|i| (n[i] + su * u[i] + sv * v[i]) * half[i]);
            geo.positions.push(p);
            geo.normals.push(*n);
            geo.uvs.push([(su + 1.0) / 2.0, 1.0 - (sv + 1.0) / 2.0]);
        }

        // CCW winding
        let base = face as u32 * 4;
        geo.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    geo
}
