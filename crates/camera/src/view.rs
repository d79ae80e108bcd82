use glam::{Mat4, Vec3, Vec4};

/// Right-handed look-at transform built from first principles.
///
/// Basis: `z` points from the target back toward the eye, `x` is the right
/// axis from `up x z`, `y` completes the frame. The rotation carries the
/// basis vectors in its rows, so composing it with a translation by
/// `-position` maps world space into camera space.
///
/// Drift stays bounded because the basis vectors are normalized here; the
/// composed matrix itself is never renormalized.
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z = (position - target).normalize();
    let x = up.normalize().cross(z).normalize();
    let y = z.cross(x);

    // Column-major storage, basis in rows.
    let rotation = Mat4::from_cols(
        Vec4::new(x.x, y.x, z.x, 0.0),
        Vec4::new(x.y, y.y, z.y, 0.0),
        Vec4::new(x.z, y.z, z.z, 0.0),
        Vec4::W,
    );
    let translation = Mat4::from_translation(-position);

    rotation * translation
}
