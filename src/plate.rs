use glam::Vec2;

#[derive(Debug, Clone)]
pub struct TectonicPlate {
    pub id: usize,
    /// Axial cell of the plate's Voronoi site.
    pub site: (i32, i32),
    /// Drift velocity in pixel space.
    pub velocity: Vec2,
}
