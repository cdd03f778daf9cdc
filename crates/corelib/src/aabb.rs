use crate::Vec3;

/// Axis-aligned box, closed intervals on all three axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of given half extents centered at `origin`.
    #[inline]
    pub fn centered(origin: Vec3, half_extents: Vec3) -> Self {
        Self::new(origin - half_extents, origin + half_extents)
    }

    /// Smallest box containing every point. `None` for an empty set.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::new(first, first);
        for point in iter {
            aabb.min = aabb.min.min(point);
            aabb.max = aabb.max.max(point);
        }
        Some(aabb)
    }

    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap test on closed intervals: touching boxes count as a hit.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.max.x >= other.min.x
            && self.min.x <= other.max.x
            && self.max.y >= other.min.y
            && self.min.y <= other.max.y
            && self.max.z >= other.min.z
            && self.min.z <= other.max.z
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[inline]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    fn unit_at(origin: Vec3) -> Aabb {
        Aabb::centered(origin, Vec3::splat(0.5))
    }

    #[test]
    fn from_points_covers_all_points() {
        let aabb = Aabb::from_points([
            vec3(1.0, -2.0, 0.5),
            vec3(-1.0, 4.0, 0.0),
            vec3(0.0, 0.0, -3.0),
        ])
        .expect("non-empty");
        assert_eq!(aabb.min, vec3(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, vec3(1.0, 4.0, 0.5));
    }

    #[test]
    fn from_points_of_empty_set_is_none() {
        assert!(Aabb::from_points([]).is_none());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = unit_at(vec3(0.0, 0.0, 0.0));
        let b = unit_at(vec3(0.75, 0.0, 0.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = unit_at(vec3(0.0, 0.0, 0.0));
        let b = unit_at(vec3(2.0, 0.0, 0.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = unit_at(vec3(0.0, 0.0, 0.0));
        let b = unit_at(vec3(1.0, 0.0, 0.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn union_and_extents() {
        let a = unit_at(vec3(0.0, 0.0, 0.0));
        let b = unit_at(vec3(3.0, 0.0, 0.0));
        let u = a.union(&b);
        assert_eq!(u.min, vec3(-0.5, -0.5, -0.5));
        assert_eq!(u.max, vec3(3.5, 0.5, 0.5));
        assert_eq!(u.center(), vec3(1.5, 0.0, 0.0));
        assert_eq!(u.half_extents(), vec3(2.0, 0.5, 0.5));
    }

    #[test]
    fn translated_moves_both_corners() {
        let a = unit_at(Vec3::ZERO).translated(vec3(1.0, 2.0, 3.0));
        assert_eq!(a.center(), vec3(1.0, 2.0, 3.0));
    }
}
