use crate::error::{GeometryError, Result};
use crate::geometry::Geom;
use crate::{BoundingBox, Geometry, GeometryType, Point, Transform};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered set of geometries of any type.
///
/// The collection is empty when it has no members or when all of its members are empty. Bounding box, distance and
/// containment skip empty members.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryCollection {
    geometries: Vec<Geom>,
}

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(geometries: Vec<Geom>) -> Self {
        Self { geometries }
    }

    /// Members of the collection.
    pub fn geometries(&self) -> &[Geom] {
        &self.geometries
    }

    /// Number of members, including empty ones.
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// Member with the given index.
    pub fn geometry(&self, index: usize) -> Option<&Geom> {
        self.geometries.get(index)
    }

    /// Mutable reference to the member with the given index.
    pub fn geometry_mut(&mut self, index: usize) -> Option<&mut Geom> {
        self.geometries.get_mut(index)
    }

    /// Iterates over the members.
    pub fn iter(&self) -> std::slice::Iter<'_, Geom> {
        self.geometries.iter()
    }

    /// Appends a member.
    pub fn push(&mut self, geometry: impl Into<Geom>) {
        self.geometries.push(geometry.into());
    }

    /// Removes and returns a member.
    pub fn remove(&mut self, index: usize) -> Option<Geom> {
        (index < self.geometries.len()).then(|| self.geometries.remove(index))
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.geometries.clear();
    }

    /// Consumes the collection returning its members.
    pub fn into_geometries(self) -> Vec<Geom> {
        self.geometries
    }
}

impl From<Vec<Geom>> for GeometryCollection {
    fn from(value: Vec<Geom>) -> Self {
        Self::new(value)
    }
}

impl<G: Into<Geom>> FromIterator<G> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = G>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Geom;
    type IntoIter = std::slice::Iter<'a, Geom>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}

impl Geometry for GeometryCollection {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    fn is_empty(&self) -> bool {
        all_empty(&self.geometries)
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        join_bounding_boxes(&self.geometries)
    }

    fn distance(&self, point: &Point) -> Result<f64> {
        min_distance(&self.geometries, point)
    }

    fn contains(&self, point: &Point) -> Result<bool> {
        any_contains(&self.geometries, point)
    }
}

impl Transform for GeometryCollection {
    fn rotate(&self, degrees: f64, center: &Point) -> Result<Self> {
        Ok(Self::new(transform_all(&self.geometries, |g| {
            g.rotate(degrees, center)
        })?))
    }

    fn offset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self::new(transform_all(&self.geometries, |g| {
            g.offset(dx, dy)
        })?))
    }
}

pub(crate) fn all_empty<G: Geometry>(members: &[G]) -> bool {
    members.iter().all(|g| g.is_empty())
}

pub(crate) fn join_bounding_boxes<G: Geometry>(members: &[G]) -> Option<BoundingBox> {
    BoundingBox::join_all(members.iter().filter_map(|g| g.bounding_box()))
}

/// Minimum distance over non-empty members. Fails with [`GeometryError::EmptyGeometry`] if there are none.
pub(crate) fn min_distance<G: Geometry>(members: &[G], point: &Point) -> Result<f64> {
    let mut min: Option<f64> = None;
    for member in members.iter().filter(|g| !g.is_empty()) {
        let d = member.distance(point)?;
        min = Some(min.map_or(d, |m| m.min(d)));
    }

    min.ok_or(GeometryError::EmptyGeometry)
}

pub(crate) fn any_contains<G: Geometry>(members: &[G], point: &Point) -> Result<bool> {
    point.coord()?;
    for member in members {
        if member.contains(point)? {
            return Ok(true);
        }
    }

    Ok(false)
}

pub(crate) fn transform_all<G>(members: &[G], f: impl Fn(&G) -> Result<G>) -> Result<Vec<G>> {
    members.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Circle, Coord, LineString};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn collection() -> GeometryCollection {
        [
            Geom::from(Point::new(10.0, 10.0)),
            Geom::from(Circle::new(0.0, 0.0, 1.0).unwrap()),
            Geom::from(LineString::new(vec![
                Coord::new(-5.0, 0.0),
                Coord::new(-5.0, 5.0),
            ])),
            Geom::from(Point::empty()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn bounding_box_joins_non_empty_members() {
        assert_eq!(
            collection().bounding_box(),
            Some(BoundingBox::new(-5.0, -1.0, 10.0, 10.0))
        );
        assert_eq!(GeometryCollection::default().bounding_box(), None);
    }

    #[test]
    fn distance_is_minimum_over_members() {
        let collection = collection();
        assert_eq!(collection.distance(&Point::new(3.0, 0.0)).unwrap(), 2.0);
        assert_abs_diff_eq!(
            collection.distance(&Point::new(-6.0, 2.0)).unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(collection.distance(&Point::new(10.0, 10.0)).unwrap(), 0.0);
    }

    #[test]
    fn contains_any_member() {
        let collection = collection();
        assert!(collection.contains(&Point::new(0.5, 0.5)).unwrap());
        assert!(collection.contains(&Point::new(-5.0, 1.0)).unwrap());
        assert!(!collection.contains(&Point::new(5.0, 5.0)).unwrap());
        assert_matches!(
            collection.contains(&Point::empty()),
            Err(GeometryError::EmptyGeometry)
        );
    }

    #[test]
    fn emptiness() {
        let mut collection = GeometryCollection::default();
        assert!(collection.is_empty());
        assert_matches!(
            collection.distance(&Point::new(0.0, 0.0)),
            Err(GeometryError::EmptyGeometry)
        );
        assert!(!collection.contains(&Point::new(0.0, 0.0)).unwrap());

        collection.push(Point::empty());
        collection.push(LineString::default());
        assert!(collection.is_empty());
        assert_eq!(collection.num_geometries(), 2);
        assert_matches!(
            collection.distance(&Point::new(0.0, 0.0)),
            Err(GeometryError::EmptyGeometry)
        );

        collection.push(Point::new(1.0, 1.0));
        assert!(!collection.is_empty());
    }

    #[test]
    fn access() {
        let mut collection = collection();
        assert_eq!(collection.num_geometries(), 4);
        assert_eq!(
            collection.geometry(0),
            Some(&Geom::Point(Point::new(10.0, 10.0)))
        );
        assert_eq!(collection.iter().count(), 4);
        assert_eq!(
            collection.remove(3),
            Some(Geom::Point(Point::empty()))
        );
        assert_eq!(collection.remove(3), None);
        assert_eq!((&collection).into_iter().count(), 3);
    }

    #[test]
    fn equality_is_ordered() {
        let a = collection();
        let mut b = a.clone();
        assert_eq!(a, b);

        let first = b.remove(0).unwrap();
        b.push(first);
        assert_ne!(a, b);
    }

    #[test]
    fn transform() {
        let moved = collection().offset(1.0, 1.0).unwrap();
        assert_eq!(
            moved.geometry(0),
            Some(&Geom::Point(Point::new(11.0, 11.0)))
        );
        assert_eq!(
            moved.bounding_box(),
            Some(BoundingBox::new(-4.0, 0.0, 11.0, 11.0))
        );
        assert_eq!(moved.geometry(3), Some(&Geom::Point(Point::empty())));
    }
}
