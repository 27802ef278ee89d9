//! Well-known text and binary representation of the geometries, based on [`geozero`].
//!
//! Every geometry that has an OGC counterpart implements [`GeozeroGeometry`], so it can be written with any geozero
//! processor. [`WellKnown`] wraps the WKT and WKB writers, [`Geom::from_text`] and [`Geom::from_binary`] read them
//! back.
//!
//! Types that have no OGC counterpart are written as their closest OGC type: [`LinearRing`] as `LINESTRING` and
//! [`ArrowLineString`] as `MULTILINESTRING`. They are read back as [`LineString`] and [`MultiLineString`]
//! respectively. [`Circle`](crate::Circle) and [`Raster`](crate::Raster) cannot be written at all.
//!
//! [`Point3d`] is written with the `Z` dimension tag. A geometry collection is written in three dimensions when its
//! members are 3d points; collections that mix 2d and 3d members cannot be written, since both formats carry one
//! dimension for the whole collection.

use geozero::error::{GeozeroError, Result as GeozeroResult};
use geozero::wkb::Wkb;
use geozero::wkt::Wkt;
use geozero::{CoordDimensions, GeomProcessor, GeozeroGeometry, ToWkb};

use crate::error::{GeometryError, Result};
use crate::geometry::Geom;
use crate::{
    ArrowLineString, Coord, Curve, Geometry, GeometryCollection, LineString, LinearRing,
    MultiLineString, MultiPoint, MultiPolygon, Point, Point3d, Polygon,
};

/// Conversion of a geometry into WKT and WKB.
pub trait WellKnown: GeozeroGeometry + Sized {
    /// Fails with [`GeometryError::Unsupported`] if the geometry cannot be written so that it reads back unchanged.
    fn check_representable(&self) -> Result<()> {
        Ok(())
    }

    /// Same as [`WellKnown::check_representable`], with the additional limits of well-known text.
    fn check_text_representable(&self) -> Result<()> {
        self.check_representable()
    }

    /// Well-known text of the geometry.
    fn as_text(&self) -> Result<String> {
        self.check_text_representable()?;
        let mut writer = WktWriter::new(self.dims());
        self.process_geom(&mut writer)?;
        let text = writer.into_text();
        log::debug!("Encoded geometry as WKT of {} characters", text.len());
        Ok(text)
    }

    /// Well-known binary of the geometry.
    fn as_binary(&self) -> Result<Vec<u8>> {
        self.check_representable()?;
        let bytes = self.to_wkb(self.dims())?;
        log::debug!("Encoded geometry as WKB of {} bytes", bytes.len());
        Ok(bytes)
    }
}

impl WellKnown for Point {}
impl WellKnown for Point3d {}
impl WellKnown for LineString {}
impl WellKnown for LinearRing {}
impl WellKnown for Polygon {}
impl WellKnown for ArrowLineString {}
impl WellKnown for MultiLineString {}
impl WellKnown for MultiPolygon {}

impl WellKnown for MultiPoint {
    fn check_text_representable(&self) -> Result<()> {
        // WKT has no notation for an empty multipoint member
        if self.iter().any(Point::is_empty) {
            return Err(GeometryError::Unsupported(
                "multipoint with empty members has no well-known text",
            ));
        }

        Ok(())
    }
}

impl WellKnown for GeometryCollection {
    fn check_representable(&self) -> Result<()> {
        collection_layout(self).map(|_| ())
    }

    fn check_text_representable(&self) -> Result<()> {
        self.check_representable()?;
        self.iter().try_for_each(WellKnown::check_text_representable)
    }
}

impl WellKnown for Geom {
    fn check_representable(&self) -> Result<()> {
        layout(self).map(|_| ())
    }

    fn check_text_representable(&self) -> Result<()> {
        match self {
            Geom::MultiPoint(v) => v.check_text_representable(),
            Geom::GeometryCollection(v) => v.check_text_representable(),
            _ => self.check_representable(),
        }
    }
}

impl Geom {
    /// Parses well-known text.
    pub fn from_text(text: &str) -> Result<Geom> {
        log::debug!("Decoding WKT of {} characters", text.len());
        let mut builder = GeomBuilder::default();
        Wkt(text.as_bytes()).process_geom(&mut builder)?;
        builder.finish()
    }

    /// Parses well-known binary (ISO WKB or EWKB without SRID).
    pub fn from_binary(bytes: &[u8]) -> Result<Geom> {
        log::debug!("Decoding WKB of {} bytes", bytes.len());
        let mut builder = GeomBuilder::default();
        Wkb(bytes).process_geom(&mut builder)?;
        builder.finish()
    }
}

/// Coordinate dimensions a geometry is written with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Layout {
    Xy,
    Xyz,
}

/// `None` for geometries without coordinates, which fit into either layout.
fn layout(geom: &Geom) -> Result<Option<Layout>> {
    match geom {
        Geom::Circle(_) => Err(GeometryError::Unsupported(
            "circle has no well-known representation",
        )),
        Geom::Raster(_) => Err(GeometryError::Unsupported(
            "raster has no well-known representation",
        )),
        Geom::Point3d(_) => Ok(Some(Layout::Xyz)),
        Geom::GeometryCollection(c) => collection_layout(c),
        g if Geometry::is_empty(g) => Ok(None),
        _ => Ok(Some(Layout::Xy)),
    }
}

fn collection_layout(collection: &GeometryCollection) -> Result<Option<Layout>> {
    let mut found = None;
    for member in collection {
        // reads back as an empty 2d point
        if matches!(member, Geom::Point3d(p) if p.is_empty()) {
            return Err(GeometryError::Unsupported(
                "empty 3d point cannot be a collection member",
            ));
        }

        match (found, layout(member)?) {
            (_, None) => {}
            (None, member_layout) => found = member_layout,
            (Some(a), Some(b)) if a != b => {
                return Err(GeometryError::Unsupported(
                    "collection mixes 2d and 3d members",
                ))
            }
            _ => {}
        }
    }

    Ok(found)
}

fn dims_of(layout: Result<Option<Layout>>) -> CoordDimensions {
    match layout {
        Ok(Some(Layout::Xyz)) => CoordDimensions::xyz(),
        _ => CoordDimensions::xy(),
    }
}

/// Geozero processor writing WKT with dimension tags (`POINT Z (1 2 3)`).
struct WktWriter {
    out: String,
    z: bool,
    // whether each open geometry wrote an opening parenthesis
    open: Vec<bool>,
    // index of a point whose coordinate is not yet written
    pending_point: Option<usize>,
}

impl WktWriter {
    fn new(dims: CoordDimensions) -> Self {
        Self {
            out: String::new(),
            z: dims.z,
            open: Vec::new(),
            pending_point: None,
        }
    }

    fn into_text(self) -> String {
        self.out
    }

    fn separator(&mut self, idx: usize) {
        if idx > 0 {
            self.out.push(',');
        }
    }

    fn begin(&mut self, tag: Option<&str>, size: usize, idx: usize) {
        self.separator(idx);
        if let Some(tag) = tag {
            self.out.push_str(tag);
            if self.z {
                self.out.push_str(" Z");
            }
            if size == 0 || self.z {
                self.out.push(' ');
            }
        }

        if size == 0 {
            self.out.push_str("EMPTY");
        } else {
            self.out.push('(');
        }
        self.open.push(size > 0);
    }

    fn end(&mut self) {
        if self.open.pop() == Some(true) {
            self.out.push(')');
        }
    }

    fn ordinates(&mut self, x: f64, y: f64, z: Option<f64>) {
        self.out.push_str(&format!("{x} {y}"));
        if self.z {
            self.out.push_str(&format!(" {}", z.unwrap_or(0.0)));
        }
    }

    fn write_coord(&mut self, x: f64, y: f64, z: Option<f64>, idx: usize) {
        match self.pending_point.take() {
            Some(point_idx) if x.is_nan() && y.is_nan() => {
                self.begin(Some("POINT"), 0, point_idx);
                self.end();
            }
            Some(point_idx) => {
                self.begin(Some("POINT"), 1, point_idx);
                self.ordinates(x, y, z);
                self.end();
            }
            None => {
                self.separator(idx);
                self.ordinates(x, y, z);
            }
        }
    }
}

impl GeomProcessor for WktWriter {
    fn dimensions(&self) -> CoordDimensions {
        if self.z {
            CoordDimensions::xyz()
        } else {
            CoordDimensions::xy()
        }
    }

    fn multi_dim(&self) -> bool {
        self.z
    }

    fn xy(&mut self, x: f64, y: f64, idx: usize) -> GeozeroResult<()> {
        self.write_coord(x, y, None, idx);
        Ok(())
    }

    fn coordinate(
        &mut self,
        x: f64,
        y: f64,
        z: Option<f64>,
        _m: Option<f64>,
        _t: Option<f64>,
        _tm: Option<u64>,
        idx: usize,
    ) -> GeozeroResult<()> {
        self.write_coord(x, y, z, idx);
        Ok(())
    }

    fn empty_point(&mut self, idx: usize) -> GeozeroResult<()> {
        self.begin(Some("POINT"), 0, idx);
        self.end();
        Ok(())
    }

    fn point_begin(&mut self, idx: usize) -> GeozeroResult<()> {
        self.pending_point = Some(idx);
        Ok(())
    }

    fn point_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        match self.pending_point.take() {
            Some(_) => Err(GeozeroError::Geometry("point without coordinate".into())),
            None => Ok(()),
        }
    }

    fn multipoint_begin(&mut self, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(Some("MULTIPOINT"), size, idx);
        Ok(())
    }

    fn multipoint_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }

    fn linestring_begin(&mut self, tagged: bool, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(tagged.then_some("LINESTRING"), size, idx);
        Ok(())
    }

    fn linestring_end(&mut self, _tagged: bool, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }

    fn multilinestring_begin(&mut self, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(Some("MULTILINESTRING"), size, idx);
        Ok(())
    }

    fn multilinestring_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }

    fn polygon_begin(&mut self, tagged: bool, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(tagged.then_some("POLYGON"), size, idx);
        Ok(())
    }

    fn polygon_end(&mut self, _tagged: bool, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }

    fn multipolygon_begin(&mut self, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(Some("MULTIPOLYGON"), size, idx);
        Ok(())
    }

    fn multipolygon_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }

    fn geometrycollection_begin(&mut self, size: usize, idx: usize) -> GeozeroResult<()> {
        self.begin(Some("GEOMETRYCOLLECTION"), size, idx);
        Ok(())
    }

    fn geometrycollection_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.end();
        Ok(())
    }
}

fn process_coord<P: GeomProcessor>(
    processor: &mut P,
    coord: &Coord,
    z: Option<f64>,
    idx: usize,
) -> GeozeroResult<()> {
    if processor.multi_dim() {
        processor.coordinate(coord.x, coord.y, z, None, None, None, idx)
    } else {
        processor.xy(coord.x, coord.y, idx)
    }
}

// Empty points are written with NaN ordinates, the ISO WKB convention.
const EMPTY_COORD: Coord = Coord::new(f64::NAN, f64::NAN);

fn process_point<P: GeomProcessor>(
    point: &Point,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.point_begin(idx)?;
    process_coord(processor, &point.try_coord().unwrap_or(EMPTY_COORD), None, 0)?;
    processor.point_end(idx)
}

fn process_point_3d<P: GeomProcessor>(
    point: &Point3d,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    let (xy, z) = match point.coord() {
        Ok(c) => (c.xy(), c.z),
        Err(_) => (EMPTY_COORD, f64::NAN),
    };

    processor.point_begin(idx)?;
    process_coord(processor, &xy, Some(z), 0)?;
    processor.point_end(idx)
}

fn process_curve<P: GeomProcessor>(
    vertices: &[Coord],
    tagged: bool,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.linestring_begin(tagged, vertices.len(), idx)?;
    for (i, vertex) in vertices.iter().enumerate() {
        process_coord(processor, vertex, None, i)?;
    }
    processor.linestring_end(tagged, idx)
}

fn process_polygon<P: GeomProcessor>(
    polygon: &Polygon,
    tagged: bool,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    if Geometry::is_empty(polygon) {
        processor.polygon_begin(tagged, 0, idx)?;
        return processor.polygon_end(tagged, idx);
    }

    processor.polygon_begin(tagged, polygon.num_interior_rings() + 1, idx)?;
    for (i, ring) in polygon.iter_rings().enumerate() {
        process_curve(ring.vertices(), false, processor, i)?;
    }
    processor.polygon_end(tagged, idx)
}

fn process_lines<P: GeomProcessor>(
    lines: &[LineString],
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.multilinestring_begin(lines.len(), idx)?;
    for (i, line) in lines.iter().enumerate() {
        process_curve(line.vertices(), false, processor, i)?;
    }
    processor.multilinestring_end(idx)
}

fn process_multi_point<P: GeomProcessor>(
    points: &MultiPoint,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.multipoint_begin(points.num_points(), idx)?;
    for (i, point) in points.iter().enumerate() {
        let coord = point.try_coord().unwrap_or(EMPTY_COORD);
        process_coord(processor, &coord, None, i)?;
    }
    processor.multipoint_end(idx)
}

fn process_multi_polygon<P: GeomProcessor>(
    polygons: &MultiPolygon,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.multipolygon_begin(polygons.num_polygons(), idx)?;
    for (i, polygon) in polygons.iter().enumerate() {
        process_polygon(polygon, false, processor, i)?;
    }
    processor.multipolygon_end(idx)
}

fn process_collection<P: GeomProcessor>(
    collection: &GeometryCollection,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    processor.geometrycollection_begin(collection.num_geometries(), idx)?;
    for (i, member) in collection.iter().enumerate() {
        process_member(member, processor, i)?;
    }
    processor.geometrycollection_end(idx)
}

fn process_member<P: GeomProcessor>(
    geom: &Geom,
    processor: &mut P,
    idx: usize,
) -> GeozeroResult<()> {
    match geom {
        Geom::Point(v) => process_point(v, processor, idx),
        Geom::Point3d(v) => process_point_3d(v, processor, idx),
        Geom::LineString(v) => process_curve(v.vertices(), true, processor, idx),
        Geom::LinearRing(v) => process_curve(v.vertices(), true, processor, idx),
        Geom::Polygon(v) => process_polygon(v, true, processor, idx),
        Geom::ArrowLineString(v) => process_lines(v.lines().lines(), processor, idx),
        Geom::MultiPoint(v) => process_multi_point(v, processor, idx),
        Geom::MultiLineString(v) => process_lines(v.lines(), processor, idx),
        Geom::MultiPolygon(v) => process_multi_polygon(v, processor, idx),
        Geom::GeometryCollection(v) => process_collection(v, processor, idx),
        Geom::Circle(_) => Err(GeozeroError::Geometry(
            "circle has no well-known representation".into(),
        )),
        Geom::Raster(_) => Err(GeozeroError::Geometry(
            "raster has no well-known representation".into(),
        )),
    }
}

impl GeozeroGeometry for Point {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_point(self, processor, 0)
    }
}

impl GeozeroGeometry for Point3d {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_point_3d(self, processor, 0)
    }

    fn dims(&self) -> CoordDimensions {
        CoordDimensions::xyz()
    }
}

impl GeozeroGeometry for LineString {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_curve(self.vertices(), true, processor, 0)
    }
}

impl GeozeroGeometry for LinearRing {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_curve(self.vertices(), true, processor, 0)
    }
}

impl GeozeroGeometry for Polygon {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_polygon(self, true, processor, 0)
    }
}

impl GeozeroGeometry for ArrowLineString {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_lines(self.lines().lines(), processor, 0)
    }
}

impl GeozeroGeometry for MultiPoint {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_multi_point(self, processor, 0)
    }
}

impl GeozeroGeometry for MultiLineString {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_lines(self.lines(), processor, 0)
    }
}

impl GeozeroGeometry for MultiPolygon {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_multi_polygon(self, processor, 0)
    }
}

impl GeozeroGeometry for GeometryCollection {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_collection(self, processor, 0)
    }

    fn dims(&self) -> CoordDimensions {
        dims_of(collection_layout(self))
    }
}

impl GeozeroGeometry for Geom {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> GeozeroResult<()> {
        process_member(self, processor, 0)
    }

    fn dims(&self) -> CoordDimensions {
        dims_of(layout(self))
    }
}

/// Geometry under construction.
enum Frame {
    Point(Option<(Coord, Option<f64>)>),
    MultiPoint(Vec<Point>),
    LineString(Vec<Coord>),
    Polygon(Vec<LinearRing>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    Collection(Vec<Geom>),
}

/// Processor that builds a [`Geom`] from geozero events.
#[derive(Default)]
struct GeomBuilder {
    stack: Vec<Frame>,
    result: Option<Geom>,
    dropped_z: bool,
}

fn unexpected(event: &str) -> GeozeroError {
    GeozeroError::Geometry(format!("unexpected {event} in the geometry stream"))
}

fn point_from(coord: Coord) -> Point {
    if coord.x.is_nan() && coord.y.is_nan() {
        Point::empty()
    } else {
        coord.into()
    }
}

impl GeomBuilder {
    fn finish(self) -> Result<Geom> {
        if !self.stack.is_empty() {
            return Err(GeozeroError::Geometry("incomplete geometry".into()).into());
        }

        if self.dropped_z {
            log::warn!("Z ordinates of curve vertices are not supported and were dropped");
        }

        self.result
            .ok_or_else(|| GeozeroError::Geometry("no geometry found".into()).into())
    }

    fn complete(&mut self, geom: Geom) -> GeozeroResult<()> {
        match self.stack.last_mut() {
            None => {
                if self.result.is_some() {
                    return Err(unexpected("second geometry"));
                }
                self.result = Some(geom);
            }
            Some(Frame::Collection(members)) => members.push(geom),
            Some(Frame::MultiPoint(points)) => match geom {
                Geom::Point(p) => points.push(p),
                Geom::Point3d(p) => {
                    self.dropped_z = true;
                    points.push(p.as_point());
                }
                _ => return Err(unexpected("multipoint member")),
            },
            Some(Frame::MultiLineString(lines)) => match geom {
                Geom::LineString(l) => lines.push(l),
                _ => return Err(unexpected("multilinestring member")),
            },
            Some(Frame::Polygon(rings)) => match geom {
                Geom::LineString(l) => rings.push(l.into()),
                _ => return Err(unexpected("polygon ring")),
            },
            Some(Frame::MultiPolygon(polygons)) => match geom {
                Geom::Polygon(p) => polygons.push(p),
                _ => return Err(unexpected("multipolygon member")),
            },
            Some(Frame::Point(_)) | Some(Frame::LineString(_)) => {
                return Err(unexpected("nested geometry"))
            }
        }

        Ok(())
    }

    fn pop(&mut self) -> GeozeroResult<Frame> {
        self.stack.pop().ok_or_else(|| unexpected("geometry end"))
    }

    fn add_coord(&mut self, coord: Coord, z: Option<f64>) -> GeozeroResult<()> {
        match self.stack.last_mut() {
            Some(Frame::Point(slot)) => *slot = Some((coord, z)),
            Some(Frame::MultiPoint(points)) => {
                self.dropped_z |= z.is_some();
                points.push(point_from(coord));
            }
            Some(Frame::LineString(vertices)) => {
                self.dropped_z |= z.is_some();
                vertices.push(coord);
            }
            _ => return Err(unexpected("coordinate")),
        }

        Ok(())
    }
}

impl GeomProcessor for GeomBuilder {
    fn dimensions(&self) -> CoordDimensions {
        CoordDimensions::xyz()
    }

    fn xy(&mut self, x: f64, y: f64, _idx: usize) -> GeozeroResult<()> {
        self.add_coord(Coord::new(x, y), None)
    }

    fn coordinate(
        &mut self,
        x: f64,
        y: f64,
        z: Option<f64>,
        _m: Option<f64>,
        _t: Option<f64>,
        _tm: Option<u64>,
        _idx: usize,
    ) -> GeozeroResult<()> {
        self.add_coord(Coord::new(x, y), z)
    }

    fn empty_point(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.complete(Geom::Point(Point::empty()))
    }

    fn point_begin(&mut self, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::Point(None));
        Ok(())
    }

    fn point_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        let Frame::Point(value) = self.pop()? else {
            return Err(unexpected("point end"));
        };

        let geom = match value {
            None => Geom::Point(Point::empty()),
            Some((c, _)) if c.x.is_nan() && c.y.is_nan() => Geom::Point(Point::empty()),
            Some((c, Some(z))) => Geom::Point3d(Point3d::new(c.x, c.y, z)),
            Some((c, None)) => Geom::Point(c.into()),
        };
        self.complete(geom)
    }

    fn multipoint_begin(&mut self, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::MultiPoint(Vec::with_capacity(size)));
        Ok(())
    }

    fn multipoint_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        let Frame::MultiPoint(points) = self.pop()? else {
            return Err(unexpected("multipoint end"));
        };
        self.complete(Geom::MultiPoint(MultiPoint::new(points)))
    }

    fn linestring_begin(&mut self, _tagged: bool, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::LineString(Vec::with_capacity(size)));
        Ok(())
    }

    fn linestring_end(&mut self, _tagged: bool, _idx: usize) -> GeozeroResult<()> {
        let Frame::LineString(vertices) = self.pop()? else {
            return Err(unexpected("linestring end"));
        };
        self.complete(Geom::LineString(LineString::new(vertices)))
    }

    fn multilinestring_begin(&mut self, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::MultiLineString(Vec::with_capacity(size)));
        Ok(())
    }

    fn multilinestring_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        let Frame::MultiLineString(lines) = self.pop()? else {
            return Err(unexpected("multilinestring end"));
        };
        self.complete(Geom::MultiLineString(MultiLineString::new(lines)))
    }

    fn polygon_begin(&mut self, _tagged: bool, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::Polygon(Vec::with_capacity(size)));
        Ok(())
    }

    fn polygon_end(&mut self, _tagged: bool, _idx: usize) -> GeozeroResult<()> {
        let Frame::Polygon(rings) = self.pop()? else {
            return Err(unexpected("polygon end"));
        };

        let mut rings = rings.into_iter();
        let polygon = match rings.next() {
            Some(exterior) => Polygon::with_interiors(exterior, rings.collect()),
            None => Polygon::default(),
        };
        self.complete(Geom::Polygon(polygon))
    }

    fn multipolygon_begin(&mut self, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::MultiPolygon(Vec::with_capacity(size)));
        Ok(())
    }

    fn multipolygon_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        let Frame::MultiPolygon(polygons) = self.pop()? else {
            return Err(unexpected("multipolygon end"));
        };
        self.complete(Geom::MultiPolygon(MultiPolygon::new(polygons)))
    }

    fn geometrycollection_begin(&mut self, size: usize, _idx: usize) -> GeozeroResult<()> {
        self.stack.push(Frame::Collection(Vec::with_capacity(size)));
        Ok(())
    }

    fn geometrycollection_end(&mut self, _idx: usize) -> GeozeroResult<()> {
        let Frame::Collection(members) = self.pop()? else {
            return Err(unexpected("geometry collection end"));
        };
        self.complete(Geom::GeometryCollection(GeometryCollection::new(members)))
    }
}
