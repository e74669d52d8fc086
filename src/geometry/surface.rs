use crate::dictionary::Dictionary;
use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::region::Region;

slotmap::new_key_type! {
    /// Unique identifier for a surface in the geometry store.
    pub struct SurfaceId;
}

/// The shape behind a surface.
///
/// Analytic shapes carry their defining points; `Stl` surfaces carry
/// nothing here since only their configuration is classified.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceKind {
    /// Axis-aligned box, also used for the background block.
    Box { min: Point3, max: Point3 },
    /// Finite cylinder between two axis points.
    Cylinder {
        point1: Point3,
        point2: Point3,
        radius: f64,
    },
    /// Sphere.
    Sphere { center: Point3, radius: f64 },
    /// Annulus between two axis points.
    Ring {
        point1: Point3,
        point2: Point3,
        inner_radius: f64,
        outer_radius: f64,
    },
    /// Infinite plane with a unit normal.
    Plane { origin: Point3, normal: Vector3 },
    /// Triangulated surface read from an STL file.
    Stl,
    /// One solid of a multi-solid STL; inherits patch behaviour from its parent.
    Solid { parent: SurfaceId },
}

impl SurfaceKind {
    /// Creates a box from two corners.
    ///
    /// # Errors
    ///
    /// Returns an error if `max` is not strictly greater than `min` on every axis.
    pub fn bounding_box(min: Point3, max: Point3) -> Result<Self> {
        let extent = max - min;
        if extent.iter().any(|d| *d < TOLERANCE) {
            return Err(GeometryError::Degenerate("box max must exceed min".into()).into());
        }
        Ok(Self::Box { min, max })
    }

    /// Creates a cylinder.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the axis points coincide.
    pub fn cylinder(point1: Point3, point2: Point3, radius: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        check_axis(&point1, &point2)?;
        Ok(Self::Cylinder {
            point1,
            point2,
            radius,
        })
    }

    /// Creates a sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn sphere(center: Point3, radius: f64) -> Result<Self> {
        check_positive("radius", radius)?;
        Ok(Self::Sphere { center, radius })
    }

    /// Creates a ring.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is not positive, the inner radius
    /// is not smaller than the outer one, or the axis points coincide.
    pub fn ring(
        point1: Point3,
        point2: Point3,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Result<Self> {
        check_positive("inner_radius", inner_radius)?;
        check_positive("outer_radius", outer_radius)?;
        if inner_radius >= outer_radius {
            return Err(
                GeometryError::Degenerate("ring inner radius must be below outer".into()).into(),
            );
        }
        check_axis(&point1, &point2)?;
        Ok(Self::Ring {
            point1,
            point2,
            inner_radius,
            outer_radius,
        })
    }

    /// Creates a plane from an origin and a normal; the normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn plane(origin: Point3, normal: Vector3) -> Result<Self> {
        let len = normal.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::Plane {
            origin,
            normal: normal / len,
        })
    }

    /// Returns `true` for planes.
    #[must_use]
    pub fn is_plane(&self) -> bool {
        matches!(self, Self::Plane { .. })
    }

    /// Returns `true` for STL surfaces.
    #[must_use]
    pub fn is_stl(&self) -> bool {
        matches!(self, Self::Stl)
    }

    /// Returns `true` for STL solids.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid { .. })
    }

    /// Returns the parent surface of a solid.
    #[must_use]
    pub fn parent(&self) -> Option<SurfaceId> {
        match self {
            Self::Solid { parent } => Some(*parent),
            _ => None,
        }
    }

    /// Returns a short keyword for diagnostics.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Box { .. } => "box",
            Self::Cylinder { .. } => "cylinder",
            Self::Sphere { .. } => "sphere",
            Self::Ring { .. } => "ring",
            Self::Plane { .. } => "plane",
            Self::Stl => "stl",
            Self::Solid { .. } => "solid",
        }
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value < TOLERANCE {
        return Err(GeometryError::NonPositive { parameter, value }.into());
    }
    Ok(())
}

fn check_axis(point1: &Point3, point2: &Point3) -> Result<()> {
    if (point2 - point1).norm() < TOLERANCE {
        return Err(GeometryError::Degenerate("axis points coincide".into()).into());
    }
    Ok(())
}

/// A named geometric entity with its meshing configuration.
///
/// A surface carries up to three dictionaries:
/// - the *surface* dictionary (surface refinement, e.g. `level`),
/// - the *volume* dictionary (volume refinement, `mode` and `levels`),
/// - the *zone* dictionary (cell zone, face zone and `faceType`).
#[derive(Debug, Clone)]
pub struct Surface {
    name: String,
    kind: SurfaceKind,
    singleton: bool,
    regions: Vec<Region>,
    surface_dictionary: Option<Dictionary>,
    volume_dictionary: Option<Dictionary>,
    zone_dictionary: Option<Dictionary>,
}

impl Surface {
    /// Creates a singleton surface with no regions and no configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SurfaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            singleton: true,
            regions: Vec::new(),
            surface_dictionary: None,
            volume_dictionary: None,
            zone_dictionary: None,
        }
    }

    /// Sets the regions. The surface stays a singleton only with at most one region.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.singleton = regions.len() <= 1;
        self.regions = regions;
        self
    }

    /// Overrides the singleton flag.
    #[must_use]
    pub fn with_singleton(mut self, singleton: bool) -> Self {
        self.singleton = singleton;
        self
    }

    /// Sets the surface refinement dictionary.
    #[must_use]
    pub fn with_surface_dictionary(mut self, dict: Dictionary) -> Self {
        self.surface_dictionary = Some(dict);
        self
    }

    /// Sets the volume refinement dictionary.
    #[must_use]
    pub fn with_volume_dictionary(mut self, dict: Dictionary) -> Self {
        self.volume_dictionary = Some(dict);
        self
    }

    /// Sets the zone dictionary.
    #[must_use]
    pub fn with_zone_dictionary(mut self, dict: Dictionary) -> Self {
        self.zone_dictionary = Some(dict);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &SurfaceKind {
        &self.kind
    }

    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.singleton
    }

    #[must_use]
    pub fn has_regions(&self) -> bool {
        !self.regions.is_empty()
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn surface_dictionary(&self) -> Option<&Dictionary> {
        self.surface_dictionary.as_ref()
    }

    #[must_use]
    pub fn volume_dictionary(&self) -> Option<&Dictionary> {
        self.volume_dictionary.as_ref()
    }

    #[must_use]
    pub fn zone_dictionary(&self) -> Option<&Dictionary> {
        self.zone_dictionary.as_ref()
    }

    /// Mutable access to the surface dictionary slot.
    pub fn surface_dictionary_mut(&mut self) -> &mut Option<Dictionary> {
        &mut self.surface_dictionary
    }

    /// Mutable access to the volume dictionary slot.
    pub fn volume_dictionary_mut(&mut self) -> &mut Option<Dictionary> {
        &mut self.volume_dictionary
    }

    /// Mutable access to the zone dictionary slot.
    pub fn zone_dictionary_mut(&mut self) -> &mut Option<Dictionary> {
        &mut self.zone_dictionary
    }
}
