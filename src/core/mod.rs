//! Core-Domänentypen: Punkte, Punktsequenz, Messfunktionen, Projektion, Vektor-Layer.

pub mod camera;
pub mod measurement;
/// Core-Datenmodelle für das Messwerkzeug
///
/// - GeoPoint: möglicherweise unvollständiger Punkt (Breite, Länge)
/// - PointSequenceStore: einzige beschreibbare Kopie der Punktsequenz
/// - VectorLayer: Zeichenfläche für die eine Messgeometrie
pub mod point;
pub mod point_sequence;
pub mod projection;
pub mod vector_layer;

pub use camera::Camera2D;
pub use measurement::{AngleUnit, DistanceUnit, UnitPreference};
pub use point::{Axis, GeoPoint};
pub use point_sequence::PointSequenceStore;
pub use vector_layer::{FeatureStyle, GeometryKind, RenderedGeometry, VectorLayer, VectorSurface};
