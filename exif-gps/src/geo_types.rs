use crate::error::GeoError;
use crate::position::GpsPosition;
use geo_types::{point, Point};

impl From<GpsPosition> for Point<f64> {
    fn from(position: GpsPosition) -> Self {
        point!(x: position.lon(), y: position.lat())
    }
}

impl TryFrom<Point<f64>> for GpsPosition {
    type Error = GeoError;

    fn try_from(point: Point<f64>) -> Result<Self, Self::Error> {
        GpsPosition::from_decimal(point.y(), point.x())
    }
}
