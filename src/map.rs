//! The campus map on the home page.
//!
//! The page always renders the static campus map image. Alongside it, the map container
//! carries a `data-map` attribute with [`MapSettings`] as JSON, so a script in the host page
//! can swap in an interactive satellite map with one marker per truck.

use serde::Serialize;

use crate::data::{TRUCKS, Truck};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

/// Brooklyn College.
pub const CENTER: LatLng = LatLng::new(40.631221, -73.952560);

pub const CAMPUS_BOUNDS: Bounds = Bounds {
    north: 40.63271,
    south: 40.629,
    east: -73.946434,
    west: -73.956836,
};

pub const DEFAULT_ZOOM: u8 = 17;
pub const MIN_ZOOM: u8 = 16;
pub const MAX_ZOOM: u8 = 24;
pub const LABEL_COLOR: &str = "#7e2626";

/// Marker icon dimensions. Some truck logos are distorted when drawn square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSize {
    #[default]
    Standard,
    /// Wider than tall.
    Wide,
    Small,
}

impl MarkerSize {
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            MarkerSize::Standard => (60.0, 60.0),
            MarkerSize::Wide => (80.0, 50.0),
            MarkerSize::Small => (45.0, 45.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub width: f64,
    pub height: f64,
    /// The icon is anchored at its centre.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl MarkerIcon {
    pub fn for_truck(truck: &Truck) -> Self {
        let (width, height) = truck.marker.dimensions();
        Self {
            url: truck.icon,
            width,
            height,
            anchor_x: width / 2.0,
            anchor_y: height / 2.0,
        }
    }
}

/// A truck marker and the contents of its info window.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Marker {
    pub id: u32,
    pub name: &'static str,
    pub position: LatLng,
    pub location: &'static str,
    pub hours: &'static str,
    pub icon: MarkerIcon,
}

#[derive(Clone, Debug, Serialize)]
pub struct MapSettings {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub map_type: &'static str,
    pub restriction: Bounds,
    pub strict_bounds: bool,
    pub label_color: &'static str,
    pub markers: Vec<Marker>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: CENTER,
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            map_type: "satellite",
            restriction: CAMPUS_BOUNDS,
            strict_bounds: true,
            label_color: LABEL_COLOR,
            markers: markers().collect(),
        }
    }
}

impl MapSettings {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One marker for every truck with a map position.
pub fn markers() -> impl Iterator<Item = Marker> {
    TRUCKS.iter().filter_map(|truck| {
        let position = truck.position?;
        Some(Marker {
            id: truck.id.0,
            name: truck.name,
            position,
            location: truck.spot,
            hours: truck.hours,
            icon: MarkerIcon::for_truck(truck),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{JIANNETTOS, SAMMYS, SAN_MATTEO, truck};

    #[test]
    fn icons_are_sized_per_truck() {
        let icon = |id| MarkerIcon::for_truck(truck(id).unwrap());

        let pizza = icon(JIANNETTOS);
        assert_eq!((pizza.width, pizza.height), (80.0, 50.0));
        assert_eq!((pizza.anchor_x, pizza.anchor_y), (40.0, 25.0));

        let halal = icon(SAMMYS);
        assert_eq!((halal.width, halal.height), (45.0, 45.0));
        assert_eq!((halal.anchor_x, halal.anchor_y), (22.5, 22.5));

        let coffee = icon(SAN_MATTEO);
        assert_eq!((coffee.anchor_x, coffee.anchor_y), (30.0, 30.0));
    }

    #[test]
    fn markers_stay_on_campus() {
        let markers: Vec<_> = markers().collect();
        assert_eq!(markers.len(), 6);
        for marker in &markers {
            assert!(CAMPUS_BOUNDS.contains(marker.position), "{} is off campus", marker.name);
        }
        assert!(CAMPUS_BOUNDS.contains(CENTER));
    }

    #[test]
    fn settings_serialize_for_the_host_script() {
        let json: serde_json::Value =
            serde_json::from_str(&MapSettings::default().to_json().unwrap()).unwrap();
        assert_eq!(json["map_type"], "satellite");
        assert_eq!(json["min_zoom"], 16);
        assert_eq!(json["markers"][0]["icon"]["width"], 80.0);
        assert_eq!(json["restriction"]["north"], 40.63271);
    }
}
