//! Trucks, their weekly schedule and the people to contact.
//!
//! Everything here is fixed at compile time. Trucks are referred to by [`TruckId`] from the
//! page layouts and the schedule so each truck's details live in one place.

use serde::Serialize;

use crate::map::{LatLng, MarkerSize};

macro_rules! asset {
    ($path:literal) => {
        concat!(
            "https://cdn.glitch.global/517fcbda-27d5-4a6f-a83b-4e7f1dd0ed2e/",
            $path
        )
    };
}

pub const SITE_LOGO: &str = asset!("BCBitesLogoGemini.png?v=1745158374539");
pub const COLLEGE_LOGO: &str =
    asset!("BrooklynCollegeCunyLogo-removebg-preview.png?v=1745158615038");
pub const CAMPUS_MAP: &str =
    asset!("BrooklynCollegeCampusMapremovebackground.png?v=1745168997021");
pub const DIRECTIONS_IMAGE: &str = asset!("directions-631x381%20(1).png?v=1745168515458");
pub const ABOUT_IMAGE: &str = asset!("11-CUNYverse-12-min.png?v=1745173825425");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TruckId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quad {
    West,
    East,
}

impl Quad {
    pub fn title(self) -> &'static str {
        match self {
            Quad::West => "West Quad",
            Quad::East => "East Quad",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Contact {
    pub email: &'static str,
    /// Dotted display form, e.g. `718.951.5074`.
    pub phone: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Truck {
    pub id: TruckId,
    pub name: &'static str,
    /// The name split over two lines for the home page tiles.
    pub short_name: [&'static str; 2],
    pub price: &'static str,
    pub icon: &'static str,
    /// Short description for the icon's alternative text.
    pub icon_alt: &'static str,
    pub description: &'static str,
    pub hours: &'static str,
    /// Where the truck usually parks, shown on its map marker.
    pub spot: &'static str,
    /// Map position, for trucks that have a marker.
    pub position: Option<LatLng>,
    pub marker: MarkerSize,
    pub featured: bool,
    pub contact: Option<Contact>,
}

impl Truck {
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.price)
    }
}

pub const JIANNETTOS: TruckId = TruckId(1);
pub const TACOS_Y_PUPUSAS: TruckId = TruckId(2);
pub const SAMMYS: TruckId = TruckId(3);
pub const BK_JERK: TruckId = TruckId(4);
pub const SAN_MATTEO: TruckId = TruckId(5);
pub const WAFELS: TruckId = TruckId(6);
pub const BASARVDOGIM: TruckId = TruckId(7);

pub static TRUCKS: [Truck; 7] = [
    Truck {
        id: JIANNETTOS,
        name: "Jiannetto's Pizza",
        short_name: ["Jiannetto's", "Pizza"],
        price: "$",
        icon: asset!("Jiannetto_sPizzaLogo-removebg-preview.png?v=1745160828510"),
        icon_alt: "Pizza Truck",
        description: "Serving an award-winning Grandma Thin-Crust Sicilian Pie and are \
                      recognized as one of the best offered in New York!",
        hours: "10:00 am - 6:00 pm",
        spot: "West Quad",
        position: Some(LatLng::new(40.631294, -73.953974)),
        marker: MarkerSize::Wide,
        featured: false,
        contact: Some(Contact {
            email: "jiannettopizza@outlook.com",
            phone: "718.951.9283",
        }),
    },
    Truck {
        id: TACOS_Y_PUPUSAS,
        name: "Tacos y Pupusas Lizbeth",
        short_name: ["Tacos y Pupusas", "Lizbeth"],
        price: "$",
        icon: asset!("download-removebg-preview%20(2).png?v=1745168481990"),
        icon_alt: "Taco Truck",
        description: "Serving authentic, freshly made tacos and pupusas with a variety of \
                      flavorful fillings that bring the vibrant tastes of Latin America \
                      street food to your plate!",
        hours: "8:00 am - 6:00 pm",
        spot: "East Quad, Library",
        position: Some(LatLng::new(40.630825, -73.953839)),
        marker: MarkerSize::Standard,
        featured: false,
        contact: Some(Contact {
            email: "lizbethstruck@gmail.com",
            phone: "646.393.5436",
        }),
    },
    Truck {
        id: SAMMYS,
        name: "Sammy's Halal",
        short_name: ["Sammy's", "Halal"],
        price: "$",
        icon: asset!("download-removebg-preview.png?v=1745168473732"),
        icon_alt: "Halal Truck",
        description: "Serving up street food favorites like chicken and lamb over rice, gyro \
                      wraps, and falafel, the award-winning Sammy's Halal recipient of a Vendy \
                      Award for best street food blends bold flavors with fresh ingredients to \
                      deliver a satisfying meal on the go.",
        hours: "10:00 am - 5:00 pm",
        spot: "East Quad, Center",
        position: Some(LatLng::new(40.631347, -73.951666)),
        marker: MarkerSize::Small,
        featured: true,
        contact: Some(Contact {
            email: "sammyhalal@gmail.com",
            phone: "718.274.3176",
        }),
    },
    Truck {
        id: BK_JERK,
        name: "The BK Jerk Mobile",
        short_name: ["The BK Jerk", "Mobile"],
        price: "$-$$",
        icon: asset!("images-removebg-preview.png?v=1745168476351"),
        icon_alt: "Jerk Truck",
        description: "Whether you're craving jerk chicken or a braised oxtails meal, they've \
                      got your taste buds covered with their savory Caribbean dishes. (Lunch \
                      specials available).",
        hours: "11:00 am - 4:00 pm",
        spot: "East Quad, Ingersoll",
        position: Some(LatLng::new(40.631417, -73.950928)),
        marker: MarkerSize::Standard,
        featured: false,
        contact: Some(Contact {
            email: "bkjerktruck@gmail.com",
            phone: "718.245.6388",
        }),
    },
    Truck {
        id: SAN_MATTEO,
        name: "San Matteo Coffee",
        short_name: ["San Matteo", "Coffee"],
        price: "$",
        icon: asset!("download-removebg-preview%20(4).png?v=1745168494297"),
        icon_alt: "Coffee Truck",
        description: "We are your go-to for coffee on the move, serving up delicious, \
                      handcrafted coffee and espresso. Our truck is always ready to prepare \
                      fresh and bold flavors to keep you refreshed and energized.",
        hours: "10:00 am - 6:00 pm",
        spot: "East Quad",
        position: Some(LatLng::new(40.631059, -73.951558)),
        marker: MarkerSize::Standard,
        featured: false,
        contact: None,
    },
    Truck {
        id: WAFELS,
        name: "Wafels & Dinges",
        short_name: ["Wafels &", "Dinges"],
        price: "$-$$",
        icon: asset!("download-removebg-preview%20(5).png?v=1745168496973"),
        icon_alt: "Waffle Truck",
        description: "Indulge in the sweet and savory delights of Wafels & Dinges. Whether \
                      you're in the mood for a crispy waffle or a scrumptious dinge, they've got \
                      you covered.",
        hours: "10:00 am - 6:00 pm",
        spot: "East Quad, Ingersoll",
        position: Some(LatLng::new(40.631136, -73.949423)),
        marker: MarkerSize::Standard,
        featured: false,
        contact: Some(Contact {
            email: "wafels&dinges@gmail.com",
            phone: "718.476.8272",
        }),
    },
    Truck {
        id: BASARVDOGIM,
        name: "Basarvdogim on Wheels",
        short_name: ["Basarvdogim", "on Wheels"],
        price: "$-$$",
        icon: asset!("download-removebg-preview%20(6).png?v=1745168499595"),
        icon_alt: "Kosher Truck",
        description: "Offering a fresh selection of Glatt Kosher classics, from savory \
                      sandwiches to crispy eggrolls, bringing authentic flavors to campus.",
        hours: "10:00 am - 6:30 pm",
        spot: "East Quad, Ingersoll",
        position: None,
        marker: MarkerSize::Standard,
        featured: false,
        contact: Some(Contact {
            email: "basarvdogim@gmail.com",
            phone: "718.874.8394",
        }),
    },
];

pub fn truck(id: TruckId) -> Option<&'static Truck> {
    TRUCKS.iter().find(|truck| truck.id == id)
}

/// Trucks in the given order, skipping unknown ids.
pub fn trucks(ids: &[TruckId]) -> impl Iterator<Item = &'static Truck> + '_ {
    ids.iter().filter_map(|id| truck(*id))
}

/// Home page tiles, by quad.
pub static HOME_QUADS: [(Quad, &[TruckId]); 2] = [
    (Quad::West, &[JIANNETTOS, TACOS_Y_PUPUSAS]),
    (Quad::East, &[SAMMYS, SAN_MATTEO, BK_JERK, WAFELS]),
];

pub static DIRECTORY: [TruckId; 7] = [
    JIANNETTOS,
    BK_JERK,
    SAMMYS,
    TACOS_Y_PUPUSAS,
    BASARVDOGIM,
    WAFELS,
    SAN_MATTEO,
];

pub static VENDOR_CONTACTS: [TruckId; 6] = [
    BASARVDOGIM,
    SAMMYS,
    TACOS_Y_PUPUSAS,
    BK_JERK,
    JIANNETTOS,
    WAFELS,
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Office {
    pub name: &'static str,
    pub room: &'static str,
    pub contact: Contact,
}

pub const SUPPORT_OFFICE: Office = Office {
    name: "Brooklyn College Food Truck Support",
    room: "1122 Ingersoll Hall",
    contact: Contact {
        email: "bcfoodtruck@brooklyn.cuny.edu",
        phone: "718.951.5074",
    },
};

/// One truck's stop on one weekday. Hours are the truck's regular hours.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Stop {
    pub truck: TruckId,
    pub spot: &'static str,
}

const fn stop(truck: TruckId, spot: &'static str) -> Stop {
    Stop { truck, spot }
}

pub static WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Stops for Monday through Friday.
pub static WEEK: [&[Stop]; 5] = [
    &[
        stop(JIANNETTOS, "West Quad"),
        stop(TACOS_Y_PUPUSAS, "East Quad, Library"),
        stop(BASARVDOGIM, "East Quad, Ingersoll"),
        stop(SAMMYS, "East Quad, Center"),
    ],
    &[
        stop(WAFELS, "East Quad, Ingersoll"),
        stop(JIANNETTOS, "East Quad, Library"),
        stop(TACOS_Y_PUPUSAS, "West Quad"),
        stop(BASARVDOGIM, "West Quad"),
        stop(SAMMYS, "East Quad, Center"),
    ],
    &[
        stop(BK_JERK, "East Quad, Ingersoll"),
        stop(JIANNETTOS, "West Quad"),
        stop(TACOS_Y_PUPUSAS, "West Quad"),
        stop(BASARVDOGIM, "East Quad, Ingersoll"),
        stop(SAMMYS, "East Quad, Center"),
    ],
    &[
        stop(JIANNETTOS, "East Quad, Ingersoll"),
        stop(TACOS_Y_PUPUSAS, "East Quad, Library"),
        stop(BASARVDOGIM, "West Quad"),
        stop(SAMMYS, "East Quad, Center"),
    ],
    &[stop(TACOS_Y_PUPUSAS, "East Quad, Library")],
];

pub const ABOUT: &str = "We are a group of Brooklyn College students who got frustrated with \
    the messy and hard-to-find food truck schedules buried in endless emails. It was difficult \
    to know when and where we could grab our favorite meals. Since there was no simple and \
    dependable way to find this information, we decided to solve the problem ourselves. That's \
    why we created this website. It's a straightforward and quick solution made by students \
    just like us to keep everyone informed without the hassle of numerous emails. With this \
    site, there will be no more guessing and no more missed lunches, just delicious food, \
    always on time.";
