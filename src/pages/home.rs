use crate::{
    data::{CAMPUS_MAP, COLLEGE_LOGO, HOME_QUADS, Quad, Truck, TruckId, trucks},
    map::MapSettings,
    pages::page_frame,
    view::{Element, Node},
    views::{Decorators, Img, container, heading, img, stack, stack_from_iter},
};

pub fn home() -> Node {
    let quads = stack_from_iter(HOME_QUADS.iter().map(|(quad, ids)| quad_section(*quad, ids)))
        .class("quad-sections");

    let top = stack((
        container(
            img(COLLEGE_LOGO)
                .alt("Brooklyn College CUNY Logo")
                .class("college-logo"),
        )
        .class("college-logos"),
        quads,
    ))
    .class("top-section");

    page_frame(stack((top, campus_map())).class("home-content"))
}

fn quad_section(quad: Quad, ids: &[TruckId]) -> Element {
    let class = match quad {
        Quad::West => "west-quad",
        Quad::East => "east-quad",
    };
    let tiles = stack_from_iter(trucks(ids).map(truck_tile)).class("food-trucks");
    let tiles = match quad {
        Quad::East => tiles.class("east-quad-trucks"),
        Quad::West => tiles,
    };

    stack((heading(2, quad.title()).class("quad-title"), tiles)).classes(["quad-section", class])
}

fn truck_tile(truck: &Truck) -> Element {
    let [first, second] = truck.short_name;
    let first_line = if truck.featured {
        stack((
            heading(3, "\u{2605}").class("star-icon"),
            heading(3, first).class("truck-name"),
        ))
        .class("truck-name-container")
    } else {
        heading(3, first).class("truck-name")
    };

    stack((
        img(truck.icon).alt(truck.icon_alt).class("truck-icon"),
        stack((
            first_line,
            heading(3, format!("{second} ({})", truck.price)).class("truck-name"),
        ))
        .class("truck-info"),
    ))
    .class("food-truck")
}

/// The static campus map, plus the marker data an interactive map is built from.
fn campus_map() -> Element {
    let map = container(
        img(CAMPUS_MAP)
            .alt("Brooklyn College Campus Map")
            .class("campus-map"),
    )
    .class("campus-map-container");

    match MapSettings::default().to_json() {
        Ok(json) => map.attr("data-map", json),
        Err(err) => {
            tracing::warn!(%err, "map settings not serializable, static map only");
            map
        }
    }
}
