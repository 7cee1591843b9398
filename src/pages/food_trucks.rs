use crate::{
    data::{DIRECTORY, Truck, trucks},
    pages::page_frame,
    view::{Element, Node},
    views::{Decorators, Img, container, heading, img, stack, stack_from_iter, text},
};

pub fn food_trucks() -> Node {
    page_frame(stack_from_iter(trucks(&DIRECTORY).map(directory_entry)).class("food-truck-list"))
}

fn directory_entry(truck: &Truck) -> Element {
    stack((
        container(img(truck.icon).alt(truck.icon_alt)).class("food-trucks-test"),
        stack((heading(3, truck.display_name()), text(truck.description)))
            .class("food-truck-details"),
    ))
    .class("food-truck-item")
}
