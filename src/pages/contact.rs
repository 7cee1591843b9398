use crate::{
    data::{Contact, DIRECTIONS_IMAGE, SUPPORT_OFFICE, VENDOR_CONTACTS, trucks},
    pages::page_frame,
    view::{Element, Node},
    views::{
        Decorators, Img, container, element, heading, img, label, mailto, stack, stack_from_iter,
        tel, text,
    },
};

pub fn contact() -> Node {
    let office = stack((
        heading(2, SUPPORT_OFFICE.name),
        text(SUPPORT_OFFICE.room),
        email_line(&SUPPORT_OFFICE.contact),
        phone_line(&SUPPORT_OFFICE.contact),
        container(
            img(DIRECTIONS_IMAGE)
                .alt("Food Truck on Campus")
                .class("schedule-image"),
        )
        .class("contact-image"),
    ))
    .class("contact-left");

    let vendors = stack_from_iter(trucks(&VENDOR_CONTACTS).filter_map(|truck| {
        let contact = truck.contact.as_ref()?;
        Some(
            stack((heading(3, truck.name), email_line(contact), phone_line(contact)))
                .class("vendor-contact"),
        )
    }))
    .class("contact-right");

    page_frame(stack((office, vendors)).class("contact-container"))
}

fn email_line(contact: &Contact) -> Element {
    element("p", (label("E:"), mailto(contact.email)))
}

fn phone_line(contact: &Contact) -> Element {
    element("p", (label("P:"), tel(contact.phone)))
}
