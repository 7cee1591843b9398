use time::Date;

use crate::{
    data::{Stop, WEEK, WEEKDAYS, truck},
    pages::page_frame,
    view::{Element, Node},
    views::{Decorators, container, heading, stack, stack_from_iter, text},
    week::{self, week_title},
};

pub fn schedule() -> Node {
    schedule_for(week::today())
}

/// The schedule page as it reads on `today`. Only the title depends on the date.
pub fn schedule_for(today: Date) -> Node {
    let header = stack_from_iter(WEEKDAYS.iter().map(|day| container(*day).class("day")))
        .class("schedule-header");
    let content = stack_from_iter(WEEK.iter().map(|stops| day_column(stops)))
        .class("schedule-content");

    page_frame(
        stack((
            container(week_title(today)).class("schedule-title"),
            stack((header, content)).class("schedule-table"),
        ))
        .class("schedule-container"),
    )
}

fn day_column(stops: &[Stop]) -> Element {
    stack_from_iter(stops.iter().filter_map(|stop| {
        let Some(truck) = truck(stop.truck) else {
            tracing::warn!(id = stop.truck.0, "schedule refers to an unknown truck");
            return None;
        };
        Some(
            stack((
                heading(3, truck.name),
                text(format!("Time: {}", truck.hours)),
                text(format!("Location: {}", stop.spot)),
            ))
            .class("truck-schedule"),
        )
    }))
    .class("day-column")
}
