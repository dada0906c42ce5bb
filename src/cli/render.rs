use colored::Colorize;

use crate::clients::helpers::{resolve_image_url, PLACEHOLDER_IMAGE};
use crate::models::flat::Flat;
use crate::models::office::Office;
use crate::screens::booking_card::{BookingCardState, CANCEL_SUCCESS};
use crate::services::loader::Loadable;

const LOADING: &str = "Loading...";

pub fn image_or_placeholder(image: Option<String>) -> String {
    image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

fn flat_image(flat: &Flat, base_url: &str) -> String {
    image_or_placeholder(
        flat.first_image()
            .map(|image| resolve_image_url(base_url, image)),
    )
}

pub fn render_flat_card(flat: &Flat, base_url: &str) -> String {
    let mut lines = vec![
        format!("{} {}", format!("#{}", flat.id).dimmed(), flat.name.bold()),
        format!("  {} | {} / month", flat.location, flat.price),
        format!("  Rooms: {}", flat.room_number),
    ];
    if let Some(distance) = flat.distance {
        lines.push(format!("  Distance: {distance} km"));
    }
    lines.push(format!("  Image: {}", flat_image(flat, base_url)));
    lines.join("\n")
}

pub fn render_flat_detail(flat: &Loadable<Flat>, base_url: &str) -> String {
    let Some(flat) = flat.value() else {
        return LOADING.to_string();
    };

    let mut lines = vec![
        flat.name.bold().to_string(),
        format!("Image: {}", flat_image(flat, base_url)),
    ];
    if flat.images.len() > 1 {
        for image in &flat.images[1..] {
            lines.push(format!("       {}", resolve_image_url(base_url, image)));
        }
    }
    if !flat.location.is_empty() {
        lines.push(format!("Location: {}", flat.location));
        lines.push(format!("Price: {} / month", flat.price));
        lines.push(format!("Rooms: {}", flat.room_number));
    }
    if let Some(distance) = flat.distance {
        lines.push(format!("Distance: {distance} km"));
    }
    if !flat.availability.is_empty() {
        lines.push(format!("Availability: {}", flat.availability));
    }
    if !flat.amenities.is_empty() {
        lines.push(format!("Amenities: {}", flat.amenities.join(", ")));
    }
    if !flat.description.is_empty() {
        lines.push(String::new());
        lines.push(flat.description.clone());
    }
    lines.join("\n")
}

pub fn render_booking_card(card: &BookingCardState) -> String {
    let (name, image) = match card.flat.value() {
        Some(summary) => (summary.name.clone(), summary.image.clone()),
        None => (LOADING.to_string(), None),
    };

    let mut lines = vec![
        format!(
            "{} {}",
            card.booking
                .id
                .map(|id| format!("#{id}"))
                .unwrap_or_default()
                .dimmed(),
            name.bold()
        ),
        format!("  Image: {}", image_or_placeholder(image)),
        format!("  Start Date: {}", card.booking.start_date),
        format!("  End Date: {}", card.booking.end_date),
        format!("  Status: {}", card.booking.status),
    ];
    if card.message == CANCEL_SUCCESS {
        lines.push(format!("  {}", card.message.green()));
    } else if !card.message.is_empty() {
        lines.push(format!("  {}", card.message.red()));
    }
    lines.join("\n")
}

pub fn render_office_card(office: &Office) -> String {
    let mut details = Vec::new();
    if let Some(area) = office.metric_area {
        details.push(format!("Area: {area} sqm"));
    }
    if let Some(floor) = office.floor {
        details.push(format!("Floor: {floor}"));
    }
    if let Some(room) = office.room_number {
        details.push(format!("Room: {room}"));
    }

    let mut lines = vec![
        format!("{} {}", format!("#{}", office.id).dimmed(), office.name.bold()),
        format!("  {}, {}", office.address, office.city),
        format!("  ${}/day", office.price),
    ];
    if !details.is_empty() {
        lines.push(format!("  {}", details.join(" | ")));
    }
    lines.join("\n")
}

pub fn render_office_detail(office: &Loadable<Office>) -> String {
    let Some(office) = office.value() else {
        return LOADING.to_string();
    };

    let mut lines = vec![office.name.bold().to_string()];
    let images: Vec<String> = office.images.iter().filter_map(|i| i.data_uri()).collect();
    lines.push(format!("Images: {}", images.len()));
    if !office.address.is_empty() {
        lines.push(format!(
            "Location: {}, {}, {}",
            office.address, office.city, office.country
        ));
        lines.push(format!("Price: ${} / day", office.price));
    }
    if let Some(room) = office.room_number {
        lines.push(format!("Room: {room}"));
    }
    if let Some(floor) = office.floor {
        lines.push(format!("Floor: {floor}"));
    }
    if office.amenities.is_empty() {
        lines.push("Amenities: none listed".to_string());
    } else {
        lines.push(format!("Amenities: {}", office.amenities.join(", ")));
    }
    lines.join("\n")
}
