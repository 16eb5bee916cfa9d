//! Plain-text rendering of the filtered views.

use std::fmt::{self, Write};
use tripbook_core::{Model, ModelManager};

/// Writes both views, contacts first, numbered by display index.
pub fn render_views(model: &ModelManager, out: &mut impl Write) -> fmt::Result {
    render_contacts(model, out)?;
    render_trips(model, out)
}

fn render_contacts(model: &ModelManager, out: &mut impl Write) -> fmt::Result {
    let visible = model.filtered_contacts();
    writeln!(
        out,
        "Contacts ({} of {}):",
        visible.len(),
        model.contacts().len()
    )?;
    for (position, contact) in visible.iter().enumerate() {
        writeln!(out, "  {}. {contact}", position + 1)?;
    }
    Ok(())
}

/// Customer names with no matching contact are marked `(unknown)`.
fn render_trips(model: &ModelManager, out: &mut impl Write) -> fmt::Result {
    let visible = model.filtered_trips();
    writeln!(out, "Trips ({} of {}):", visible.len(), model.trips().len())?;
    for (position, trip) in visible.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} on {} at {}",
            position + 1,
            trip.name(),
            trip.date(),
            trip.accommodation()
        )?;
        writeln!(out, "     Itinerary: {}", trip.itinerary())?;
        if !trip.note().is_empty() {
            writeln!(out, "     Note: {}", trip.note())?;
        }
        let customers = model.resolve_customers(trip);
        if customers.resolved.is_empty() && customers.dangling.is_empty() {
            continue;
        }
        let mut line = customers
            .resolved
            .iter()
            .map(|contact| format!("{} ({})", contact.name(), contact.phone()))
            .collect::<Vec<_>>();
        line.extend(
            customers
                .dangling
                .iter()
                .map(|name| format!("{name} (unknown)")),
        );
        writeln!(out, "     Customers: {}", line.join(", "))?;
    }
    Ok(())
}
