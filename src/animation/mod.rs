/// Easing curves.
pub mod ease;
/// Range remapping.
pub mod interp;
