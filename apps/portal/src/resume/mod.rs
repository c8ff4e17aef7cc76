// Resume upload simulation and the hardcoded analysis it unlocks.
// Processing happens in a spawned task; completion re-locks the view and checks the ticket.

pub mod analysis;
pub mod chart;
pub mod handlers;
pub mod record;
pub mod upload;
