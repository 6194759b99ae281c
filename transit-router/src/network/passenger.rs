//! Passenger trip requests.

use crate::graph::StopId;

/// A passenger and the trip they want to plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerRecord {
    pub id: u32,
    pub name: String,
    pub from: StopId,
    pub to: StopId,
}

/// First record with the given passenger id.
pub fn find_passenger(records: &[PassengerRecord], id: u32) -> Option<&PassengerRecord> {
    records.iter().find(|record| record.id == id)
}
