use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    pub id: String,
    pub school_id: String,
    pub registration: String,
    pub capacity: u32,
    pub route_name: String,
    pub driver_id: Option<String>,
}

school_scoped_entity!(Bus);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub bus_id: Option<String>,
}

school_scoped_entity!(Driver);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripKind {
    Pickup,
    Drop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Delayed,
}

impl TripStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            TripStatus::Scheduled => "trip.scheduled",
            TripStatus::InProgress => "trip.in_progress",
            TripStatus::Completed => "trip.completed",
            TripStatus::Delayed => "trip.delayed",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TripStatus::InProgress | TripStatus::Delayed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusTrip {
    pub id: String,
    pub school_id: String,
    pub bus_id: String,
    pub driver_id: String,
    pub route_name: String,
    pub kind: TripKind,
    pub date: NaiveDate,
    pub departure: NaiveTime,
    pub status: TripStatus,
    pub students_onboard: u32,
}

school_scoped_entity!(BusTrip);

impl BusTrip {
    /// Moves the trip along: scheduled → in progress → completed. A delayed
    /// trip resumes as in progress.
    pub fn advance(&mut self) {
        self.status = match self.status {
            TripStatus::Scheduled | TripStatus::Delayed => TripStatus::InProgress,
            TripStatus::InProgress | TripStatus::Completed => TripStatus::Completed,
        };
    }

    pub fn mark_delayed(&mut self) {
        if self.status != TripStatus::Completed {
            self.status = TripStatus::Delayed;
        }
    }
}

pub fn trips_on(trips: &[BusTrip], date: NaiveDate) -> Vec<&BusTrip> {
    trips.iter().filter(|t| t.date == date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(status: TripStatus) -> BusTrip {
        BusTrip {
            id: "trp-x".to_string(),
            school_id: "sch-001".to_string(),
            bus_id: "bus-001".to_string(),
            driver_id: "drv-001".to_string(),
            route_name: "Kukatpally".to_string(),
            kind: TripKind::Pickup,
            date: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
            departure: NaiveTime::from_hms_opt(7, 15, 0).unwrap(),
            status,
            students_onboard: 0,
        }
    }

    #[test]
    fn test_advance_lifecycle() {
        let mut t = trip(TripStatus::Scheduled);
        t.advance();
        assert_eq!(t.status, TripStatus::InProgress);
        t.advance();
        assert_eq!(t.status, TripStatus::Completed);
        t.advance();
        assert_eq!(t.status, TripStatus::Completed);
    }

    #[test]
    fn test_completed_trip_cannot_be_delayed() {
        let mut t = trip(TripStatus::Completed);
        t.mark_delayed();
        assert_eq!(t.status, TripStatus::Completed);

        let mut t = trip(TripStatus::InProgress);
        t.mark_delayed();
        assert_eq!(t.status, TripStatus::Delayed);
        t.advance();
        assert_eq!(t.status, TripStatus::InProgress);
    }
}
