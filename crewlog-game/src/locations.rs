//! Fixed map points referenced by sighting and body-report events.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: u8,
    /// Bilingual label, e.g. `食堂 (Cafeteria)`.
    pub name: &'static str,
    /// Horizontal position in percent of the map width.
    pub x: u8,
    /// Vertical position in percent of the map height.
    pub y: u8,
}

impl Location {
    /// Label up to the first space, as shown in log lines and pin captions.
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.split(' ').next().unwrap_or(self.name)
    }
}

pub const LOCATIONS: [Location; 9] = [
    Location { id: 1, name: "食堂 (Cafeteria)", x: 50, y: 10 },
    Location { id: 2, name: "医疗室 (MedBay)", x: 30, y: 30 },
    Location { id: 3, name: "配电房 (Electrical)", x: 30, y: 60 },
    Location { id: 4, name: "监控室 (Security)", x: 20, y: 45 },
    Location { id: 5, name: "反应堆 (Reactor)", x: 10, y: 50 },
    Location { id: 6, name: "导航室 (Navigation)", x: 90, y: 45 },
    Location { id: 7, name: "武器室 (Weapons)", x: 80, y: 20 },
    Location { id: 8, name: "护盾 (Shields)", x: 80, y: 70 },
    Location { id: 9, name: "管理室 (Admin)", x: 60, y: 50 },
];

#[must_use]
pub fn location_by_id(id: u8) -> Option<&'static Location> {
    LOCATIONS.iter().find(|loc| loc.id == id)
}
