//! Room models, payloads, wing helpers and list filters.
//!
//! A room number is its building wing letter followed by three digits
//! (`H202` is room 202 in wing H). The helpers here keep the two fields in
//! step the way the room form does while the user types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use samaysetu_core::serde::{deserialize_optional_string, deserialize_optional_timestamp};
use samaysetu_core::{ApiError, FieldErrors};

use crate::courses::default_true;
use crate::departments::Department;
use crate::forms::{finish, non_blank, require, require_some};
use crate::ids::{DepartmentId, RoomId};
use crate::value_types::{IdRef, ROOM_NUMBER_FORMAT_MESSAGE, RoomNumber, is_room_number};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    #[default]
    Classroom,
    Lab,
    Auditorium,
}

impl RoomType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classroom => "CLASSROOM",
            Self::Lab => "LAB",
            Self::Auditorium => "AUDITORIUM",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CLASSROOM" => Ok(Self::Classroom),
            "LAB" => Ok(Self::Lab),
            "AUDITORIUM" => Ok(Self::Auditorium),
            other => Err(format!("Unknown room type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub room_number: RoomNumber,
    #[serde(default)]
    pub building_wing: String,
    #[serde(default)]
    pub capacity: i32,
    #[serde(default)]
    pub room_type: RoomType,
    #[serde(default)]
    pub has_projector: bool,
    #[serde(default)]
    pub has_ac: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub equipment: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub department: Option<Department>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The wing implied by a room number.
///
/// A room number starting with a letter sets the wing to that letter, but
/// only while the wing is empty or already equal to it.
pub fn infer_wing(room_number: &str, current_wing: &str) -> String {
    let room_number = room_number.to_uppercase();
    match room_number.chars().next() {
        Some(letter) if letter.is_ascii_uppercase() => {
            let letter = letter.to_string();
            if current_wing.is_empty() || current_wing == letter {
                letter
            } else {
                current_wing.to_string()
            }
        }
        _ => current_wing.to_string(),
    }
}

/// The room number after the wing changes.
///
/// Bare digits get the wing prepended; a number already carrying a wing
/// letter has that letter replaced.
pub fn apply_wing(room_number: &str, wing: &str) -> String {
    let wing = wing.to_uppercase();
    if wing.is_empty() || room_number.is_empty() {
        return room_number.to_string();
    }
    let mut chars = room_number.chars();
    let first = chars.next();
    let second = chars.next();
    if room_number.chars().all(|c| c.is_ascii_digit()) {
        format!("{}{}", wing, room_number)
    } else if first.is_some_and(|c| c.is_ascii_uppercase())
        && second.is_some_and(|c| c.is_ascii_digit())
    {
        format!("{}{}", wing, &room_number[1..])
    } else {
        room_number.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomForm {
    pub name: String,
    pub room_number: String,
    pub building_wing: String,
    pub capacity: Option<i32>,
    pub room_type: RoomType,
    pub department_id: Option<DepartmentId>,
    pub has_projector: bool,
    pub has_ac: bool,
    pub equipment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    #[validate(length(max = 50, message = "Name must be at most 50 characters"))]
    pub name: String,
    pub room_number: RoomNumber,
    #[validate(length(max = 10, message = "Building wing must be at most 10 characters"))]
    pub building_wing: String,
    pub room_type: RoomType,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub has_projector: bool,
    pub has_ac: bool,
    pub equipment: Option<String>,
    pub department: IdRef<DepartmentId>,
}

impl RoomForm {
    pub fn into_payload(self) -> Result<RoomPayload, ApiError> {
        let room_number = self.room_number.trim().to_uppercase();
        let wing = infer_wing(&room_number, &self.building_wing.trim().to_uppercase());

        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        require(&mut errors, "roomNumber", &room_number, "Room number is required");
        require(&mut errors, "buildingWing", &wing, "Building wing is required");
        require_some(&mut errors, "capacity", &self.capacity, "Capacity is required");
        require_some(
            &mut errors,
            "departmentId",
            &self.department_id,
            "Department is required",
        );

        if !room_number.is_empty() && !is_room_number(&room_number) {
            errors.set("roomNumber", ROOM_NUMBER_FORMAT_MESSAGE);
        }
        if !room_number.is_empty() && !wing.is_empty() && !room_number.starts_with(&wing) {
            errors.set(
                "roomNumber",
                format!("Room number must start with wing \"{}\"", wing),
            );
        }

        finish(errors, || RoomPayload {
            name: self.name.trim().to_string(),
            room_number: RoomNumber::new_unchecked(room_number),
            building_wing: wing,
            room_type: self.room_type,
            capacity: self.capacity.unwrap_or_default(),
            has_projector: self.has_projector,
            has_ac: self.has_ac,
            equipment: non_blank(self.equipment),
            department: IdRef::new(self.department_id.unwrap_or_default()),
        })
    }
}

impl From<&Room> for RoomForm {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name.clone(),
            room_number: room.room_number.to_string(),
            building_wing: room.building_wing.clone(),
            capacity: Some(room.capacity),
            room_type: room.room_type,
            department_id: room.department.as_ref().map(|d| d.id),
            has_projector: room.has_projector,
            has_ac: room.has_ac,
            equipment: room.equipment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Matches name or room number (case-insensitive) or capacity digits.
    pub search: Option<String>,
    pub department_id: Option<DepartmentId>,
    pub wing: Option<String>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(query) if !query.is_empty() => {
                let lowered = query.to_lowercase();
                room.name.to_lowercase().contains(&lowered)
                    || room.room_number.as_str().to_lowercase().contains(&lowered)
                    || room.capacity.to_string().contains(query)
            }
            _ => true,
        };
        let matches_department = self
            .department_id
            .is_none_or(|id| room.department.as_ref().is_some_and(|d| d.id == id));
        let matches_wing = match self.wing.as_deref() {
            Some(wing) if !wing.is_empty() => room.building_wing == wing,
            _ => true,
        };

        matches_search && matches_department && matches_wing
    }

    pub fn apply<'a>(&self, rooms: &'a [Room]) -> Vec<&'a Room> {
        rooms.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct non-empty wings in first-seen order.
pub fn distinct_wings(rooms: &[Room]) -> Vec<String> {
    let mut wings: Vec<String> = Vec::new();
    for room in rooms {
        if !room.building_wing.is_empty() && !wings.contains(&room.building_wing) {
            wings.push(room.building_wing.clone());
        }
    }
    wings
}
