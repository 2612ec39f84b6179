use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum PartySize {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "4")]
    Four,
    #[strum(serialize = "6+")]
    SixPlus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Available,
    Occupied,
}

/// A table on the dining-room floor plan. Positions are in floor-plan pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub id: &'static str,
    pub seats: u8,
    pub status: TableStatus,
    pub x: i32,
    pub y: i32,
    pub rotation: i32,
}

impl Table {
    pub fn number(&self) -> &'static str {
        self.id.trim_start_matches("table")
    }

    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }

    /// Width and height drawn for the table, by seat count.
    pub fn footprint(&self) -> (u32, u32) {
        match self.seats {
            0..=2 => (40, 40),
            3..=4 => (50, 50),
            5..=6 => (70, 50),
            _ => (90, 60),
        }
    }
}

const fn table(id: &'static str, seats: u8, status: TableStatus, x: i32, y: i32, rotation: i32) -> Table {
    Table { id, seats, status, x, y, rotation }
}

pub const FLOOR_PLAN: [Table; 9] = [
    table("table1", 2, TableStatus::Available, 20, 30, 0),
    table("table2", 2, TableStatus::Available, 80, 30, 0),
    table("table3", 4, TableStatus::Available, 150, 40, 45),
    table("table4", 4, TableStatus::Occupied, 220, 40, 45),
    table("table5", 6, TableStatus::Available, 50, 120, 0),
    table("table6", 8, TableStatus::Available, 180, 130, 0),
    table("table7", 2, TableStatus::Available, 280, 120, 90),
    table("table8", 4, TableStatus::Available, 350, 50, 0),
    table("table9", 4, TableStatus::Occupied, 350, 130, 0),
];

pub fn find_table(id: &str) -> Option<&'static Table> {
    FLOOR_PLAN.iter().find(|table| table.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum ReservationStep {
    #[default]
    Details,
    Table,
    Confirm,
}

impl ReservationStep {
    pub fn number(self) -> u8 {
        match self {
            ReservationStep::Details => 1,
            ReservationStep::Table => 2,
            ReservationStep::Confirm => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReservationStep::Details => "Detalles",
            ReservationStep::Table => "Seleccionar Mesa",
            ReservationStep::Confirm => "Confirmar",
        }
    }
}

/// A finished reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub date: String,
    pub time: String,
    pub party: PartySize,
    pub table: &'static Table,
}

/// Three-step reservation form: details, table choice, confirmation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationWizard {
    pub step: ReservationStep,
    pub date: String,
    pub time: String,
    pub party: Option<PartySize>,
    pub selected_table: Option<&'static str>,
    pub complete: bool,
}

impl ReservationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn details_ready(&self) -> bool {
        !self.date.is_empty() && !self.time.is_empty() && self.party.is_some()
    }

    /// Selects a free table, or clears the selection when it is already chosen.
    /// Occupied and unknown tables are ignored.
    pub fn toggle_table(&mut self, id: &str) -> bool {
        let Some(table) = find_table(id).filter(|table| table.is_available()) else {
            return false;
        };
        self.selected_table = if self.selected_table == Some(table.id) {
            None
        } else {
            Some(table.id)
        };
        true
    }

    pub fn selected_table(&self) -> Option<&'static Table> {
        self.selected_table.and_then(find_table)
    }

    pub fn next_step(&mut self) -> bool {
        match self.step {
            ReservationStep::Details if self.details_ready() => {
                self.step = ReservationStep::Table;
                true
            }
            ReservationStep::Table if self.selected_table.is_some() => {
                self.step = ReservationStep::Confirm;
                true
            }
            ReservationStep::Confirm if !self.complete => {
                self.complete = true;
                log::info!(
                    "reservation placed for {} at {} (table {:?})",
                    self.date,
                    self.time,
                    self.selected_table
                );
                true
            }
            _ => false,
        }
    }

    pub fn prev_step(&mut self) -> bool {
        match self.step {
            ReservationStep::Table => self.step = ReservationStep::Details,
            ReservationStep::Confirm if !self.complete => self.step = ReservationStep::Table,
            _ => return false,
        }
        true
    }

    pub fn reservation(&self) -> Option<Reservation> {
        if !self.complete {
            return None;
        }
        Some(Reservation {
            date: self.date.clone(),
            time: self.time.clone(),
            party: self.party?,
            table: self.selected_table()?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn filled() -> ReservationWizard {
        ReservationWizard {
            date: "2024-06-20".to_string(),
            time: "20:00".to_string(),
            party: Some(PartySize::Four),
            ..ReservationWizard::default()
        }
    }

    #[test]
    fn test_details_gate_first_step() {
        let mut wizard = ReservationWizard::new();
        assert!(!wizard.next_step());
        wizard.date = "2024-06-20".to_string();
        wizard.time = "20:00".to_string();
        assert!(!wizard.next_step());
        wizard.party = Some(PartySize::Two);
        assert!(wizard.next_step());
        assert_eq!(wizard.step, ReservationStep::Table);
    }

    #[test]
    fn test_table_required_for_confirm_step() {
        let mut wizard = filled();
        assert!(wizard.next_step());
        assert!(!wizard.next_step());
        assert!(wizard.toggle_table("table3"));
        assert!(wizard.next_step());
        assert_eq!(wizard.step, ReservationStep::Confirm);
    }

    #[test]
    fn test_occupied_tables_cannot_be_selected() {
        let mut wizard = filled();
        assert!(!wizard.toggle_table("table4"));
        assert!(!wizard.toggle_table("table9"));
        assert!(!wizard.toggle_table("table42"));
        assert_eq!(wizard.selected_table, None);
    }

    #[test]
    fn test_toggle_switches_and_deselects() {
        let mut wizard = filled();
        assert!(wizard.toggle_table("table1"));
        assert!(wizard.toggle_table("table6"));
        assert_eq!(wizard.selected_table().unwrap().seats, 8);
        assert!(wizard.toggle_table("table6"));
        assert_eq!(wizard.selected_table, None);
    }

    #[test]
    fn test_complete_and_reset() {
        let mut wizard = filled();
        wizard.next_step();
        wizard.toggle_table("table5");
        wizard.next_step();
        assert!(wizard.reservation().is_none());
        assert!(wizard.next_step());
        assert!(wizard.complete);
        assert!(!wizard.next_step());
        assert!(!wizard.prev_step());

        let reservation = wizard.reservation().unwrap();
        assert_eq!(reservation.table.number(), "5");
        assert_eq!(reservation.party.to_string(), "4");

        wizard.reset();
        assert_eq!(wizard, ReservationWizard::default());
    }

    #[test]
    fn test_prev_step() {
        let mut wizard = filled();
        assert!(!wizard.prev_step());
        wizard.next_step();
        wizard.toggle_table("table2");
        wizard.next_step();
        assert!(wizard.prev_step());
        assert_eq!(wizard.step, ReservationStep::Table);
        assert!(wizard.prev_step());
        assert_eq!(wizard.step, ReservationStep::Details);
        assert_eq!(wizard.selected_table, Some("table2"));
    }

    #[test]
    fn test_floor_plan_footprints() {
        assert_eq!(find_table("table1").unwrap().footprint(), (40, 40));
        assert_eq!(find_table("table5").unwrap().footprint(), (70, 50));
        assert_eq!(find_table("table6").unwrap().footprint(), (90, 60));
        assert_eq!(FLOOR_PLAN.iter().filter(|t| !t.is_available()).count(), 2);
        let sizes: Vec<String> = PartySize::iter().map(|p| p.to_string()).collect();
        assert_eq!(sizes, ["1", "2", "4", "6+"]);
    }
}
