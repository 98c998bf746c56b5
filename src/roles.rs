/// Static role table: one entry per seat number 1-6.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEntry {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const ROLES: &[RoleEntry] = &[
    RoleEntry {
        number: 1,
        title: "Leader",
        description: "Coordinates the team and keeps overall progress on track",
        icon: "🧭",
    },
    RoleEntry {
        number: 2,
        title: "Note taker",
        description: "Takes minutes during meetings and maintains the records",
        icon: "📝",
    },
    RoleEntry {
        number: 3,
        title: "Timekeeper",
        description: "Manages time allocation and keeps the session moving",
        icon: "⏱️",
    },
    RoleEntry {
        number: 4,
        title: "Facilitator",
        description: "Creates an environment where everyone can speak up",
        icon: "🤝",
    },
    RoleEntry {
        number: 5,
        title: "Presenter",
        description: "Summarizes the results and proposals and presents them",
        icon: "📣",
    },
    RoleEntry {
        number: 6,
        title: "Support",
        description: "Handles auxiliary tasks and preparation",
        icon: "🛠️",
    },
];

/// Look up the role entry for a validated seat number.
pub fn lookup(number: u8) -> Option<&'static RoleEntry> {
    ROLES.iter().find(|r| r.number == number)
}

/// Parse the raw input field as a seat number.
///
/// Accepts only decimal integers in 1..=6; empty, non-numeric,
/// fractional, and out-of-range input all fail with a user-facing
/// message and no further processing happens.
pub fn parse_seat_number(input: &str) -> Result<u8, String> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if (1..=6).contains(&n) => Ok(n as u8),
        _ => Err("Enter a number from 1 to 6.".to_string()),
    }
}
