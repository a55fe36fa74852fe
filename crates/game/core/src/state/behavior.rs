use strum::{AsRefStr, Display, EnumString};

/// Behavioral alert ladder for an agent.
///
/// `Patrol` is the initial state. Sighting the target climbs the ladder
/// (`Suspicious` -> `Searching` -> `Alert`) as dwell accumulates; losing
/// sight decays it one level at a time, and a fully alerted agent that
/// loses the target walks back to its last-known position (`Returning`)
/// before resuming patrol.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Behavior {
    #[default]
    Patrol,
    Suspicious,
    Searching,
    Alert,
    Returning,
}

impl Behavior {
    /// Priority for the aggregate alert summary; higher wins.
    pub const fn priority(self) -> u8 {
        match self {
            Behavior::Patrol => 0,
            Behavior::Returning => 1,
            Behavior::Suspicious => 2,
            Behavior::Searching => 3,
            Behavior::Alert => 4,
        }
    }

    /// States that actively chase the target's last tracked position.
    pub const fn is_pursuit(self) -> bool {
        matches!(
            self,
            Behavior::Suspicious | Behavior::Searching | Behavior::Alert
        )
    }

    /// States that require a last-known target position to be present.
    pub const fn tracks_target(self) -> bool {
        self.is_pursuit() || matches!(self, Behavior::Returning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn priority_orders_the_ladder() {
        assert!(Behavior::Alert.priority() > Behavior::Searching.priority());
        assert!(Behavior::Searching.priority() > Behavior::Suspicious.priority());
        assert!(Behavior::Suspicious.priority() > Behavior::Returning.priority());
        assert!(Behavior::Returning.priority() > Behavior::Patrol.priority());
    }

    #[test]
    fn pursuit_classification() {
        assert!(!Behavior::Patrol.tracks_target());
        assert!(Behavior::Returning.tracks_target());
        assert!(!Behavior::Returning.is_pursuit());
        assert!(Behavior::Alert.is_pursuit());
    }

    #[test]
    fn snake_case_round_trip() {
        assert_eq!(Behavior::Searching.to_string(), "searching");
        assert_eq!(Behavior::from_str("alert").unwrap(), Behavior::Alert);
    }
}
