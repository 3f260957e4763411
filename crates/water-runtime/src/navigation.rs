//! Screen navigation as an explicit state machine.
//!
//! The current [`Screen`] is a plain value owned by the caller; [`transition`]
//! computes the next one from a [`NavEvent`] without side effects.

use water_core::questionnaire::UserRole;

/// Every screen the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    ResidentialAdvice,
    AnalyzeFaucetData,
    FarmerWaterUsage,
    WaterUsageCalculator,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::ResidentialAdvice,
        Screen::AnalyzeFaucetData,
        Screen::FarmerWaterUsage,
        Screen::WaterUsageCalculator,
    ];

    /// Name shown in the sidebar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::ResidentialAdvice => "Residential Advice",
            Screen::AnalyzeFaucetData => "Analyze Faucet Data",
            Screen::FarmerWaterUsage => "Farmer's Water Usage",
            Screen::WaterUsageCalculator => "Water Usage Calculator",
        }
    }

    /// Key accepted by `--screen`.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::ResidentialAdvice => "residential",
            Screen::AnalyzeFaucetData => "analyze",
            Screen::FarmerWaterUsage => "farmer",
            Screen::WaterUsageCalculator => "calculator",
        }
    }

    /// Parse a `--screen` key. Unknown keys fall back to [`Screen::Home`].
    pub fn from_key(key: &str) -> Self {
        Screen::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(key))
            .unwrap_or_default()
    }

    /// Position in [`Screen::ALL`].
    pub fn index(&self) -> usize {
        Screen::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Something the user did that may change the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Picked a screen in the sidebar.
    Select(Screen),
    /// Submitted the role question on the home screen.
    SubmitRole(UserRole),
    /// Pressed "Back to Home".
    BackToHome,
}

/// Next screen after `event`.
///
/// A role submission only navigates from [`Screen::Home`]; elsewhere it is
/// ignored.
pub fn transition(current: Screen, event: NavEvent) -> Screen {
    match event {
        NavEvent::Select(screen) => screen,
        NavEvent::BackToHome => Screen::Home,
        NavEvent::SubmitRole(role) if current == Screen::Home => match role {
            UserRole::EverydayWaterUser => Screen::ResidentialAdvice,
            UserRole::AgriculturalProducer => Screen::FarmerWaterUsage,
        },
        NavEvent::SubmitRole(_) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_select_goes_anywhere() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                assert_eq!(transition(from, NavEvent::Select(to)), to);
            }
        }
    }

    #[test]
    fn test_back_to_home() {
        assert_eq!(
            transition(Screen::WaterUsageCalculator, NavEvent::BackToHome),
            Screen::Home
        );
    }

    #[test]
    fn test_role_submission_from_home() {
        assert_eq!(
            transition(Screen::Home, NavEvent::SubmitRole(UserRole::EverydayWaterUser)),
            Screen::ResidentialAdvice
        );
        assert_eq!(
            transition(Screen::Home, NavEvent::SubmitRole(UserRole::AgriculturalProducer)),
            Screen::FarmerWaterUsage
        );
    }

    #[test]
    fn test_role_submission_ignored_elsewhere() {
        assert_eq!(
            transition(
                Screen::AnalyzeFaucetData,
                NavEvent::SubmitRole(UserRole::AgriculturalProducer)
            ),
            Screen::AnalyzeFaucetData
        );
    }

    #[test]
    fn test_keys_round_trip_and_titles() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), screen);
        }
        assert_eq!(Screen::from_key("unknown"), Screen::Home);
        assert_eq!(Screen::FarmerWaterUsage.title(), "Farmer's Water Usage");
        assert_eq!(Screen::WaterUsageCalculator.index(), 4);
    }
}
