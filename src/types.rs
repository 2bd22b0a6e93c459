use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin];

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    /// Next unit in selector order, wrapping around
    pub fn next(self) -> Unit {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Kelvin,
            Unit::Kelvin => Unit::Celsius,
        }
    }

    /// Previous unit in selector order, wrapping around
    pub fn previous(self) -> Unit {
        match self {
            Unit::Celsius => Unit::Kelvin,
            Unit::Fahrenheit => Unit::Celsius,
            Unit::Kelvin => Unit::Fahrenheit,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('°').to_ascii_lowercase();
        match normalized.as_str() {
            "c" | "celsius" => Ok(Unit::Celsius),
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "k" | "kelvin" => Ok(Unit::Kelvin),
            _ => Err(format!(
                "unknown unit '{}' (expected celsius, fahrenheit or kelvin)",
                s
            )),
        }
    }
}

/// Persisted preferences. Only the theme flag survives a session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(rename = "darkMode", default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dark_mode: default_dark_mode(),
        }
    }
}

/// Focusable controls, in focus-ring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    FromUnit,
    ToUnit,
    Button(Button),
}

impl Focus {
    const RING: [Focus; 6] = [
        Focus::Input,
        Focus::FromUnit,
        Focus::ToUnit,
        Focus::Button(Button::Convert),
        Focus::Button(Button::Swap),
        Focus::Button(Button::Theme),
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn previous(self) -> Focus {
        let len = Self::RING.len();
        Self::RING[(self.position() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Convert,
    Swap,
    Theme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Normal,
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cycle_wraps() {
        assert_eq!(Unit::Kelvin.next(), Unit::Celsius);
        assert_eq!(Unit::Celsius.previous(), Unit::Kelvin);
        for unit in Unit::ALL {
            assert_eq!(unit.next().previous(), unit);
        }
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("C".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!("fahrenheit".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!("°K".parse::<Unit>(), Ok(Unit::Kelvin));
        assert!("rankine".parse::<Unit>().is_err());
    }

    #[test]
    fn test_focus_ring_round_trip() {
        let mut focus = Focus::Input;
        for _ in 0..6 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Input);
        assert_eq!(Focus::Input.previous(), Focus::Button(Button::Theme));
    }

    #[test]
    fn test_config_defaults_to_dark() {
        assert!(Config::default().dark_mode);
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.dark_mode);
    }

    #[test]
    fn test_config_uses_dark_mode_key() {
        let json = serde_json::to_string(&Config { dark_mode: false }).unwrap();
        assert_eq!(json, r#"{"darkMode":false}"#);
    }
}
