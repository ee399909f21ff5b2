//! Scripted user actions for the command line.

use std::fmt;
use std::str::FromStr;

use stranger_themes_core::Theme;

use crate::surface::{SurfaceKind, UserAction};

/// One user action, written `surface:argument`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// `plain:light` or `plain:dark`.
    Plain(UserAction),
    /// `list:ROW`.
    List(usize),
    /// `grid:ITEM`.
    Grid(usize),
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("Step '{0}' is not of the form surface:argument")]
    MissingSeparator(String),

    #[error("{0}")]
    UnknownSurface(String),

    #[error("Invalid argument '{value}' for the {surface} surface")]
    InvalidArgument { surface: SurfaceKind, value: String },
}

impl FromStr for ScriptStep {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (surface, value) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| ScriptError::MissingSeparator(s.to_string()))?;
        let surface: SurfaceKind = surface.parse().map_err(ScriptError::UnknownSurface)?;
        let value = value.trim();
        let invalid = || ScriptError::InvalidArgument {
            surface,
            value: value.to_string(),
        };

        match surface {
            SurfaceKind::Plain => value
                .parse::<Theme>()
                .map(|theme| Self::Plain(UserAction::from(theme)))
                .map_err(|_| invalid()),
            SurfaceKind::List => value.parse().map(Self::List).map_err(|_| invalid()),
            SurfaceKind::Grid => value.parse().map(Self::Grid).map_err(|_| invalid()),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(action) => write!(f, "plain:{}", action.theme()),
            Self::List(row) => write!(f, "list:{row}"),
            Self::Grid(item) => write!(f, "grid:{item}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        assert_eq!(
            "plain:dark".parse::<ScriptStep>(),
            Ok(ScriptStep::Plain(UserAction::SelectDark))
        );
        assert_eq!("list:1".parse::<ScriptStep>(), Ok(ScriptStep::List(1)));
        assert_eq!(" grid:9 ".parse::<ScriptStep>(), Ok(ScriptStep::Grid(9)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ScriptStep::Plain(UserAction::SelectLight).to_string(), "plain:light");
        assert_eq!(ScriptStep::Grid(4).to_string(), "grid:4");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "grid".parse::<ScriptStep>(),
            Err(ScriptError::MissingSeparator("grid".to_string()))
        );
        assert!(matches!(
            "window:1".parse::<ScriptStep>(),
            Err(ScriptError::UnknownSurface(_))
        ));
        assert_eq!(
            "plain:sepia".parse::<ScriptStep>(),
            Err(ScriptError::InvalidArgument {
                surface: SurfaceKind::Plain,
                value: "sepia".to_string()
            })
        );
        assert!("list:-1".parse::<ScriptStep>().is_err());
    }
}
