use crate::colors::ColorError;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing::warn;

/// Environment variable selecting the [`ColorPolicy`]
pub const COLOR_POLICY_VAR: &str = "DOMDUMP_COLOR";

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum ColorPolicy {
    /// Color when the environment looks like a color-capable terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" | "" => Ok(ColorPolicy::Auto),
            "always" => Ok(ColorPolicy::Always),
            "never" => Ok(ColorPolicy::Never),
            other => Err(format!("unknown color policy `{}`", other)),
        }
    }
}

/// Everything the color backend needs to know about the process environment
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ColorSettings {
    pub policy: ColorPolicy,
    pub no_color: bool,
    pub force_color: bool,
    pub term: Option<String>,
    pub stdout_is_terminal: bool,
}

impl ColorSettings {
    pub fn from_env() -> Self {
        Self::from_vars(
            |name: &str| std::env::var(name).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Resolve settings from `lookup` instead of the process environment
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>, stdout_is_terminal: bool) -> Self {
        let policy = match lookup(COLOR_POLICY_VAR) {
            Some(value) => value.parse().unwrap_or_else(|err| {
                warn!("Ignoring {}: {}", COLOR_POLICY_VAR, err);
                ColorPolicy::Auto
            }),
            None => ColorPolicy::Auto,
        };
        Self {
            policy,
            // An empty NO_COLOR does not count
            no_color: lookup("NO_COLOR").map_or(false, |v| !v.is_empty()),
            force_color: is_forced(lookup("FORCE_COLOR").as_deref())
                || is_forced(lookup("CLICOLOR_FORCE").as_deref()),
            term: lookup("TERM"),
            stdout_is_terminal,
        }
    }

    /// Whether colored output may be produced, and if not, why
    pub fn check(&self) -> Result<(), ColorError> {
        match self.policy {
            ColorPolicy::Never => return Err(ColorError::Disabled(COLOR_POLICY_VAR)),
            ColorPolicy::Always => return Ok(()),
            ColorPolicy::Auto => {}
        }
        if self.no_color {
            return Err(ColorError::Disabled("NO_COLOR"));
        }
        if self.force_color {
            return Ok(());
        }
        if let Some(term) = self.term.as_deref().filter(|t| *t == "dumb") {
            return Err(ColorError::DumbTerminal(term.to_string()));
        }
        if !self.stdout_is_terminal {
            return Err(ColorError::NotATerminal);
        }
        Ok(())
    }
}

/// `FORCE_COLOR=0` and `FORCE_COLOR=false` turn forcing off
fn is_forced(value: Option<&str>) -> bool {
    match value {
        Some(v) => !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false"),
        None => false,
    }
}
