//! Where the caller's locale comes from. The engine itself never looks at
//! the environment; hosts pick a provider and hand the profile in.

use std::env;

use crate::domain::region::RegionalProfile;

/// Locale variables in the order POSIX gives them precedence.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

pub trait LocaleProvider {
    fn locale_tag(&self) -> Option<String>;

    /// Pricing for the detected locale, US when nothing is detected.
    fn regional_profile(&self) -> RegionalProfile {
        self.locale_tag()
            .map(|tag| RegionalProfile::for_locale_tag(&tag))
            .unwrap_or_default()
    }
}

/// A fixed tag, e.g. the browser language forwarded by a web host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticLocale(pub String);

impl StaticLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }
}

impl LocaleProvider for StaticLocale {
    fn locale_tag(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads `LC_ALL`, `LC_MONETARY` and `LANG`, first usable value wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvLocale;

impl LocaleProvider for EnvLocale {
    fn locale_tag(&self) -> Option<String> {
        tag_from_vars(|name| env::var(name).ok())
    }
}

fn tag_from_vars(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|&name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}
