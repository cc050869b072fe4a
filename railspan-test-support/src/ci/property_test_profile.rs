//! Environment overrides for property-test runs.
//!
//! Local runs use each suite's defaults. CI raises or lowers the case count
//! with `PROGTEST_CASES` and opts into forked execution with
//! `RAILSPAN_PBT_FORK`.

use std::env;

/// Overrides the number of cases each property runs.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Enables forked proptest execution when truthy.
pub const RAILSPAN_PBT_FORK_ENV_KEY: &str = "RAILSPAN_PBT_FORK";

/// Case count and fork policy for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the process environment.
    ///
    /// Unparseable overrides are logged at `warn` and replaced with the
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use railspan_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds the profile from an arbitrary key lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use railspan_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "PROGTEST_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = override_or(
            PROGTEST_CASES_ENV_KEY,
            lookup(PROGTEST_CASES_ENV_KEY),
            default_cases,
            parse_cases,
        );
        let fork = override_or(
            RAILSPAN_PBT_FORK_ENV_KEY,
            lookup(RAILSPAN_PBT_FORK_ENV_KEY),
            default_fork,
            parse_flag,
        );
        Self { cases, fork }
    }

    /// Cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(error.to_string()),
    }
}

fn parse_flag(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("unrecognised flag `{other}`")),
    }
}
