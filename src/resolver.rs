//! Resolution of kiosk configurations into per-element decisions.
//!
//! Every function here is total: unknown names and paths never fail, they
//! fall back to leaving the configuration alone or to showing the element.

use log::{debug, trace};

use crate::{
    config::Configuration,
    mode::ElementConfig,
    nav::ElementPath,
    profile::Profile,
};

/// Configuration that is actually in effect. When kiosk mode is not enabled
/// the disabled profile wins regardless of what is stored.
pub fn resolve(config: &Configuration, enabled: bool) -> Configuration {
    if !enabled {
        return Configuration::disabled();
    }

    *config
}

/// Looks up the rule for a dotted path such as `dashNav.title`.
/// Unknown paths resolve to an editable element.
pub fn lookup(config: &Configuration, path: &str) -> ElementConfig {
    match ElementPath::parse(path) {
        Some(p) => config.get(p),
        None => {
            trace!("unknown kiosk path {path:?}, falling back to editable");
            ElementConfig::default()
        }
    }
}

/// Static configuration of the named profile, or `current` when the name is
/// not a profile.
pub fn select_profile(current: &Configuration, name: &str) -> Configuration {
    match Profile::from_name(name) {
        Some(profile) => {
            debug!("kiosk profile {} -> {profile}", current.profile);
            Configuration::of(profile)
        }
        None => {
            debug!("ignoring unknown kiosk profile {name:?}");
            *current
        }
    }
}

/// Flips the element at `path` between hidden and editable.
///
/// Only custom configurations are editable: anything else, an unknown path
/// or a read-only element yields an unchanged copy.
pub fn toggle_option(config: &Configuration, path: &str) -> Configuration {
    if !config.profile.is_custom() {
        trace!("kiosk profile {} is not editable", config.profile);
        return *config;
    }

    let Some(p) = ElementPath::parse(path) else {
        trace!("unknown kiosk path {path:?}, nothing to toggle");
        return *config;
    };

    let current = config.get(p);
    let next = ElementConfig::new(current.mode.toggled());
    debug!("kiosk option {p}: {:?} -> {:?}", current.mode, next.mode);

    config.with(p, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn test_resolve_disabled_wins_when_not_enabled() {
        for p in Profile::ALL {
            let c = Configuration::of(p);
            assert_eq!(resolve(&c, false), Configuration::disabled());
            assert_eq!(resolve(&c, true), c);
        }
    }

    #[test]
    fn test_lookup_standard_vs_disabled() {
        let c = Configuration::standard();
        assert_eq!(lookup(&c, "dashNav.sideMenu").mode, Mode::Hidden);

        let c = select_profile(&c, "disabled");
        assert_eq!(lookup(&c, "dashNav.sideMenu").mode, Mode::Editable);
    }

    #[test]
    fn test_lookup_unknown_paths() {
        let c = Configuration::tv();
        for path in ["", "dashNav.nope", "dashNav.title.mode", "title", "x.y.z"] {
            assert_eq!(lookup(&c, path), ElementConfig::EDITABLE);
        }
    }

    #[test]
    fn test_lookup_whole_bar() {
        let c = Configuration::custom().with(ElementPath::DashNav, ElementConfig::HIDDEN);
        assert_eq!(lookup(&c, "dashNav").mode, Mode::Hidden);
    }

    #[test]
    fn test_select_unknown_profile_is_noop() {
        let c = Configuration::tv();
        assert_eq!(select_profile(&c, "kiosk"), c);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let c = Configuration::custom().with(
            ElementPath::parse("dashNav.title").unwrap(),
            ElementConfig::HIDDEN,
        );

        let once = toggle_option(&c, "dashNav.title");
        assert_eq!(lookup(&once, "dashNav.title").mode, Mode::Editable);

        let twice = toggle_option(&once, "dashNav.title");
        assert_eq!(lookup(&twice, "dashNav.title").mode, Mode::Hidden);
        assert_eq!(twice, c);
    }

    #[test]
    fn test_toggle_does_not_mutate_original() {
        let c = Configuration::custom();
        let toggled = toggle_option(&c, "dashNav.starToggle");
        assert_ne!(toggled, c);
        assert_eq!(c, Configuration::custom());
    }

    #[test]
    fn test_toggle_ignores_static_profiles() {
        for p in [Profile::Standard, Profile::Tv, Profile::Disabled] {
            let c = Configuration::of(p);
            assert_eq!(toggle_option(&c, "dashNav.title"), c);
        }
    }

    #[test]
    fn test_toggle_leaves_read_only_alone() {
        let path = ElementPath::parse("dashNav.timePicker").unwrap();
        let c = Configuration::custom().with(path, ElementConfig::new(Mode::ReadOnly));
        assert_eq!(toggle_option(&c, "dashNav.timePicker"), c);
    }

    #[test]
    fn test_toggle_unknown_path_is_noop() {
        let c = Configuration::custom();
        assert_eq!(toggle_option(&c, "dashNav.clock"), c);
    }
}
