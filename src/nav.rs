use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::{ElementConfig, Mode};

const ROOT: &str = "dashNav";
const SEPARATOR: char = '.';

/// Navigation elements governed by kiosk mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavElement {
    TimePicker,
    Title,
    SideMenu,
    TvToggle,
    AddPanelToggle,
    DashboardSettingsToggle,
    SaveDashboardToggle,
    SnapshotToggle,
    StarToggle,
    SharePanelToggle,
}

impl NavElement {
    pub const ALL: [NavElement; 10] = [
        NavElement::TimePicker,
        NavElement::Title,
        NavElement::SideMenu,
        NavElement::TvToggle,
        NavElement::AddPanelToggle,
        NavElement::DashboardSettingsToggle,
        NavElement::SaveDashboardToggle,
        NavElement::SnapshotToggle,
        NavElement::StarToggle,
        NavElement::SharePanelToggle,
    ];

    /// Key of the element inside `dashNav`.
    pub fn key(self) -> &'static str {
        match self {
            NavElement::TimePicker => "timePicker",
            NavElement::Title => "title",
            NavElement::SideMenu => "sideMenu",
            NavElement::TvToggle => "tvToggle",
            NavElement::AddPanelToggle => "addPanelToggle",
            NavElement::DashboardSettingsToggle => "dashboardSettingsToggle",
            NavElement::SaveDashboardToggle => "saveDashboardToggle",
            NavElement::SnapshotToggle => "snapshotToggle",
            NavElement::StarToggle => "starToggle",
            NavElement::SharePanelToggle => "sharePanelToggle",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    pub fn path(self) -> ElementPath {
        ElementPath::Element(self)
    }
}

/// Parsed dotted path into the navigation configuration, e.g. `dashNav.title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementPath {
    /// `dashNav` itself: the mode of the whole navigation bar.
    DashNav,
    Element(NavElement),
}

impl ElementPath {
    /// Parses a dotted path. Returns `None` for anything that does not point
    /// at an [`ElementConfig`].
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = path.split(SEPARATOR);
        if segments.next()? != ROOT {
            return None;
        }

        let parsed = match segments.next() {
            None => ElementPath::DashNav,
            Some(key) => ElementPath::Element(NavElement::from_key(key)?),
        };

        if segments.next().is_some() {
            return None;
        }

        Some(parsed)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementPath::DashNav => f.write_str(ROOT),
            ElementPath::Element(e) => write!(f, "{ROOT}{SEPARATOR}{}", e.key()),
        }
    }
}

impl From<NavElement> for ElementPath {
    fn from(e: NavElement) -> Self {
        ElementPath::Element(e)
    }
}

/// Visibility rules for the dashboard navigation bar and its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// Mode of the navigation bar as a whole
    pub mode: Mode,
    pub time_picker: ElementConfig,
    pub title: ElementConfig,
    pub side_menu: ElementConfig,
    pub tv_toggle: ElementConfig,
    pub add_panel_toggle: ElementConfig,
    pub dashboard_settings_toggle: ElementConfig,
    pub save_dashboard_toggle: ElementConfig,
    pub snapshot_toggle: ElementConfig,
    pub star_toggle: ElementConfig,
    pub share_panel_toggle: ElementConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::uniform(ElementConfig::EDITABLE)
    }
}

impl NavConfig {
    /// Editable bar with every element set to `item`.
    pub const fn uniform(item: ElementConfig) -> Self {
        Self {
            mode: Mode::Editable,
            time_picker: item,
            title: item,
            side_menu: item,
            tv_toggle: item,
            add_panel_toggle: item,
            dashboard_settings_toggle: item,
            save_dashboard_toggle: item,
            snapshot_toggle: item,
            star_toggle: item,
            share_panel_toggle: item,
        }
    }

    pub fn element(&self, e: NavElement) -> ElementConfig {
        match e {
            NavElement::TimePicker => self.time_picker,
            NavElement::Title => self.title,
            NavElement::SideMenu => self.side_menu,
            NavElement::TvToggle => self.tv_toggle,
            NavElement::AddPanelToggle => self.add_panel_toggle,
            NavElement::DashboardSettingsToggle => self.dashboard_settings_toggle,
            NavElement::SaveDashboardToggle => self.save_dashboard_toggle,
            NavElement::SnapshotToggle => self.snapshot_toggle,
            NavElement::StarToggle => self.star_toggle,
            NavElement::SharePanelToggle => self.share_panel_toggle,
        }
    }

    fn element_mut(&mut self, e: NavElement) -> &mut ElementConfig {
        match e {
            NavElement::TimePicker => &mut self.time_picker,
            NavElement::Title => &mut self.title,
            NavElement::SideMenu => &mut self.side_menu,
            NavElement::TvToggle => &mut self.tv_toggle,
            NavElement::AddPanelToggle => &mut self.add_panel_toggle,
            NavElement::DashboardSettingsToggle => &mut self.dashboard_settings_toggle,
            NavElement::SaveDashboardToggle => &mut self.save_dashboard_toggle,
            NavElement::SnapshotToggle => &mut self.snapshot_toggle,
            NavElement::StarToggle => &mut self.star_toggle,
            NavElement::SharePanelToggle => &mut self.share_panel_toggle,
        }
    }

    pub fn get(&self, path: ElementPath) -> ElementConfig {
        match path {
            ElementPath::DashNav => ElementConfig::new(self.mode),
            ElementPath::Element(e) => self.element(e),
        }
    }

    pub fn set(&mut self, path: ElementPath, item: ElementConfig) {
        match path {
            ElementPath::DashNav => self.mode = item.mode,
            ElementPath::Element(e) => *self.element_mut(e) = item,
        }
    }

    /// Returns a copy with `path` set to `item`.
    pub fn with(mut self, path: ElementPath, item: ElementConfig) -> Self {
        self.set(path, item);
        self
    }
}
