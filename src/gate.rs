use egui::Ui;

use crate::{
    config::Configuration,
    mode::ElementConfig,
    nav::ElementPath,
    resolver,
    settings::FeatureToggles,
};

/// What a gate allows a piece of chrome to do in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Render,
    RenderRestricted,
    Suppress,
}

/// A piece of navigation chrome that can be placed behind a kiosk gate.
///
/// Only [`Chrome::render`] is required. Restricted rendering falls back to
/// normal rendering and suppression draws nothing, which is what most
/// elements want. Implemented for every `FnOnce(&mut Ui) -> R`.
pub trait Chrome: Sized {
    type Output;

    fn render(self, ui: &mut Ui) -> Self::Output;

    fn render_restricted(self, ui: &mut Ui) -> Self::Output {
        self.render(ui)
    }

    fn suppress(self, _ui: &mut Ui) -> Option<Self::Output> {
        None
    }
}

impl<F, R> Chrome for F
where
    F: FnOnce(&mut Ui) -> R,
{
    type Output = R;

    fn render(self, ui: &mut Ui) -> R {
        self(ui)
    }
}

/// Everything a gate needs to decide for one frame: the feature toggles and
/// the already resolved configuration.
///
/// Build it once per frame with [`crate::KioskSession::context`] and pass it
/// down to every gated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KioskContext {
    features: FeatureToggles,
    config: Configuration,
}

impl KioskContext {
    pub fn new(features: FeatureToggles, config: Configuration) -> Self {
        Self { features, config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn features(&self) -> FeatureToggles {
        self.features
    }

    /// Rule for `path`. Everything is editable while kiosk customization is
    /// switched off.
    pub fn lookup(&self, path: &str) -> ElementConfig {
        if !self.features.custom_kiosk {
            return ElementConfig::default();
        }

        resolver::lookup(&self.config, path)
    }

    pub fn capability(&self, path: ElementPath) -> Capability {
        if !self.features.custom_kiosk {
            return Capability::Render;
        }

        self.config.get(path).mode.capability()
    }

    /// Shows `chrome` according to the rule at the dotted `path`.
    pub fn show<C: Chrome>(&self, ui: &mut Ui, path: &str, chrome: C) -> Option<C::Output> {
        let capability = self.lookup(path).mode.capability();
        dispatch(ui, capability, chrome)
    }

    /// Same as [`KioskContext::show`] for an already parsed path.
    pub fn show_at<C: Chrome>(
        &self,
        ui: &mut Ui,
        path: impl Into<ElementPath>,
        chrome: C,
    ) -> Option<C::Output> {
        dispatch(ui, self.capability(path.into()), chrome)
    }
}

fn dispatch<C: Chrome>(ui: &mut Ui, capability: Capability, chrome: C) -> Option<C::Output> {
    match capability {
        Capability::Render => Some(chrome.render(ui)),
        Capability::RenderRestricted => Some(chrome.render_restricted(ui)),
        Capability::Suppress => chrome.suppress(ui),
    }
}
