use egui::{Button, Id, Response, SidePanel, Ui};

use crate::{
    gate::{Capability, Chrome, KioskContext},
    nav::{ElementPath, NavElement},
};

/// Whole dashboard navigation bar, gated by the overall `dashNav` mode.
pub fn dash_nav<R>(
    ui: &mut Ui,
    kiosk: &KioskContext,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    kiosk.show_at(ui, ElementPath::DashNav, |ui: &mut Ui| {
        ui.horizontal(add_contents).inner
    })
}

/// Time range controls, gated by `dashNav.timePicker`.
pub fn time_controls<R>(
    ui: &mut Ui,
    kiosk: &KioskContext,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    kiosk.show_at(ui, NavElement::TimePicker, |ui: &mut Ui| {
        ui.horizontal(add_contents).inner
    })
}

/// Left side menu panel, gated by `dashNav.sideMenu`.
pub fn side_menu<R>(
    ui: &mut Ui,
    kiosk: &KioskContext,
    id: impl Into<Id>,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    let panel = SidePanel::left(id).resizable(false);
    kiosk.show_at(ui, NavElement::SideMenu, |ui: &mut Ui| {
        panel.show_inside(ui, add_contents).inner
    })
}

/// Toolbar button gated by an arbitrary config path such as
/// `dashNav.starToggle`.
pub struct ToolbarButton<'a> {
    path: &'a str,
    text: String,
    tooltip: Option<&'a str>,
}

impl<'a> ToolbarButton<'a> {
    pub fn new(path: &'a str, text: impl Into<String>) -> Self {
        Self {
            path,
            text: text.into(),
            tooltip: None,
        }
    }

    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Draws the button unless its path is hidden.
    pub fn show(self, ui: &mut Ui, kiosk: &KioskContext) -> Option<Response> {
        let path = self.path;
        kiosk.show(ui, path, self)
    }
}

impl Chrome for ToolbarButton<'_> {
    type Output = Response;

    fn render(self, ui: &mut Ui) -> Response {
        let resp = ui.add(Button::new(self.text));
        match self.tooltip {
            Some(tip) => resp.on_hover_text(tip),
            None => resp,
        }
    }
}

/// What a [`PageToolbar`] drew in this frame.
#[derive(Debug, Clone)]
pub struct PageToolbarResponse<R> {
    pub inner: R,
    /// Whether the title, parent and back link were drawn.
    pub title_shown: bool,
    pub back_clicked: bool,
}

/// Page toolbar with a title, optional parent and back link, followed by
/// caller supplied contents.
///
/// When `dashNav.title` is hidden the toolbar itself stays, only the title,
/// parent and back link are dropped.
pub struct PageToolbar<'a> {
    title: &'a str,
    parent: Option<&'a str>,
    back_button: bool,
}

impl<'a> PageToolbar<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            parent: None,
            back_button: false,
        }
    }

    pub fn parent(mut self, parent: &'a str) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn back_button(mut self, enabled: bool) -> Self {
        self.back_button = enabled;
        self
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        kiosk: &KioskContext,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> PageToolbarResponse<R> {
        let with_title = match kiosk.capability(NavElement::Title.into()) {
            Capability::Render | Capability::RenderRestricted => true,
            Capability::Suppress => false,
        };

        ui.horizontal(|ui| {
            let mut back_clicked = false;
            if with_title {
                back_clicked = self.back_button && ui.small_button("⬅").clicked();
                if let Some(parent) = self.parent {
                    ui.label(parent);
                    ui.label("/");
                }
                ui.strong(self.title);
                ui.separator();
            }

            PageToolbarResponse {
                inner: add_contents(ui),
                title_shown: with_title,
                back_clicked,
            }
        })
        .inner
    }
}
