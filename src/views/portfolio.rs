use std::rc::Rc;

use gpui::{
    AppContext, ClickEvent, Context, Entity, FocusHandle, InteractiveElement, IntoElement,
    ParentElement, Render, ScrollHandle, StatefulInteractiveElement, Styled, Window, div,
};
use gpui_portfolio_content::Content;

use crate::{
    state::{MountGate, ThemeToggle},
    theme::ThemeExt,
    views::{
        ContactForm,
        sections::{
            ContactSection, ExperienceSection, Footer, Hero, Navbar, NavigateHandler,
            ProjectsSection, RecognitionSection, Section, SkillsSection,
        },
    },
};

/// The window's root: a fixed navbar over the scrolling page.
///
/// Owns the dark/light toggle and the chart's mount gate and hands both to
/// the sections as plain values.
pub struct PortfolioView {
    focus_handle: FocusHandle,
    content: &'static Content,
    toggle: ThemeToggle,
    mount: MountGate,
    scroll_handle: ScrollHandle,
    contact_form: Entity<ContactForm>,
}

impl PortfolioView {
    pub fn new(content: &'static Content, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let toggle = ThemeToggle::new();
        toggle.apply(cx);

        // Deferred past the render that opens the window.
        cx.spawn_in(window, async move |this, cx| {
            if let Err(err) = this.update(cx, |view, cx| view.mount(cx)) {
                tracing::debug!(%err, "portfolio closed before the chart mounted");
            }
        })
        .detach();

        let recipient = content.profile.email.clone();

        Self {
            focus_handle: cx.focus_handle(),
            content,
            toggle,
            mount: MountGate::new(),
            scroll_handle: ScrollHandle::new(),
            contact_form: cx.new(|cx| ContactForm::new(recipient, cx)),
        }
    }

    pub fn toggle(&self) -> ThemeToggle {
        self.toggle
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    pub fn contact_form(&self) -> &Entity<ContactForm> {
        &self.contact_form
    }

    /// Lets the chart draw its bars. Returns `false` if it already could.
    pub fn mount(&mut self, cx: &mut Context<Self>) -> bool {
        let first = self.mount.mark_mounted();
        if first {
            tracing::debug!("skills chart mounted");
            cx.notify();
        }
        first
    }

    /// Flips between the dark and light variants. Returns whether it is now dark.
    pub fn toggle_theme(&mut self, cx: &mut Context<Self>) -> bool {
        let dark = self.toggle.toggle();
        self.toggle.apply(cx);
        tracing::info!(dark, "theme toggled");
        cx.notify();
        dark
    }

    pub fn scroll_to(&mut self, section: Section, cx: &mut Context<Self>) {
        tracing::debug!(?section, "scrolling to section");
        self.scroll_handle.scroll_to_item(section.scroll_index());
        cx.notify();
    }
}

impl Render for PortfolioView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        crate::init_for_window(window, cx);

        let navigate: NavigateHandler = Rc::new(cx.listener(
            |view, section: &Section, _window, cx| view.scroll_to(*section, cx),
        ));
        let on_toggle_theme = cx.listener(|view, _event: &ClickEvent, _window, cx| {
            view.toggle_theme(cx);
        });

        let content = self.content;
        let theme = cx.get_theme();
        let font = &theme.layout.text.default_font;
        let font_family = font.family[0].clone();
        let line_height = font.line_height;
        let text_size = font.sizes.body;
        let colors = &cx.active_variant().colors;
        let bg_color = colors.background.primary;
        let text_color = colors.text.primary;

        div()
            .id("portfolio")
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .flex()
            .flex_col()
            .bg(bg_color)
            .text_color(text_color)
            .font_family(font_family)
            .text_size(text_size)
            .line_height(line_height)
            .child(Navbar::new(
                content.profile.name.clone(),
                content.profile.cv.clone(),
                self.toggle,
                navigate.clone(),
                on_toggle_theme,
            ))
            .child(
                div()
                    .id("portfolio:scroll")
                    .flex_1()
                    .w_full()
                    .overflow_y_scroll()
                    .track_scroll(&self.scroll_handle)
                    .child(Hero::new(content, navigate))
                    .child(ProjectsSection::new(&content.projects))
                    .child(SkillsSection::new(content, self.mount))
                    .child(ExperienceSection::new(&content.experience))
                    .child(RecognitionSection::new(content))
                    .child(ContactSection::new(&content.profile, self.contact_form.clone()))
                    .child(Footer::new(content.profile.name.clone())),
            )
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{Modifiers, TestAppContext, VisualTestContext, WindowHandle, px};

    use crate::theme::{ActiveVariantId, Theme, ThemeVariantKind};

    fn open(cx: &mut TestAppContext) -> WindowHandle<PortfolioView> {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            crate::init(cx);

            cx.open_window(Default::default(), |window, cx| {
                cx.new(|cx| PortfolioView::new(Content::builtin(), window, cx))
            })
            .unwrap()
        })
    }

    #[gpui::test]
    fn test_starts_dark(cx: &mut TestAppContext) {
        let window = open(cx);

        window
            .update(cx, |view, _window, cx| {
                assert!(view.toggle().is_dark());
                assert_eq!(cx.active_variant().kind, ThemeVariantKind::Dark);
            })
            .unwrap();
    }

    #[gpui::test]
    fn test_toggle_twice_restores_marker(cx: &mut TestAppContext) {
        let window = open(cx);

        window
            .update(cx, |view, _window, cx| {
                let initial = cx.global::<ActiveVariantId>().0;

                assert!(!view.toggle_theme(cx));
                assert_ne!(cx.global::<ActiveVariantId>().0, initial);
                assert_eq!(cx.active_variant().kind, ThemeVariantKind::Light);

                assert!(view.toggle_theme(cx));
                assert_eq!(cx.global::<ActiveVariantId>().0, initial);
            })
            .unwrap();
    }

    #[gpui::test]
    fn test_chart_mounts_after_first_frame(cx: &mut TestAppContext) {
        let window = open(cx);

        // Nothing has run since the window opened.
        window
            .update(cx, |view, _window, _cx| assert!(!view.is_mounted()))
            .unwrap();

        cx.run_until_parked();

        window
            .update(cx, |view, _window, cx| {
                assert!(view.is_mounted());
                assert!(!view.mount(cx));
            })
            .unwrap();
    }

    #[gpui::test]
    fn test_clicking_theme_toggle_flips_variant(cx: &mut TestAppContext) {
        let window = open(cx);
        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let active = |cx: &mut VisualTestContext| {
            cx.update(|_window, cx| cx.global::<ActiveVariantId>().0)
        };
        let initial = active(cx);

        let sun = cx
            .debug_bounds("icons/sun.svg")
            .expect("the dark page shows the sun");
        cx.simulate_click(sun.center(), Modifiers::none());
        cx.run_until_parked();

        assert_ne!(active(cx), initial);
        assert!(cx.debug_bounds("icons/sun.svg").is_none());
        let moon = cx
            .debug_bounds("icons/moon.svg")
            .expect("the light page shows the moon");
        window
            .update(cx, |view, _window, cx| {
                assert!(!view.toggle().is_dark());
                assert_eq!(cx.active_variant().kind, ThemeVariantKind::Light);
            })
            .unwrap();

        cx.simulate_click(moon.center(), Modifiers::none());
        cx.run_until_parked();

        assert_eq!(active(cx), initial);
        assert!(cx.debug_bounds("icons/sun.svg").is_some());
    }

    #[gpui::test]
    fn test_form_addresses_profile_email(cx: &mut TestAppContext) {
        let window = open(cx);

        let form = window
            .update(cx, |view, _window, _cx| view.contact_form().clone())
            .unwrap();

        let draft = form
            .update(cx, |form, cx| {
                form.submit_submission(
                    gpui_portfolio_content::contact::ContactSubmission::new(
                        "Alice",
                        "alice@example.com",
                        "Bonjour",
                    ),
                    cx,
                )
            })
            .unwrap();

        assert_eq!(draft.to, "lyamtorres@hotmail.com");
    }

    #[gpui::test]
    fn test_nav_scrolls_page_to_section(cx: &mut TestAppContext) {
        let window = open(cx);
        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let offset = |cx: &mut VisualTestContext| {
            window
                .update(cx, |view, _window, _cx| view.scroll_handle.offset().y)
                .unwrap()
        };
        assert_eq!(offset(cx), px(0.));

        window
            .update(cx, |view, _window, cx| view.scroll_to(Section::Contact, cx))
            .unwrap();
        cx.run_until_parked();
        assert!(offset(cx) < px(0.), "the contact section is below the fold");

        window
            .update(cx, |view, _window, cx| view.scroll_to(Section::Hero, cx))
            .unwrap();
        cx.run_until_parked();
        assert_eq!(offset(cx), px(0.));
    }
}
