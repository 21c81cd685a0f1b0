use gpui::{
    App, Entity, IntoElement, ParentElement, RenderOnce, Styled, Window, div, px,
};
use gpui_portfolio_content::{IconName, Profile, contact::mailto_href};

use crate::{
    components::{Card, Icon, Link, SectionTitle},
    theme::{ThemeExt, ThemeTextSizeKind},
    views::{ContactForm, sections::page_column},
};

/// The form next to the profile's contact details.
#[derive(IntoElement)]
pub struct ContactSection {
    profile: &'static Profile,
    form: Entity<ContactForm>,
}

impl ContactSection {
    pub fn new(profile: &'static Profile, form: Entity<ContactForm>) -> Self {
        Self { profile, form }
    }
}

impl RenderOnce for ContactSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let profile = self.profile;
        let colors = &cx.active_variant().colors;
        let secondary_text_color = colors.text.secondary;
        let accent_color = colors.accent.primary;
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.xl;
        let section_gap = layout.page.section_gap;
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);

        page_column(cx)
            .py(section_gap / 2.)
            .flex()
            .flex_col()
            .gap(gap)
            .child(SectionTitle::new(IconName::Mail, "Contact").subtitle("Parlons de votre projet"))
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap(gap)
                    .child(
                        Card::new()
                            .flex_1()
                            .title("M'écrire")
                            .child(self.form)
                            .child(
                                div()
                                    .flex()
                                    .flex_wrap()
                                    .items_center()
                                    .gap(px(4.))
                                    .text_size(caption_size)
                                    .text_color(secondary_text_color)
                                    .child("Ou écrivez‑moi directement :")
                                    .child(Link::new(
                                        "contact:direct",
                                        profile.email.clone(),
                                        mailto_href(&profile.email),
                                    )),
                            ),
                    )
                    .child(
                        Card::new()
                            .flex_1()
                            .title("Infos")
                            .child(
                                div()
                                    .flex()
                                    .items_center()
                                    .gap(px(8.))
                                    .child(Icon::named(IconName::MapPin).color(accent_color))
                                    .child(profile.location.clone()),
                            )
                            .child(
                                Link::new("contact:github", "GitHub", profile.github.clone())
                                    .icon(IconName::Github),
                            )
                            .child(
                                Link::new("contact:linkedin", "LinkedIn", profile.linkedin.clone())
                                    .icon(IconName::Linkedin),
                            ),
                    ),
            )
    }
}
