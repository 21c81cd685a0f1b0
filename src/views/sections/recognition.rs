use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px,
};
use gpui_portfolio_content::{Content, Testimonial};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    components::{Badge, Card, Tabs},
    theme::{ThemeExt, ThemeTextSizeKind},
    views::sections::{grid_rows, page_column},
};

const QUOTE_COLUMNS: usize = 3;

/// One badge per certification, in order.
pub fn certification_badges(certifications: &[String]) -> Vec<Badge> {
    certifications
        .iter()
        .map(|certification| Badge::new(certification.clone()))
        .collect()
}

/// One quote block per testimonial, in order.
pub fn testimonial_quotes(testimonials: &[Testimonial]) -> Vec<Quote> {
    testimonials.iter().map(Quote::from).collect()
}

/// A testimonial: the quote, then who said it.
#[derive(IntoElement)]
pub struct Quote {
    text: SharedString,
    attribution: SharedString,
}

impl From<&Testimonial> for Quote {
    fn from(testimonial: &Testimonial) -> Self {
        Self {
            text: testimonial.quote().into(),
            attribution: testimonial.attribution().into(),
        }
    }
}

impl RenderOnce for Quote {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = &cx.active_variant().colors;
        let secondary_text_color = colors.text.secondary;
        let border_color = colors.border;
        let layout = &cx.get_theme().layout;
        let corner_radius = layout.corner_radii.lg;
        let padding = layout.padding.lg;
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);

        div()
            .relative()
            .flex_1()
            .flex()
            .flex_col()
            .gap(px(12.))
            .p(padding)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .border(px(1.))
                    .border_inside()
                    .border_color(border_color),
            )
            .child(div().child(self.text))
            .child(
                div()
                    .text_size(caption_size)
                    .text_color(secondary_text_color)
                    .child(self.attribution),
            )
    }
}

/// Certifications and testimonials behind two tabs.
#[derive(IntoElement)]
pub struct RecognitionSection {
    content: &'static Content,
}

impl RecognitionSection {
    pub fn new(content: &'static Content) -> Self {
        Self { content }
    }
}

impl RenderOnce for RecognitionSection {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let layout = &cx.get_theme().layout;
        let gap = layout.padding.lg;
        let section_gap = layout.page.section_gap;

        let certifications = Card::new().title("Validations & badges").child(
            div()
                .flex()
                .flex_wrap()
                .gap(px(8.))
                .children(certification_badges(&self.content.certifications)),
        );

        let testimonials = Card::new()
            .title("Ce que disent mes clients")
            .children(grid_rows(
                testimonial_quotes(&self.content.testimonials),
                QUOTE_COLUMNS,
                gap,
            ));

        page_column(cx).py(section_gap / 2.).child(
            Tabs::new("recognition")
                .tab("certs", "Certifications", certifications)
                .tab("testimonials", "Témoignages", testimonials),
        )
    }
}
