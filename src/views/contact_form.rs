use std::time::Duration;

use gpui::{
    App, AppContext, Context, ElementId, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window, div, prelude::FluentBuilder,
};
use gpui_portfolio_content::{
    IconName,
    contact::{ContactField, ContactFormError, ContactSubmission, MailDraft},
};
use gpui_primitives::input::InputState;

use crate::{
    ElementIdExt,
    components::{Button, TextField},
    theme::{ThemeExt, ThemeLayoutPaddingKind, ThemeTextSizeKind},
};

/// How long the confirmation stays visible after a successful submit.
pub const NOTICE_DURATION: Duration = Duration::from_secs(4);

pub const MAIL_CLIENT_NOTICE: &str = "Ouverture de votre client mail…";

/// The contact form: three inputs and a submit button.
///
/// A valid submission is handed to the system mail client as a `mailto:`
/// URL. Nothing is sent from the application itself.
pub struct ContactForm {
    recipient: SharedString,
    name: Entity<InputState>,
    email: Entity<InputState>,
    message: Entity<InputState>,
    invalid: Vec<ContactField>,
    notice: Option<SharedString>,
    notice_epoch: usize,
}

impl ContactForm {
    pub fn new(recipient: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        Self {
            recipient: recipient.into(),
            name: cx.new(|cx| InputState::new(cx)),
            email: cx.new(|cx| InputState::new(cx)),
            message: cx.new(|cx| InputState::new(cx)),
            invalid: Vec::new(),
            notice: None,
            notice_epoch: 0,
        }
    }

    fn input(&self, field: ContactField) -> &Entity<InputState> {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields drawn as invalid since the last submit.
    pub fn invalid_fields(&self) -> &[ContactField] {
        &self.invalid
    }

    pub fn notice(&self) -> Option<&SharedString> {
        self.notice.as_ref()
    }

    /// The values currently typed into the inputs.
    pub fn submission(&self, cx: &App) -> ContactSubmission {
        let value = |field| self.input(field).read(cx).value().to_string();

        ContactSubmission::new(
            value(ContactField::Name),
            value(ContactField::Email),
            value(ContactField::Message),
        )
    }

    /// Submits what is typed into the inputs.
    pub fn submit(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let submission = self.submission(cx);
        if let Err(err) = self.submit_submission(submission, cx) {
            tracing::debug!(%err, "contact form rejected");
        }
    }

    /// Validates `submission` and opens the mail client on success.
    ///
    /// Rejected submissions mark their empty fields invalid and open nothing.
    pub fn submit_submission(
        &mut self,
        submission: ContactSubmission,
        cx: &mut Context<Self>,
    ) -> Result<MailDraft, ContactFormError> {
        match submission.compose(&self.recipient) {
            Ok(draft) => {
                self.invalid.clear();

                tracing::info!(to = %draft.to, "opening mail client");
                cx.open_url(&draft.href());
                self.show_notice(MAIL_CLIENT_NOTICE, cx);

                Ok(draft)
            }
            Err(err) => {
                match &err {
                    ContactFormError::MissingFields(fields) => self.invalid = fields.clone(),
                    ContactFormError::InvalidRecipient(_) => {
                        tracing::warn!(%err, recipient = %self.recipient, "cannot address contact mail");
                        self.invalid.clear();
                    }
                }
                self.notice = None;
                cx.notify();

                Err(err)
            }
        }
    }

    fn show_notice(&mut self, notice: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.notice = Some(notice.into());
        self.notice_epoch = self.notice_epoch.wrapping_add(1);
        cx.notify();

        let epoch = self.notice_epoch;
        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(NOTICE_DURATION).await;
            if let Some(this) = this.upgrade() {
                this.update(cx, |form, cx| {
                    form.hide_notice(epoch, cx);
                });
            }
        })
        .detach();
    }

    /// Hides the notice unless a newer one replaced it.
    fn hide_notice(&mut self, epoch: usize, cx: &mut Context<Self>) {
        if epoch == self.notice_epoch {
            self.notice = None;
            cx.notify();
        }
    }

    fn field(&self, field: ContactField) -> TextField {
        TextField::new(
            ElementId::from("contact").with_suffix(field.key()),
            self.input(field).clone(),
        )
        .placeholder(field.placeholder())
        .invalid(self.invalid.contains(&field))
    }
}

impl Render for ContactForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let gap = ThemeLayoutPaddingKind::Md.resolve(cx);
        let caption_size = ThemeTextSizeKind::Caption.resolve(cx);
        let colors = &cx.active_variant().colors;
        let secondary_text_color = colors.text.secondary;
        let destructive_color = colors.accent.destructive;
        let has_invalid = !self.invalid.is_empty();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(gap)
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap(gap)
                    .child(div().flex_1().child(self.field(ContactField::Name)))
                    .child(div().flex_1().child(self.field(ContactField::Email))),
            )
            .child(self.field(ContactField::Message).multiline())
            .child(
                Button::new("contact:submit")
                    .text("Envoyer")
                    .icon(IconName::Mail)
                    .w_full()
                    .on_click(cx.listener(|form, _event, window, cx| {
                        form.submit(window, cx);
                    })),
            )
            .when(has_invalid, |this| {
                this.child(
                    div()
                        .text_size(caption_size)
                        .text_color(destructive_color)
                        .child("Merci de remplir tous les champs."),
                )
            })
            .when_some(self.notice.clone(), |this, notice| {
                this.child(
                    div()
                        .text_size(caption_size)
                        .text_color(secondary_text_color)
                        .child(notice),
                )
            })
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::{TestAppContext, VisualTestContext};

    use crate::theme::Theme;

    const RECIPIENT: &str = "lyamtorres@hotmail.com";

    fn form(cx: &mut TestAppContext) -> Entity<ContactForm> {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            crate::init(cx);
        });
        cx.new(|cx| ContactForm::new(RECIPIENT, cx))
    }

    #[gpui::test]
    fn test_empty_fields_are_rejected(cx: &mut TestAppContext) {
        let form = form(cx);

        let result = form.update(cx, |form, cx| {
            form.submit_submission(ContactSubmission::new("Alice", "  ", ""), cx)
        });

        assert!(matches!(
            result,
            Err(ContactFormError::MissingFields(ref fields))
                if fields == &[ContactField::Email, ContactField::Message]
        ));
        form.read_with(cx, |form, _cx| {
            assert_eq!(
                form.invalid_fields(),
                &[ContactField::Email, ContactField::Message]
            );
            assert!(form.notice().is_none());
        });
        assert!(cx.opened_url().is_none());
    }

    #[gpui::test]
    fn test_complete_submission_opens_one_mail(cx: &mut TestAppContext) {
        let form = form(cx);

        let draft = form
            .update(cx, |form, cx| {
                form.submit_submission(
                    ContactSubmission::new("Alice", "alice@example.com", "Bonjour"),
                    cx,
                )
            })
            .unwrap();

        assert_eq!(draft.to, RECIPIENT);
        assert_eq!(draft.subject, "Contact portfolio — Alice");
        assert_eq!(draft.body, "Bonjour\n\nAlice <alice@example.com>");
        assert_eq!(cx.opened_url(), Some(draft.href()));
        assert!(cx.opened_url().unwrap().starts_with("mailto:lyamtorres@hotmail.com?"));

        form.read_with(cx, |form, _cx| {
            assert!(form.invalid_fields().is_empty());
            assert_eq!(form.notice(), Some(&SharedString::from(MAIL_CLIENT_NOTICE)));
        });
    }

    #[gpui::test]
    fn test_valid_submit_clears_previous_errors(cx: &mut TestAppContext) {
        let form = form(cx);

        form.update(cx, |form, cx| {
            let _ = form.submit_submission(ContactSubmission::default(), cx);
            assert_eq!(form.invalid_fields(), &ContactField::ALL);

            let _ = form.submit_submission(ContactSubmission::new("A", "a@b.c", "Salut"), cx);
            assert!(form.invalid_fields().is_empty());
        });
    }

    #[gpui::test]
    fn test_notice_hides_after_timeout(cx: &mut TestAppContext) {
        let form = form(cx);

        form.update(cx, |form, cx| {
            let _ = form.submit_submission(ContactSubmission::new("A", "a@b.c", "Salut"), cx);
        });
        form.read_with(cx, |form, _cx| assert!(form.notice().is_some()));

        cx.executor().advance_clock(NOTICE_DURATION / 2);
        cx.run_until_parked();
        form.read_with(cx, |form, _cx| assert!(form.notice().is_some()));

        cx.executor().advance_clock(NOTICE_DURATION);
        cx.run_until_parked();
        form.read_with(cx, |form, _cx| assert!(form.notice().is_none()));
    }

    #[gpui::test]
    fn test_stale_timer_keeps_newer_notice(cx: &mut TestAppContext) {
        let form = form(cx);
        let submission = ContactSubmission::new("A", "a@b.c", "Salut");

        form.update(cx, |form, cx| {
            let _ = form.submit_submission(submission.clone(), cx);
        });

        cx.executor().advance_clock(NOTICE_DURATION * 3 / 4);
        form.update(cx, |form, cx| {
            let _ = form.submit_submission(submission, cx);
        });

        // Only the first timer has fired.
        cx.executor().advance_clock(NOTICE_DURATION / 2);
        cx.run_until_parked();
        form.read_with(cx, |form, _cx| assert!(form.notice().is_some()));
    }

    #[gpui::test]
    fn test_submit_reads_empty_inputs(cx: &mut TestAppContext) {
        let form = form(cx);

        let submission = form.read_with(cx, |form, cx| form.submission(cx));
        assert_eq!(submission, ContactSubmission::default());
    }

    #[gpui::test]
    fn test_submitting_empty_inputs_flags_every_field(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            crate::init(cx);
        });

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|cx| ContactForm::new(RECIPIENT, cx))
            })
            .unwrap()
        });

        window
            .update(cx, |form, window, cx| {
                form.submit(window, cx);
                assert_eq!(
                    form.invalid_fields(),
                    &[ContactField::Name, ContactField::Email, ContactField::Message]
                );
                assert!(form.notice().is_none());
            })
            .unwrap();

        assert!(cx.opened_url().is_none());
    }

    #[gpui::test]
    fn test_form_renders_in_window(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::builtin());
            crate::init(cx);
        });

        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|cx| ContactForm::new(RECIPIENT, cx))
            })
            .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
