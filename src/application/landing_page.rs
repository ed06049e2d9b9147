use askama::Template;

use crate::{
    application::{dictionaries::t, language::UserLanguage, submission_form::SubmissionForm},
    domain::entities::submission_status::SubmissionStatus,
};

const FEATURE_KEYS: [&str; 3] = ["matching", "certified", "communication"];

struct FeatureCard {
    title: String,
    body: String,
}

/// Full landing page with the waitlist form rendered in `form`'s state.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    lang: UserLanguage,
    form: &'a SubmissionForm,
    contact_email: &'a str,
    features: Vec<FeatureCard>,
}

impl<'a> LandingTemplate<'a> {
    pub fn new(lang: UserLanguage, form: &'a SubmissionForm, contact_email: &'a str) -> Self {
        let features = FEATURE_KEYS
            .iter()
            .map(|key| FeatureCard {
                title: t(lang, &format!("features.{key}.title")),
                body: t(lang, &format!("features.{key}.body")),
            })
            .collect();

        Self {
            lang,
            form,
            contact_email,
            features,
        }
    }

    fn tr(&self, path: &str) -> String {
        t(self.lang, path)
    }

    fn button_label(&self) -> String {
        if self.form.status().is_loading() {
            self.tr("waitlist.sending")
        } else {
            self.tr("waitlist.submit")
        }
    }

    fn message_class(&self) -> &'static str {
        match self.form.status() {
            SubmissionStatus::Success => "success",
            _ => "error",
        }
    }
}
