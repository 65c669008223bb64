//! Contact command - run the contact form state machine on a simulated clock
//!
//! Nothing is sent: the accepted submission is logged and discarded, the same
//! way the page's runtime script handles it.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use folio::config::{BuildConfig, CONTENT_FILE};
use folio::contact::{ContactForm, ContactState, Field, SubmitOutcome, SUBMIT_LATENCY, SUCCESS_RESET};
use folio::{FolioError, SiteData};

use crate::ui::context::UiContext;
use crate::ui::views::contact::{
    render_contact_errors, render_contact_field, render_contact_header, render_contact_status,
};

/// Label changes on the simulated clock, starting from the submit press
fn simulate(state: &mut ContactState, submitted: &mut Option<ContactForm>) -> Vec<(Duration, &'static str)> {
    let mut timeline = vec![(Duration::ZERO, state.button_label())];
    let mut sink = |form: &ContactForm| {
        tracing::info!(name = %form.name, email = %form.email, subject = %form.subject, "contact form submitted");
        *submitted = Some(form.clone());
    };
    for now in [SUBMIT_LATENCY, SUBMIT_LATENCY + SUCCESS_RESET] {
        if state.tick(now, &mut sink) {
            timeline.push((now, state.button_label()));
        }
    }
    timeline
}

/// Recipient shown in the header. A missing site.toml is expected here; a
/// broken one is reported but does not stop the form check.
fn recipient(source: &Path) -> String {
    match SiteData::load(&source.join(CONTENT_FILE)) {
        Ok(site) => site.site.email,
        Err(FolioError::ContentNotFound { .. }) => "(no site.toml)".to_string(),
        Err(err) => {
            tracing::warn!(error = %err, "could not read the recipient from site.toml");
            "(unreadable site.toml)".to_string()
        }
    }
}

pub fn cmd_contact(source: &Path, form: ContactForm, json: bool, verbose: u8) -> Result<()> {
    let recipient = recipient(source);
    let config = BuildConfig::load_or_default(source)
        .map(|(config, _)| config)
        .unwrap_or_default();
    let ui = UiContext::new(json, verbose, &config);

    let mut state = ContactState::new();
    for field in Field::ALL {
        state.edit(field, form.get(field));
    }

    if !json {
        print!("{}", render_contact_header(&recipient, ui.color, ui.unicode));
        for field in Field::ALL {
            print!("{}", render_contact_field(field, state.form().get(field)));
        }
    }

    match state.submit(Duration::ZERO) {
        SubmitOutcome::Rejected(errors) => {
            if json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "rejected",
                    "command": "contact",
                    "errors": errors,
                }))?;
            } else {
                print!("{}", render_contact_errors(&errors, ui.color, ui.unicode));
            }
            bail!("contact form has {} invalid field(s)", errors.len());
        }
        SubmitOutcome::Started | SubmitOutcome::Ignored => {}
    }

    let mut submitted = None;
    let timeline = simulate(&mut state, &mut submitted);

    if json {
        for (at, label) in &timeline {
            crate::ui::json::emit(serde_json::json!({
                "event": "status",
                "command": "contact",
                "at_ms": at.as_millis() as u64,
                "label": label,
            }))?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "contact",
            "recipient": recipient,
            "submission": submitted,
        }))?;
    } else {
        for (at, label) in &timeline {
            print!("{}", render_contact_status(label, at.as_millis(), ui.color, ui.unicode));
        }
    }
    Ok(())
}
