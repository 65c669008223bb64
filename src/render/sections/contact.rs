//! Contact: channels, social links and the validated message form
//!
//! The form is `novalidate`; `site.js` applies the embedded rules so error
//! text matches `folio contact`. The HTML attributes stay as a fallback.

use std::fmt::Write;

use crate::contact::{
    Field, EMAIL_INVALID, EMAIL_REQUIRED, MESSAGE_REQUIRED, MESSAGE_TOO_SHORT, MIN_MESSAGE_CHARS, NAME_REQUIRED,
    SUBJECT_REQUIRED,
};
use crate::motion;
use crate::render::html::{attr, escape, icon, EXTERNAL};
use crate::render::RenderContext;

use super::section_header;

fn info(ctx: &RenderContext<'_>) -> String {
    let site = &ctx.site.site;
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<li class="contact-channel" data-item="contact-channel"><span class="channel-icon">{}</span><div><p class="channel-label">Email</p><a href="mailto:{}">{}</a></div></li>"#,
        icon("mail", "icon-md"),
        attr(&site.email),
        escape(&site.email)
    );
    if !site.location.is_empty() {
        let _ = write!(
            out,
            r#"<li class="contact-channel" data-item="contact-channel"><span class="channel-icon">{}</span><div><p class="channel-label">Location</p><p>{}</p></div></li>"#,
            icon("map-pin", "icon-md"),
            escape(&site.location)
        );
    }
    out
}

fn socials(ctx: &RenderContext<'_>) -> String {
    ctx.site
        .site
        .social
        .entries()
        .into_iter()
        .map(|(label, url)| {
            format!(
                r#"<a class="social-pill glass" href="{}" {} data-item="contact-social">{}<span>{}</span>{}</a>"#,
                attr(url),
                EXTERNAL,
                icon(&label.to_lowercase(), "icon-md"),
                label,
                icon("arrow-up-right", "icon-sm reveal-on-hover")
            )
        })
        .collect()
}

/// Error messages the runtime shows for this field, as data attributes
fn messages(field: Field) -> String {
    let (required, extra) = match field {
        Field::Name => (NAME_REQUIRED, None),
        Field::Email => (EMAIL_REQUIRED, Some(("data-msg-invalid", EMAIL_INVALID))),
        Field::Subject => (SUBJECT_REQUIRED, None),
        Field::Message => (MESSAGE_REQUIRED, Some(("data-msg-short", MESSAGE_TOO_SHORT))),
    };
    let mut out = format!(r#" data-msg-required="{}""#, attr(required));
    if let Some((name, message)) = extra {
        let _ = write!(out, r#" {}="{}""#, name, attr(message));
    }
    out
}

fn field(field: Field) -> String {
    let name = field.as_str();
    let control = match field {
        Field::Message => format!(
            r#"<textarea id="contact-{name}" name="{name}" rows="5" placeholder="{placeholder}" required minlength="{min}" aria-describedby="contact-{name}-error"></textarea>"#,
            name = name,
            placeholder = attr(field.placeholder()),
            min = MIN_MESSAGE_CHARS,
        ),
        Field::Email => format!(
            r#"<input id="contact-{name}" name="{name}" type="email" placeholder="{placeholder}" required aria-describedby="contact-{name}-error">"#,
            name = name,
            placeholder = attr(field.placeholder()),
        ),
        Field::Name | Field::Subject => format!(
            r#"<input id="contact-{name}" name="{name}" type="text" placeholder="{placeholder}" required aria-describedby="contact-{name}-error">"#,
            name = name,
            placeholder = attr(field.placeholder()),
        ),
    };
    format!(
        r#"<div class="form-field" data-item="form-field" data-field="{name}"{messages}><label for="contact-{name}">{label}</label>{control}<p class="field-error" id="contact-{name}-error" data-error="{name}" role="alert" hidden>{alert}<span></span></p></div>"#,
        name = name,
        messages = messages(field),
        label = field.label(),
        control = control,
        alert = icon("alert-circle", "icon-sm"),
    )
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let fields: Vec<String> = Field::ALL.iter().map(|f| field(*f)).collect();
    // name and email share a row
    let (pair, rest) = fields.split_at(2);

    format!(
        r#"<section id="contact" class="section contact">
<div class="container">
{header}
<div class="contact-grid">
<div class="contact-info"{left}>
<div><h3>Contact Information</h3><p>Feel free to reach out through any of the following channels. I typically respond within 24-48 hours.</p></div>
<ul class="contact-channels">{info}</ul>
<div><p class="contact-find">Find me on</p><div class="contact-socials">{socials}</div></div>
<div class="availability glass"><code><span class="kw">const</span> availability = <span class="str">&quot;Open for opportunities&quot;</span>;</code></div>
</div>
<div class="contact-form-wrap"{right}>
<form class="contact-form glass" data-contact-form novalidate>
<div class="form-row">{pair}</div>
{rest}
<button class="btn-primary submit-btn" type="submit" data-submit><span data-submit-label>Send Message</span>{send}</button>
<p class="form-success" data-success role="status" hidden>{check}Thank you! I&#39;ll get back to you soon.</p>
</form>
</div>
</div>
</div>
</section>"#,
        header = section_header(
            ctx,
            "// Get In Touch",
            "Let's Work Together",
            Some("Have a project in mind or just want to chat? Feel free to reach out. I'm always open to discussing new opportunities."),
        ),
        left = ctx.reveal(&motion::side(-30.0, 0.2)),
        info = info(ctx),
        socials = socials(ctx),
        right = ctx.reveal(&motion::side(30.0, 0.4)),
        pair = pair.concat(),
        rest = rest.join("\n"),
        send = icon("send", "icon-md"),
        check = icon("check-circle", "icon-sm"),
    )
}
