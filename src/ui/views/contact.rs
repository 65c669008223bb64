use folio::contact::{Field, FormErrors};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_contact_header(email: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Mail, "Folio Contact");
    header.add("Recipient", email);
    header.add("Mode", "simulated, nothing is sent");
    header.render(supports_color, supports_unicode)
}

/// Field errors in form order
pub fn render_contact_errors(errors: &FormErrors, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        out.push_str(&format!(
            "  {} {}: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            field.label(),
            message
        ));
    }
    out
}

/// Button label transitions as the simulated send progresses
pub fn render_contact_status(label: &str, elapsed_ms: u128, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match label {
        "Message Sent!" => Icon::Success,
        "Sending..." => Icon::Progress,
        _ => Icon::Pending,
    };
    format!(
        "  {} [{:>5}ms] {}\n",
        icon.colored(supports_color, supports_unicode),
        elapsed_ms,
        label
    )
}

pub fn render_contact_field(field: Field, value: &str) -> String {
    format!("  {:<8} {}\n", format!("{}:", field.label()), value)
}
