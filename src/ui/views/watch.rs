use folio::watcher::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(source: &str, output: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Folio Watch");
    header.add("Source", source);
    header.add("Output", output);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(timestamp: &str, event: &WatchEvent, supports_color: bool, supports_unicode: bool) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { source } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            source
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::BuildStarted => format!(
            "{} {} Building...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::BuildComplete {
            written,
            skipped,
            errors,
        } => {
            let icon = if *errors > 0 { Icon::Warning } else { Icon::Success }
                .colored(supports_color, supports_unicode);

            if *errors > 0 {
                format!(
                    "{} {} Build: {} written, {} skipped, {} errors\n",
                    prefix, icon, written, skipped, errors
                )
            } else {
                format!("{} {} Build: {} written, {} skipped\n", prefix, icon, written, skipped)
            }
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
