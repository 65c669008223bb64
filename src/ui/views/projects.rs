use folio::models::Project;
use folio::projects::CARD_TAG_LIMIT;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_projects_header(categories: &[String], filter: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Gallery, "Folio Projects");
    header.add("Categories", categories.join(", "));
    header.add("Filter", filter);
    header.render(supports_color, supports_unicode)
}

/// Project cards as they appear in the gallery, one block per project
pub fn render_projects(projects: &[&Project], verbose: u8, supports_color: bool, supports_unicode: bool) -> String {
    if projects.is_empty() {
        return format!(
            "  {} No projects in this category yet.\n",
            Icon::Pending.colored(supports_color, supports_unicode)
        );
    }

    let mut out = String::new();
    for project in projects {
        let title = ColoredText::info(format!("#{} {}", project.id, project.title))
            .bold()
            .render(supports_color);
        let featured = if project.featured {
            format!(" {}", ColoredText::warning("featured").render(supports_color))
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {} {} {}{}\n",
            Icon::Progress.colored(supports_color, supports_unicode),
            title,
            ColoredText::dim(format!("[{}]", project.category)).render(supports_color),
            featured
        ));
        out.push_str(&format!("    {}\n", project.description));

        let (shown, hidden) = project.tag_preview(CARD_TAG_LIMIT);
        if !shown.is_empty() {
            let mut tags = shown.join(", ");
            if hidden > 0 {
                tags.push_str(&format!(" +{}", hidden));
            }
            out.push_str(&format!("    {}\n", ColoredText::dim(tags).render(supports_color)));
        }

        if verbose > 0 {
            for (label, url) in [("code", &project.github), ("demo", &project.demo)] {
                if !url.is_empty() {
                    out.push_str(&format!(
                        "    {} {}: {}\n",
                        Icon::Arrow.colored(supports_color, supports_unicode),
                        label,
                        url
                    ));
                }
            }
        }
    }
    out
}
