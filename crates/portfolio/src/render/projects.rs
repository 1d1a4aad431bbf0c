use super::link::ContentLink;
use super::metrics::MetricsBar;
use crate::profile::Project;
use leptos::*;

/// One card per project, in source order.
#[component]
pub fn ProjectList(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="cards">
            {projects
                .iter()
                .enumerate()
                .map(|(index, project)| view! { <ProjectCard index=index project=*project/> })
                .collect_view()}
        </div>
    }
}

/// `index` keeps tooltip ids unique when several cards carry metrics.
#[component]
pub fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let badge = project
        .live
        .then(|| view! { <span class="card__badge">"Live"</span> });

    let tags = project
        .tags
        .iter()
        .map(|tag| view! { <span class="tag">{*tag}</span> })
        .collect_view();

    let bullets = project.bullets.map(|bullets| {
        view! {
            <ul class="card__bullets">
                {bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
            </ul>
        }
    });

    let links = (project.primary.is_some() || !project.links.is_empty()).then(|| {
        let primary = project.primary.map(|link| {
            view! {
                <ContentLink
                    link=link
                    class="card__link card__link--primary"
                    text=format!("{} →", link.label)
                />
            }
        });
        let secondary = project
            .links
            .iter()
            .map(|link| {
                view! { <ContentLink link=*link class="card__link" text=format!("{} →", link.label)/> }
            })
            .collect_view();

        view! {
            <div class="card__links">
                {primary}
                {secondary}
            </div>
        }
    });

    let metrics = project.metrics.map(|metrics| {
        view! {
            <div class="card__metrics">
                <MetricsBar metrics=metrics id_prefix=format!("project-{index}")/>
            </div>
        }
    });

    let note = project
        .note
        .map(|note| view! { <p class="card__note">{note}</p> });

    view! {
        <article class="card">
            <h4 class="card__title">{project.title}{badge}</h4>
            <p class="card__description">{project.description}</p>
            <div class="card__tags">{tags}</div>
            {bullets}
            {links}
            {metrics}
            {note}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Link, Metric};
    use crate::render::link::opening_tag;
    use leptos::ssr::render_to_string;

    const CASE_STUDY: Link = Link::internal("/case", "Case study");
    const SOURCE: Link = Link::external("https://github.com/x/y", "Source");
    const AUROC: Metric = Metric {
        label: "AUROC",
        value: "0.71",
        tooltip: None,
    };

    const BARE: Project = Project {
        title: "Bare",
        description: "Nothing optional",
        tags: &["R"],
        primary: None,
        links: &[],
        bullets: None,
        metrics: None,
        note: None,
        live: false,
    };

    fn render(project: Project) -> String {
        render_to_string(move || view! { <ProjectCard index=0 project=project/> }).to_string()
    }

    #[test]
    fn absent_optional_fields_omit_their_blocks() {
        let html = render(BARE);
        assert!(html.contains(">Nothing optional<"));
        assert!(!html.contains("card__bullets"));
        assert!(!html.contains("card__metrics"));
        assert!(!html.contains("card__note"));
        assert!(!html.contains("card__links"));
        assert!(!html.contains("card__badge"));
    }

    #[test]
    fn present_optional_fields_render_their_blocks() {
        let html = render(Project {
            primary: Some(CASE_STUDY),
            links: &[SOURCE],
            bullets: Some(&["First", "Second"]),
            metrics: Some(&[AUROC]),
            note: Some("Footnote"),
            live: true,
            ..BARE
        });

        assert!(html.contains("class=\"card__badge\""));
        assert!(html.contains(">Live<"));
        assert!(html.contains("class=\"card__bullets\""));
        assert!(html.contains(">First<") && html.contains(">Second<"));
        assert!(html.contains("class=\"card__metrics\""));
        assert!(html.contains("class=\"card__note\""));
        assert!(html.contains(">Footnote<"));
    }

    #[test]
    fn primary_link_precedes_secondary_links() {
        let html = render(Project {
            primary: Some(CASE_STUDY),
            links: &[SOURCE],
            ..BARE
        });

        let primary = html.find("Case study →").expect("primary rendered");
        let secondary = html.find("Source →").expect("secondary rendered");
        assert!(primary < secondary);

        let primary = opening_tag(&html, "href=\"/case\"");
        assert!(primary.contains("class=\"card__link card__link--primary\""));
        assert!(!primary.contains("target="));

        let secondary = opening_tag(&html, "href=\"https://github.com/x/y\"");
        assert!(secondary.contains("class=\"card__link\""));
        assert!(secondary.contains("target=\"_blank\""));
        assert!(secondary.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn cards_follow_source_order() {
        static CARDS: [Project; 2] = [
            Project {
                title: "First card",
                ..BARE
            },
            Project {
                title: "Second card",
                ..BARE
            },
        ];
        let projects: &'static [Project] = &CARDS;
        let html = render_to_string(move || view! { <ProjectList projects=projects/> });

        let first = html.find("First card").expect("first");
        let second = html.find("Second card").expect("second");
        assert!(first < second);
        assert_eq!(html.matches("<article").count(), 2);
    }
}
