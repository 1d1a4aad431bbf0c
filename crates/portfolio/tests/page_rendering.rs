use portfolio::profile::{AudienceTrack, Profile, Project};
use portfolio::render::theme::{NARROW_BREAKPOINT_PX, STYLESHEET};
use portfolio::render::{render_page, MetricsLayout, TrackToggle};

const YEAR: i32 = 2025;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("expected `{needle}` in rendered page"))
}

/// Rendered text node for `text`, as it appears between two tags.
fn text_node(text: &str) -> String {
    format!(">{}<", text.replace('&', "&amp;"))
}

/// Opening tag of the first element whose markup contains `needle`.
fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = position(html, needle);
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end");
    &html[start..=end]
}

#[test]
fn default_load_shows_research_skills_and_every_project_in_order() {
    let profile = Profile::current();
    let html = render_page(profile, TrackToggle::default(), YEAR);

    let research = profile.skills_for(AudienceTrack::Research);
    assert_eq!(research.len(), 5);
    let mut last = 0;
    for skill in research {
        let at = position(&html, &text_node(skill));
        assert!(at > last, "skill `{skill}` rendered out of order");
        last = at;
    }
    for skill in profile.skills_for(AudienceTrack::Engineering) {
        assert!(!html.contains(&text_node(skill)));
    }

    assert_eq!(html.matches("class=\"card\"").count(), profile.projects().len());
    let mut last = 0;
    for project in profile.projects() {
        let at = position(&html, project.title);
        assert!(at > last, "project `{}` rendered out of order", project.title);
        last = at;
    }
}

#[test]
fn selecting_engineering_swaps_the_skill_list() {
    let profile = Profile::current();
    let mut toggle = TrackToggle::default();
    toggle.select(AudienceTrack::Engineering);
    let html = render_page(profile, toggle, YEAR);

    let list = opening_tag(&html, "id=\"skills\"");
    assert!(list.contains("data-track=\"engineering\""));
    for skill in profile.skills_for(AudienceTrack::Engineering) {
        assert!(html.contains(&text_node(skill)));
    }
    for skill in profile.skills_for(AudienceTrack::Research) {
        assert!(!html.contains(&text_node(skill)));
    }
}

#[test]
fn external_links_open_in_new_context_and_internal_links_do_not() {
    let html = render_page(Profile::current(), TrackToggle::default(), YEAR);

    let source = opening_tag(&html, "href=\"https://github.com/mehdimkia/maastrichtDeprisk\"");
    assert!(source.contains("target=\"_blank\""));
    assert!(source.contains("rel=\"noopener noreferrer\""));

    let case_study = opening_tag(&html, "href=\"/projects/deprisk\"");
    assert!(case_study.contains("class=\"card__link card__link--primary\""));
    assert!(!case_study.contains("target="));
    assert!(!case_study.contains("rel="));

    let cv = opening_tag(&html, "href=\"/files/CV_Mehdi_Mirkia.pdf\"");
    assert!(cv.contains("class=\"button\""));
    assert!(!cv.contains("target="));
}

#[test]
fn four_metrics_render_four_wide_and_two_narrow() {
    let profile = Profile::current();
    let metrics = profile
        .projects()
        .iter()
        .find_map(|project| project.metrics.filter(|metrics| metrics.len() == 4))
        .expect("a project with four metrics");

    let layout = MetricsLayout::new(metrics);
    assert_eq!(layout.columns(), 4);
    assert_eq!(layout.narrow_columns(), 2);

    let html = render_page(profile, TrackToggle::default(), YEAR);
    let wide = opening_tag(&html, "data-columns=\"4\"");
    assert!(wide.contains("class=\"metrics metrics--cols-4 metrics--narrow-2\""));
    let three = opening_tag(&html, "data-columns=\"3\"");
    assert!(three.contains("class=\"metrics metrics--cols-3\""));
    assert!(STYLESHEET.contains(&format!("@media (max-width: {NARROW_BREAKPOINT_PX}px)")));
}

#[test]
fn optional_card_blocks_follow_field_presence() {
    let profile = Profile::current();
    let html = render_page(profile, TrackToggle::default(), YEAR);

    let with = |pred: fn(&Project) -> bool| profile.projects().iter().filter(|p| pred(p)).count();
    assert_eq!(
        html.matches("class=\"card__bullets\"").count(),
        with(|p| p.bullets.is_some())
    );
    assert_eq!(
        html.matches("class=\"card__metrics\"").count(),
        with(|p| p.metrics.is_some())
    );
    assert_eq!(
        html.matches("class=\"card__note\"").count(),
        with(|p| p.note.is_some())
    );
    assert_eq!(
        html.matches("class=\"card__badge\"").count(),
        with(|p| p.live)
    );
}

#[test]
fn page_carries_title_sections_and_footer_year() {
    let profile = Profile::current();
    let html = render_page(profile, TrackToggle::default(), YEAR);

    assert!(html.starts_with("<!DOCTYPE html><html"));
    assert!(opening_tag(&html, "lang=").contains("lang=\"en\""));
    assert!(html.contains(&format!(">{}</title>", profile.site.title)));
    for id in ["projects", "about", "contact"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
    }
    assert!(html.contains("© 2025 Mehdi Mirkia · Portfolio"));
}

#[test]
fn profile_serializes_without_absent_optionals() {
    let json = serde_json::to_value(Profile::current()).expect("profile serializes");
    let projects = json["projects"].as_array().expect("projects array");
    let dashboard = projects
        .iter()
        .find(|project| project["title"] == "Cohort Insights dashboard (WIP)")
        .expect("dashboard project");

    assert!(dashboard.get("metrics").is_none());
    assert!(dashboard.get("note").is_none());
    assert_eq!(json["skills"]["research"].as_array().map(Vec::len), Some(5));
}
