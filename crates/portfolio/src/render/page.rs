use super::link::ContentLink;
use super::projects::ProjectList;
use super::theme::STYLESHEET;
use super::toggle::{TrackSwitch, TrackToggle};
use crate::profile::{Education, Link, Profile, Publication, Role};
use leptos::ssr::render_to_string;
use leptos::*;
use tracing::debug;

/// Renders the full HTML document for `toggle`'s active track.
pub fn render_page(profile: &'static Profile, toggle: TrackToggle, year: i32) -> String {
    debug!(track = %toggle.active(), "rendering portfolio page");

    let body = render_to_string(move || view! { <Page profile=profile toggle=toggle year=year/> });
    format!("<!DOCTYPE html>{body}")
}

/// The single portfolio page: a sticky sidebar next to a scrolling content column.
#[component]
fn Page(profile: &'static Profile, toggle: TrackToggle, year: i32) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{profile.site.title}</title>
                <meta name="description" content=profile.site.description/>
                <style inner_html=STYLESHEET></style>
            </head>
            <body>
                <main class="page">
                    <Sidebar profile=profile toggle=toggle/>
                    <div class="content">
                        <section class="hero">
                            <h2 class="hero__headline">{profile.hero.headline}</h2>
                            <p class="hero__subline">{profile.hero.subline}</p>
                        </section>
                        <section id="projects">
                            <h3 class="section__title">"Projects"</h3>
                            <p class="section__lede">"Real work, shipped."</p>
                            <ProjectList projects=profile.projects()/>
                        </section>
                        <Roles roles=profile.roles()/>
                        <Publications publications=profile.publications()/>
                        <EducationList education=profile.education()/>
                        <section id="about" class="panel">
                            <h3 class="section__title">"About"</h3>
                            <p class="about">{profile.about}</p>
                        </section>
                        <Contact profile=profile/>
                        <footer class="footer">
                            {format!("© {year} {} · Portfolio", profile.identity.name)}
                        </footer>
                    </div>
                </main>
            </body>
        </html>
    }
}

#[component]
fn Sidebar(profile: &'static Profile, toggle: TrackToggle) -> impl IntoView {
    let identity = &profile.identity;
    let contact = &profile.contact;

    let socials = contact
        .socials
        .iter()
        .map(|social| view! { <ContentLink link=*social class="social" text=social.label/> })
        .collect_view();

    view! {
        <aside class="sidebar">
            <section class="panel">
                <div class="identity">
                    <div class="avatar">{identity.initials}</div>
                    <div>
                        <h1 class="identity__name">{identity.name}</h1>
                        <p class="identity__tagline">{identity.tagline}</p>
                    </div>
                </div>
                <p class="summary">{identity.summary}</p>
                <div class="actions">
                    <a href="#projects" class="button button--primary">"View projects"</a>
                    <ContentLink link=contact.cv class="button" text=contact.cv.label/>
                </div>
                <TrackSwitch toggle=toggle skills=profile.skills/>
                <nav class="socials" aria-label="Contact">
                    <ContentLink link=contact.email class="social" text=contact.email.label/>
                    {socials}
                </nav>
            </section>
        </aside>
    }
}

/// Title cell of a list entry; linked when the record carries a link.
fn entry_title(title: &'static str, link: Option<Link>) -> View {
    match link {
        Some(link) => view! { <ContentLink link=link class="entry__title" text=title/> }.into_view(),
        None => view! { <span class="entry__title">{title}</span> }.into_view(),
    }
}

#[component]
fn Roles(roles: &'static [Role]) -> impl IntoView {
    (!roles.is_empty()).then(|| {
        let entries = roles
            .iter()
            .map(|role| {
                view! {
                    <li class="entry">
                        {entry_title(role.title, role.link)}
                        <div class="entry__meta">
                            {format!("{} · {}", role.organization, role.period)}
                        </div>
                    </li>
                }
            })
            .collect_view();

        view! {
            <section id="roles">
                <h3 class="section__title">"Current roles"</h3>
                <ul class="entries">{entries}</ul>
            </section>
        }
    })
}

#[component]
fn Publications(publications: &'static [Publication]) -> impl IntoView {
    (!publications.is_empty()).then(|| {
        let entries = publications
            .iter()
            .map(|publication| {
                view! {
                    <li class="entry">
                        {entry_title(publication.title, publication.link)}
                        <div class="entry__meta">
                            {format!("{} · {}", publication.venue, publication.date)}
                        </div>
                    </li>
                }
            })
            .collect_view();

        view! {
            <section id="publications">
                <h3 class="section__title">"Publications"</h3>
                <ul class="entries">{entries}</ul>
            </section>
        }
    })
}

#[component]
fn EducationList(education: &'static [Education]) -> impl IntoView {
    (!education.is_empty()).then(|| {
        let entries = education
            .iter()
            .map(|entry| {
                let detail = entry
                    .detail
                    .map(|detail| view! { <p class="entry__detail">{detail}</p> });
                view! {
                    <li class="entry">
                        <span class="entry__title">{entry.degree}</span>
                        <div class="entry__meta">
                            {format!("{} · {}", entry.institution, entry.period)}
                        </div>
                        {detail}
                    </li>
                }
            })
            .collect_view();

        view! {
            <section id="education">
                <h3 class="section__title">"Education"</h3>
                <ul class="entries">{entries}</ul>
            </section>
        }
    })
}

#[component]
fn Contact(profile: &'static Profile) -> impl IntoView {
    let contact = &profile.contact;
    let reach_out = contact
        .reach_out
        .iter()
        .map(|link| view! { <ContentLink link=*link class="button" text=link.label/> })
        .collect_view();

    view! {
        <section id="contact">
            <div class="panel contact">
                <h3 class="section__title">"Let’s talk"</h3>
                <p class="section__lede">{contact.pitch}</p>
                <div class="actions">
                    <ContentLink link=contact.email class="button button--primary" text="Email me"/>
                    {reach_out}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::AudienceTrack;
    use crate::render::link::opening_tag;

    const THESIS: Link = Link::internal("/files/thesis.pdf", "PDF");

    fn with_history() -> &'static Profile {
        Box::leak(Box::new(Profile {
            roles: &[Role {
                title: "Researcher",
                organization: "Cohort lab",
                period: "2024 – present",
                link: None,
            }],
            publications: &[Publication {
                title: "Sleep and mood",
                venue: "Journal",
                date: "2025",
                link: Some(THESIS),
            }],
            education: &[Education {
                degree: "MSc Public Health",
                institution: "University",
                period: "2023 – 2025",
                detail: Some("Thesis track"),
            }],
            ..*Profile::current()
        }))
    }

    #[test]
    fn empty_history_sections_are_omitted() {
        let html = render_page(Profile::current(), TrackToggle::default(), 2025);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("id=\"roles\""));
        assert!(!html.contains("id=\"publications\""));
        assert!(!html.contains("id=\"education\""));
    }

    #[test]
    fn history_sections_render_when_present() {
        let html = render_page(with_history(), TrackToggle::default(), 2025);

        assert!(html.contains("id=\"roles\""));
        assert!(html.contains(">Researcher<"));
        assert!(html.contains("Cohort lab · 2024 – present"));

        let publication = opening_tag(&html, "href=\"/files/thesis.pdf\" class=\"entry__title\"");
        assert!(!publication.contains("target="));
        assert!(html.contains("Journal · 2025"));

        assert!(html.contains(">MSc Public Health<"));
        assert!(html.contains(">Thesis track<"));
    }

    #[test]
    fn contact_panel_offers_email_and_linkedin_only() {
        let html = render_page(Profile::current(), TrackToggle::default(), 2025);
        let contact = &html[html.find("id=\"contact\"").expect("contact section")..];
        let contact = &contact[..contact.find("</section>").expect("section end")];

        assert!(contact.contains(">Email me<"));
        assert!(contact.contains(">LinkedIn<"));
        assert!(!contact.contains("GitHub"));
    }

    #[test]
    fn footer_carries_year_and_name() {
        let html = render_page(
            Profile::current(),
            TrackToggle::new(AudienceTrack::Engineering),
            2031,
        );
        assert!(html.contains("© 2031 Mehdi Mirkia · Portfolio"));
        assert!(html.contains("<style"));
        assert!(html.contains("font-family"));
    }
}
