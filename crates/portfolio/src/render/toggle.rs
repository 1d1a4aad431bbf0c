use crate::profile::{AudienceTrack, SkillsByTrack};
use leptos::*;

/// Two-state selector over [`AudienceTrack`]. Owned by a single page render;
/// every transition is total, and selecting the active track is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackToggle {
    active: AudienceTrack,
}

impl TrackToggle {
    pub const fn new(initial: AudienceTrack) -> Self {
        Self { active: initial }
    }

    /// Returns whether the active track changed.
    pub fn select(&mut self, track: AudienceTrack) -> bool {
        let changed = self.active != track;
        self.active = track;
        changed
    }

    pub const fn active(&self) -> AudienceTrack {
        self.active
    }

    pub fn is_active(&self, track: AudienceTrack) -> bool {
        self.active == track
    }

    pub const fn skills(&self, skills: &SkillsByTrack) -> &'static [&'static str] {
        skills.get(self.active)
    }
}

impl Default for TrackToggle {
    fn default() -> Self {
        Self::new(AudienceTrack::DEFAULT)
    }
}

/// Track controls plus the skill list for the active track. Each control
/// links to `/?track=…` so the page works without client script.
#[component]
pub fn TrackSwitch(toggle: TrackToggle, skills: SkillsByTrack) -> impl IntoView {
    let state = create_rw_signal(toggle);

    let controls = AudienceTrack::ordered()
        .into_iter()
        .map(|track| {
            let class = move || {
                if state.get().is_active(track) {
                    "track__control track__control--active"
                } else {
                    "track__control"
                }
            };
            let pressed = move || state.get().is_active(track).to_string();

            view! {
                <a
                    class=class
                    href=format!("/?track={}#skills", track.as_str())
                    role="button"
                    aria-pressed=pressed
                    data-track=track.as_str()
                    on:click=move |_| state.update(|toggle| {
                        toggle.select(track);
                    })
                >
                    {track.label()}
                </a>
            }
        })
        .collect_view();

    let list = move || {
        state
            .get()
            .skills(&skills)
            .iter()
            .map(|skill| view! { <li class="skill">{*skill}</li> })
            .collect_view()
    };

    view! {
        <div class="track">
            <span class="track__caption">"Recruiter quick-scan"</span>
            <div class="track__controls" role="group" aria-label="Audience track">
                {controls}
            </div>
            <ul class="skills" id="skills" data-track=move || state.get().active().as_str()>
                {list}
            </ul>
        </div>
    }
}
