use crate::infra::current_year;
use clap::Args;
use portfolio::config::AppConfig;
use portfolio::error::AppError;
use portfolio::profile::{AudienceTrack, Profile};
use portfolio::render::{render_page, TrackToggle};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Audience track to pre-select (research or engineering)
    #[arg(long)]
    pub(crate) track: Option<AudienceTrack>,
    /// Write the page here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct SkillsArgs {
    /// Audience track to list (defaults to the configured track)
    #[arg(long)]
    pub(crate) track: Option<AudienceTrack>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs { track, output } = args;
    let track = match track {
        Some(track) => track,
        None => AppConfig::load()?.site.default_track,
    };

    let html = render_page(Profile::current(), TrackToggle::new(track), current_year());

    match output {
        Some(path) => {
            fs::write(&path, html.as_bytes())?;
            println!("Rendered {} page to {}", track, path.display());
        }
        None => println!("{html}"),
    }

    Ok(())
}

pub(crate) fn run_skills(args: SkillsArgs) -> Result<(), AppError> {
    let track = match args.track {
        Some(track) => track,
        None => AppConfig::load()?.site.default_track,
    };

    println!("{} skills", track.label());
    for skill in Profile::current().skills_for(track) {
        println!("- {skill}");
    }

    Ok(())
}
