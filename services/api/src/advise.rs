use crate::infra::ProfileBackend;
use clap::Args;
use skill_advisor::advisor::{fetch_hiscores, AdviceSet, AdvisorService, Profile};
use skill_advisor::config::AppConfig;
use skill_advisor::error::AppError;
use skill_advisor::telemetry;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct AdviseArgs {
    /// Advise on a profile JSON file instead of the stored profile
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Player name recorded on the profile and looked up on the hiscores
    #[arg(long)]
    pub(crate) player: String,
    /// Saved hiscores `index_lite` response; fetched live when omitted
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

fn bootstrap() -> Result<AdvisorService<ProfileBackend>, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let store = ProfileBackend::from_config(&config.storage);
    tracing::debug!(store = %store.describe(), "profile store selected");
    Ok(AdvisorService::new(Arc::new(store)))
}

pub(crate) fn run_advise(args: AdviseArgs) -> Result<(), AppError> {
    let service = bootstrap()?;
    let advice = match args.profile {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let profile: Profile = serde_json::from_str(&raw).map_err(std::io::Error::from)?;
            service.advise_for(&profile)?
        }
        None => service.advise()?,
    };

    print!("{}", render_advice(&advice));
    Ok(())
}

pub(crate) fn run_profile_show() -> Result<(), AppError> {
    let service = bootstrap()?;
    let profile = service.profile()?;
    println!("{}", render_profile(&profile)?);
    Ok(())
}

pub(crate) async fn run_profile_import(args: ImportArgs) -> Result<(), AppError> {
    let service = bootstrap()?;
    let payload = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => fetch_hiscores(&args.player).await?,
    };
    let profile = service.import_hiscores(&args.player, &payload)?;
    println!(
        "Imported {} skills for {} (total level {})",
        profile.skills.len(),
        profile.player_name,
        profile.total_level()
    );
    Ok(())
}

fn render_profile(profile: &Profile) -> Result<String, AppError> {
    serde_json::to_string_pretty(profile)
        .map_err(|err| AppError::Io(std::io::Error::from(err)))
}

pub(crate) fn render_advice(advice: &AdviceSet) -> String {
    let mut out = String::new();
    for (rank, item) in advice.items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", rank + 1, item.title);
        let _ = writeln!(out, "   Why now: {}", item.why_now);
        for step in &item.steps {
            let _ = writeln!(out, "   - {step}");
        }
        out.push('\n');
    }
    if advice.degraded {
        out.push_str("(fewer than three recommendations were available)\n");
    }
    out
}
