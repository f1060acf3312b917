//! Startup wiring example

use consultconf::Settings;

fn main() -> anyhow::Result<()> {
    // A deployment would set these outside the process.
    std::env::set_var("SLACK_CHANNEL_ID", "C0123456789");
    std::env::set_var(
        "ENABLED_PUBLIC_CONSULTATION_TYPES",
        "building-intention, public-discussion",
    );
    std::env::set_var("DAYS_TO_STORE_INACTIVE_PUBLIC_CONSULTATIONS", "90");

    let settings = Settings::from_env()?;

    println!("Configuration resolved:");
    println!("  Slack channel: {}", settings.slack_channel_id);
    println!("  Enabled consultation types:");
    for consultation_type in &settings.enabled_public_consultation_types {
        println!("    {consultation_type}");
    }
    println!(
        "  Retention: {} days",
        settings.days_to_store_inactive_public_consultations
    );
    println!("  Time zone: {}", settings.time_zone);
    if !settings.database.is_configured() {
        println!("  Database: {}", consultconf::default_database_url());
    }

    Ok(())
}
