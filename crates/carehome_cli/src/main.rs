//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `carehome_core` linkage and the bundled fixtures.
//! - Print today's roster with derived statuses and open acknowledgement counts.

use carehome_core::{
    load_config, load_fixtures, resident_badge, HandoverService, NotificationService,
    ResidentService,
};
use chrono::Utc;
use log::info;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("carehome_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("carehome_core ping={}", carehome_core::ping());
    println!("carehome_core version={}", carehome_core::core_version());

    let config = load_config(None)?;
    carehome_core::init_logging_from_config(&config.logging)?;

    let today = config.facility_today(Utc::now())?;
    let fixtures = load_fixtures()?;

    let residents = ResidentService::new(fixtures.residents);
    println!("roster date={today}");
    for view in residents.list_roster(today)? {
        let label = resident_badge(view.status).map_or("-", |badge| badge.label);
        println!(
            "  {}\t{}\t{}",
            view.resident.room.as_deref().unwrap_or("-"),
            view.resident.name,
            label
        );
    }

    let counts = residents.count_by_status(today)?;
    println!(
        "admitted={} pre_admission={} discharged={} unknown={}",
        counts.admitted, counts.pre_admission, counts.discharged, counts.unknown
    );

    let handovers = HandoverService::new(fixtures.handovers);
    let notifications = NotificationService::new(fixtures.notifications);
    println!(
        "pending handovers={} notifications={}",
        handovers.pending_count()?,
        notifications.pending_count()?
    );

    info!("event=cli_probe module=cli status=ok");
    Ok(())
}
