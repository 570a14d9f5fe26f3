//! CLI demo entry point.
//!
//! # Responsibility
//! - Walk the envelope surface end to end with a deterministic scenario.
//! - Keep output parseable (one JSON envelope per line) for quick local
//!   sanity checks.

use pimnote_api::Pim;

fn main() {
    println!("pimnote_core ping={}", pimnote_core::ping());
    println!("pimnote_core version={}", pimnote_core::core_version());

    let mut pim = Pim::new();

    println!("\n== Register / Login ==");
    println!("{}", pim.register_user("demo", "pimpass"));
    println!("{}", pim.login_user("demo", "pimpass"));
    println!("{}", pim.login_user("demo", "wrong"));

    println!("\n== Create Notes ==");
    println!(
        "{}",
        pim.create_note("demo", "Sport Cars", "Top 10 new sport cars")
    );
    println!(
        "{}",
        pim.create_note("demo", "Luxury Cars", "Top 10 new luxury cars")
    );
    println!("{}", pim.create_note("demo", "Sport Cars", "duplicate"));

    println!("\n== Search Notes (cars) ==");
    println!("{}", pim.search_notes("demo", "cars"));

    println!("\n== Add Reminder ==");
    println!("{}", pim.set_reminder("demo", "Sport Cars", "2025-09-01"));
    println!("{}", pim.full_view("demo", "Sport Cars"));

    println!("\n== Add Tags ==");
    println!(
        "{}",
        pim.add_tags(
            "demo",
            "Luxury Cars",
            vec![
                "expensive".to_string(),
                "premium".to_string(),
                "2025".to_string(),
            ],
        )
    );
    println!("{}", pim.full_view("demo", "Luxury Cars"));

    println!("\n== Viewers ==");
    println!("{}", pim.preview_view("demo", "Sport Cars"));
    println!(
        "{}",
        pim.render_markdown("# Sport Cars\n\nTop 10 new sport cars")
    );

    println!("\n== Logout ==");
    println!("{}", pim.logout_user("demo"));
}
