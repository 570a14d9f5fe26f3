use pimnote_api::Pim;
use serde_json::Value;

fn parse(envelope: String) -> Value {
    serde_json::from_str(&envelope).unwrap()
}

#[test]
fn registration_and_login_envelopes() {
    let mut pim = Pim::new();

    let registered = parse(pim.register_user("demo", "pimpass"));
    assert_eq!(registered["success"], true);
    assert_eq!(registered["message"], "User registered successfully");

    let duplicate = parse(pim.register_user("demo", "other"));
    assert_eq!(duplicate["success"], false);
    assert_eq!(duplicate["message"], "User already exists");

    let login = parse(pim.login_user("demo", "pimpass"));
    assert_eq!(login["success"], true);
    assert_eq!(login["message"], "Login successful");

    let bad_password = parse(pim.login_user("demo", "wrong"));
    let bad_username = parse(pim.login_user("ghost", "pimpass"));
    assert_eq!(bad_password["success"], false);
    assert_eq!(bad_password["message"], "Invalid username or password");
    assert_eq!(bad_password, bad_username);

    let logout = parse(pim.logout_user("demo"));
    assert_eq!(logout["success"], true);
    assert_eq!(logout["message"], "Logout successful");
}

#[test]
fn get_note_always_carries_a_note_key() {
    let mut pim = Pim::new();
    pim.create_note("demo", "a", "body");

    let hit = parse(pim.get_note("demo", "a"));
    assert_eq!(hit["success"], true);
    assert_eq!(hit["note"]["title"], "a");
    assert_eq!(hit["note"]["content"], "body");
    assert_eq!(hit["note"]["id"], 1);
    // Optional fields stay off the wire until set.
    assert!(hit["note"].get("reminder").is_none());
    assert!(hit["note"].get("tags").is_none());

    let miss = parse(pim.get_note("demo", "missing"));
    assert_eq!(miss["success"], false);
    assert!(miss["note"].is_null());
}

#[test]
fn viewer_envelopes_carry_projection_fields() {
    let mut pim = Pim::new();
    let long_body = "b".repeat(200);
    pim.create_note("demo", "long", &long_body);

    let preview = parse(pim.preview_view("demo", "long"));
    assert_eq!(preview["success"], true);
    assert_eq!(preview["title"], "long");
    let preview_text = preview["preview"].as_str().unwrap();
    assert_eq!(preview_text.chars().count(), 121);
    assert!(preview_text.ends_with('\u{2026}'));
    assert!(preview["date"].is_string());

    let full = parse(pim.full_view("demo", "long"));
    assert_eq!(full["success"], true);
    assert_eq!(full["content"].as_str().unwrap(), long_body);

    let miss = parse(pim.preview_view("demo", "missing"));
    assert_eq!(miss["success"], false);
    assert_eq!(miss["message"], "Note not found");
    assert!(miss.get("title").is_none());
}

#[test]
fn demo_scenario_create_reminder_full_view() {
    let mut pim = Pim::new();

    let created = parse(pim.create_note("demo", "Sport Cars", "Top 10 new sport cars"));
    assert_eq!(created["success"], true);
    assert_eq!(created["message"], "Note created");

    let duplicate = parse(pim.create_note("demo", "Sport Cars", "x"));
    assert_eq!(duplicate["success"], false);
    assert_eq!(duplicate["message"], "Note title already exists");

    let reminder = parse(pim.set_reminder("demo", "Sport Cars", "2025-09-01"));
    assert_eq!(reminder["success"], true);
    assert_eq!(reminder["message"], "Reminder set for 2025-09-01");

    let view = parse(pim.full_view("demo", "Sport Cars"));
    assert_eq!(view["success"], true);
    assert_eq!(view["content"], "Top 10 new sport cars");
    assert_eq!(view["reminder"], "2025-09-01");
}

#[test]
fn search_envelope_returns_full_records_in_creation_order() {
    let mut pim = Pim::new();
    pim.create_note("demo", "Sport Cars", "Top 10 new sport cars");
    pim.create_note("demo", "Luxury Cars", "Top 10 new luxury cars");
    pim.create_note("demo", "Recipes", "pasta");

    let hits = parse(pim.search_notes("demo", "CARS"));
    assert_eq!(hits["success"], true);
    let results = hits["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "Sport Cars");
    assert_eq!(results[1]["title"], "Luxury Cars");
    assert_eq!(results[0]["content"], "Top 10 new sport cars");

    let all = parse(pim.search_notes("demo", ""));
    assert_eq!(all["results"].as_array().unwrap().len(), 3);
}

#[test]
fn tag_envelope_reflects_union_semantics() {
    let mut pim = Pim::new();
    pim.create_note("demo", "Luxury Cars", "Top 10 new luxury cars");

    let first = parse(pim.add_tags(
        "demo",
        "Luxury Cars",
        vec![
            "expensive".to_string(),
            "premium".to_string(),
            "2025".to_string(),
        ],
    ));
    assert_eq!(first["success"], true);
    assert_eq!(first["tags"].as_array().unwrap().len(), 3);

    let repeated = parse(pim.add_tags("demo", "Luxury Cars", vec!["premium".to_string()]));
    assert_eq!(repeated["tags"].as_array().unwrap().len(), 3);

    let view = parse(pim.full_view("demo", "Luxury Cars"));
    assert_eq!(view["tags"].as_array().unwrap().len(), 3);

    let missing = parse(pim.add_tags("demo", "nope", vec!["x".to_string()]));
    assert_eq!(missing["success"], false);
    assert_eq!(missing["message"], "Note not found");
    assert!(missing.get("tags").is_none());
}

#[test]
fn edit_and_delete_envelopes() {
    let mut pim = Pim::new();
    pim.create_note("demo", "a", "first");

    let edited = parse(pim.edit_note("demo", "a", "second"));
    assert_eq!(edited["message"], "Note updated");
    let view = parse(pim.full_view("demo", "a"));
    assert_eq!(view["content"], "second");

    let deleted = parse(pim.delete_note("demo", "a"));
    assert_eq!(deleted["message"], "Note deleted");

    let second_delete = parse(pim.delete_note("demo", "a"));
    assert_eq!(second_delete["success"], false);
    assert_eq!(second_delete["message"], "Note not found");

    let gone = parse(pim.get_note("demo", "a"));
    assert!(gone["note"].is_null());
}

#[test]
fn markdown_envelope_contains_rendered_html() {
    let pim = Pim::new();
    let rendered = parse(pim.render_markdown("# Sport Cars\n\nTop 10 new sport cars"));
    assert_eq!(rendered["success"], true);
    let html = rendered["html"].as_str().unwrap();
    assert!(html.contains("<h1>Sport Cars</h1>"));
}
