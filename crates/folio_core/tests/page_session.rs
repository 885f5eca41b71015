use folio_core::{
    ContentStore, EngineConfig, FormField, HostCall, NavState, PageSession, RecordingHost,
    ResumeTab, ScrollBehavior, SectionBox, SectionId, SimulatedTransport, SubmitBanner,
    TransportError,
};
use std::time::Duration;

fn id(value: &str) -> SectionId {
    SectionId::new(value).unwrap()
}

/// Lays the bundled sections out back to back, 1000px each, starting at 0.
fn laid_out_session(store: &ContentStore, observation_available: bool) -> PageSession<'_> {
    let mut session = PageSession::new(store, EngineConfig::default(), observation_available);
    let sections = session.registry().ids().to_vec();
    for (index, section) in sections.iter().enumerate() {
        assert!(session.set_layout(section, SectionBox::new(index as f64 * 1000.0, 1000.0)));
    }
    session
}

#[test]
fn registry_is_declared_from_navigation_anchors() {
    let store = ContentStore::bundled().unwrap();
    let session = PageSession::new(store, EngineConfig::default(), true);
    let ids: Vec<&str> = session.registry().ids().iter().map(SectionId::as_str).collect();
    assert_eq!(ids, vec!["home", "projects", "resume", "socials", "contact"]);
}

#[test]
fn scroll_spy_tracks_the_section_under_the_reference_line() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);

    // Reference line sits 100px below the viewport top.
    assert_eq!(
        session.on_viewport(1_400.0, 800.0),
        &NavState::InSection(id("projects"))
    );
    assert_eq!(
        session.navigation().active_nav_item().unwrap().label,
        "Projects"
    );
    assert_eq!(
        session.on_viewport(950.0, 800.0),
        &NavState::InSection(id("projects"))
    );
    assert_eq!(
        session.on_viewport(0.0, 800.0),
        &NavState::InSection(id("home"))
    );
}

#[test]
fn above_all_sections_maps_to_home_entry() {
    let store = ContentStore::bundled().unwrap();
    let mut session = PageSession::new(store, EngineConfig::default(), true);
    session.set_layout(&id("home"), SectionBox::new(500.0, 1000.0));
    session.set_layout(&id("projects"), SectionBox::new(1500.0, 1000.0));

    assert_eq!(session.on_viewport(0.0, 800.0), &NavState::AtTop);
    assert_eq!(
        session.navigation().active_nav_item().unwrap().label,
        "Home"
    );
}

#[test]
fn reveal_does_not_replay_when_scrolling_back() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);
    session.watch_sections().unwrap();
    assert_eq!(session.active_observations(), 5);

    session.on_viewport(0.0, 800.0);
    assert!(session.should_reveal(&id("home")));
    assert!(!session.should_reveal(&id("contact")));

    session.on_viewport(3_600.0, 800.0);
    assert!(session.should_reveal(&id("contact")));
    let revealed_before = session.reveal().revealed_sections().to_vec();

    session.on_viewport(0.0, 800.0);
    assert!(session.should_reveal(&id("contact")));
    assert_eq!(session.reveal().revealed_sections(), revealed_before.as_slice());
}

#[test]
fn unmount_releases_observation_but_keeps_latch() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);
    session.watch_sections().unwrap();
    session.on_viewport(900.0, 800.0);
    assert!(session.should_reveal(&id("projects")));

    session.unmount(&id("projects"));
    assert_eq!(session.active_observations(), 4);
    assert!(session.should_reveal(&id("projects")));
    assert!(session.registry().layout(&id("projects")).is_none());
}

#[test]
fn unavailable_observer_reveals_everything_immediately() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, false);
    session.watch_sections().unwrap();
    for section in session.registry().ids() {
        assert!(session.should_reveal(section));
    }
}

#[test]
fn watching_an_undeclared_section_fails_without_side_effects() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);
    assert!(session.watch(&id("blog")).is_err());
    assert_eq!(session.active_observations(), 0);
}

#[test]
fn navbar_clicks_route_through_the_host() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);
    let mut host = RecordingHost::new();

    session.navigate_to("#resume", &mut host);
    session.navigate_to("#missing", &mut host);
    session.navigate_to("https://github.com/example", &mut host);
    assert_eq!(
        host.take(),
        vec![
            HostCall::ScrollTo {
                y: 1_936.0,
                behavior: ScrollBehavior::Smooth
            },
            HostCall::OpenExternal("https://github.com/example".to_string()),
        ]
    );
}

#[test]
fn session_owns_independent_ui_state() {
    let store = ContentStore::bundled().unwrap();
    let mut session = PageSession::new(store, EngineConfig::default(), true);
    assert_eq!(session.resume().active(), ResumeTab::Experience);
    session.resume_mut().select(ResumeTab::Certifications);
    session
        .filter_mut()
        .select(folio_core::FilterSelection::Featured);

    assert_eq!(session.resume().active(), ResumeTab::Certifications);
    assert!(session.filter().visible().iter().all(|project| project.featured));
    assert!(session.contact().can_submit());
}

fn fill_contact(session: &mut PageSession<'_>) {
    let form = session.contact_mut();
    form.set_field(FormField::Name, "Alex");
    form.set_field(FormField::Email, "alex@example.com");
    form.set_field(FormField::Subject, "Hi");
    form.set_field(FormField::Message, "Let's build something great");
}

#[tokio::test(start_paused = true)]
async fn contact_submit_uses_configured_timeout() {
    let store = ContentStore::bundled().unwrap();
    let config = EngineConfig {
        submit_timeout_ms: 1_500,
        ..EngineConfig::default()
    };
    let transport = SimulatedTransport::from_config(&config);
    let mut session = PageSession::new(store, config, true);
    fill_contact(&mut session);

    let banner = session.submit_contact(&transport).await.unwrap();
    assert_eq!(
        banner,
        SubmitBanner::Failure(TransportError::TimedOut(Duration::from_millis(1_500)).to_string())
    );
    assert!(session.contact().can_submit());
}

#[tokio::test(start_paused = true)]
async fn contact_submit_succeeds_within_default_timeout() {
    let store = ContentStore::bundled().unwrap();
    let config = EngineConfig::default();
    let transport = SimulatedTransport::from_config(&config);
    let mut session = PageSession::new(store, config, true);
    fill_contact(&mut session);

    let banner = session.submit_contact(&transport).await.unwrap();
    assert_eq!(banner, SubmitBanner::Success);
    assert!(session.contact().draft().name.is_empty());
}

#[test]
fn card_preview_follows_configured_length() {
    let store = ContentStore::bundled().unwrap();
    let config = EngineConfig {
        description_preview_chars: 20,
        ..EngineConfig::default()
    };
    let session = PageSession::new(store, config, true);
    let project = store.project(1).unwrap();

    let preview = session.card_preview(project);
    assert_eq!(preview.chars().count(), 23);
    assert!(preview.ends_with("..."));
    assert!(project.description.starts_with(preview.trim_end_matches("...")));

    let roomy = PageSession::new(
        store,
        EngineConfig {
            description_preview_chars: 500,
            ..EngineConfig::default()
        },
        true,
    );
    assert_eq!(roomy.card_preview(project), project.description);
}

#[test]
fn watching_a_section_already_on_screen_reveals_it() {
    let store = ContentStore::bundled().unwrap();
    let mut session = laid_out_session(store, true);
    session.on_viewport(900.0, 800.0);
    assert!(!session.should_reveal(&id("projects")));

    session.watch(&id("projects")).unwrap();
    assert!(session.should_reveal(&id("projects")));
    session.watch(&id("contact")).unwrap();
    assert!(!session.should_reveal(&id("contact")));
}

#[test]
fn hero_title_types_out_the_profile_title() {
    let store = ContentStore::bundled().unwrap();
    let session = PageSession::new(store, EngineConfig::default(), true);
    let hero = session.hero_title();
    let title = &store.personal_info().title;

    assert_eq!(hero.visible_at(Duration::ZERO), "");
    assert_eq!(hero.visible_at(Duration::from_millis(160)).chars().count(), 2);
    assert_eq!(hero.visible_at(hero.duration()), title.as_str());
}
