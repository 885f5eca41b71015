use folio_core::{
    detail_view, dispatch_code, dispatch_live, open_details, resolve_route, ContentError,
    ContentStore, DetailView, HostCall, RecordingHost, RouteResolution,
};
use std::io::Write;

#[test]
fn every_bundled_project_has_a_detail_route() {
    let store = ContentStore::bundled().unwrap();
    for project in store.projects() {
        match resolve_route(store, project.id) {
            RouteResolution::Detail(path) => assert!(path.starts_with("/projects/")),
            RouteResolution::NotFound => panic!("project {} has no route", project.id),
        }
    }
}

#[test]
fn unknown_project_id_resolves_to_not_found() {
    let store = ContentStore::bundled().unwrap();
    assert_eq!(resolve_route(store, 9_999), RouteResolution::NotFound);
    assert_eq!(detail_view(store, 9_999), DetailView::NotFound);

    let mut host = RecordingHost::new();
    open_details(store, 9_999, &mut host);
    assert!(host.calls.is_empty());
}

#[test]
fn open_details_routes_known_projects() {
    let store = ContentStore::bundled().unwrap();
    let mut host = RecordingHost::new();
    open_details(store, 1, &mut host);
    assert_eq!(host.take(), vec![HostCall::OpenRoute("/projects/vyrl".to_string())]);
}

#[test]
fn card_actions_dispatch_from_declared_overrides() {
    let store = ContentStore::bundled().unwrap();
    let mut host = RecordingHost::new();

    let vyrl = store.project(1).unwrap();
    dispatch_live(vyrl, &mut host);
    dispatch_code(vyrl, &mut host);
    assert_eq!(
        host.take(),
        vec![
            HostCall::OpenExternal("https://youtu.be/yzPnpCxAbdY".to_string()),
            HostCall::OpenExternal("https://govyrl.tech".to_string()),
        ]
    );

    let stonks = store.project(2).unwrap();
    dispatch_live(stonks, &mut host);
    dispatch_code(stonks, &mut host);
    let calls = host.take();
    assert!(matches!(&calls[0], HostCall::Notice(message) if message.contains("Coming soon")));
    assert_eq!(
        calls[1],
        HostCall::OpenExternal(stonks.code_url.clone())
    );

    let meal_prep = store.project(4).unwrap();
    dispatch_live(meal_prep, &mut host);
    assert_eq!(host.take(), vec![HostCall::OpenExternal(meal_prep.live_url.clone())]);
}

#[test]
fn load_reads_payload_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{
            "personal_info": {{
                "name": "Sam", "title": "Dev", "location": "Here",
                "email": "sam@example.com", "bio": "Hello"
            }},
            "navigation": [{{"label": "Home", "href": "#home"}}],
            "projects": [{{
                "id": 3, "title": "Solo", "description": "d",
                "technologies": ["Rust"], "route": "/projects/solo"
            }}]
        }}"##
    )
    .unwrap();

    let store = ContentStore::load(file.path()).unwrap();
    assert_eq!(store.personal_info().name, "Sam");
    assert_eq!(store.project(3).unwrap().title, "Solo");
    assert!(store.experience().is_empty());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentStore::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ContentError::Io(_)));
}
