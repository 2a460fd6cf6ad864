mod common;

use std::sync::Arc;

use companies_api::client::{ClientError, CompaniesClient, CompaniesView, CompanyApi, NoticeKind};

#[tokio::test]
async fn full_form_session_round_trip() {
    let base_url = common::spawn_server().await;
    let client = Arc::new(CompaniesClient::new(&base_url));
    let mut view = CompaniesView::new(client.clone());

    // Mount: initial load against an empty store.
    view.load().await;
    assert!(view.companies().is_empty());
    assert!(view.take_notice().is_none());

    // Create through the form.
    view.open_add_form();
    view.set_name("Acme");
    view.set_description("Widgets");
    view.submit().await;

    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(view.companies().len(), 1);
    let id = view.companies()[0].id.clone();
    assert_eq!(view.companies()[0].description.as_deref(), Some("Widgets"));

    // Edit and submit; the server's copy replaces the cached record.
    view.edit(&id);
    view.set_name("Acme Corp");
    view.set_description("");
    view.submit().await;

    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(view.companies()[0].name, "Acme Corp");
    assert_eq!(view.companies()[0].description, None);

    // The server agrees with the local cache.
    let server_side = client.list().await.unwrap();
    assert_eq!(server_side.len(), 1);
    assert_eq!(server_side[0].name, "Acme Corp");
    assert_eq!(server_side[0].description, None);

    // Delete; gone locally and on the server.
    view.delete(&id).await;
    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Success);
    assert!(view.companies().is_empty());
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn client_surfaces_the_generic_server_error() {
    let base_url = common::spawn_server().await;
    let client = CompaniesClient::new(&base_url);

    let err = client.delete("unknown-id").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to delete company");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_delete_leaves_cached_record_in_place() {
    let base_url = common::spawn_server().await;
    let client = Arc::new(CompaniesClient::new(&base_url));
    let mut view = CompaniesView::new(client.clone());

    view.set_name("Acme");
    view.submit().await;
    view.take_notice();
    let id = view.companies()[0].id.clone();

    // Delete the record out from under the view, then delete through it:
    // the second call fails server-side and the cache must keep the record.
    client.delete(&id).await.unwrap();
    view.delete(&id).await;

    assert_eq!(view.take_notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(view.companies().len(), 1);
}
