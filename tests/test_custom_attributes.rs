use deskattrs::application::services::CustomAttributeService;
use deskattrs::domain::ports::conversation_repository::ConversationRepository;
use deskattrs::infrastructure::http::middleware::ApiError;
use serde_json::json;
use std::sync::Arc;

mod helpers;
use helpers::*;

#[tokio::test]
async fn test_show_returns_empty_map_when_unset() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let account = create_test_account(&db, "Acme").await;
    let inbox = create_test_inbox(&db, &account, "Support").await;
    let conversation = create_test_conversation(&db, &inbox, None).await;

    let service = CustomAttributeService::new(Arc::new(db.clone()));
    let shown = service.show(&conversation.id).await.unwrap();

    assert!(shown.is_empty());
}

#[tokio::test]
async fn test_update_merges_incoming_over_stored() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let account = create_test_account(&db, "Acme").await;
    let inbox = create_test_inbox(&db, &account, "Support").await;
    let conversation =
        create_test_conversation(&db, &inbox, Some(json!({"priority": "low"}))).await;

    let service = CustomAttributeService::new(Arc::new(db.clone()));
    let updated = service
        .update(
            &conversation.id,
            attributes(json!({"priority": "high", "tag": "vip"})),
        )
        .await
        .unwrap();

    assert_eq!(
        updated.custom_attributes,
        Some(attributes(json!({"priority": "high", "tag": "vip"})))
    );

    // Persisted, not just returned
    let stored = db
        .get_conversation_by_id(&conversation.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        stored.custom_attributes,
        Some(attributes(json!({"priority": "high", "tag": "vip"})))
    );
}

#[tokio::test]
async fn test_update_keeps_keys_missing_from_payload() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let account = create_test_account(&db, "Acme").await;
    let inbox = create_test_inbox(&db, &account, "Support").await;
    let conversation = create_test_conversation(
        &db,
        &inbox,
        Some(json!({"plan": "enterprise", "seats": 40, "owner": {"name": "Ada"}})),
    )
    .await;

    let service = CustomAttributeService::new(Arc::new(db.clone()));
    service
        .update(&conversation.id, attributes(json!({"seats": 45})))
        .await
        .unwrap();

    let shown = service.show(&conversation.id).await.unwrap();
    assert_eq!(
        shown,
        attributes(json!({"plan": "enterprise", "seats": 45, "owner": {"name": "Ada"}}))
    );
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let account = create_test_account(&db, "Acme").await;
    let inbox = create_test_inbox(&db, &account, "Support").await;
    let conversation =
        create_test_conversation(&db, &inbox, Some(json!({"region": "eu"}))).await;

    let service = CustomAttributeService::new(Arc::new(db.clone()));
    let payload = attributes(json!({"tags": ["vip", "beta"], "score": 9.5, "flag": null}));

    service
        .update(&conversation.id, payload.clone())
        .await
        .unwrap();
    let once = service.show(&conversation.id).await.unwrap();

    service.update(&conversation.id, payload).await.unwrap();
    let twice = service.show(&conversation.id).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(
        twice,
        attributes(json!({"region": "eu", "tags": ["vip", "beta"], "score": 9.5, "flag": null}))
    );
}

#[tokio::test]
async fn test_update_initializes_missing_map() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let account = create_test_account(&db, "Acme").await;
    let inbox = create_test_inbox(&db, &account, "Support").await;
    let conversation = create_test_conversation(&db, &inbox, None).await;

    let service = CustomAttributeService::new(Arc::new(db.clone()));
    let updated = service
        .update(&conversation.id, attributes(json!({"source": "widget"})))
        .await
        .unwrap();

    assert_eq!(
        updated.custom_attributes,
        Some(attributes(json!({"source": "widget"})))
    );
}

#[tokio::test]
async fn test_unknown_conversation_is_not_found() {
    let test_db = setup_test_db().await;
    let db = test_db.db();

    let service = CustomAttributeService::new(Arc::new(db.clone()));

    assert!(matches!(
        service.show("missing").await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update("missing", attributes(json!({"tag": "vip"})))
            .await,
        Err(ApiError::NotFound(_))
    ));
}
