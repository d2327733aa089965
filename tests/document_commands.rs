// tests/document_commands.rs
use hromada_cms::application::{
    commands::documents::{DeleteDocumentCommand, SaveDocumentCommand, SetPublishStateCommand},
    dto::{Editor, MetaDto},
    error::ApplicationError,
    queries::documents::{GetDocumentBySlugQuery, ListDocumentsQuery},
};
use hromada_cms::domain::{
    document::{Collection, value_objects::MAX_SLUG_LEN},
    errors::DomainError,
    locale::Locale,
};
use serde_json::json;

mod support;

fn editor() -> Editor {
    Editor {
        name: "editor".into(),
    }
}

#[tokio::test]
async fn create_derives_slug_from_cyrillic_title() {
    let app = support::build_test_app();
    let created = app
        .services
        .document_commands
        .save_document(SaveDocumentCommand::create(
            Collection::Pages,
            Locale::Uk,
            "Про нас",
        ))
        .await
        .unwrap();

    assert_eq!(created.slug, "pro-nas");
    assert_eq!(created.url, "/pro-nas");
    assert_eq!(created.title.as_deref(), Some("Про нас"));
    assert_eq!(created.locale, "uk");
    assert!(!created.published);
}

#[tokio::test]
async fn create_treats_empty_slug_as_absent() {
    let app = support::build_test_app();
    let created = app
        .services
        .document_commands
        .save_document(
            SaveDocumentCommand::create(Collection::Posts, Locale::Uk, "Привіт світ").with_slug(""),
        )
        .await
        .unwrap();

    assert_eq!(created.slug, "pryvit-svit");
    assert_eq!(created.url, "/posts/pryvit-svit");
}

#[tokio::test]
async fn explicit_slug_is_formatted() {
    let app = support::build_test_app();
    let created = app
        .services
        .document_commands
        .save_document(
            SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Контакти")
                .with_slug("Custom Value"),
        )
        .await
        .unwrap();

    assert_eq!(created.slug, "custom-value");
}

#[tokio::test]
async fn create_rejects_title_without_slug_characters() {
    let app = support::build_test_app();
    let err = app
        .services
        .document_commands
        .save_document(SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "!!!"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(app.documents.len(), 0);
}

#[tokio::test]
async fn long_title_yields_shortened_slug() {
    let app = support::build_test_app();
    let title = "Щедрий вечір у громаді ".repeat(10);
    let created = app
        .services
        .document_commands
        .save_document(SaveDocumentCommand::create(
            Collection::Posts,
            Locale::Uk,
            title.trim_end(),
        ))
        .await
        .unwrap();

    assert!(created.slug.len() <= MAX_SLUG_LEN, "{}", created.slug.len());
    assert!(created.slug.starts_with("shchedryi-vechir-u-hromadi-"));
    assert!(!created.slug.ends_with('-'));
    assert_eq!(created.title.as_deref(), Some(title.trim_end()));
}

#[tokio::test]
async fn overlong_explicit_slug_is_rejected() {
    let app = support::build_test_app();
    let err = app
        .services
        .document_commands
        .save_document(
            SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Контакти")
                .with_slug("a".repeat(MAX_SLUG_LEN + 1)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
    assert_eq!(app.documents.len(), 0);
}

#[tokio::test]
async fn non_string_slug_is_ignored_on_create_and_rejected_on_update() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;

    // On create the title always wins over a non-string value.
    let created = commands
        .save_document(
            SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас")
                .with_slug(json!(42)),
        )
        .await
        .unwrap();
    assert_eq!(created.slug, "pro-nas");

    let err = commands
        .save_document(
            SaveDocumentCommand::update(created.id, Collection::Pages, Locale::Uk)
                .with_slug(json!(42)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(ref msg) if msg.contains("string")));
}

#[tokio::test]
async fn update_keeps_slug_when_title_changes() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;
    let created = commands
        .save_document(SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас"))
        .await
        .unwrap();

    let updated = commands
        .save_document(
            SaveDocumentCommand::update(created.id, Collection::Pages, Locale::Uk)
                .with_title("Наша команда"),
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "pro-nas");
    assert_eq!(updated.title.as_deref(), Some("Наша команда"));
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn update_with_explicit_slug_replaces_it() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;
    let created = commands
        .save_document(SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас"))
        .await
        .unwrap();

    let updated = commands
        .save_document(
            SaveDocumentCommand::update(created.id, Collection::Pages, Locale::Uk)
                .with_slug("Custom Value"),
        )
        .await
        .unwrap();

    assert_eq!(updated.slug, "custom-value");
    assert_eq!(updated.title.as_deref(), Some("Про нас"));
}

#[tokio::test]
async fn duplicate_slug_in_collection_conflicts() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;
    commands
        .save_document(SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас"))
        .await
        .unwrap();

    let err = commands
        .save_document(SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));

    // Same slug in another collection is fine.
    let post = commands
        .save_document(SaveDocumentCommand::create(Collection::Posts, Locale::Uk, "Про нас"))
        .await
        .unwrap();
    assert_eq!(post.slug, "pro-nas");
}

#[tokio::test]
async fn translation_is_stored_per_locale_with_fallback() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;
    let queries = &app.services.document_queries;
    let created = commands
        .save_document(
            SaveDocumentCommand::create(Collection::Pages, Locale::Uk, "Про нас")
                .with_meta(MetaDto {
                    title: Some("Про нас | Громада".into()),
                    description: None,
                })
                .with_publish(true),
        )
        .await
        .unwrap();

    let fallback = queries
        .get_document_by_slug(
            None,
            GetDocumentBySlugQuery {
                collection: Collection::Pages,
                slug: "pro-nas".into(),
                locale: Locale::En,
            },
        )
        .await
        .unwrap();
    assert_eq!(fallback.locale, "uk");
    assert_eq!(fallback.title.as_deref(), Some("Про нас"));

    commands
        .save_document(
            SaveDocumentCommand::update(created.id, Collection::Pages, Locale::En)
                .with_title("About us"),
        )
        .await
        .unwrap();

    let translated = queries
        .get_document_by_slug(
            None,
            GetDocumentBySlugQuery {
                collection: Collection::Pages,
                slug: "pro-nas".into(),
                locale: Locale::En,
            },
        )
        .await
        .unwrap();
    assert_eq!(translated.locale, "en");
    assert_eq!(translated.title.as_deref(), Some("About us"));
    assert_eq!(translated.slug, "pro-nas");
}

#[tokio::test]
async fn drafts_are_hidden_from_anonymous_readers() {
    let app = support::build_test_app();
    app.services
        .document_commands
        .save_document(SaveDocumentCommand::create(Collection::Posts, Locale::Uk, "Чернетка"))
        .await
        .unwrap();

    let query = || GetDocumentBySlugQuery {
        collection: Collection::Posts,
        slug: "chernetka".into(),
        locale: Locale::Uk,
    };
    let queries = &app.services.document_queries;

    let err = queries.get_document_by_slug(None, query()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let editor = editor();
    let draft = queries
        .get_document_by_slug(Some(&editor), query())
        .await
        .unwrap();
    assert_eq!(draft.slug, "chernetka");

    let err = queries
        .list_documents(
            None,
            ListDocumentsQuery {
                collection: Collection::Posts,
                locale: Locale::Uk,
                include_drafts: true,
                limit: 10,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn publish_and_delete_round_trip() {
    let app = support::build_test_app();
    let commands = &app.services.document_commands;
    let created = commands
        .save_document(SaveDocumentCommand::create(Collection::Posts, Locale::Uk, "Новина"))
        .await
        .unwrap();

    let published = commands
        .set_publish_state(SetPublishStateCommand {
            id: created.id,
            collection: Collection::Posts,
            locale: Locale::Uk,
            publish: true,
        })
        .await
        .unwrap();
    assert!(published.published);
    assert!(published.published_at.is_some());

    let listed = app
        .services
        .document_queries
        .list_documents(
            None,
            ListDocumentsQuery {
                collection: Collection::Posts,
                locale: Locale::Uk,
                include_drafts: false,
                limit: 10,
            },
        )
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    // Wrong collection behaves like a missing document.
    let err = commands
        .delete_document(DeleteDocumentCommand {
            id: created.id,
            collection: Collection::Pages,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    commands
        .delete_document(DeleteDocumentCommand {
            id: created.id,
            collection: Collection::Posts,
        })
        .await
        .unwrap();
    assert_eq!(app.documents.len(), 0);
}
