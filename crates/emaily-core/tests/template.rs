use emaily_core::error::CoreError;
use emaily_core::models::template::{CreateTemplate, Template, UpdateTemplate};
use uuid::Uuid;

fn welcome() -> CreateTemplate {
    CreateTemplate {
        name: Some("  Welcome ".to_string()),
        subject: Some("Hi".to_string()),
        body: Some("Hello there".to_string()),
        folder: Some(" https://img.example.com/a.png ".to_string()),
    }
}

fn stored() -> Template {
    let now = jiff::Timestamp::now();
    Template::new(Uuid::new_v4(), welcome().validate().unwrap(), now)
}

#[test]
fn validate_trims_name_and_folder() {
    let fields = welcome().validate().unwrap();
    assert_eq!(fields.name, "Welcome");
    assert_eq!(fields.subject, "Hi");
    assert_eq!(fields.body, "Hello there");
    assert_eq!(fields.folder.as_deref(), Some("https://img.example.com/a.png"));
}

#[test]
fn validate_rejects_missing_fields() {
    let mut input = welcome();
    input.subject = None;
    assert!(matches!(input.validate(), Err(CoreError::MissingField("subject"))));

    let mut input = welcome();
    input.body = Some(String::new());
    assert!(matches!(input.validate(), Err(CoreError::MissingField("body"))));
}

#[test]
fn whitespace_only_name_is_missing() {
    let mut input = welcome();
    input.name = Some("   ".to_string());
    let err = input.validate().unwrap_err();
    assert_eq!(err.to_string(), "name is required");
}

#[test]
fn empty_folder_is_dropped() {
    let mut input = welcome();
    input.folder = Some("".to_string());
    assert_eq!(input.validate().unwrap().folder, None);
}

#[test]
fn create_payload_ignores_unknown_fields() {
    let input: CreateTemplate = serde_json::from_str(
        r#"{"name":"A","subject":"B","body":"C","imageUrl":"x","_id":"nope"}"#,
    )
    .unwrap();
    assert_eq!(input.name.as_deref(), Some("A"));
    assert_eq!(input.folder, None);
}

#[test]
fn apply_replaces_only_given_fields() {
    let mut template = stored();
    let before = template.clone();
    let update: UpdateTemplate = serde_json::from_str(r#"{"subject":" New subject "}"#).unwrap();

    let later = before.updated_at + jiff::SignedDuration::from_secs(5);
    template.apply(update, later).unwrap();

    assert_eq!(template.id, before.id);
    assert_eq!(template.name, before.name);
    assert_eq!(template.subject, "New subject");
    assert_eq!(template.created_at, before.created_at);
    assert_eq!(template.updated_at, later);
}

#[test]
fn apply_null_clears_optional_field() {
    let mut template = stored();
    let update: UpdateTemplate = serde_json::from_str(r#"{"folder":null}"#).unwrap();
    template.apply(update, jiff::Timestamp::now()).unwrap();
    assert_eq!(template.folder, None);
}

#[test]
fn apply_rejects_cleared_required_field_and_keeps_record() {
    let mut template = stored();
    let before = template.clone();
    let update: UpdateTemplate =
        serde_json::from_str(r#"{"subject":"Changed","name":""}"#).unwrap();

    let err = template.apply(update, jiff::Timestamp::now()).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("name")));
    assert_eq!(template, before);
}

#[test]
fn template_serializes_with_form_client_field_names() {
    let template = stored();
    let json = serde_json::to_value(&template).unwrap();
    assert_eq!(json["_id"], template.id.to_string());
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("imageUrl").is_none());
}

#[test]
fn parse_template_id_rejects_garbage() {
    let id = Uuid::new_v4();
    assert_eq!(
        emaily_core::models::template::parse_template_id(&id.to_string()).unwrap(),
        id
    );
    assert!(matches!(
        emaily_core::models::template::parse_template_id("64b7f0c2e4b0a1a2b3c4d5e6"),
        Err(CoreError::InvalidId(_))
    ));
}

#[test]
fn apply_sets_image_url() {
    let mut template = stored();
    let update: UpdateTemplate =
        serde_json::from_str(r#"{"imageUrl":" https://img.example.com/b.png ","folder":""}"#)
            .unwrap();
    assert!(update.image_url.is_some());

    template.apply(update, jiff::Timestamp::now()).unwrap();
    assert_eq!(template.image_url.as_deref(), Some("https://img.example.com/b.png"));
    assert_eq!(template.folder, None);

    let json = serde_json::to_value(&template).unwrap();
    assert_eq!(json["imageUrl"], "https://img.example.com/b.png");
    assert!(json.get("folder").is_none());
}
