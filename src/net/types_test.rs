use super::*;

// =============================================================
// Request shape
// =============================================================

#[test]
fn request_serializes_input_under_variables() {
    let request = GraphqlRequest {
        operation_name: "CreateContactMutation",
        query: "mutation { x }",
        variables: CreateContactVariables {
            input: CreateContactInput {
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                message: "Hello".to_owned(),
            },
        },
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "operationName": "CreateContactMutation",
            "query": "mutation { x }",
            "variables": {
                "input": { "name": "Ada", "email": "ada@example.com", "message": "Hello" }
            }
        })
    );
}

// =============================================================
// Response shape
// =============================================================

#[test]
fn response_with_numeric_id_deserializes() {
    let body = r#"{"data":{"createContact":{"id":42}}}"#;
    let resp: GraphqlResponse<CreateContactData> = serde_json::from_str(body).unwrap();
    let payload = resp.data.unwrap().create_contact.unwrap();
    assert_eq!(payload.id, ContactId::Int(42));
    assert!(resp.errors.is_empty());
}

#[test]
fn response_with_string_id_deserializes() {
    let body = r#"{"data":{"createContact":{"id":"ck1"}}}"#;
    let resp: GraphqlResponse<CreateContactData> = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data.unwrap().create_contact.unwrap().id, ContactId::Text("ck1".to_owned()));
}

#[test]
fn response_with_errors_and_null_data_deserializes() {
    let body = r#"{
        "data": null,
        "errors": [{
            "message": "Can't create new contact",
            "extensions": {
                "code": "BAD_USER_INPUT",
                "properties": { "messages": { "email": ["Can't create new contact with invalid email"] } }
            }
        }]
    }"#;
    let resp: GraphqlResponse<CreateContactData> = serde_json::from_str(body).unwrap();
    assert!(resp.data.is_none());
    assert_eq!(resp.errors.len(), 1);
    let ext = resp.errors[0].extensions.as_ref().unwrap();
    assert_eq!(ext.code.as_deref(), Some("BAD_USER_INPUT"));
}

#[test]
fn empty_object_response_deserializes() {
    let resp: GraphqlResponse<CreateContactData> = serde_json::from_str("{}").unwrap();
    assert!(resp.data.is_none());
    assert!(resp.errors.is_empty());
}

#[test]
fn contact_id_display() {
    assert_eq!(ContactId::Int(7).to_string(), "7");
    assert_eq!(ContactId::Text("abc".to_owned()).to_string(), "abc");
}

// =============================================================
// SubmissionError
// =============================================================

#[test]
fn submission_error_displays_message_verbatim() {
    let err = SubmissionError::network("Failed to fetch");
    assert_eq!(err.to_string(), "Failed to fetch");
    assert!(err.details.is_empty());
}

#[test]
fn submission_error_http_status_message() {
    assert_eq!(
        SubmissionError::http_status(500).message,
        "Response not successful: Received status code 500"
    );
}

#[test]
fn from_graphql_uses_first_error_message() {
    let errors = vec![
        GraphqlError { message: "first".to_owned(), extensions: None },
        GraphqlError { message: "second".to_owned(), extensions: None },
    ];
    let err = SubmissionError::from_graphql(&errors);
    assert_eq!(err.message, "first");
    assert!(err.details.is_empty());
}

#[test]
fn from_graphql_blank_message_falls_back_to_generic() {
    let errors = vec![GraphqlError { message: "  ".to_owned(), extensions: None }];
    assert_eq!(SubmissionError::from_graphql(&errors).message, GENERIC_ERROR_MESSAGE);
    assert_eq!(SubmissionError::from_graphql(&[]).message, GENERIC_ERROR_MESSAGE);
}

#[test]
fn from_graphql_collects_bad_user_input_field_messages() {
    let mut messages = BTreeMap::new();
    messages.insert("email".to_owned(), vec!["email is taken".to_owned()]);
    messages.insert("name".to_owned(), vec!["name too long".to_owned(), "name has digits".to_owned()]);
    let errors = vec![GraphqlError {
        message: "Validation failed".to_owned(),
        extensions: Some(GraphqlErrorExtensions {
            code: Some(BAD_USER_INPUT_CODE.to_owned()),
            properties: Some(GraphqlErrorProperties { messages }),
        }),
    }];
    let err = SubmissionError::from_graphql(&errors);
    assert_eq!(err.message, "Validation failed");
    assert_eq!(err.details, vec!["email is taken", "name too long", "name has digits"]);
    assert_eq!(err.field_messages["email"], vec!["email is taken"]);
    assert_eq!(err.field_messages["name"].len(), 2);
}

#[test]
fn from_graphql_ignores_properties_for_other_codes() {
    let mut messages = BTreeMap::new();
    messages.insert("email".to_owned(), vec!["ignored".to_owned()]);
    let errors = vec![GraphqlError {
        message: "Internal".to_owned(),
        extensions: Some(GraphqlErrorExtensions {
            code: Some("INTERNAL_SERVER_ERROR".to_owned()),
            properties: Some(GraphqlErrorProperties { messages }),
        }),
    }];
    let err = SubmissionError::from_graphql(&errors);
    assert!(err.details.is_empty());
    assert!(err.field_messages.is_empty());
}
