use anyhow::Result;
use notelist::domain::Note;

#[test]
fn given_note_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let note = Note {
        id: "abc".to_string(),
        title: "Buy milk".to_string(),
        description: "2 liters".to_string(),
        due_date: "2025-04-25".to_string(),
        completed: true,
    };

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": "abc""#));
    assert!(json.contains(r#""title": "Buy milk""#));
    assert!(json.contains(r#""description": "2 liters""#));
    assert!(json.contains(r#""dueDate": "2025-04-25""#));
    assert!(json.contains(r#""completed": true"#));
    Ok(())
}

#[test]
fn given_note_when_serializing_then_uses_camel_case_fields() -> Result<()> {
    // Arrange
    let note = Note::new("abc", "t", "", "");

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert - stored layout uses camelCase, not snake_case
    assert!(json.contains(r#""dueDate""#));
    assert!(!json.contains(r#""due_date""#));
    Ok(())
}

#[test]
fn given_empty_due_date_when_serializing_then_produces_empty_string() -> Result<()> {
    // Arrange
    let note = Note::new("abc", "t", "", "");

    // Act
    let json = serde_json::to_string(&note)?;

    // Assert
    assert!(json.contains(r#""dueDate":"""#));
    Ok(())
}

#[test]
fn given_stored_record_with_extra_field_when_deserializing_then_ignores_it() -> Result<()> {
    // Arrange
    let raw = r#"{"id":"a","title":"t","description":"","dueDate":"","completed":false,"color":"red"}"#;

    // Act
    let note: Note = serde_json::from_str(raw)?;

    // Assert
    assert_eq!(note, Note::new("a", "t", "", ""));
    Ok(())
}

#[test]
fn given_record_missing_completed_when_deserializing_then_fails() {
    let raw = r#"{"id":"a","title":"t","description":"","dueDate":""}"#;

    assert!(serde_json::from_str::<Note>(raw).is_err());
}
