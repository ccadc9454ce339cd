// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use mtrgen_template_common::TemplateDefaults;
use mtrgen_template_editor::{
    DeclarationRef, Edit, EditorError, ListRef, Scope, SequentialIds, TemplateSession,
};
use mtrgen_template_schema::{
    DeclarationKind, ExportMode, Id, Member, MemberKind, Method, Modifier, Template, Visibility,
    convert,
};
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;

const EXPORTED: &str = r#"{
  "file": {
    "namespace": {
      "class": {
        "implements": ["JsonSerializable"],
        "methods": [
          {"body": ["return [];"], "name": "jsonSerialize", "params": [], "return": "array"}
        ],
        "name": "Order"
      },
      "name": "App\\Entity",
      "use": ["JsonSerializable"]
    }
  },
  "filename": "<%name%>Entity",
  "name": "Entity",
  "path": "src/Entity"
}"#;

const CLASS: DeclarationRef = DeclarationRef {
    scope: Scope::Namespace,
    kind: DeclarationKind::Class,
};

fn scripted(template: Template) -> TemplateSession {
    TemplateSession::with_ids(template, Box::new(SequentialIds::new("n")), TemplateDefaults::default())
}

#[test]
fn test_import_edit_export() {
    let mut session = scripted(convert::deserialize(EXPORTED).unwrap());

    // ids were handed out in document order on load
    let method_id = Id::from("n3");
    let class = session.template().file.namespace.as_ref().unwrap().class.as_ref().unwrap();
    assert_eq!(class.methods.as_ref().unwrap()[0].id, Some(method_id.clone()));

    session
        .apply_all(&[
            Edit::SetModifier {
                target: CLASS,
                modifier: Some(Modifier::Final),
            },
            Edit::AddEntry {
                list: ListRef::Implements { target: CLASS },
                value: "Countable".to_string(),
            },
            Edit::AddMember {
                target: CLASS,
                kind: MemberKind::Method,
                name: Some("count".to_string()),
            },
            Edit::SetMethodBody {
                target: CLASS,
                method: method_id.clone(),
                text: "return [\n    'id' => $this->id,\n];".to_string(),
            },
        ])
        .unwrap();
    assert_eq!(session.revision(), 4);

    let exported: Value = serde_json::from_str(&session.export(ExportMode::Typed).unwrap()).unwrap();
    let class = &exported["file"]["namespace"]["class"];
    assert_eq!(class["modifier"], "final");
    assert_eq!(class["implements"], json!(["JsonSerializable", "Countable"]));
    assert_eq!(class["methods"][1], json!({"name": "count"}));
    assert_eq!(
        class["methods"][0]["body"],
        json!(["return [", "    'id' => $this->id,", "];"])
    );
}

#[test]
fn test_resume_from_editing_json() {
    let mut session = scripted(convert::deserialize(EXPORTED).unwrap());
    session
        .apply(&Edit::AddMember {
            target: CLASS,
            kind: MemberKind::Prop,
            name: Some("id".to_string()),
        })
        .unwrap();

    let saved = session.to_editing_json().unwrap();
    let mut resumed = TemplateSession::load(&saved, TemplateDefaults::default()).unwrap();
    assert_eq!(resumed.template(), session.template());

    // ids from the saved file still address the same entries
    let prop_id = resumed.template().file.namespace.as_ref().unwrap().class.as_ref().unwrap()
        .props
        .as_ref()
        .unwrap()[0]
        .id
        .clone()
        .unwrap();
    resumed
        .apply(&Edit::SetPropValue {
            target: CLASS,
            prop: prop_id,
            value: "0".to_string(),
        })
        .unwrap();

    let exported: Value = serde_json::from_str(&resumed.export(ExportMode::Typed).unwrap()).unwrap();
    let prop = &exported["file"]["namespace"]["class"]["props"][0];
    assert_eq!(prop["value"], "0");
    assert_eq!(prop["init"], true);
}

#[test]
fn test_replace_member_keeps_position() {
    let mut session = scripted(convert::deserialize(EXPORTED).unwrap());
    session
        .apply(&Edit::AddMember {
            target: CLASS,
            kind: MemberKind::Method,
            name: Some("last".to_string()),
        })
        .unwrap();

    let replacement = Method::new("toArray")
        .with_id("n3")
        .with_visibility(Visibility::Public)
        .with_return("array", false)
        .without_params();
    session
        .apply(&Edit::ReplaceMember {
            target: CLASS,
            member: Member::Method(replacement),
        })
        .unwrap();

    let class = session.template().file.namespace.as_ref().unwrap().class.as_ref().unwrap();
    let names: Vec<&str> = class
        .methods
        .as_ref()
        .unwrap()
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(names, vec!["toArray", "last"]);
}

#[test]
fn test_failed_script_keeps_state_and_listeners_quiet() {
    let mut session = scripted(convert::deserialize(EXPORTED).unwrap());
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    session.on_change(move |_| counter.set(counter.get() + 1));

    let before = session.template().clone();
    let err = session
        .apply_all(&[
            Edit::SetName {
                name: "Renamed".to_string(),
            },
            Edit::RemoveEntry {
                list: ListRef::Implements { target: CLASS },
                id: Id::from("unknown"),
            },
        ])
        .unwrap_err();

    assert!(matches!(err, EditorError::Script { index: 1, .. }));
    assert_eq!(session.template(), &before);
    assert_eq!(notified.get(), 0);

    session
        .apply(&Edit::SetName {
            name: "Renamed".to_string(),
        })
        .unwrap();
    assert_eq!(notified.get(), 1);
}

#[test]
fn test_shape_based_session_export() {
    let mut session = scripted(convert::deserialize(EXPORTED).unwrap());
    session
        .apply(&Edit::AddEntry {
            list: ListRef::NamespaceUse,
            value: "Countable".to_string(),
        })
        .unwrap();

    let typed = session.export(ExportMode::Typed).unwrap();
    let legacy = session.export(ExportMode::ShapeBased).unwrap();
    assert_eq!(typed, legacy);
}
