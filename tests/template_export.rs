// This product includes software developed at Datadog (https://www.datadoghq.com/) Copyright 2024 Datadog, Inc.

use mtrgen_template_schema::{
    Class, Constant, Declaration, File, IndexedString, Interface, Method, Modifier, Namespace,
    Param, Prop, Template, Trait, Visibility, convert,
};
use serde_json::{Value, json};

fn full_template() -> Template {
    Template::new("Repository", "<%name%>Repository", "src/Repository")
        .with_auto_import(true)
        .with_file(
            File::default()
                .with_strict(true)
                .with_use(IndexedString::with_id(1u64, "Doctrine\\ORM\\EntityManager"))
                .with_namespace(
                    Namespace::new("App\\Repository")
                        .with_use(IndexedString::with_id("u2", "App\\Entity\\Order"))
                        .with_declaration(Declaration::Class(
                            Class::new("OrderRepository")
                                .with_modifier(Modifier::Final)
                                .extending("BaseRepository")
                                .implementing(IndexedString::with_id("i1", "Countable"))
                                .implementing(IndexedString::with_id("i2", "IteratorAggregate"))
                                .using_trait(IndexedString::with_id("t1", "LoggerAware"))
                                .with_comment(IndexedString::with_id("c1", "Order storage."))
                                .with_constant(
                                    Constant::new("TABLE", "orders")
                                        .with_id("k1")
                                        .with_visibility(Visibility::Private),
                                )
                                .with_prop(
                                    Prop::new("manager")
                                        .with_id("p1")
                                        .with_type("EntityManager")
                                        .with_visibility(Visibility::Private)
                                        .with_comment(IndexedString::with_id("c2", "@var EntityManager")),
                                )
                                .with_prop(Prop::new("cache").with_id("p2").with_default(Value::Null))
                                .with_method(
                                    Method::new("find")
                                        .with_id("m1")
                                        .with_return("Order", true)
                                        .with_param(Param::new("id").with_id("a1").with_type("int"))
                                        .with_param(
                                            Param::new("lock")
                                                .with_id("a2")
                                                .with_type("bool")
                                                .with_default(false),
                                        )
                                        .with_body_line(IndexedString::with_id("b1", "return null;")),
                                )
                                .with_method(Method::new("count").with_id("m2").without_params()),
                        )),
                ),
        )
}

fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key) || map.values().any(|v| contains_key(v, key)),
        Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

#[test]
fn test_editing_json_round_trip() {
    let template = full_template();
    let editing = convert::to_editing_json(&template).unwrap();
    assert_eq!(convert::deserialize(&editing).unwrap(), template);
}

#[test]
fn test_export_has_no_id_keys() {
    let exported: Value = serde_json::from_str(&convert::serialize(&full_template()).unwrap()).unwrap();
    assert!(!contains_key(&exported, "id"));
}

#[test]
fn test_indexed_lists_become_string_arrays() {
    let exported: Value = serde_json::from_str(&convert::serialize(&full_template()).unwrap()).unwrap();
    let namespace = &exported["file"]["namespace"];
    let class = &namespace["class"];

    assert_eq!(exported["file"]["use"], json!(["Doctrine\\ORM\\EntityManager"]));
    assert_eq!(namespace["use"], json!(["App\\Entity\\Order"]));
    assert_eq!(class["implements"], json!(["Countable", "IteratorAggregate"]));
    assert_eq!(class["traits"], json!(["LoggerAware"]));
    assert_eq!(class["comments"], json!(["Order storage."]));
    assert_eq!(class["props"][0]["comments"], json!(["@var EntityManager"]));
    assert_eq!(class["methods"][0]["body"], json!(["return null;"]));
}

#[test]
fn test_export_is_a_fixed_point() {
    let first = convert::serialize(&full_template()).unwrap();
    let reparsed = convert::deserialize(&first).unwrap();
    assert_eq!(convert::serialize(&reparsed).unwrap(), first);

    let shape_based = convert::serialize_shape_based(&full_template()).unwrap();
    assert_eq!(shape_based, first);
}

#[test]
fn test_shape_based_export_is_a_fixed_point() {
    let first = convert::serialize_shape_based(&full_template()).unwrap();

    // Re-imported export JSON carries no ids at all
    let reparsed = convert::deserialize(&first).unwrap();
    assert!(reparsed.file.uses.as_ref().unwrap()[0].id.is_none());
    assert_eq!(convert::serialize_shape_based(&reparsed).unwrap(), first);
    assert_eq!(convert::serialize(&reparsed).unwrap(), first);
}

#[test]
fn test_entries_without_ids_collapse_in_both_modes() {
    let template = Template::new("T", "f", "p").with_file(
        File::default()
            .with_use(IndexedString::new("A\\B"))
            .with_declaration(Declaration::Class(
                Class::new("C")
                    .with_comment(IndexedString::new("doc"))
                    .with_method(Method::new("run").with_body_line(IndexedString::new("return;"))),
            )),
    );

    let legacy: Value = serde_json::from_str(&convert::serialize_shape_based(&template).unwrap()).unwrap();
    assert_eq!(legacy["file"]["use"], json!(["A\\B"]));
    assert_eq!(legacy["file"]["class"]["comments"], json!(["doc"]));
    assert_eq!(legacy["file"]["class"]["methods"][0]["body"], json!(["return;"]));
    assert_eq!(
        convert::serialize_shape_based(&template).unwrap(),
        convert::serialize(&template).unwrap()
    );
}

#[test]
fn test_ids_inside_value_payloads_are_dropped() {
    let template = Template::new("T", "f", "p").with_file(File::default().with_declaration(
        Declaration::Class(
            Class::new("C")
                .with_constant(Constant::new("K", json!({"id": 7, "x": 1})))
                .with_prop(Prop::new("rows").with_default(json!([{"id": "r1", "n": 2}])))
                .with_method(
                    Method::new("m").with_param(Param::new("opts").with_default(json!({"nested": {"id": 3}}))),
                ),
        ),
    ));

    for text in [
        convert::serialize(&template).unwrap(),
        convert::serialize_shape_based(&template).unwrap(),
    ] {
        let exported: Value = serde_json::from_str(&text).unwrap();
        assert!(!contains_key(&exported, "id"));

        let class = &exported["file"]["class"];
        assert_eq!(class["constants"][0]["value"], json!({"x": 1}));
        assert_eq!(class["props"][0]["value"], json!([{"n": 2}]));
        assert_eq!(class["methods"][0]["params"][0]["value"], json!({"nested": {}}));
    }
}

#[test]
fn test_value_payloads_survive_export() {
    let exported: Value = serde_json::from_str(&convert::serialize(&full_template()).unwrap()).unwrap();
    let class = &exported["file"]["namespace"]["class"];

    assert_eq!(class["constants"][0]["value"], json!("orders"));
    assert_eq!(class["props"][1]["value"], Value::Null);
    assert_eq!(class["props"][1]["init"], json!(true));
    assert_eq!(class["methods"][0]["params"][1]["value"], json!(false));
}

#[test]
fn test_wrapper_shaped_constant_value() {
    let payload = json!({"id": "x", "value": "y"});
    let template = Template::new("T", "f", "p").with_file(File::default().with_declaration(
        Declaration::Class(Class::new("C").with_constant(Constant::new("K", payload))),
    ));

    // The legacy exporter cannot tell this payload from an indexed string
    let legacy: Value = serde_json::from_str(&convert::serialize_shape_based(&template).unwrap()).unwrap();
    assert_eq!(legacy["file"]["class"]["constants"][0]["value"], json!("y"));

    // The typed exporter knows the field is a value: the id goes, the shape stays
    let typed: Value = serde_json::from_str(&convert::serialize(&template).unwrap()).unwrap();
    assert_eq!(typed["file"]["class"]["constants"][0]["value"], json!({"value": "y"}));
    assert!(!contains_key(&typed, "id"));
}

#[test]
fn test_full_class_export_scenario() {
    let template = Template::new("Foo", "FooTemplate", "/tmp").with_file(
        File::default().with_declaration(Declaration::Class(
            Class::new("Foo")
                .with_modifier(Modifier::Final)
                .extending("Base")
                .with_method(
                    Method::new("bar")
                        .with_id("m1")
                        .with_visibility(Visibility::Public)
                        .without_params(),
                ),
        )),
    );

    let text = convert::serialize(&template).unwrap();
    assert!(text.contains("\"modifier\": \"final\""));
    assert!(text.contains("\"extends\": \"Base\""));

    let exported: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(exported["name"], "Foo");
    assert_eq!(exported["filename"], "FooTemplate");
    assert_eq!(exported["path"], "/tmp");
    assert_eq!(
        exported["file"]["class"]["methods"],
        json!([{"name": "bar", "params": [], "visibility": "public"}])
    );
    assert!(!contains_key(&exported, "id"));
}

#[test]
fn test_absent_params_are_omitted() {
    let absent = Method::new("run");
    let empty = Method::new("run").without_params();

    let absent_json: Value = serde_json::from_str(&convert::method_to_json(&absent).unwrap()).unwrap();
    let empty_json: Value = serde_json::from_str(&convert::method_to_json(&empty).unwrap()).unwrap();
    assert!(absent_json.get("params").is_none());
    assert_eq!(empty_json["params"], json!([]));

    let template = Template::new("T", "f", "p").with_file(
        File::default().with_declaration(Declaration::Interface(Interface::new("I").with_method(absent))),
    );
    let text = convert::serialize(&template).unwrap();
    assert!(!text.contains("params"));
}

#[test]
fn test_trait_file_export() {
    let template = Template::new("T", "f", "p").with_file(File::default().with_declaration(
        Declaration::Trait(
            Trait::new("Greets").with_method(Method::new("hello").with_body_line(IndexedString::new("echo 'hi';"))),
        ),
    ));
    let exported: Value = serde_json::from_str(&convert::serialize(&template).unwrap()).unwrap();
    assert_eq!(exported["file"]["trait"]["name"], "Greets");
    assert_eq!(exported["file"]["trait"]["methods"][0]["body"], json!(["echo 'hi';"]));
}
