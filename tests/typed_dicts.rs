use serde_json::{json, Value};

use typed_avro_schema::descriptor::{
    Annotation, CompositeDescriptor, EnumDescriptor, Field, Primitive, TypeDescriptor,
};
use typed_avro_schema::{
    schema_value, AliasRegistry, Describe, Error, Options, SchemaFlag, TranslationError,
};

fn str_() -> TypeDescriptor {
    Primitive::Str.into()
}

fn int() -> TypeDescriptor {
    Primitive::Int.into()
}

fn marker() -> Value {
    json!({"type": "string", "namedString": "TDMissingMarker"})
}

fn address() -> TypeDescriptor {
    CompositeDescriptor::typed_dict("test_typed_dict.Address")
        .field(Field::new(
            "street",
            TypeDescriptor::annotated(str_(), vec![Annotation::Alias("address".into())]),
        ))
        .field(Field::new("number", int()))
        .into()
}

#[test]
fn plain_typed_dict() {
    let user: TypeDescriptor = CompositeDescriptor::typed_dict("test_typed_dict.User")
        .field(Field::new("name", str_()))
        .field(Field::new("age", int()))
        .into();
    assert_eq!(
        schema_value(&user, &Options::new(), &AliasRegistry::new()).unwrap(),
        json!({
            "type": "record",
            "name": "User",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "age", "type": "long"},
            ]
        })
    );
}

#[test]
fn nested_typed_dict_with_aliases_and_auto_namespace() {
    let user: TypeDescriptor = CompositeDescriptor::typed_dict("test_typed_dict.User")
        .field(Field::new("name", str_()))
        .field(Field::new("address", address()))
        .into();
    let aliases = AliasRegistry::new();
    aliases.register("test_typed_dict.Address", ["test_typed_dict.OldAddress"]);

    let avro = schema_value(&user, &Options::new().with_auto_namespace(true), &aliases).unwrap();
    assert_eq!(
        avro,
        json!({
            "type": "record",
            "name": "User",
            "namespace": "test_typed_dict",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "address", "type": {
                    "type": "record",
                    "name": "Address",
                    "namespace": "test_typed_dict",
                    "aliases": ["test_typed_dict.OldAddress"],
                    "fields": [
                        {"name": "street", "type": "string", "aliases": ["address"]},
                        {"name": "number", "type": "long"},
                    ]
                }},
            ]
        })
    );
}

#[test]
fn field_aliases_merge_declared_and_annotated() {
    let descriptor: TypeDescriptor = CompositeDescriptor::typed_dict("tests.Account")
        .field(
            Field::new(
                "login",
                TypeDescriptor::annotated(str_(), vec![Annotation::Alias("username".into())]),
            )
            .alias("user")
            .alias("username"),
        )
        .into();
    let avro = schema_value(&descriptor, &Options::new(), &AliasRegistry::new()).unwrap();
    assert_eq!(avro["fields"][0]["aliases"], json!(["user", "username"]));
}

struct Account;

impl Describe for Account {
    fn describe() -> TypeDescriptor {
        CompositeDescriptor::new("bank.Account")
            .field(Field::new("owner", String::describe()))
            .into()
    }
}

#[test]
fn type_aliases_registered_for_rust_type() {
    let aliases = AliasRegistry::new();
    aliases.register_type::<Account, _, _>(["bank.LegacyAccount"]);
    let avro = schema_value(&Account::describe(), &Options::new(), &aliases).unwrap();
    assert_eq!(avro["aliases"], json!(["bank.LegacyAccount"]));
}

fn non_total() -> TypeDescriptor {
    let invalid: TypeDescriptor = EnumDescriptor::new("tests.InvalidEnum")
        .member("not_valid", "not-valid")
        .into();
    let valid: TypeDescriptor = EnumDescriptor::new("tests.ValidEnum")
        .symbols(["a", "b"])
        .into();
    CompositeDescriptor::typed_dict("tests.PyType")
        .total(false)
        .field(Field::new("name", str_()))
        .field(Field::new("nickname", TypeDescriptor::optional(str_())))
        .field(Field::new("age", TypeDescriptor::optional(int())))
        .field(Field::new("invalid", TypeDescriptor::optional(invalid)))
        .field(Field::new("valid", TypeDescriptor::optional(valid)))
        .field(Field::new("id", int()).required(true))
        .into()
}

#[test]
fn non_total_fields_carry_the_missing_marker() {
    let options = Options::from(SchemaFlag::MarkNonTotalTypedDicts);
    let avro = schema_value(&non_total(), &options, &AliasRegistry::new()).unwrap();
    assert_eq!(
        avro,
        json!({
            "type": "record",
            "name": "PyType",
            "fields": [
                {"name": "name", "type": marker(), "default": "__td_missing__"},
                {"name": "nickname", "type": [marker(), "null"], "default": "__td_missing__"},
                {"name": "age", "type": [marker(), "long", "null"], "default": "__td_missing__"},
                {"name": "invalid", "type": [marker(), "null"], "default": "__td_missing__"},
                {"name": "valid", "type": [
                    marker(),
                    {"type": "enum", "name": "ValidEnum", "symbols": ["a", "b"], "default": "a"},
                    "null",
                ], "default": "__td_missing__"},
                {"name": "id", "type": "long"},
            ]
        })
    );
}

#[test]
fn non_total_without_flag_is_plain() {
    let avro = schema_value(&non_total(), &Options::new(), &AliasRegistry::new()).unwrap();
    assert_eq!(avro["fields"][0]["type"], json!("string"));
    assert_eq!(avro["fields"][2]["type"], json!(["long", "null"]));
    assert_eq!(
        avro["fields"][3]["type"],
        json!([{"type": "string", "namedString": "InvalidEnum"}, "null"])
    );
    assert!(avro["fields"][0].get("default").is_none());
}

#[test]
fn not_required_fields_in_total_typed_dict() {
    let descriptor: TypeDescriptor = CompositeDescriptor::typed_dict("tests.PyType")
        .field(Field::new("name", str_()))
        .field(Field::new("value", str_()).required(false))
        .field(Field::new("value_int", int()).required(false))
        .field(Field::new("nullable_value", TypeDescriptor::optional(str_())).required(false))
        .into();
    let options = Options::from(SchemaFlag::MarkNonTotalTypedDicts);
    assert_eq!(
        schema_value(&descriptor, &options, &AliasRegistry::new()).unwrap(),
        json!({
            "type": "record",
            "name": "PyType",
            "fields": [
                {"name": "name", "type": "string"},
                {"name": "value", "type": marker(), "default": "__td_missing__"},
                {"name": "value_int", "type": [marker(), "long"], "default": "__td_missing__"},
                {"name": "nullable_value", "type": [marker(), "null"], "default": "__td_missing__"},
            ]
        })
    );
}

#[test]
fn reference_id_is_appended_to_every_record() {
    let descriptor: TypeDescriptor = CompositeDescriptor::typed_dict("tests.PyType")
        .field(Field::new("var", str_()))
        .field(Field::new("address", address()))
        .into();
    let avro = schema_value(
        &descriptor,
        &SchemaFlag::AddReferenceId.into(),
        &AliasRegistry::new(),
    )
    .unwrap();
    let id = json!({"name": "__id", "type": ["null", "long"], "default": null});
    assert_eq!(avro["fields"][0], json!({"name": "var", "type": "string"}));
    assert_eq!(avro["fields"][2], id);
    assert_eq!(avro["fields"][1]["type"]["fields"][2], id);
}

#[test]
fn union_of_typed_dicts_is_rejected() {
    let a: TypeDescriptor = CompositeDescriptor::typed_dict("tests.A")
        .field(Field::new("x", str_()))
        .into();
    let b: TypeDescriptor = CompositeDescriptor::typed_dict("tests.B")
        .field(Field::new("y", str_()))
        .into();
    let descriptor: TypeDescriptor = CompositeDescriptor::new("tests.Holder")
        .field(Field::new("either", TypeDescriptor::union(vec![a.clone(), b])))
        .into();
    let err = schema_value(&descriptor, &Options::new(), &AliasRegistry::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Translation(TranslationError::AmbiguousUnion(_))
    ));

    // One typed dict alongside other members is fine.
    let single = TypeDescriptor::union(vec![a, str_()]);
    let avro = schema_value(&single, &Options::new(), &AliasRegistry::new()).unwrap();
    assert_eq!(avro[1], json!("string"));
}
