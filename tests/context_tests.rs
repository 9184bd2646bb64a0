use value_exporter::{
    Context, EnumConstant, Error, Exporter, Identifier, Record, Resource, Sequence, Value,
};

#[test]
fn test_add_and_contains_agree() {
    let mut context = Context::new();
    let seq = Value::from(Sequence::from_values(vec![1, 2]));
    let record = Value::from(Record::new("Thing"));

    let seq_id = context.add(&seq).unwrap();
    let record_id = context.add(&record).unwrap();

    assert_eq!(context.contains(&seq).unwrap(), Some(seq_id));
    assert_eq!(context.contains(&record).unwrap(), Some(record_id));
    assert_eq!(context.len(), 2);
}

#[test]
fn test_adding_twice_is_idempotent() {
    let mut context = Context::new();
    let seq = Value::from(Sequence::new());

    let first = context.add(&seq).unwrap();
    let second = context.add(&seq).unwrap();

    assert_eq!(first, second);
    assert_eq!(context.len(), 1);
}

#[test]
fn test_sequence_identifiers_follow_visit_order() {
    let mut context = Context::new();
    let ids: Vec<_> = (0..4)
        .map(|_| context.add(&Sequence::new().into()).unwrap())
        .collect();

    assert_eq!(
        ids,
        vec![
            Identifier::Sequence(0),
            Identifier::Sequence(1),
            Identifier::Sequence(2),
            Identifier::Sequence(3),
        ]
    );
}

#[test]
fn test_unknown_values_are_not_contained() {
    let context = Context::new();
    assert_eq!(context.contains(&Sequence::new().into()).unwrap(), None);
    assert_eq!(context.contains(&Record::new("X").into()).unwrap(), None);
}

#[test]
fn test_distinct_but_equal_records_are_distinct() {
    let mut context = Context::new();
    let a = Record::new("Point").with_field("x", 1);
    let b = Record::new("Point").with_field("x", 1);

    context.add(&Value::from(&a)).unwrap();
    assert_eq!(context.contains(&Value::from(&b)).unwrap(), None);
}

#[test]
fn test_only_composites_are_tracked() {
    let mut context = Context::new();
    let rejected = vec![
        Value::Null,
        Value::from(false),
        Value::from(7),
        Value::from(2.5),
        Value::from("text"),
        Value::from(Resource::closed(1, "stream")),
        Value::from(EnumConstant::unit("Suit", "Hearts")),
    ];

    for value in rejected {
        let err = context.add(&value).unwrap_err();
        assert_eq!(err, Error::UnsupportedKind(value.kind_name().to_string()));
        assert!(context.contains(&value).is_err());
    }
}

#[test]
fn test_shared_context_across_exports() {
    let shared = Sequence::from_values(vec![1]);
    let first = Value::from(vec![Value::from(&shared)]);
    let second = Value::from(vec![Value::from(&shared)]);

    let exporter = Exporter::new();
    let mut context = Context::new();

    let first_text = exporter.export_with_context(&first, 0, &mut context).unwrap();
    let second_text = exporter.export_with_context(&second, 0, &mut context).unwrap();

    assert_eq!(first_text, "Array &0 [\n    0 => Array &1 [\n        0 => 1,\n    ],\n]");
    assert_eq!(second_text, "Array &2 [\n    0 => Array &1,\n]");
}

#[test]
fn test_context_outlives_dropped_values() {
    let mut context = Context::new();
    {
        let temporary = Sequence::from_values(vec![1]);
        context.add_sequence(&temporary);
    }

    let fresh = Sequence::from_values(vec![1]);
    assert_eq!(context.contains_sequence(&fresh), None);
    assert_eq!(context.add_sequence(&fresh), 1);
}
