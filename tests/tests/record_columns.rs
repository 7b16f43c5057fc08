use pretty_assertions::assert_eq;
use sqlscan::{column_names, locate, Record};

#[derive(Debug, Default, PartialEq, Record)]
struct Address {
    #[db("street")]
    street: String,
    #[db("city")]
    city: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Audit {
    created_by: String,
    #[db("-")]
    note: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Person {
    #[db("id")]
    id: i64,
    #[db("")]
    name: String,
    #[db("addr")]
    address: Address,
    shipping: Option<Address>,
    #[db("-")]
    audit: Audit,
    #[db(skip)]
    #[allow(dead_code)]
    scratch: Vec<u32>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Meta {
    version: i32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Document {
    #[db(embed)]
    meta: Meta,
    #[db("body", embed)]
    body: Address,
    title: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Report {
    #[db("doc")]
    document: Document,
}

#[derive(Debug, Default, Record)]
struct Collides {
    street: String,
    #[db("-")]
    address: Address,
}

#[derive(Debug, Default, Record)]
struct Author {
    id: i64,
    latest: Option<Box<Post>>,
}

#[derive(Debug, Default, Record)]
struct Post {
    post_id: i64,
    author: Option<Box<Author>>,
}

#[test]
fn derived_column_names() {
    assert_eq!(
        column_names::<Person>().unwrap(),
        [
            "id",
            "name",
            "addr_street",
            "addr_city",
            "shipping_street",
            "shipping_city",
            "created_by",
        ]
    );
}

#[test]
fn embedded_record_columns() {
    assert_eq!(
        column_names::<Document>().unwrap(),
        ["version", "body_street", "body_city", "title"]
    );

    // Names inside a tagged embed are not prefixed by the parent
    assert_eq!(
        column_names::<Report>().unwrap(),
        ["doc_version", "body_street", "body_city", "doc_title"]
    );
}

#[test]
fn wrappers_share_the_record_columns() {
    let plain = column_names::<Person>().unwrap();

    assert_eq!(column_names::<Box<Person>>().unwrap(), plain);
    assert_eq!(column_names::<Option<Person>>().unwrap(), plain);
}

#[test]
fn column_names_are_cached() {
    let first = column_names::<Person>().unwrap();
    let second = column_names::<Person>().unwrap();

    assert!(std::ptr::eq(first, second));
}

#[test]
fn scalar_types_have_no_columns() {
    let err = column_names::<String>().unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn locate_rejects_colliding_columns() {
    let mut record = Collides::default();
    let columns = vec!["street".to_string()];

    let err = locate(&mut record, &columns).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument: column `street` is mapped by more than one field"
    );
}

#[test]
fn mutually_nested_records_are_rejected() {
    let err = column_names::<Author>().unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "invalid argument: record `Author` contains itself through field `Post.author`"
    );

    let mut author = Author::default();
    let err = locate(&mut author, &["id".to_string()]).unwrap_err();
    assert!(err.is_invalid_argument());
}
