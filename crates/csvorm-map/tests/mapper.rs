//! Integration tests for reading and writing records.

use chrono::NaiveDate;
use csvorm_map::{
    CsvEntity, CsvTable, DynamicRecord, FieldBinding, HeaderOption, MappingError, RecordType,
    Value, ValueKind, csv_entity, read_records, write_records, write_records_with_columns,
};

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct User {
        #[column(pos = 0)]
        pub name: String,
        #[column(pos = 1)]
        pub salary: i32,
        #[column(pos = 2, format = "yyyy-MM-dd")]
        pub dob: NaiveDate,
        #[column(pos = 3)]
        pub performance: f64,
        #[column(pos = 4)]
        pub is_health: bool,
    }
}

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Account {
        #[column(name = "nick_name", required)]
        pub nick_name: String,
        #[column(name = "int_amount")]
        pub amount: i64,
        #[column(name = "memo")]
        pub memo: Option<String>,
    }
}

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct User4 {
        #[column(name = "name", pos = 0)]
        pub name: String,
        #[column(name = "int_amount", pos = 1)]
        pub amount: i32,
        #[column(name = "perf_balance", pos = 2)]
        pub balance: f64,
    }
}

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Shuffled {
        #[column(name = "c", pos = 2)]
        pub c: String,
        #[column(name = "a", pos = 0)]
        pub a: String,
        #[column(name = "b", pos = 1)]
        pub b: String,
    }
}

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Ordered {
        #[column(name = "a", pos = 0)]
        pub a: String,
        #[column(name = "b", pos = 1)]
        pub b: String,
        #[column(name = "c", pos = 2)]
        pub c: String,
    }
}

csv_entity! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Gapped {
        #[column(name = "z", pos = 7)]
        pub z: String,
        #[column(pos = 0)]
        pub a: String,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn headerless(rows: &[&[&str]]) -> CsvTable {
    CsvTable::new(None, rows.iter().map(|row| strings(row)).collect())
}

fn with_header(header: &[&str], rows: &[&[&str]]) -> CsvTable {
    CsvTable::new(
        Some(strings(header)),
        rows.iter().map(|row| strings(row)).collect(),
    )
}

fn wang() -> User {
    User {
        name: "Wang".to_string(),
        salary: 2000,
        dob: NaiveDate::from_ymd_opt(2020, 1, 15).expect("valid date"),
        performance: 23.45,
        is_health: true,
    }
}

#[test]
fn reads_positional_row() {
    let table = headerless(&[&["Wang", "2000", "2020-01-15", "23.45", "true"]]);
    let users: Vec<User> =
        read_records(&table, User::record_type(), HeaderOption::WithoutHeader).expect("read");
    assert_eq!(users, vec![wang()]);
}

#[test]
fn positional_bindings_ignore_the_header_row() {
    let table = with_header(
        &["who", "pay", "born", "perf", "ok"],
        &[&["Wang", "2000", "2020-01-15", "23.45", "TRUE"]],
    );
    let users: Vec<User> =
        read_records(&table, User::record_type(), HeaderOption::WithHeader).expect("read");
    assert_eq!(users, vec![wang()]);
}

#[test]
fn reads_named_columns_in_any_order() {
    let table = with_header(
        &["memo", "int_amount", "nick_name"],
        &[&["hello", "44883377", "wang"], &["", "7", "li"]],
    );
    let accounts: Vec<Account> =
        read_records(&table, Account::record_type(), HeaderOption::WithHeader).expect("read");
    assert_eq!(accounts[0].nick_name, "wang");
    assert_eq!(accounts[0].amount, 44_883_377);
    assert_eq!(accounts[0].memo.as_deref(), Some("hello"));
    assert_eq!(accounts[1].memo.as_deref(), Some(""));
}

#[test]
fn required_column_missing_names_the_column() {
    let table = with_header(&["int_amount"], &[&["1"]]);
    let err = read_records::<Account>(&table, Account::record_type(), HeaderOption::WithHeader)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::RequiredColumnMissing {
            column: "nick_name".to_string()
        }
    );
}

#[test]
fn optional_missing_column_leaves_default() {
    let table = with_header(&["nick_name"], &[&["wang"]]);
    let accounts: Vec<Account> =
        read_records(&table, Account::record_type(), HeaderOption::WithHeader).expect("read");
    assert_eq!(accounts[0].amount, 0);
    assert_eq!(accounts[0].memo, None);
}

#[test]
fn duplicate_header_uses_last_column() {
    let table = with_header(&["nick_name", "nick_name"], &[&["first", "second"]]);
    let accounts: Vec<Account> =
        read_records(&table, Account::record_type(), HeaderOption::WithHeader).expect("read");
    assert_eq!(accounts[0].nick_name, "second");
}

#[test]
fn named_only_bindings_need_positions_without_header() {
    let table = headerless(&[&["wang", "1", "memo"]]);
    let err = read_records::<Account>(&table, Account::record_type(), HeaderOption::WithoutHeader)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::PositionRequired {
            field: "nick_name".to_string()
        }
    );
}

#[test]
fn short_row_is_out_of_range() {
    let table = headerless(&[&["Wang", "2000"]]);
    let err = read_records::<User>(&table, User::record_type(), HeaderOption::WithoutHeader)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::CellOutOfRange {
            field: "dob".to_string(),
            position: 2,
            width: 2,
        }
    );
}

#[test]
fn one_bad_cell_fails_the_batch() {
    let table = headerless(&[
        &["Wang", "2000", "2020-01-15", "23.45", "true"],
        &["Li", "lots", "2020-01-16", "1.0", "false"],
    ]);
    let err = read_records::<User>(&table, User::record_type(), HeaderOption::WithoutHeader)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::ValueParse {
            field: "salary".to_string(),
            raw: "lots".to_string(),
            kind: ValueKind::Integer,
        }
    );
}

#[test]
fn unmarked_type_is_not_a_mapping_target() {
    let record_type = RecordType::unmarked(
        "Plain",
        vec![FieldBinding::new("name", ValueKind::String).pos(0)],
    );
    let table = headerless(&[&["Wang"]]);
    let read = read_records::<DynamicRecord>(&table, &record_type, HeaderOption::WithoutHeader);
    let expected = MappingError::NotAMappingTarget {
        record_type: "Plain".to_string(),
    };
    assert_eq!(read, Err(expected.clone()));

    let written = write_records(
        &[DynamicRecord::new()],
        &record_type,
        HeaderOption::WithHeader,
    );
    assert_eq!(written, Err(expected));
}

#[test]
fn unsupported_field_type_fails_before_rows() {
    let record_type = RecordType::entity(
        "Tagged",
        vec![
            FieldBinding::new("name", ValueKind::String).pos(0),
            FieldBinding::new("tags", ValueKind::from_type_name("Vec<String>")).pos(1),
        ],
    );
    let table = headerless(&[&["Wang", "a;b"]]);
    assert_eq!(
        read_records::<DynamicRecord>(&table, &record_type, HeaderOption::WithoutHeader),
        Err(MappingError::UnsupportedFieldType {
            field: "tags".to_string(),
            type_name: "Vec<String>".to_string(),
        })
    );
}

#[test]
fn missing_format_fails_both_directions() {
    let record_type = RecordType::entity(
        "Dated",
        vec![FieldBinding::new("dob", ValueKind::LocalDate).pos(0)],
    );
    let expected = MappingError::MissingFormatPattern {
        field: "dob".to_string(),
    };
    let table = headerless(&[&["2020-01-15"]]);
    assert_eq!(
        read_records::<DynamicRecord>(&table, &record_type, HeaderOption::WithoutHeader),
        Err(expected.clone())
    );

    let record = DynamicRecord::new().with(
        "dob",
        Value::LocalDate(NaiveDate::from_ymd_opt(2020, 1, 15).expect("valid date")),
    );
    assert_eq!(
        write_records(&[record], &record_type, HeaderOption::WithoutHeader),
        Err(expected)
    );
}

#[test]
fn readonly_fields_block_reads_only() {
    let record_type = RecordType::entity(
        "Audit",
        vec![FieldBinding::new("created", ValueKind::String).pos(0).readonly()],
    );
    let table = headerless(&[&["today"]]);
    assert_eq!(
        read_records::<DynamicRecord>(&table, &record_type, HeaderOption::WithoutHeader),
        Err(MappingError::NonAssignableField {
            field: "created".to_string()
        })
    );

    let record = DynamicRecord::new().with("created", Value::String("today".to_string()));
    let table = write_records(&[record], &record_type, HeaderOption::WithoutHeader)
        .expect("write");
    assert_eq!(table.to_rows(), vec![strings(&["today"])]);
}

#[test]
fn writes_position_order_with_header() {
    let table = write_records(&[wang()], User::record_type(), HeaderOption::WithHeader)
        .expect("write");
    assert_eq!(
        table.to_rows(),
        vec![
            strings(&["", "", "", "", ""]),
            strings(&["Wang", "2000", "2020-01-15", "23.45", "true"]),
        ]
    );
}

#[test]
fn position_order_ignores_declaration_order() {
    let shuffled = Shuffled {
        c: "3".to_string(),
        a: "1".to_string(),
        b: "2".to_string(),
    };
    let ordered = Ordered {
        a: "1".to_string(),
        b: "2".to_string(),
        c: "3".to_string(),
    };
    let left = write_records(&[shuffled], Shuffled::record_type(), HeaderOption::WithHeader)
        .expect("write shuffled");
    let right = write_records(&[ordered], Ordered::record_type(), HeaderOption::WithHeader)
        .expect("write ordered");
    assert_eq!(left.to_rows(), right.to_rows());
    assert_eq!(left.to_rows()[0], strings(&["a", "b", "c"]));
}

#[test]
fn incomplete_positions_keep_declaration_order() {
    let gapped = Gapped {
        z: "last".to_string(),
        a: "first".to_string(),
    };
    let table = write_records(&[gapped], Gapped::record_type(), HeaderOption::WithHeader)
        .expect("write");
    assert_eq!(
        table.to_rows(),
        vec![strings(&["z", ""]), strings(&["last", "first"])]
    );
}

#[test]
fn headerless_read_falls_back_to_positions_of_named_bindings() {
    let table = headerless(&[&["Wang", "2000", "12.5"]]);
    let users: Vec<User4> =
        read_records(&table, User4::record_type(), HeaderOption::WithoutHeader).expect("read");
    assert_eq!(
        users,
        vec![User4 {
            name: "Wang".to_string(),
            amount: 2000,
            balance: 12.5,
        }]
    );
}

#[test]
fn explicit_columns_set_the_order() {
    let user = User4 {
        name: "Wang".to_string(),
        amount: 2000,
        balance: 12.5,
    };
    let table = write_records_with_columns(
        &[user],
        User4::record_type(),
        &["perf_balance", "", "int_amount"],
        HeaderOption::WithHeader,
    )
    .expect("write");
    assert_eq!(
        table.to_rows(),
        vec![
            strings(&["perf_balance", "int_amount"]),
            strings(&["12.5", "2000"]),
        ]
    );
}

#[test]
fn explicit_column_not_bound_fails() {
    let user = User4 {
        name: "Wang".to_string(),
        amount: 2000,
        balance: 12.5,
    };
    let err = write_records_with_columns(
        &[user],
        User4::record_type(),
        &["perf_balance", "int_amount", "int_aabbcc"],
        HeaderOption::WithHeader,
    )
    .unwrap_err();
    assert_eq!(
        err,
        MappingError::ColumnNotFound {
            column: "int_aabbcc".to_string(),
            record_type: "User4".to_string(),
        }
    );
}

#[test]
fn empty_write_emits_header_only() {
    let table = write_records::<User4>(&[], User4::record_type(), HeaderOption::WithHeader)
        .expect("write");
    assert_eq!(
        table.to_rows(),
        vec![strings(&["name", "int_amount", "perf_balance"])]
    );

    let table = write_records::<User4>(&[], User4::record_type(), HeaderOption::WithoutHeader)
        .expect("write");
    assert!(table.to_rows().is_empty());
}

#[test]
fn null_values_write_empty_cells() {
    let account = Account {
        nick_name: "wang".to_string(),
        amount: 3,
        memo: None,
    };
    let table = write_records_with_columns(
        &[account],
        Account::record_type(),
        &["nick_name", "memo"],
        HeaderOption::WithoutHeader,
    )
    .expect("write");
    assert_eq!(table.columns()[1], vec![None]);
    assert_eq!(table.to_rows(), vec![strings(&["wang", ""])]);
}
