use sqlscan::{Executor, Value};
use tests::{assert_err, assert_ok, tests, ConnectionOp, DbTest};

async fn exec_reports_rows_affected(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let res = assert_ok!(
        db.exec("CREATE TEMP TABLE items (id BIGINT, label TEXT)", &[])
            .await
    );
    assert_eq!(res.rows_affected, 0);

    for id in 1..=3_i64 {
        let res = assert_ok!(
            db.exec(
                "INSERT INTO items VALUES ($1, $2)",
                &[id.into(), format!("item {id}").into()],
            )
            .await
        );
        assert_eq!(res.rows_affected, 1);
    }

    let res = assert_ok!(
        db.exec("UPDATE items SET label = $1 WHERE id > $2", &["x".into(), 1_i64.into()])
            .await
    );
    assert_eq!(res.rows_affected, 2);

    assert_eq!(
        test.log().pop(),
        Some(ConnectionOp::Execute {
            sql: "UPDATE items SET label = $1 WHERE id > $2".to_string(),
            params: vec![Value::from("x"), Value::from(1_i64)],
        })
    );
}

async fn query_returns_columns_and_rows(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    assert_ok!(
        db.exec("CREATE TEMP TABLE items (id BIGINT, label TEXT)", &[])
            .await
    );
    assert_ok!(
        db.exec(
            "INSERT INTO items VALUES ($1, $2), ($3, $4)",
            &[1_i64.into(), "a".into(), 2_i64.into(), Value::Null],
        )
        .await
    );

    let rows = assert_ok!(
        db.query("SELECT id, label FROM items ORDER BY id", &[])
            .await
    );
    assert_eq!(rows.columns(), ["id", "label"]);

    let rows = assert_ok!(rows.collect().await);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get_by_name("id"), Some(&Value::I64(1)));
    assert_eq!(rows[0].get_by_name("label"), Some(&Value::from("a")));
    assert_eq!(rows[1].get(0), Some(&Value::I64(2)));
    assert_eq!(rows[1].get(1), Some(&Value::Null));

    assert_eq!(test.log().open_rows(), 0);
}

async fn query_row_returns_first_row(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    assert_ok!(
        db.exec("CREATE TEMP TABLE items (id BIGINT)", &[])
            .await
    );
    for id in [3_i64, 1, 2] {
        assert_ok!(db.exec("INSERT INTO items VALUES ($1)", &[id.into()]).await);
    }

    let row = assert_ok!(
        db.query_row("SELECT id FROM items ORDER BY id", &[])
            .await
    );
    assert_eq!(row.columns(), ["id"]);
    assert_eq!(row.get(0), Some(&Value::I64(1)));

    let err = assert_err!(
        db.query_row("SELECT id FROM items WHERE id > $1", &[10_i64.into()])
            .await
    );
    assert!(err.is_record_not_found(), "{err}");

    assert_eq!(test.log().open_rows(), 0);
}

async fn driver_errors_pass_through(test: &mut DbTest) {
    let mut db = test.setup_db().await;

    let err = assert_err!(db.query("SELECT * FROM missing_table", &[]).await);
    assert!(err.is_driver_operation_failed(), "{err}");

    let err = assert_err!(db.exec("NOT SQL", &[]).await);
    assert!(err.is_driver_operation_failed(), "{err}");
}

tests!(
    exec_reports_rows_affected,
    query_returns_columns_and_rows,
    query_row_returns_first_row,
    driver_errors_pass_through,
);
