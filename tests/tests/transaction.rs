use sqlscan::{Db, Executor, IsolationLevel, Record, TransactionOptions, Value};
use tests::{assert_err, assert_ok, tests, ConnectionOp, DbTest};

#[derive(Debug, Default, PartialEq, Record)]
struct Count {
    n: i64,
}

async fn create_items(db: &mut Db) {
    assert_ok!(
        db.exec("CREATE TEMP TABLE items (id BIGINT, label TEXT)", &[])
            .await
    );
}

async fn count_items(db: &mut Db) -> i64 {
    let mut count = Count::default();
    assert_ok!(db.get(&mut count, "SELECT COUNT(*) AS n FROM items", &[]).await);
    count.n
}

async fn commit_persists_writes(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;

    let mut tx = assert_ok!(db.begin().await);
    assert_ok!(
        tx.exec(
            "INSERT INTO items VALUES ($1, $2)",
            &[1_i64.into(), "a".into()]
        )
        .await
    );

    // Reads inside the transaction see its own writes
    let mut count = Count::default();
    assert_ok!(tx.get(&mut count, "SELECT COUNT(*) AS n FROM items", &[]).await);
    assert_eq!(count.n, 1);

    assert_ok!(tx.commit().await);
    assert_eq!(count_items(&mut db).await, 1);

    let ops = test.log().ops();
    assert!(ops.contains(&ConnectionOp::Begin(TransactionOptions::default())));
    assert!(ops.contains(&ConnectionOp::Commit));
}

async fn rollback_discards_writes(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;

    let mut tx = assert_ok!(db.begin().await);
    assert_ok!(
        tx.exec(
            "INSERT INTO items VALUES ($1, $2)",
            &[1_i64.into(), "a".into()]
        )
        .await
    );
    assert_ok!(tx.rollback().await);

    assert_eq!(count_items(&mut db).await, 0);
    assert!(test.log().ops().contains(&ConnectionOp::Rollback));
}

async fn dropped_transaction_rolls_back(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;

    {
        let mut tx = assert_ok!(db.begin().await);
        assert_ok!(
            tx.exec(
                "INSERT INTO items VALUES ($1, $2)",
                &[1_i64.into(), "a".into()]
            )
            .await
        );
    }

    // Nothing is sent until the next statement
    assert_eq!(
        test.log().pop().as_ref().and_then(ConnectionOp::sql),
        Some("INSERT INTO items VALUES ($1, $2)")
    );

    assert_eq!(count_items(&mut db).await, 0);

    let ops = test.log().ops();
    assert_eq!(ops[ops.len() - 2], ConnectionOp::Rollback);

    // The connection is usable for a new transaction afterwards
    let tx = assert_ok!(db.begin().await);
    assert_ok!(tx.commit().await);
}

async fn builder_passes_options(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;
    test.log().clear();

    let tx = assert_ok!(
        db.transaction()
            .isolation(IsolationLevel::Serializable)
            .begin()
            .await
    );
    assert_ok!(tx.commit().await);

    assert_eq!(
        test.log().ops(),
        [
            ConnectionOp::Begin(TransactionOptions::new().isolation(IsolationLevel::Serializable)),
            ConnectionOp::Commit,
        ]
    );
}

async fn isolation_levels_by_backend(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;

    let res = db
        .transaction()
        .isolation(IsolationLevel::ReadCommitted)
        .begin()
        .await;

    if test.capability().isolation_levels {
        let tx = assert_ok!({ res });
        assert_ok!(tx.commit().await);
    } else {
        let err = assert_err!({ res });
        assert!(err.is_unsupported_feature(), "{err}");
    }

    // A refused begin leaves no transaction open
    let tx = assert_ok!(db.begin().await);
    assert_ok!(tx.rollback().await);
}

async fn read_only_by_backend(test: &mut DbTest) {
    let mut db = test.setup_db().await;
    create_items(&mut db).await;

    let res = db
        .begin_with(TransactionOptions::new().read_only(true))
        .await;

    if test.capability().read_only_transactions {
        let mut tx = assert_ok!(res);
        let row = assert_ok!(tx.query_row("SHOW transaction_read_only", &[]).await);
        assert_eq!(row.get(0), Some(&Value::from("on")));
        assert_ok!(tx.rollback().await);
    } else {
        let err = assert_err!({ res });
        assert!(err.is_unsupported_feature(), "{err}");
    }
}

tests!(
    commit_persists_writes,
    rollback_discards_writes,
    dropped_transaction_rolls_back,
    builder_passes_options,
    isolation_levels_by_backend,
    read_only_by_backend,
);
