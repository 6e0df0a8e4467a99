use crate::{silent_logs, usage_error};
use graphrel::{Executor, Prepared, Query, UsageError};

pub async fn binding<E: Executor>(executor: &mut E) {
    let text = "match(v) where v.id = ? return v.name, ? as extra limit ?";

    // In order
    let mut query = executor
        .prepare(text.into())
        .await
        .expect("Failed to prepare the query");
    let Query::Prepared(prepared) = &query else {
        panic!("The query should be prepared");
    };
    assert_eq!(prepared.parameter_count(), 3);
    query
        .bind(10i64)
        .and_then(|q| q.bind("x"))
        .and_then(|q| q.bind(5i64))
        .expect("Failed to bind the parameters");
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(cursor.advance().await.expect("Failed to advance"));
    assert_eq!(cursor.get::<String, _>("v.name").unwrap(), "Tim Duncan");
    assert_eq!(cursor.get::<String, _>("extra").unwrap(), "x");
    assert!(!cursor.advance().await.expect("Failed to advance"));

    // Any order, the i-th placeholder takes the value at index i
    let mut query = executor.prepare(text.into()).await.unwrap();
    query
        .bind_index(5i64, 3)
        .and_then(|q| q.bind_index("x", 2))
        .and_then(|q| q.bind_index(10i64, 1))
        .expect("Failed to bind the parameters");
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());
    assert_eq!(cursor.get::<String, _>(1).unwrap(), "Tim Duncan");

    // Rebinding keeps the last value and bind continues after bind_index
    let mut query = executor.prepare(text.into()).await.unwrap();
    query
        .bind_index(99i64, 1)
        .and_then(|q| q.bind_index(10i64, 1))
        .and_then(|q| q.bind("x"))
        .and_then(|q| q.bind(5i64))
        .unwrap();
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(cursor.advance().await.unwrap());

    // Out of bounds
    let mut query = executor.prepare(text.into()).await.unwrap();
    silent_logs! {
        let error = query.bind_index(1i64, 4).expect_err("Index 4 should be out of bounds");
        assert_eq!(
            *usage_error(&error),
            UsageError::PlaceholderCountMismatch { index: 4, count: 3 }
        );
        let error = query.bind_index(1i64, 0).expect_err("Index 0 should be out of bounds");
        assert_eq!(
            *usage_error(&error),
            UsageError::PlaceholderCountMismatch { index: 0, count: 3 }
        );
    }

    // Unbound
    query
        .bind_index(10i64, 1)
        .and_then(|q| q.bind_index(5i64, 3))
        .unwrap();
    let Query::Prepared(prepared) = &query else {
        unreachable!();
    };
    let metadata = prepared.metadata();
    assert_eq!(metadata.parameter_count(), 3);
    assert_eq!(metadata.parameter_kind(1), Some("INT64"));
    assert!(!metadata.is_bound(2));
    assert_eq!(metadata.parameter_kind(3), Some("INT64"));
    silent_logs! {
        let error = prepared.render().expect_err("Parameter 2 is not bound");
        assert_eq!(*usage_error(&error), UsageError::UnboundParameter { index: 2 });
    }
    query.clear_bindings().unwrap();
    let Query::Prepared(prepared) = &query else {
        unreachable!();
    };
    assert_eq!(prepared.metadata().kinds, [None, None, None]);
    silent_logs! {
        let error = executor
            .run(query)
            .await
            .expect_err("Running without bindings should fail");
        assert_eq!(*usage_error(&error), UsageError::UnboundParameter { index: 1 });
    }

    // Quoted markers are text
    let mut query = executor
        .prepare(
            r#"MATCH (v:player) WHERE v.name == "what?" AND v.age > ? RETURN v.name AS name"#
                .into(),
        )
        .await
        .unwrap();
    let Query::Prepared(prepared) = &query else {
        unreachable!();
    };
    assert_eq!(prepared.parameter_count(), 1);
    query.bind(40i64).unwrap();
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    let mut names = Vec::new();
    while cursor.advance().await.unwrap() {
        names.push(cursor.get::<String, _>("name").unwrap());
    }
    assert_eq!(names, ["Tim Duncan", "Manu Ginobili"]);

    // Null
    let mut query = executor
        .prepare("MATCH (v:player) WHERE v.nickname == ? RETURN v.name AS name".into())
        .await
        .unwrap();
    query.bind(Option::<String>::None).unwrap();
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(!cursor.advance().await.unwrap());

    // Strings are not escaped
    let mut query = executor
        .prepare(r#"INSERT VERTEX player(name, age) VALUES "p200":(?, ?)"#.into())
        .await
        .unwrap();
    query.bind("O'Brien").and_then(|q| q.bind(30i64)).unwrap();
    executor
        .execute(query)
        .await
        .expect("Failed to insert the vertex");

    // Lists
    let mut query = executor
        .prepare("MATCH (v:player) WHERE v.id IN ? RETURN v.name AS name".into())
        .await
        .unwrap();
    query.bind(vec![100i64, 101]).unwrap();
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    let mut count = 0;
    while cursor.advance().await.unwrap() {
        count += 1;
    }
    assert_eq!(count, 2);

    // Raw queries
    let mut query: Query<E::Driver> = "MATCH (v:coach) RETURN v.name AS name".into();
    assert!(!query.is_prepared());
    assert!(query.bind(1i64).is_err());
    let mut cursor = executor.run(query).await.expect("Failed to run the query");
    assert!(!cursor.advance().await.unwrap());
}
