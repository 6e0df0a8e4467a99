use crate::silent_logs;
use graphrel::Connection;

pub async fn lifecycle<C: Connection>(connection: &mut C) {
    assert!(!connection.is_closed());
    connection.close().await.expect("Failed to close the connection");
    assert!(connection.is_closed());
    connection
        .close()
        .await
        .expect("Closing twice should not fail");
    silent_logs! {
        connection
            .prepare("MATCH (v:coach) RETURN v.name AS name".into())
            .await
            .expect_err("Cannot prepare on a closed connection");
        connection
            .run("MATCH (v:coach) RETURN v.name AS name".into())
            .await
            .expect_err("Cannot run on a closed connection");
    }
}
