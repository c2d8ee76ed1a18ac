use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    lifeline_db::health_check(&pool).await.unwrap();

    // Verify all four entity tables exist and are queryable.
    let tables = [
        "users",
        "emergency_contacts",
        "checkin_sessions",
        "sos_events",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Verify the sos_status enum accepts every declared state.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sos_status_enum_values(pool: PgPool) {
    for status in ["triggered", "auto-triggered", "acknowledged", "resolved"] {
        let result: (String,) =
            sqlx::query_as(&format!("SELECT '{status}'::sos_status::text"))
                .fetch_one(&pool)
                .await
                .unwrap_or_else(|e| panic!("'{status}' should cast to sos_status: {e}"));
        assert_eq!(result.0, status);
    }
}
