//! Diesel schema for task persistence.

diesel::table! {
    /// Persisted task records.
    tasks (id) {
        /// Backend-assigned task identifier.
        id -> Int8,
        /// Task title, trimmed and non-empty.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Lifecycle status label.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
