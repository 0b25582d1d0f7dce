//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records keyed by identifier.
    todos (id) {
        /// Todo identifier.
        id -> Uuid,
        /// Owning user identifier.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Title text.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// Optional free-form priority.
        #[max_length = 100]
        priority -> Nullable<Varchar>,
        /// Status value, stored verbatim.
        #[max_length = 100]
        status -> Varchar,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
