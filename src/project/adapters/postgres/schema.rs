//! Diesel schema for project persistence.

diesel::table! {
    /// Project records; the owning side of the project/task relationship.
    projects (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Project name, unique case-insensitively.
        #[max_length = 30]
        name -> Varchar,
        /// Project description.
        #[max_length = 100]
        description -> Varchar,
        /// Planned start date.
        start_date -> Nullable<Date>,
        /// Planned end date.
        end_date -> Nullable<Date>,
    }
}
