//! Diesel schema for task persistence.
//!
//! `project_id` carries `ON DELETE CASCADE` in the migration SQL; deleting
//! a project removes its tasks without adapter involvement.

diesel::table! {
    /// Task records, each owned by exactly one project.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 100]
        title -> Varchar,
        /// Task description.
        #[max_length = 1000]
        description -> Varchar,
        /// Due date, if any.
        due_date -> Nullable<Date>,
        /// Task status in canonical storage form.
        #[max_length = 20]
        status -> Varchar,
        /// Owning project's identifier.
        project_id -> Int8,
    }
}
