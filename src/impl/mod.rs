// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod json_file_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod amount_model;
        pub(crate) mod expense_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod month_model;
        pub(crate) mod task_model;
        pub(crate) mod task_status_model;
        pub(crate) mod timestamp_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod clock;
        pub(crate) mod collection;
        pub(crate) mod expense;
        pub(crate) mod outcome;
        pub(crate) mod record;
        pub(crate) mod task;
    }
    pub(crate) mod logic {
        pub(crate) mod collection_impl;
        pub(crate) mod expense_impl;
        pub(crate) mod record_store;
        pub(crate) mod task_impl;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod expense_usecase;
        pub(crate) mod task_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod expense_printer;
    pub(crate) mod task_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::clock::*;
        pub use crate::domain::entities::collection::*;
        pub use crate::domain::entities::expense::*;
        pub use crate::domain::entities::outcome::*;
        pub use crate::domain::entities::record::*;
        pub use crate::domain::entities::task::*;
    }

    pub mod printers {
        pub use crate::presentation::expense_printer::*;
        pub use crate::presentation::task_printer::*;
    }
}
