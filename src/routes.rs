pub mod guard;
pub mod home;
pub mod routes;

pub mod auth {
    pub mod auth_handlers;
    pub mod auth_models;
}

pub mod classes {
    pub mod classes_handlers;
    pub mod classes_models;
}

pub mod schedule {
    pub mod schedule_handlers;
    pub mod schedule_models;
}
